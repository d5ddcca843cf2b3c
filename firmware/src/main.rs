//! Bulb firmware: точка входа / entry point
//!
//! init → core → drivers → utils → io, затем exit 0.
//! init → core → drivers → utils → io, then exit 0.

#![deny(unsafe_op_in_unsafe_fn)]

#[macro_use]
mod console;

mod config;
mod logger;
mod panic;

mod core;
mod drivers;
mod init;
mod io;
mod utils;

use std::process::ExitCode;

use libbulb::{BootError, BootReport, Hooks, Sequencer, Stage};
use log::Level;

use crate::config::BootConfig;

fn main() -> ExitCode {
    // 0. Конфиг + консоль, первым делом / config + console first of all
    let config = BootConfig::from_env();
    logger::init(config.log_level);
    for warning in &config.warnings {
        log::warn!(target: "config", "{warning}");
    }
    panic::install();

    let result = boot(std::env::args_os(), standard_hooks());
    if let Err(err) = &result {
        kprintln!("[boot] FAILURE: {err}");
    }
    exit_code(&result)
}

/// Ok → 0, любая ошибка загрузки → 1.
/// Ok → 0, any boot error → 1.
fn exit_code(result: &Result<BootReport, BootError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Хуки подсистем в порядке загрузки.
/// Subsystem hooks, in boot order.
fn standard_hooks() -> Hooks {
    Hooks::noop()
        .with(Stage::Init, crate::init::init)
        .with(Stage::Core, crate::core::init)
        .with(Stage::Drivers, crate::drivers::init)
        .with(Stage::Utils, crate::utils::init)
        .with(Stage::Io, crate::io::init)
}

/// Прогнать загрузку. Аргументы принимаются и игнорируются.
/// Run the boot. Arguments are accepted and ignored.
fn boot<I>(_args: I, hooks: Hooks) -> Result<BootReport, BootError>
where
    I: IntoIterator,
{
    log::info!(target: "boot", "Bulb booting...");

    let mut seq = Sequencer::new(hooks);
    let report = seq.run()?;

    if log::log_enabled!(target: "boot", Level::Info) {
        kprintln!("");
        kprintln!("  Bulb ready: {} stages up.", report.completed.stages().count());
        kprintln!("");
    }

    Ok(report)
}
