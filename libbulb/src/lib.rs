//! libbulb: последовательность загрузки / boot sequencing library
//!
//! Фиксированный порядок стадий + хуки, которые можно подменить.
//! Fixed stage order + hooks that can be swapped out.
//!
//! Использование / Usage:
//!   use libbulb::{Hooks, Sequencer, Stage};
//!   let mut seq = Sequencer::new(Hooks::noop().with(Stage::Io, io::init));
//!   let report = seq.run()?;

pub mod hook;
pub mod seq;
pub mod stage;
pub mod state;

use std::borrow::Cow;
use std::io;

use thiserror::Error;

pub use hook::{Hook, HookResult, Hooks};
pub use seq::{BootReport, BootStep, Sequencer};
pub use stage::{Stage, StageSet, StepFlags};
pub use state::BootState;

/// Ошибка хука / Hook failure
///
/// Возвращается самим хуком; sequencer только переносит её наверх.
/// Returned by the hook itself; the sequencer only carries it upward.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("{0}")]
    Failed(Cow<'static, str>),
    #[error("unavailable: {0}")]
    Unavailable(Cow<'static, str>),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl HookError {
    pub fn failed(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Failed(msg.into())
    }

    pub fn unavailable(what: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable(what.into())
    }
}

/// Ошибки загрузки / Boot errors
#[derive(Debug, Error)]
pub enum BootError {
    /// Обязательная стадия упала, дальше не идём.
    /// A required stage failed, nothing after it runs.
    #[error("{stage} hook failed: {source}")]
    Hook { stage: Stage, source: HookError },
    #[error("stage {found} out of order (expected {})", display_expected(.expected))]
    OutOfOrder {
        expected: Option<Stage>,
        found: Stage,
    },
}

impl BootError {
    /// Стадия, на которой остановились / Stage the boot stopped at
    pub fn stage(&self) -> Stage {
        match self {
            Self::Hook { stage, .. } => *stage,
            Self::OutOfOrder { found, .. } => *found,
        }
    }
}

fn display_expected(expected: &Option<Stage>) -> &'static str {
    expected.map_or("nothing", Stage::name)
}

pub type Result<T> = std::result::Result<T, BootError>;
