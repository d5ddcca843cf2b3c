//! Core: основная логика / primary subsystem logic

use libbulb::HookResult;

pub fn init() -> HookResult {
    // stub
    log::trace!(target: "core", "stub");
    Ok(())
}
