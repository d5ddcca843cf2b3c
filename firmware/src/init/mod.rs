//! Init: общие предпосылки процесса / process-wide prerequisites
//!
//! Первая стадия: всё остальное может на неё полагаться.
//! First stage: everything else may rely on it.

use libbulb::HookResult;

/// Вызывается первой из boot().
/// Called first from boot().
pub fn init() -> HookResult {
    // stub
    log::trace!(target: "init", "stub");
    Ok(())
}
