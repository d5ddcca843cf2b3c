//! Utils: общие утилиты / shared utility facilities

use libbulb::HookResult;

pub fn init() -> HookResult {
    log::trace!(target: "utils", "stub");
    Ok(())
}
