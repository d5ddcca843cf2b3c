//! Drivers: абстракции железа / hardware and peripheral abstractions
//!
//! Идёт после core: драйверы могут опираться на его состояние.
//! Runs after core: drivers may lean on its state.

use libbulb::HookResult;

/// Поднять драйверы / Bring up drivers
pub fn init() -> HookResult {
    // stub
    log::trace!(target: "drivers", "stub");
    Ok(())
}
