//! IO: ввод-вывод / input and output facilities
//!
//! Последняя стадия / Last stage.

use libbulb::HookResult;

pub fn init() -> HookResult {
    // stub: каналы ввода-вывода / I/O channels
    log::trace!(target: "io", "stub");
    Ok(())
}
