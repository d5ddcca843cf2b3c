//! Panic hook: выводим в консоль / print to the console
//!
//! Паника в хуке не перехватывается: процесс падает как обычно,
//! мы только печатаем причину в формате консоли.
//! A panic in a hook is not caught: the process goes down as usual,
//! we only print the cause in console format.

use std::panic::{self, PanicHookInfo};

pub fn install() {
    panic::set_hook(Box::new(report));
}

fn report(info: &PanicHookInfo<'_>) {
    crate::console::_print_unlocked(format_args!("\n[PANIC] {info}\n"));
}
