//! Console: отладочный вывод / debug output
//!
//! Пишет в stderr процесса, stdout остаётся свободным.
//! Writes to the process stderr so stdout stays untouched.

use std::fmt;
use std::io;

use spin::Mutex;

/// fmt::Write поверх любого io::Write / fmt::Write over any io::Write
pub struct ConsoleWriter<W> {
    sink: W,
}

impl<W: io::Write> ConsoleWriter<W> {
    pub const fn new(sink: W) -> Self {
        Self { sink }
    }
}

impl<W: io::Write> fmt::Write for ConsoleWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

/// stderr процесса, каждый вызов берёт свой lock.
/// Process stderr, every call takes its own lock.
pub struct StderrSink;

impl io::Write for StderrSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut io::stderr().lock(), buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::Write::write_all(&mut io::stderr().lock(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut io::stderr())
    }
}

static CONSOLE_LOCK: Mutex<ConsoleWriter<StderrSink>> = Mutex::new(ConsoleWriter::new(StderrSink));

/// Внутренняя функция для макроса kprint!
/// Internal function for kprint! macro
pub fn _print(args: fmt::Arguments) {
    use fmt::Write;
    CONSOLE_LOCK.lock().write_fmt(args).ok();
}

/// Вывод из panic hook: если консоль занята, пишем мимо замка.
/// Output from the panic hook: if the console is held, bypass the lock.
pub fn _print_unlocked(args: fmt::Arguments) {
    use fmt::Write;
    match CONSOLE_LOCK.try_lock() {
        Some(mut console) => console.write_fmt(args).ok(),
        None => ConsoleWriter::new(StderrSink).write_fmt(args).ok(),
    };
}

/// Макрос для отладочного вывода.
/// Debug print macro.
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {
        $crate::console::_print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! kprintln {
    ()           => ($crate::kprint!("\n"));
    ($($arg:tt)*) => ($crate::kprint!("{}\n", format_args!($($arg)*)));
}
