//! Logger: `log` поверх консоли / `log` on top of the console
//!
//! Формат строки / Line format:
//!   [target] LEVEL message

use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            kprintln!("{}", Line(record));
        }
    }

    fn flush(&self) {}
}

/// Одна строка лога / One log line
struct Line<'a, 'r>(&'a Record<'r>);

impl fmt::Display for Line<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        write!(
            f,
            "[{}] {:<5} {}",
            record.target(),
            record.level(),
            record.args()
        )
    }
}

/// Поставить логгер и уровень. Повторный вызов только меняет уровень.
/// Install the logger and level. A second call only changes the level.
pub fn init(level: LevelFilter) {
    // Err означает, что логгер уже стоит / Err means a logger is already set
    log::set_logger(&LOGGER).ok();
    log::set_max_level(level);
}
