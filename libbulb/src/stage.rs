//! Стадии загрузки / Boot stages
//!
//! Порядок / Order:
//!   0 init    общие предпосылки процесса / process-wide prerequisites
//!   1 core    основная логика / primary subsystem logic
//!   2 drivers абстракции железа / hardware and peripheral abstractions
//!   3 utils   общие утилиты / shared utility facilities
//!   4 io      ввод-вывод / input and output facilities
//!
//! Поздние стадии могут неявно зависеть от ранних; порядок НЕ меняется.
//! Later stages may implicitly depend on earlier ones; the order NEVER changes.

use std::fmt;

use bitflags::bitflags;

/// Стадия загрузки / Boot stage
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Init = 0,
    Core = 1,
    Drivers = 2,
    Utils = 3,
    Io = 4,
}

impl Stage {
    /// Все стадии в порядке запуска / All stages in boot order
    pub const ALL: [Stage; 5] = [
        Stage::Init,
        Stage::Core,
        Stage::Drivers,
        Stage::Utils,
        Stage::Io,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Имя хука / Hook name
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Init => "init",
            Stage::Core => "core",
            Stage::Drivers => "drivers",
            Stage::Utils => "utils",
            Stage::Io => "io",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Следующая стадия / The stage that runs after this one
    pub const fn next(self) -> Option<Stage> {
        match self {
            Stage::Init => Some(Stage::Core),
            Stage::Core => Some(Stage::Drivers),
            Stage::Drivers => Some(Stage::Utils),
            Stage::Utils => Some(Stage::Io),
            Stage::Io => None,
        }
    }

    pub const fn flag(self) -> StageSet {
        StageSet::from_bits_truncate(1 << self as u8)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Набор стадий / Set of stages
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StageSet: u8 {
        const INIT    = 1 << 0;
        const CORE    = 1 << 1;
        const DRIVERS = 1 << 2;
        const UTILS   = 1 << 3;
        const IO      = 1 << 4;
    }
}

impl StageSet {
    /// Стадии из набора в порядке загрузки.
    /// Stages in the set, in boot order.
    pub fn stages(self) -> impl Iterator<Item = Stage> {
        Stage::ALL
            .into_iter()
            .filter(move |stage| self.contains(stage.flag()))
    }
}

impl From<Stage> for StageSet {
    fn from(stage: Stage) -> Self {
        stage.flag()
    }
}

bitflags! {
    /// Флаги шага / Step flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StepFlags: u32 {
        /// Ошибка логируется, загрузка продолжается.
        /// Failure is logged and the boot continues.
        const OPTIONAL = 1 << 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_order_is_fixed() {
        let names: Vec<_> = Stage::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["init", "core", "drivers", "utils", "io"]);

        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    fn next_walks_the_chain() {
        let mut chain = vec![Stage::Init];
        while let Some(next) = chain.last().and_then(|s| s.next()) {
            chain.push(next);
        }
        assert_eq!(chain, Stage::ALL);
    }

    #[test]
    fn flags_match_named_bits() {
        assert_eq!(Stage::Init.flag(), StageSet::INIT);
        assert_eq!(Stage::Core.flag(), StageSet::CORE);
        assert_eq!(Stage::Drivers.flag(), StageSet::DRIVERS);
        assert_eq!(Stage::Utils.flag(), StageSet::UTILS);
        assert_eq!(Stage::Io.flag(), StageSet::IO);
        assert_eq!(StageSet::from(Stage::Drivers), StageSet::DRIVERS);
    }

    #[test]
    fn set_iterates_in_boot_order() {
        let set = StageSet::IO | StageSet::INIT | StageSet::UTILS;
        let stages: Vec<_> = set.stages().collect();
        assert_eq!(stages, [Stage::Init, Stage::Utils, Stage::Io]);
        assert_eq!(StageSet::all().stages().count(), Stage::COUNT);
        assert_eq!(StageSet::empty().stages().count(), 0);
    }
}
