//! Состояние загрузки / Boot state
//!
//! NotStarted → InitDone → CoreDone → DriversDone → UtilsDone → IoDone
//!
//! Линейная цепочка: ни ветвлений, ни циклов, ни повторов.
//! Linear chain: no branches, no cycles, no retries.

use crate::{BootError, Result, Stage, StageSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BootState {
    #[default]
    NotStarted,
    InitDone,
    CoreDone,
    DriversDone,
    UtilsDone,
    /// Терминальное состояние / Terminal (success)
    IoDone,
}

impl BootState {
    /// Состояние после завершения стадии.
    /// State reached once `stage` has returned.
    pub const fn after(stage: Stage) -> Self {
        match stage {
            Stage::Init => Self::InitDone,
            Stage::Core => Self::CoreDone,
            Stage::Drivers => Self::DriversDone,
            Stage::Utils => Self::UtilsDone,
            Stage::Io => Self::IoDone,
        }
    }

    /// Какая стадия должна идти следующей / Stage due next
    pub const fn next_stage(self) -> Option<Stage> {
        match self {
            Self::NotStarted => Some(Stage::Init),
            Self::InitDone => Some(Stage::Core),
            Self::CoreDone => Some(Stage::Drivers),
            Self::DriversDone => Some(Stage::Utils),
            Self::UtilsDone => Some(Stage::Io),
            Self::IoDone => None,
        }
    }

    pub const fn last_completed(self) -> Option<Stage> {
        match self {
            Self::NotStarted => None,
            Self::InitDone => Some(Stage::Init),
            Self::CoreDone => Some(Stage::Core),
            Self::DriversDone => Some(Stage::Drivers),
            Self::UtilsDone => Some(Stage::Utils),
            Self::IoDone => Some(Stage::Io),
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::IoDone)
    }

    /// Перейти дальше, принимается только следующая по порядку стадия.
    /// Advance: only the stage immediately after the current one is accepted.
    pub fn advance(self, stage: Stage) -> Result<Self> {
        let expected = self.next_stage();
        if expected == Some(stage) {
            Ok(Self::after(stage))
        } else {
            Err(BootError::OutOfOrder {
                expected,
                found: stage,
            })
        }
    }

    /// Завершённые стадии / Stages finished so far
    pub fn completed(self) -> StageSet {
        match self.last_completed() {
            Some(last) => Stage::ALL
                .into_iter()
                .take_while(|stage| *stage <= last)
                .fold(StageSet::empty(), |set, stage| set | stage.flag()),
            None => StageSet::empty(),
        }
    }
}
