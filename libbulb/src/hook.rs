//! Хуки стадий / Stage hooks
//!
//! Таблица из пяти хуков, по одному на стадию.
//! A table of five hooks, one per stage.
//!
//! Порядок задаётся Stage::ALL, а не порядком вызовов `with`.
//! Order comes from Stage::ALL, not from the order of `with` calls.

use std::fmt;

use crate::{HookError, Stage, StepFlags};

pub type HookResult = Result<(), HookError>;

/// Хук стадии, без аргументов, может вернуть ошибку.
/// Stage hook, no arguments, may report failure.
pub type Hook = Box<dyn FnMut() -> HookResult + Send>;

fn noop() -> HookResult {
    Ok(())
}

pub(crate) struct Slot {
    pub(crate) hook: Hook,
    pub(crate) flags: StepFlags,
}

pub struct Hooks {
    slots: [Slot; Stage::COUNT],
}

impl Hooks {
    /// Все хуки пустые / Every hook is a no-op
    pub fn noop() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot {
                hook: Box::new(noop),
                flags: StepFlags::empty(),
            }),
        }
    }

    /// Подменить хук стадии / Replace one stage's hook
    pub fn with<F>(mut self, stage: Stage, hook: F) -> Self
    where
        F: FnMut() -> HookResult + Send + 'static,
    {
        self.set(stage, hook);
        self
    }

    pub fn set<F>(&mut self, stage: Stage, hook: F)
    where
        F: FnMut() -> HookResult + Send + 'static,
    {
        self.slots[stage.index()].hook = Box::new(hook);
    }

    pub fn with_flags(mut self, stage: Stage, flags: StepFlags) -> Self {
        self.slots[stage.index()].flags = flags;
        self
    }

    pub fn flags(&self, stage: Stage) -> StepFlags {
        self.slots[stage.index()].flags
    }

    /// Слоты в порядке загрузки / Slots in boot order
    pub(crate) fn into_slots(self) -> impl Iterator<Item = (Stage, Slot)> {
        Stage::ALL.into_iter().zip(self.slots)
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(Stage::ALL.iter().map(|stage| (stage.name(), self.flags(*stage))))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_table_covers_every_stage() {
        let stages: Vec<_> = Hooks::noop().into_slots().map(|(s, _)| s).collect();
        assert_eq!(stages, Stage::ALL);
    }

    #[test]
    fn override_lands_in_its_own_slot() {
        let hooks = Hooks::noop().with(Stage::Utils, || Err(HookError::failed("utils")));

        for (stage, mut slot) in hooks.into_slots() {
            let result = (slot.hook)();
            assert_eq!(result.is_err(), stage == Stage::Utils, "{stage}");
        }
    }

    #[test]
    fn flags_are_per_stage() {
        let hooks = Hooks::default().with_flags(Stage::Io, StepFlags::OPTIONAL);
        assert_eq!(hooks.flags(Stage::Io), StepFlags::OPTIONAL);
        assert_eq!(hooks.flags(Stage::Init), StepFlags::empty());
    }
}
