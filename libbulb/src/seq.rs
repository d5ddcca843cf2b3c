//! Sequencer: запуск стадий по порядку / runs the stages in order
//!
//! Каждый шаг завершается до начала следующего. Первая обязательная
//! ошибка останавливает загрузку.
//! Each step returns before the next begins. The first required failure
//! halts the boot.

use log::{debug, error, info, warn};

use crate::hook::Slot;
use crate::{BootError, BootState, Hook, HookResult, Hooks, Result, Stage, StageSet, StepFlags};

const LOG_TARGET: &str = "boot";

/// Шаг загрузки / Boot step
pub struct BootStep {
    stage: Stage,
    flags: StepFlags,
    hook: Hook,
}

impl BootStep {
    fn new(stage: Stage, slot: Slot) -> Self {
        Self {
            stage,
            flags: slot.flags,
            hook: slot.hook,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn flags(&self) -> StepFlags {
        self.flags
    }

    pub fn is_optional(&self) -> bool {
        self.flags.contains(StepFlags::OPTIONAL)
    }

    fn run(&mut self) -> HookResult {
        (self.hook)()
    }
}

/// Итог одного прогона / Outcome of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootReport {
    pub state: BootState,
    /// Стадии, вернувшие Ok / Stages whose hook returned Ok
    pub completed: StageSet,
    /// Необязательные стадии с ошибкой / Optional stages that failed
    pub failed: StageSet,
    /// Номер прогона, с 1 / Run ordinal, starting at 1
    pub run: u32,
}

impl BootReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Sequencer {
    steps: Vec<BootStep>,
    runs: u32,
}

impl Sequencer {
    pub fn new(hooks: Hooks) -> Self {
        Self {
            steps: hooks
                .into_slots()
                .map(|(stage, slot)| BootStep::new(stage, slot))
                .collect(),
            runs: 0,
        }
    }

    pub fn order(&self) -> impl Iterator<Item = Stage> + '_ {
        self.steps.iter().map(BootStep::stage)
    }

    pub fn steps(&self) -> &[BootStep] {
        &self.steps
    }

    /// Сколько прогонов начато / How many runs have started
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Прогнать все стадии один раз.
    /// Run every stage once.
    ///
    /// Можно вызывать повторно, каждый прогон начинается с NotStarted.
    /// May be called again, every run starts from NotStarted.
    pub fn run(&mut self) -> Result<BootReport> {
        self.runs += 1;
        let run = self.runs;

        debug!(target: LOG_TARGET, "run {run} start -> {} steps", self.steps.len());

        let mut state = BootState::NotStarted;
        let mut failed = StageSet::empty();

        for step in &mut self.steps {
            let stage = step.stage;
            debug!(target: stage.name(), "step -> {stage}");

            match step.run() {
                Ok(()) => info!(target: stage.name(), "OK"),
                Err(source) if step.is_optional() => {
                    warn!(target: stage.name(), "optional step failed, continuing: {source}");
                    failed |= StageSet::from(stage);
                }
                Err(source) => {
                    error!(target: LOG_TARGET, "FAILURE in {stage} -> {source}");
                    return Err(BootError::Hook { stage, source });
                }
            }

            state = state.advance(stage)?;
        }

        info!(target: LOG_TARGET, "run {run} complete -> {state:?}");

        Ok(BootReport {
            state,
            completed: state.completed().difference(failed),
            failed,
            run,
        })
    }
}
