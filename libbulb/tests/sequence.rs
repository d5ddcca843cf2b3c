use std::sync::{Arc, Mutex};
use std::thread;

use libbulb::{BootError, BootState, HookError, Hooks, Sequencer, Stage, StageSet};

type Journal = Arc<Mutex<Vec<&'static str>>>;

/// Каждый хук дописывает своё имя / Every hook appends its own name
fn journaling(journal: &Journal) -> Hooks {
    let mut hooks = Hooks::noop();
    for stage in Stage::ALL {
        let journal = Arc::clone(journal);
        hooks.set(stage, move || {
            journal.lock().unwrap().push(stage.name());
            Ok(())
        });
    }
    hooks
}

#[test]
fn journal_records_boot_order() {
    let journal = Journal::default();
    let mut seq = Sequencer::new(journaling(&journal));

    let report = seq.run().unwrap();

    assert_eq!(
        *journal.lock().unwrap(),
        ["init", "core", "drivers", "utils", "io"]
    );
    assert_eq!(report.state, BootState::IoDone);
}

#[test]
fn second_run_appends_same_sequence() {
    let journal = Journal::default();
    let mut seq = Sequencer::new(journaling(&journal));

    let first = seq.run().unwrap();
    let second = seq.run().unwrap();

    assert_eq!(
        *journal.lock().unwrap(),
        [
            "init", "core", "drivers", "utils", "io", //
            "init", "core", "drivers", "utils", "io",
        ]
    );
    assert_eq!((first.run, second.run), (1, 2));
    assert_eq!(first.completed, second.completed);
    assert_eq!(seq.runs(), 2);
}

#[test]
fn each_failing_stage_halts_everything_after_it() {
    for failing in Stage::ALL {
        let journal = Journal::default();
        let hooks = journaling(&journal).with(failing, || Err(HookError::failed("down")));

        let err = Sequencer::new(hooks).run().unwrap_err();

        match err {
            BootError::Hook { stage, source } => {
                assert_eq!(stage, failing);
                assert_eq!(source.to_string(), "down");
            }
            other => panic!("unexpected error: {other}"),
        }

        let expected: Vec<_> = Stage::ALL[..failing.index()]
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(*journal.lock().unwrap(), expected);
    }
}

#[test]
fn failed_run_does_not_poison_the_next_one() {
    let attempts = Arc::new(Mutex::new(0u32));
    let counter = Arc::clone(&attempts);
    let hooks = Hooks::noop().with(Stage::Core, move || {
        let mut n = counter.lock().unwrap();
        *n += 1;
        if *n == 1 {
            Err(HookError::failed("first attempt"))
        } else {
            Ok(())
        }
    });
    let mut seq = Sequencer::new(hooks);

    assert!(seq.run().is_err());
    let report = seq.run().unwrap();

    assert_eq!(report.completed, StageSet::all());
    assert_eq!(report.run, 2);
    assert_eq!(*attempts.lock().unwrap(), 2);
}

#[test]
fn io_errors_convert_into_hook_errors() {
    let hooks = Hooks::noop().with(Stage::Io, || {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "/dev/ttyS0").into())
    });

    let err = Sequencer::new(hooks).run().unwrap_err();

    assert!(matches!(
        err,
        BootError::Hook {
            stage: Stage::Io,
            source: HookError::Io(_)
        }
    ));
}

#[test]
fn sequencer_can_move_to_another_thread() {
    let journal = Journal::default();
    let mut seq = Sequencer::new(journaling(&journal));

    let report = thread::spawn(move || seq.run())
        .join()
        .unwrap()
        .unwrap();

    assert!(report.state.is_terminal());
    assert_eq!(journal.lock().unwrap().len(), Stage::COUNT);
}
