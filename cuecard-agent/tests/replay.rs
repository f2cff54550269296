use cuecard_agent::{
    delegating_script, hello_world_script, replay, validate_finish_is_last,
    validate_finish_reports_finished, validate_observations_answer_actions, validate_script,
    ReplayEvent,
};
use cuecard_core::{Action, AgentState, CuecardError, Observation, Script, Step};

#[test]
fn builtin_scripts_validate() {
    validate_script(&hello_world_script()).expect("hello world script should be consistent");
    validate_script(&delegating_script()).expect("delegating script should be consistent");
}

#[test]
fn replay_emits_action_then_observations_per_step() {
    let script = Script::new(vec![
        Step::new(Action::message("hi")),
        Step::new(Action::cmd_run("echo \"foo\""))
            .observed(Observation::cmd_output("foo", "echo \"foo\"", 0)),
    ]);

    let events = replay(&script);

    assert_eq!(
        events,
        vec![
            ReplayEvent::StepStarted { index: 0 },
            ReplayEvent::ActionIssued {
                index: 0,
                action: &script[0].action
            },
            ReplayEvent::StepCompleted { index: 0 },
            ReplayEvent::StepStarted { index: 1 },
            ReplayEvent::ActionIssued {
                index: 1,
                action: &script[1].action
            },
            ReplayEvent::Observed {
                index: 1,
                observation: &script[1].observations[0]
            },
            ReplayEvent::StepCompleted { index: 1 },
        ]
    );
}

#[test]
fn replay_is_repeatable_and_ordered() {
    let script = delegating_script();

    let first = replay(&script);
    let second = replay(&script);

    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| pair[0].index() <= pair[1].index()));
    let observed = first
        .iter()
        .filter(|event| matches!(event, ReplayEvent::Observed { .. }))
        .count();
    assert_eq!(observed, 8);
}

#[test]
fn mismatched_observation_is_reported_with_index() {
    let script = Script::new(vec![
        Step::new(Action::message("hi")),
        Step::new(Action::cmd_run("cat hello.sh"))
            .observed(Observation::file_read("hello.sh", "echo")),
    ]);

    let err = validate_observations_answer_actions(&script).unwrap_err();

    match err {
        CuecardError::InvalidFixture { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("'read'"));
            assert!(reason.contains("'run'"));
        }
        other => panic!("expected InvalidFixture, got {other:?}"),
    }
}

#[test]
fn early_finish_is_rejected() {
    let script = Script::new(vec![
        Step::new(Action::finish()),
        Step::new(Action::message("after the end")),
    ]);

    assert!(matches!(
        validate_finish_is_last(&script),
        Err(CuecardError::InvalidFixture { index: 0, .. })
    ));
}

#[test]
fn reject_before_finish_is_allowed() {
    let script = Script::new(vec![
        Step::new(Action::reject()).observed(Observation::null()),
        Step::new(Action::finish()),
    ]);

    assert!(validate_script(&script).is_ok());
}

#[test]
fn finish_must_report_finished_state() {
    let script = Script::new(vec![
        Step::new(Action::finish()).observed(Observation::agent_state_changed(AgentState::Error))
    ]);

    let err = validate_finish_reports_finished(&script).unwrap_err();

    assert!(err.to_string().contains("error"));
}

#[test]
fn empty_script_is_valid() {
    let script = Script::new(Vec::new());

    assert!(replay(&script).is_empty());
    assert!(validate_script(&script).is_ok());
}
