use std::sync::Arc;

use cuecard_agent::{Agent, AgentConfig, ScriptedAgent, ScriptedStepAgent, HELLO_COMMAND};
use cuecard_core::{Action, EventSource, NoopLlm, State};

fn agent() -> ScriptedStepAgent {
    ScriptedStepAgent::new(Arc::new(NoopLlm), AgentConfig::default())
}

#[test]
fn step_returns_hello_echo_for_any_state() {
    let agent = agent();
    let expected = Action::cmd_run("echo \"Hello, World!\"");

    let mut with_exit = State::new().with_iteration(1);
    with_exit.push_user_message("/exit");
    let mut busy = State::new().with_iteration(10_000);
    busy.push_action(EventSource::Agent, Action::finish());

    for state in [State::new(), with_exit, busy] {
        assert_eq!(agent.step(&state), expected);
    }
}

#[test]
fn step_command_matches_exported_constant() {
    match agent().step(&State::new()) {
        Action::CmdRun { command, .. } => assert_eq!(command, HELLO_COMMAND),
        other => panic!("expected a command, got {other:?}"),
    }
}

#[test]
fn reset_sets_greeting() {
    let mut agent = agent();
    assert_eq!(agent.system_message(), None);

    agent.reset();

    assert_eq!(agent.system_message(), Some("Hello, World!"));
    assert_eq!(agent.step(&State::new()), Action::cmd_run(HELLO_COMMAND));
}

#[test]
fn script_tours_every_action_kind_in_order() {
    let agent = agent();
    let kinds: Vec<&str> = agent.script().iter().map(|step| step.action.kind()).collect();

    assert_eq!(
        kinds,
        vec![
            "add_task",
            "add_task",
            "modify_task",
            "message",
            "run",
            "write",
            "read",
            "run",
            "browse",
            "browse_interactive",
            "reject",
            "finish",
        ]
    );
}

#[test]
fn browse_steps_have_no_recorded_observations() {
    let agent = agent();
    let script = agent.script();

    assert!(script[8].observations.is_empty());
    assert!(script[9].observations.is_empty());
}

#[test]
fn script_is_unchanged_by_stepping_and_reset() {
    let mut agent = agent();
    let before = agent.script().clone();

    agent.step(&State::new().with_iteration(3));
    agent.reset();

    assert_eq!(agent.script(), &before);
    assert!(agent.script().shares_storage_with(&before));
}

#[test]
fn identity_and_collaborators_are_exposed() {
    let agent = agent();

    assert_eq!(agent.name(), "ScriptedStepAgent");
    assert_eq!(agent.version(), "1.0");
    assert_eq!(agent.config(), &AgentConfig::default());
    assert_eq!(Arc::strong_count(agent.llm()), 1);
}
