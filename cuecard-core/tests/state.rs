use cuecard_core::{Action, EventSource, Observation, State};

#[test]
fn last_user_message_is_none_without_history() {
    assert_eq!(State::new().last_user_message(), None);
}

#[test]
fn last_user_message_returns_most_recent_user_message() {
    let mut state = State::new();
    state.push_user_message("first");
    state.push_action(EventSource::Agent, Action::message("agent reply"));
    state.push_user_message("second");
    state.push_observation(Observation::null());

    assert_eq!(state.last_user_message(), Some("second"));
}

#[test]
fn last_user_message_ignores_agent_messages() {
    let mut state = State::new();
    state.push_action(EventSource::Agent, Action::message("/exit"));

    assert_eq!(state.last_user_message(), None);
}

#[test]
fn events_are_numbered_in_push_order() {
    let mut state = State::new().with_iteration(4);
    state.push_user_message("hi");
    state.push_action(EventSource::Agent, Action::cmd_run("ls"));
    let last_id = state.push_observation(Observation::cmd_output("a.txt", "ls", 0)).id;

    assert_eq!(last_id, 2);
    assert_eq!(state.iteration, 4);
    assert!(state.history[1].action().is_some());
    assert!(state.history[2].observation().is_some());
}

#[test]
fn advance_increments_iteration() {
    let mut state = State::new();
    state.advance();
    state.advance();

    assert_eq!(state.iteration, 2);
}

#[test]
fn state_roundtrip_preserves_history() {
    let mut state = State::new().with_iteration(1);
    state.push_user_message("/exit");
    state.push_observation(Observation::null());

    let encoded = serde_json::to_string(&state).expect("state should serialize");
    let decoded: State = serde_json::from_str(&encoded).expect("state should decode");

    assert_eq!(decoded, state);
    assert_eq!(decoded.last_user_message(), Some("/exit"));
}

#[test]
fn advance_saturates_at_max_iteration() {
    let mut state = State::new().with_iteration(u32::MAX);
    state.advance();

    assert_eq!(state.iteration, u32::MAX);
}
