use serde::{Deserialize, Serialize};

use crate::{Action, Event, EventPayload, EventSource, Observation};

/// Session state owned by the controller and lent to agents on every step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub iteration: u32,
    #[serde(default)]
    pub history: Vec<Event>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iteration(mut self, iteration: u32) -> Self {
        self.iteration = iteration;
        self
    }

    pub fn advance(&mut self) {
        self.iteration = self.iteration.saturating_add(1);
    }

    pub fn push_action(&mut self, source: EventSource, action: Action) -> &Event {
        self.push(source, EventPayload::Action(action))
    }

    pub fn push_observation(&mut self, observation: Observation) -> &Event {
        self.push(EventSource::Environment, EventPayload::Observation(observation))
    }

    pub fn push_user_message(&mut self, content: impl Into<String>) -> &Event {
        self.push_action(EventSource::User, Action::message(content))
    }

    /// Content of the most recent message the user sent, if any.
    pub fn last_user_message(&self) -> Option<&str> {
        self.history.iter().rev().find_map(|event| match event {
            Event {
                source: EventSource::User,
                payload: EventPayload::Action(Action::Message { content, .. }),
                ..
            } => Some(content.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, source: EventSource, payload: EventPayload) -> &Event {
        let id = self.history.len();
        self.history.push(Event {
            id,
            source,
            payload,
        });
        &self.history[id]
    }
}
