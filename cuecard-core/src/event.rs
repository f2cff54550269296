use serde::{Deserialize, Serialize};

use crate::{Action, Observation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    User,
    Agent,
    Environment,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventPayload {
    Action(Action),
    Observation(Observation),
}

/// One entry of a session history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: usize,
    pub source: EventSource,
    pub payload: EventPayload,
}

impl Event {
    pub fn action(&self) -> Option<&Action> {
        match &self.payload {
            EventPayload::Action(action) => Some(action),
            EventPayload::Observation(_) => None,
        }
    }

    pub fn observation(&self) -> Option<&Observation> {
        match &self.payload {
            EventPayload::Observation(observation) => Some(observation),
            EventPayload::Action(_) => None,
        }
    }
}
