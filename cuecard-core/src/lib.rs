mod action;
mod agent_state;
mod error;
mod event;
mod llm;
mod observation;
mod state;
mod step;

pub use action::Action;
pub use agent_state::AgentState;
pub use error::CuecardError;
pub use event::{Event, EventPayload, EventSource};
pub use llm::{ChatLlm, LlmRequest, LlmResponse, Message, NoopLlm, Role};
pub use observation::Observation;
pub use state::State;
pub use step::{Script, Step};

pub use serde_json::{Map, Value};

/// Reserved user input that ends a session immediately.
pub const EXIT_COMMAND: &str = "/exit";
