use thiserror::Error;

#[derive(Debug, Error)]
pub enum CuecardError {
    #[error("agent '{0}' is not registered")]
    AgentNotRegistered(String),
    #[error("agent '{0}' is already registered")]
    AgentAlreadyRegistered(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("fixture step {index} is inconsistent: {reason}")]
    InvalidFixture { index: usize, reason: String },
    #[error("LLM provider failed: {0}")]
    LlmProvider(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
