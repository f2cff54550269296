use serde::{Deserialize, Serialize};

use crate::CuecardError;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LlmRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LlmResponse {
    pub content: String,
}

/// Chat completion client handed to agents at construction.
#[async_trait::async_trait]
pub trait ChatLlm: Send + Sync + 'static {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, CuecardError>;
}

/// Client for agents that never talk to a model. Every call fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLlm;

#[async_trait::async_trait]
impl ChatLlm for NoopLlm {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, CuecardError> {
        Err(CuecardError::LlmProvider(format!(
            "no model configured (requested '{}')",
            request.model
        )))
    }
}
