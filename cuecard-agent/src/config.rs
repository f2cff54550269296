use std::path::Path;

use cuecard_core::CuecardError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AGENT: &str = "ScriptedStepAgent";
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub agent: String,
    pub max_iterations: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent: DEFAULT_AGENT.to_string(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            model: None,
        }
    }
}

impl AgentConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CuecardError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        if let Some(model) = &config.model {
            tracing::warn!(
                model = %model,
                agent = %config.agent,
                "model configured for a scripted agent; it will not be called"
            );
        }
        Ok(config)
    }

    pub fn merge(&self, overrides: &AgentOptions) -> Self {
        Self {
            agent: overrides.agent.clone().unwrap_or_else(|| self.agent.clone()),
            max_iterations: overrides.max_iterations.unwrap_or(self.max_iterations),
            model: overrides.model.clone().or_else(|| self.model.clone()),
        }
    }

    pub fn validate(&self) -> Result<(), CuecardError> {
        if self.agent.trim().is_empty() {
            return Err(CuecardError::InvalidConfig("agent name is empty".to_string()));
        }
        if self.max_iterations == 0 {
            return Err(CuecardError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct AgentOptions {
    pub agent: Option<String>,
    pub max_iterations: Option<u32>,
    pub model: Option<String>,
}
