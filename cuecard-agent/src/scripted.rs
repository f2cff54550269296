use std::sync::Arc;

use cuecard_core::{Action, ChatLlm, Script, State};

use crate::{fixtures, Agent, AgentConfig, ScriptedAgent};

pub const HELLO_COMMAND: &str = "echo \"Hello, World!\"";
pub const SYSTEM_GREETING: &str = "Hello, World!";

/// Answers every turn with the same shell echo.
///
/// The script describes a full tour of the action kinds but is only there for
/// replay tooling; `step` never reads it.
pub struct ScriptedStepAgent {
    llm: Arc<dyn ChatLlm>,
    config: AgentConfig,
    script: Script,
    system_message: Option<String>,
}

impl ScriptedStepAgent {
    pub const NAME: &'static str = "ScriptedStepAgent";

    pub fn new(llm: Arc<dyn ChatLlm>, config: AgentConfig) -> Self {
        Self {
            llm,
            config,
            script: fixtures::hello_world_script(),
            system_message: None,
        }
    }

    pub fn system_message(&self) -> Option<&str> {
        self.system_message.as_deref()
    }
}

impl std::fmt::Debug for ScriptedStepAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedStepAgent")
            .field("config", &self.config)
            .field("script_len", &self.script.len())
            .field("system_message", &self.system_message)
            .finish()
    }
}

impl Agent for ScriptedStepAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn config(&self) -> &AgentConfig {
        &self.config
    }

    fn llm(&self) -> &Arc<dyn ChatLlm> {
        &self.llm
    }

    fn reset(&mut self) {
        self.system_message = Some(SYSTEM_GREETING.to_string());
    }

    fn step(&self, _state: &State) -> Action {
        Action::cmd_run(HELLO_COMMAND)
    }
}

impl ScriptedAgent for ScriptedStepAgent {
    fn script(&self) -> &Script {
        &self.script
    }
}
