use std::sync::Arc;

use cuecard_core::{Action, ChatLlm, Script, State, EXIT_COMMAND};

use crate::{fixtures, Agent, AgentConfig, ScriptedAgent};

pub const PLANNER_AGENT: &str = "PlannerAgent";
pub const INTERACTION_AGENT: &str = "InteractionAgent";

/// Routes the conversation to a planner on the first turn and to an
/// interaction agent afterwards, finishing on `/exit` or once the script
/// length is reached.
pub struct DelegatingScriptedAgent {
    llm: Arc<dyn ChatLlm>,
    config: AgentConfig,
    script: Script,
}

impl DelegatingScriptedAgent {
    pub const NAME: &'static str = "DelegatingScriptedAgent";

    pub fn new(llm: Arc<dyn ChatLlm>, config: AgentConfig) -> Self {
        Self {
            llm,
            config,
            script: fixtures::delegating_script(),
        }
    }
}

impl std::fmt::Debug for DelegatingScriptedAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatingScriptedAgent")
            .field("config", &self.config)
            .field("script_len", &self.script.len())
            .finish()
    }
}

fn is_exit_request(message: Option<&str>) -> bool {
    message.is_some_and(|text| text.trim() == EXIT_COMMAND)
}

impl Agent for DelegatingScriptedAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn config(&self) -> &AgentConfig {
        &self.config
    }

    fn llm(&self) -> &Arc<dyn ChatLlm> {
        &self.llm
    }

    fn step(&self, state: &State) -> Action {
        if is_exit_request(state.last_user_message()) {
            tracing::debug!(iteration = state.iteration, "user requested exit");
            return Action::finish();
        }

        if state.iteration as usize >= self.script.len() {
            tracing::debug!(
                iteration = state.iteration,
                script_len = self.script.len(),
                "script exhausted"
            );
            return Action::finish();
        }

        let delegate_to = if state.iteration == 1 {
            PLANNER_AGENT
        } else {
            INTERACTION_AGENT
        };
        tracing::debug!(iteration = state.iteration, delegate_to, "delegating");
        Action::delegate(delegate_to)
    }
}

impl ScriptedAgent for DelegatingScriptedAgent {
    fn script(&self) -> &Script {
        &self.script
    }
}

#[cfg(test)]
mod tests {
    use super::is_exit_request;

    #[test]
    fn exit_request_requires_exact_trimmed_sentinel() {
        assert!(is_exit_request(Some("/exit")));
        assert!(is_exit_request(Some("  /exit\n")));
        assert!(!is_exit_request(Some("")));
        assert!(!is_exit_request(Some("   ")));
        assert!(!is_exit_request(Some("/exit now")));
        assert!(!is_exit_request(Some("/EXIT")));
        assert!(!is_exit_request(None));
    }
}
