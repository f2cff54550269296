use std::sync::Arc;

use cuecard_core::{Action, ChatLlm, Script, State};

use crate::AgentConfig;

/// Policy the controller consults once per turn.
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    fn version(&self) -> &str {
        "1.0"
    }

    fn config(&self) -> &AgentConfig;

    fn llm(&self) -> &Arc<dyn ChatLlm>;

    /// Return to the freshly constructed state.
    fn reset(&mut self) {}

    fn step(&self, state: &State) -> Action;
}

/// An agent carrying a fixed demonstration script.
pub trait ScriptedAgent: Agent {
    fn script(&self) -> &Script;
}
