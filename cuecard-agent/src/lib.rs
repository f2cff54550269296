mod agent;
mod config;
mod delegating;
mod fixtures;
mod registry;
mod replay;
mod scripted;

pub use agent::{Agent, ScriptedAgent};
pub use config::{AgentConfig, AgentOptions, DEFAULT_AGENT, DEFAULT_MAX_ITERATIONS};
pub use delegating::{DelegatingScriptedAgent, INTERACTION_AGENT, PLANNER_AGENT};
pub use fixtures::{delegating_script, hello_world_script};
pub use registry::{AgentFactory, AgentRegistry};
pub use replay::{
    replay, validate_finish_is_last, validate_finish_reports_finished,
    validate_observations_answer_actions, validate_script, ReplayEvent,
};
pub use scripted::{ScriptedStepAgent, HELLO_COMMAND, SYSTEM_GREETING};
