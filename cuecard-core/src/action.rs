use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A directive for the controller to carry out.
///
/// The wire shape is `{"action": "<kind>", "args": {...}}`; optional fields
/// default when absent so hand-written fixtures stay short.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "args", rename_all = "snake_case")]
pub enum Action {
    AddTask {
        parent: String,
        goal: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        subtasks: Vec<Value>,
        #[serde(default)]
        thought: String,
    },
    ModifyTask {
        task_id: String,
        state: String,
        #[serde(default)]
        thought: String,
    },
    Message {
        content: String,
        #[serde(default)]
        wait_for_response: bool,
    },
    #[serde(rename = "run")]
    CmdRun {
        command: String,
        #[serde(default)]
        thought: String,
    },
    #[serde(rename = "write")]
    FileWrite {
        path: String,
        content: String,
        #[serde(default)]
        thought: String,
    },
    #[serde(rename = "read")]
    FileRead {
        path: String,
        #[serde(default)]
        thought: String,
    },
    #[serde(rename = "browse")]
    BrowseUrl {
        url: String,
        #[serde(default)]
        thought: String,
    },
    BrowseInteractive {
        browser_actions: String,
        #[serde(default)]
        thought: String,
    },
    #[serde(rename = "delegate")]
    AgentDelegate {
        agent: String,
        #[serde(default)]
        inputs: Map<String, Value>,
        #[serde(default)]
        thought: String,
    },
    #[serde(rename = "finish")]
    AgentFinish {
        #[serde(default)]
        outputs: Map<String, Value>,
        #[serde(default)]
        thought: String,
    },
    #[serde(rename = "reject")]
    AgentReject {
        #[serde(default)]
        outputs: Map<String, Value>,
        #[serde(default)]
        thought: String,
    },
}

impl Action {
    pub fn add_task(parent: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::AddTask {
            parent: parent.into(),
            goal: goal.into(),
            subtasks: Vec::new(),
            thought: String::new(),
        }
    }

    pub fn modify_task(task_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self::ModifyTask {
            task_id: task_id.into(),
            state: state.into(),
            thought: String::new(),
        }
    }

    pub fn message(content: impl Into<String>) -> Self {
        Self::Message {
            content: content.into(),
            wait_for_response: false,
        }
    }

    pub fn cmd_run(command: impl Into<String>) -> Self {
        Self::CmdRun {
            command: command.into(),
            thought: String::new(),
        }
    }

    pub fn file_write(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::FileWrite {
            path: path.into(),
            content: content.into(),
            thought: String::new(),
        }
    }

    pub fn file_read(path: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            thought: String::new(),
        }
    }

    pub fn browse_url(url: impl Into<String>) -> Self {
        Self::BrowseUrl {
            url: url.into(),
            thought: String::new(),
        }
    }

    pub fn browse_interactive(browser_actions: impl Into<String>) -> Self {
        Self::BrowseInteractive {
            browser_actions: browser_actions.into(),
            thought: String::new(),
        }
    }

    /// Hands control to `agent` with an empty input payload.
    pub fn delegate(agent: impl Into<String>) -> Self {
        Self::AgentDelegate {
            agent: agent.into(),
            inputs: Map::new(),
            thought: String::new(),
        }
    }

    pub fn finish() -> Self {
        Self::AgentFinish {
            outputs: Map::new(),
            thought: String::new(),
        }
    }

    pub fn finish_with_thought(thought: impl Into<String>) -> Self {
        Self::AgentFinish {
            outputs: Map::new(),
            thought: thought.into(),
        }
    }

    pub fn reject() -> Self {
        Self::AgentReject {
            outputs: Map::new(),
            thought: String::new(),
        }
    }

    /// Wire name of this action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddTask { .. } => "add_task",
            Action::ModifyTask { .. } => "modify_task",
            Action::Message { .. } => "message",
            Action::CmdRun { .. } => "run",
            Action::FileWrite { .. } => "write",
            Action::FileRead { .. } => "read",
            Action::BrowseUrl { .. } => "browse",
            Action::BrowseInteractive { .. } => "browse_interactive",
            Action::AgentDelegate { .. } => "delegate",
            Action::AgentFinish { .. } => "finish",
            Action::AgentReject { .. } => "reject",
        }
    }

    /// Whether the runtime has to execute this action to produce an observation.
    pub fn is_runnable(&self) -> bool {
        matches!(
            self,
            Action::CmdRun { .. }
                | Action::FileWrite { .. }
                | Action::FileRead { .. }
                | Action::BrowseUrl { .. }
                | Action::BrowseInteractive { .. }
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Action::AgentFinish { .. } | Action::AgentReject { .. })
    }

    pub fn is_finish(&self) -> bool {
        matches!(self, Action::AgentFinish { .. })
    }

    /// Target agent name when this is a delegation.
    pub fn delegate_target(&self) -> Option<&str> {
        match self {
            Action::AgentDelegate { agent, .. } => Some(agent.as_str()),
            _ => None,
        }
    }
}
