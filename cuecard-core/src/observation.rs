use serde::{Deserialize, Serialize};

use crate::{Action, AgentState};

/// Recorded result of executing an [`Action`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "observation", content = "extras", rename_all = "snake_case")]
pub enum Observation {
    #[serde(rename = "run")]
    CmdOutput {
        content: String,
        command: String,
        #[serde(default)]
        exit_code: i32,
    },
    #[serde(rename = "write")]
    FileWrite { path: String, content: String },
    #[serde(rename = "read")]
    FileRead { path: String, content: String },
    #[serde(rename = "browse")]
    BrowserOutput {
        content: String,
        url: String,
        #[serde(default)]
        screenshot: String,
        #[serde(default)]
        trigger_by_action: String,
    },
    AgentStateChanged {
        #[serde(default)]
        content: String,
        agent_state: AgentState,
    },
    Null {
        #[serde(default)]
        content: String,
    },
}

impl Observation {
    pub fn cmd_output(
        content: impl Into<String>,
        command: impl Into<String>,
        exit_code: i32,
    ) -> Self {
        Self::CmdOutput {
            content: content.into(),
            command: command.into(),
            exit_code,
        }
    }

    pub fn file_write(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::FileWrite {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn file_read(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn browser_output(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::BrowserOutput {
            content: content.into(),
            url: url.into(),
            screenshot: String::new(),
            trigger_by_action: String::new(),
        }
    }

    pub fn agent_state_changed(agent_state: AgentState) -> Self {
        Self::AgentStateChanged {
            content: String::new(),
            agent_state,
        }
    }

    pub fn null() -> Self {
        Self::Null {
            content: String::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Observation::CmdOutput { .. } => "run",
            Observation::FileWrite { .. } => "write",
            Observation::FileRead { .. } => "read",
            Observation::BrowserOutput { .. } => "browse",
            Observation::AgentStateChanged { .. } => "agent_state_changed",
            Observation::Null { .. } => "null",
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Observation::CmdOutput { content, .. }
            | Observation::FileWrite { content, .. }
            | Observation::FileRead { content, .. }
            | Observation::BrowserOutput { content, .. }
            | Observation::AgentStateChanged { content, .. }
            | Observation::Null { content } => content,
        }
    }

    /// Whether this observation is a plausible result of `action`.
    ///
    /// Only the kinds are compared; payloads such as the echoed command or
    /// file content are free to differ from the action that produced them.
    pub fn answers(&self, action: &Action) -> bool {
        match action {
            Action::CmdRun { .. } => matches!(self, Observation::CmdOutput { .. }),
            Action::FileWrite { .. } => matches!(self, Observation::FileWrite { .. }),
            Action::FileRead { .. } => matches!(self, Observation::FileRead { .. }),
            Action::BrowseUrl { .. } | Action::BrowseInteractive { .. } => {
                matches!(self, Observation::BrowserOutput { .. })
            }
            Action::AgentDelegate { .. } | Action::AgentFinish { .. } | Action::AgentReject { .. } => {
                matches!(
                    self,
                    Observation::AgentStateChanged { .. } | Observation::Null { .. }
                )
            }
            Action::AddTask { .. } | Action::ModifyTask { .. } | Action::Message { .. } => {
                matches!(self, Observation::Null { .. })
            }
        }
    }
}
