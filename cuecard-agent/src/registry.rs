use std::collections::BTreeMap;
use std::sync::Arc;

use cuecard_core::{ChatLlm, CuecardError};

use crate::{AgentConfig, DelegatingScriptedAgent, ScriptedAgent, ScriptedStepAgent};

pub type AgentFactory =
    Box<dyn Fn(Arc<dyn ChatLlm>, AgentConfig) -> Box<dyn ScriptedAgent> + Send + Sync>;

/// Agent constructors keyed by name.
#[derive(Default)]
pub struct AgentRegistry {
    factories: BTreeMap<String, AgentFactory>,
}

impl std::fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with both scripted agents.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(ScriptedStepAgent::NAME, |llm, config| {
            boxed(ScriptedStepAgent::new(llm, config))
        });
        registry.insert(DelegatingScriptedAgent::NAME, |llm, config| {
            boxed(DelegatingScriptedAgent::new(llm, config))
        });
        registry
    }

    pub fn register<F>(&mut self, name: &str, factory: F) -> Result<(), CuecardError>
    where
        F: Fn(Arc<dyn ChatLlm>, AgentConfig) -> Box<dyn ScriptedAgent> + Send + Sync + 'static,
    {
        if name.trim().is_empty() {
            return Err(CuecardError::InvalidConfig(
                "agent name must not be blank".to_string(),
            ));
        }
        if self.factories.contains_key(name) {
            return Err(CuecardError::AgentAlreadyRegistered(name.to_string()));
        }

        self.insert(name, factory);
        Ok(())
    }

    pub fn create(
        &self,
        name: &str,
        llm: Arc<dyn ChatLlm>,
        config: AgentConfig,
    ) -> Result<Box<dyn ScriptedAgent>, CuecardError> {
        let Some(factory) = self.factories.get(name) else {
            return Err(CuecardError::AgentNotRegistered(name.to_string()));
        };

        tracing::debug!(agent = name, "creating agent");
        Ok(factory(llm, config))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    fn insert<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(Arc<dyn ChatLlm>, AgentConfig) -> Box<dyn ScriptedAgent> + Send + Sync + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }
}

fn boxed<A: ScriptedAgent + 'static>(agent: A) -> Box<dyn ScriptedAgent> {
    Box::new(agent)
}
