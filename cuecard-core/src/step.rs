use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Action, Observation};

/// A fixture entry: an action and the observations it is expected to yield.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub action: Action,
    #[serde(default)]
    pub observations: Vec<Observation>,
}

impl Step {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            observations: Vec::new(),
        }
    }

    pub fn observed(mut self, observation: Observation) -> Self {
        self.observations.push(observation);
        self
    }
}

/// Ordered steps fixed at construction. Clones share the same storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    steps: Arc<[Step]>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }

    pub fn shares_storage_with(&self, other: &Script) -> bool {
        Arc::ptr_eq(&self.steps, &other.steps)
    }
}

impl FromIterator<Step> for Script {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Script {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
