use cuecard_core::{Action, AgentState, CuecardError, Observation, Script};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayEvent<'a> {
    StepStarted { index: usize },
    ActionIssued { index: usize, action: &'a Action },
    Observed { index: usize, observation: &'a Observation },
    StepCompleted { index: usize },
}

impl ReplayEvent<'_> {
    pub fn index(&self) -> usize {
        match self {
            ReplayEvent::StepStarted { index }
            | ReplayEvent::ActionIssued { index, .. }
            | ReplayEvent::Observed { index, .. }
            | ReplayEvent::StepCompleted { index } => *index,
        }
    }
}

/// Flattens a script into the event order a controller would see.
pub fn replay(script: &Script) -> Vec<ReplayEvent<'_>> {
    let mut events = Vec::new();

    for (index, step) in script.iter().enumerate() {
        events.push(ReplayEvent::StepStarted { index });
        events.push(ReplayEvent::ActionIssued {
            index,
            action: &step.action,
        });
        events.extend(
            step.observations
                .iter()
                .map(|observation| ReplayEvent::Observed { index, observation }),
        );
        events.push(ReplayEvent::StepCompleted { index });
    }

    events
}

pub fn validate_observations_answer_actions(script: &Script) -> Result<(), CuecardError> {
    for (index, step) in script.iter().enumerate() {
        if let Some(observation) = step
            .observations
            .iter()
            .find(|observation| !observation.answers(&step.action))
        {
            return Err(CuecardError::InvalidFixture {
                index,
                reason: format!(
                    "observation '{}' does not answer action '{}'",
                    observation.kind(),
                    step.action.kind()
                ),
            });
        }
    }

    Ok(())
}

pub fn validate_finish_is_last(script: &Script) -> Result<(), CuecardError> {
    let last = script.len().saturating_sub(1);

    for (index, step) in script.iter().enumerate() {
        if step.action.is_finish() && index != last {
            return Err(CuecardError::InvalidFixture {
                index,
                reason: format!("finish issued before the final step {last}"),
            });
        }
    }

    Ok(())
}

pub fn validate_finish_reports_finished(script: &Script) -> Result<(), CuecardError> {
    for (index, step) in script.iter().enumerate() {
        if !step.action.is_finish() {
            continue;
        }

        for observation in &step.observations {
            if let Observation::AgentStateChanged { agent_state, .. } = observation {
                if *agent_state != AgentState::Finished {
                    return Err(CuecardError::InvalidFixture {
                        index,
                        reason: format!("finish reports agent state '{agent_state}'"),
                    });
                }
            }
        }
    }

    Ok(())
}

pub fn validate_script(script: &Script) -> Result<(), CuecardError> {
    validate_observations_answer_actions(script)?;
    validate_finish_is_last(script)?;
    validate_finish_reports_finished(script)
}
