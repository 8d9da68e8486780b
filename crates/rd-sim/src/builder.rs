//! Fluent builder for constructing a [`Population`].

use std::sync::Arc;

use rd_agent::AgentState;
use rd_brain::{Classifier, DecisionController};
use rd_core::{AgentId, SimConfig};
use tracing::debug;

use crate::{Population, SimError, SimResult};

enum Classifiers {
    Shared(Arc<dyn Classifier>),
    PerAgent(Vec<Arc<dyn Classifier>>),
}

/// Fluent builder for [`Population`].
///
/// # Required inputs
///
/// - [`SimConfig`]: agent count, seed, physics constants, …
/// - exactly one of [`shared_classifier`](Self::shared_classifier) or
///   [`classifiers`](Self::classifiers)
///
/// # Example
///
/// ```rust,ignore
/// let population = PopulationBuilder::new(config)
///     .classifiers(networks)   // one per agent
///     .build()?;
/// ```
pub struct PopulationBuilder {
    config:      SimConfig,
    classifiers: Option<Classifiers>,
}

impl PopulationBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, classifiers: None }
    }

    /// Every agent decides with the same classifier instance.
    pub fn shared_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifiers = Some(Classifiers::Shared(classifier));
        self
    }

    /// One classifier per agent, in agent order.  Must be length
    /// `agent_count`.
    pub fn classifiers(mut self, classifiers: Vec<Arc<dyn Classifier>>) -> Self {
        self.classifiers = Some(Classifiers::PerAgent(classifiers));
        self
    }

    /// Validate inputs, spawn every agent in `Waiting` and return the
    /// population.
    ///
    /// Classifier arity is checked here, before any frame runs.
    pub fn build(self) -> SimResult<Population> {
        self.config.validate()?;
        let agent_count = self.config.agent_count;

        let controllers = match self.classifiers {
            None => return Err(SimError::Config("no classifier supplied".into())),
            Some(Classifiers::Shared(c)) => {
                let controller = DecisionController::new(c)?;
                vec![controller; agent_count]
            }
            Some(Classifiers::PerAgent(cs)) => {
                if cs.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      cs.len(),
                        what:     "classifiers",
                    });
                }
                cs.into_iter()
                    .map(DecisionController::new)
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        let agents = (0..agent_count)
            .map(|i| AgentState::new(AgentId(i as u32), self.config.physics.clone(), self.config.seed))
            .collect();

        debug!(agents = agent_count, seed = self.config.seed, "population built");
        Ok(Population::new(self.config, agents, controllers))
    }
}
