//! Research milestones and per-scenario unlock selection.
//!
//! Content is gated behind a milestone in the research tree. Which
//! milestone applies can differ per game scenario, so definitions carry a
//! [`MilestoneSelector`] that is resolved against the active scenario's
//! name at unlock-check time.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Identifier of a milestone in the research tree.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MilestoneId(String);

impl MilestoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the scenario the current game runs under.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveScenario {
    pub name: String,
}

impl Default for ActiveScenario {
    fn default() -> Self {
        Self {
            name: "standard-scenario".to_string(),
        }
    }
}

/// How a definition resolves its unlock milestone for a given scenario.
///
/// The per-scenario variant holds a plain function pointer, keeping
/// selectors cloneable data with no hidden state.
#[derive(Debug, Clone)]
pub enum MilestoneSelector {
    /// The same milestone in every scenario.
    Fixed(MilestoneId),
    /// A pure function from scenario name to milestone id.
    PerScenario(fn(&str) -> MilestoneId),
}

impl MilestoneSelector {
    /// The milestone gating this content in the named scenario.
    pub fn resolve(&self, scenario_name: &str) -> MilestoneId {
        match self {
            MilestoneSelector::Fixed(id) => id.clone(),
            MilestoneSelector::PerScenario(select) => select(scenario_name),
        }
    }
}
