//! Experiment configuration
//!
//! [`ExperimentSetup`] is the root aggregate the administrator edits:
//! which edges are active factors, what their two states mean, and which
//! agents play the decision-maker and opponent roles. Mutation happens only
//! during setup; a session snapshots the activation order at start time.

use crate::error::SetupError;
use coopnet_design::{Agent, AgentId, EdgeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Factor count above which the admin side warns about participant fatigue
///
/// Warn-only: higher factor counts are still allowed, up to the generator's
/// enumeration ceiling.
pub const HIGH_LOAD_FACTORS: usize = 4;

/// Administrator-authored semantics for one active edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Display label for the relationship
    pub label: String,
    /// Meaning of state 0 (low)
    pub low: String,
    /// Meaning of state 1 (high)
    pub high: String,
}

impl EdgeConfig {
    /// Create a config with explicit semantics
    #[inline]
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        low: impl Into<String>,
        high: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            low: low.into(),
            high: high.into(),
        }
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self::new("Relationship", "Defected", "Cooperated")
    }
}

/// Root experiment configuration aggregate
///
/// Activation order is significant: it is the factor-to-bit mapping used by
/// the design matrix generator. The mutators keep `active_edge_ids` and
/// `edge_configs` in lockstep; [`validate`](Self::validate) re-checks the
/// invariant because a setup may arrive deserialized from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentSetup {
    /// Active factors, in activation order
    pub active_edge_ids: Vec<EdgeId>,
    /// Semantics per active edge; key set must equal the active set
    pub edge_configs: IndexMap<EdgeId, EdgeConfig>,
    /// The survey subject whose cooperation probability is elicited
    pub decision_maker: AgentId,
    /// The agent the subject plays against
    pub opponent: AgentId,
}

impl ExperimentSetup {
    /// Create an empty setup with the default role assignment
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a different role assignment
    #[inline]
    #[must_use]
    pub fn with_roles(mut self, decision_maker: AgentId, opponent: AgentId) -> Self {
        self.decision_maker = decision_maker;
        self.opponent = opponent;
        self
    }

    /// Activate an edge as a factor, installing the default config
    ///
    /// Returns `false` (and changes nothing) if the edge is already active.
    pub fn activate(&mut self, edge: EdgeId) -> bool {
        if self.active_edge_ids.contains(&edge) {
            return false;
        }
        self.active_edge_ids.push(edge);
        self.edge_configs.insert(edge, EdgeConfig::default());
        true
    }

    /// Deactivate an edge, discarding its config
    ///
    /// Returns `false` if the edge was not active.
    pub fn deactivate(&mut self, edge: EdgeId) -> bool {
        let Some(pos) = self.active_edge_ids.iter().position(|e| *e == edge) else {
            return false;
        };
        self.active_edge_ids.remove(pos);
        self.edge_configs.shift_remove(&edge);
        true
    }

    /// Flip an edge between active and inactive (the admin toggle gesture)
    pub fn toggle(&mut self, edge: EdgeId) {
        if !self.activate(edge) {
            self.deactivate(edge);
        }
    }

    /// Replace the semantics of an active edge
    pub fn configure(&mut self, edge: EdgeId, config: EdgeConfig) -> Result<(), SetupError> {
        if !self.active_edge_ids.contains(&edge) {
            return Err(SetupError::InactiveEdge(edge));
        }
        self.edge_configs.insert(edge, config);
        Ok(())
    }

    /// Number of active factors (k)
    #[inline]
    #[must_use]
    pub fn factor_count(&self) -> usize {
        self.active_edge_ids.len()
    }

    /// Number of scenarios a session would present (`2^k`)
    #[inline]
    #[must_use]
    pub fn scenario_count(&self) -> u64 {
        u32::try_from(self.factor_count())
            .ok()
            .and_then(|k| 1u64.checked_shl(k))
            .unwrap_or(u64::MAX)
    }

    /// Whether the factor count is past the fatigue warning threshold
    #[inline]
    #[must_use]
    pub fn is_high_load(&self) -> bool {
        self.factor_count() > HIGH_LOAD_FACTORS
    }

    /// Whether a survey session can start from this setup
    #[inline]
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.factor_count() > 0 && self.validate().is_ok()
    }

    /// Static profile of the decision-maker
    #[inline]
    #[must_use]
    pub fn decision_maker(&self) -> &'static Agent {
        self.decision_maker.profile()
    }

    /// Static profile of the opponent
    #[inline]
    #[must_use]
    pub fn opponent(&self) -> &'static Agent {
        self.opponent.profile()
    }

    /// Check the configuration invariants
    ///
    /// Rejects duplicate activations and any mismatch between the active
    /// set and the config key set. A shared role assignment (decision-maker
    /// == opponent) is logged as a warning but not rejected.
    pub fn validate(&self) -> Result<(), SetupError> {
        for (pos, edge) in self.active_edge_ids.iter().enumerate() {
            if self.active_edge_ids[..pos].contains(edge) {
                return Err(SetupError::DuplicateActiveEdge(*edge));
            }
            if !self.edge_configs.contains_key(edge) {
                return Err(SetupError::MissingConfig(*edge));
            }
        }
        for edge in self.edge_configs.keys() {
            if !self.active_edge_ids.contains(edge) {
                return Err(SetupError::OrphanConfig(*edge));
            }
        }
        if self.decision_maker == self.opponent {
            tracing::warn!(
                agent = %self.decision_maker,
                "decision-maker and opponent are the same agent"
            );
        }
        Ok(())
    }
}

impl Default for ExperimentSetup {
    fn default() -> Self {
        Self {
            active_edge_ids: Vec::new(),
            edge_configs: IndexMap::new(),
            decision_maker: AgentId::Hb,
            opponent: AgentId::Ra,
        }
    }
}
