//! Scenario data for the network renderer
//!
//! The renderer itself lives outside this workspace; it receives, per
//! active edge, the binary state together with the configured semantics so
//! it can pick colors and legend text without recomputing anything.

use crate::error::SetupError;
use crate::setup::ExperimentSetup;
use coopnet_design::{EdgeId, EdgeState, Scenario};

/// One active edge as the renderer should present it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeAnnotation<'a> {
    /// The edge being annotated
    pub edge: EdgeId,
    /// Its state in the scenario
    pub state: EdgeState,
    /// Configured display label
    pub label: &'a str,
    /// Meaning of the low state
    pub low: &'a str,
    /// Meaning of the high state
    pub high: &'a str,
}

impl EdgeAnnotation<'_> {
    /// The meaning selected by this scenario's state
    #[inline]
    #[must_use]
    pub fn meaning(&self) -> &str {
        if self.state.is_high() {
            self.high
        } else {
            self.low
        }
    }
}

/// Annotate a scenario's edges with their configured semantics
///
/// Annotations come back in activation order. A factor with no config is a
/// configuration error; it can only happen with a setup that bypassed
/// validation.
pub fn annotate<'a>(
    setup: &'a ExperimentSetup,
    scenario: &Scenario,
) -> Result<Vec<EdgeAnnotation<'a>>, SetupError> {
    scenario
        .states()
        .map(|(edge, state)| {
            let config = setup
                .edge_configs
                .get(&edge)
                .ok_or(SetupError::MissingConfig(edge))?;
            Ok(EdgeAnnotation {
                edge,
                state,
                label: &config.label,
                low: &config.low,
                high: &config.high,
            })
        })
        .collect()
}
