//! Error types for coopnet Core
//!
//! Two taxonomies per the error design:
//! - [`SetupError`]: configuration invariant violations, surfaced to the
//!   administrator before a session starts
//! - [`SessionError`]: precondition and capacity violations at the session
//!   API boundary
//!
//! Unknown edge and agent identifiers are unrepresentable here; they are
//! rejected at the parse boundary in `coopnet-design`.

use coopnet_design::{DesignError, EdgeId};

/// Configuration errors in an experiment setup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The same edge appears twice in the active list
    #[error("edge {0} activated more than once")]
    DuplicateActiveEdge(EdgeId),

    /// An active edge has no semantic configuration
    #[error("active edge {0} has no configuration")]
    MissingConfig(EdgeId),

    /// A configuration exists for an edge that is not active
    #[error("configuration present for inactive edge {0}")]
    OrphanConfig(EdgeId),

    /// Attempt to configure an edge that is not active
    #[error("edge {0} is not active")]
    InactiveEdge(EdgeId),
}

/// Errors from the survey session state machine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Setup failed validation
    #[error("invalid setup: {0}")]
    Setup(#[from] SetupError),

    /// Session started with zero active factors
    #[error("no active factors, nothing to survey")]
    NoActiveFactors,

    /// Design matrix generation rejected the factor list
    #[error("design generation failed: {0}")]
    Design(#[from] DesignError),

    /// Operation on a session that has already completed
    #[error("session is already complete")]
    AlreadyComplete,

    /// Probability outside the closed unit interval (or not finite)
    #[error("probability {0} outside [0.0, 1.0]")]
    ProbabilityOutOfRange(f64),

    /// Slider percentage above 100
    #[error("percent {0} exceeds 100")]
    PercentOutOfRange(u8),

    /// Batch hand-off requested before the last scenario was answered
    #[error("session incomplete: {answered} of {total} scenarios answered")]
    Incomplete {
        /// Scenarios answered so far
        answered: usize,
        /// Total scenarios in the session
        total: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_error_display() {
        let edge: EdgeId = "HA-RA".parse().unwrap();
        let err = SetupError::MissingConfig(edge);
        assert!(err.to_string().contains("HA-RA"));
    }

    #[test]
    fn design_error_converts() {
        let err: SessionError = DesignError::TooManyFactors { count: 21, max: 20 }.into();
        assert!(matches!(err, SessionError::Design(_)));
    }

    #[test]
    fn incomplete_reports_counts() {
        let err = SessionError::Incomplete {
            answered: 2,
            total: 4,
        };
        assert_eq!(err.to_string(), "session incomplete: 2 of 4 scenarios answered");
    }
}
