//! Survey session state machine
//!
//! A [`SurveySession`] owns the mutable state of one survey-taking pass:
//! the frozen scenario list, the cursor, and the accumulating results.
//! Transitions: start puts the session `InProgress` at index 0; each
//! successful [`record_and_advance`](SurveySession::record_and_advance)
//! moves the cursor forward, and the last one flips to `Complete`. Nothing
//! leaves `Complete`; abandoning a session is dropping the value.

use crate::error::SessionError;
use crate::setup::ExperimentSetup;
use coopnet_design::{generate, Scenario};
use serde::{Deserialize, Serialize};

/// One participant response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResult {
    /// Scenario the response belongs to
    pub scenario_id: u32,
    /// Reported cooperation probability in `[0.0, 1.0]`
    pub cooperation_probability: f64,
}

impl SurveyResult {
    /// Create a result, rejecting probabilities outside `[0.0, 1.0]`
    ///
    /// Out-of-range input is rejected rather than clamped, so a buggy
    /// collaborator surfaces instead of silently recording a distorted
    /// response.
    pub fn new(scenario_id: u32, probability: f64) -> Result<Self, SessionError> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(SessionError::ProbabilityOutOfRange(probability));
        }
        Ok(Self {
            scenario_id,
            cooperation_probability: probability,
        })
    }

    /// Create a result from the 0-100 slider integer
    pub fn from_percent(scenario_id: u32, percent: u8) -> Result<Self, SessionError> {
        if percent > 100 {
            return Err(SessionError::PercentOutOfRange(percent));
        }
        Self::new(scenario_id, f64::from(percent) / 100.0)
    }
}

/// Where a session currently stands
///
/// The "not started" state of the abstract machine is the absence of a
/// session value; construction is the initialize transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Presenting the scenario at `index` (0-based)
    InProgress {
        /// Cursor into the scenario list
        index: usize,
    },
    /// Every scenario has been answered
    Complete,
}

/// Progress counters for the survey progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Scenarios answered so far
    pub answered: usize,
    /// Total scenarios in the session
    pub total: usize,
}

impl Progress {
    /// Completion percentage, rounded down
    #[inline]
    #[must_use]
    pub fn percent(&self) -> u8 {
        u8::try_from((self.answered * 100) / self.total.max(1)).unwrap_or(100)
    }
}

/// One participant's walk through the factorial scenario set
#[derive(Debug, Clone)]
pub struct SurveySession {
    scenarios: Vec<Scenario>,
    results: Vec<SurveyResult>,
    phase: SessionPhase,
}

impl SurveySession {
    /// Start a session from a validated setup snapshot
    ///
    /// Validates the setup, rejects an empty factor set, and invokes the
    /// design matrix generator exactly once with the activation order
    /// frozen at this point. Later edits to the setup do not affect a
    /// running session.
    pub fn start(setup: &ExperimentSetup) -> Result<Self, SessionError> {
        setup.validate()?;
        if setup.active_edge_ids.is_empty() {
            return Err(SessionError::NoActiveFactors);
        }
        let scenarios = generate(&setup.active_edge_ids)?;
        tracing::info!(
            factors = setup.factor_count(),
            scenarios = scenarios.len(),
            "survey session started"
        );
        Ok(Self {
            scenarios,
            results: Vec::new(),
            phase: SessionPhase::InProgress { index: 0 },
        })
    }

    /// Current phase of the state machine
    #[inline]
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the cursor has passed the final scenario
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    /// Number of scenarios in this session
    #[inline]
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// The scenario currently being presented
    pub fn current_scenario(&self) -> Result<&Scenario, SessionError> {
        match self.phase {
            SessionPhase::InProgress { index } => Ok(&self.scenarios[index]),
            SessionPhase::Complete => Err(SessionError::AlreadyComplete),
        }
    }

    /// Record the response for the current scenario and move on
    ///
    /// Overwrites any result already stored at the cursor, so a future
    /// back-navigation can redo an answer without special casing. Returns
    /// the phase after the transition.
    pub fn record_and_advance(&mut self, probability: f64) -> Result<SessionPhase, SessionError> {
        let SessionPhase::InProgress { index } = self.phase else {
            return Err(SessionError::AlreadyComplete);
        };
        let result = SurveyResult::new(self.scenarios[index].id(), probability)?;
        if index < self.results.len() {
            self.results[index] = result;
        } else {
            self.results.push(result);
        }

        self.phase = if index + 1 < self.scenarios.len() {
            SessionPhase::InProgress { index: index + 1 }
        } else {
            tracing::info!(results = self.results.len(), "survey session complete");
            SessionPhase::Complete
        };
        Ok(self.phase)
    }

    /// Record a response straight from the 0-100 slider
    pub fn record_percent(&mut self, percent: u8) -> Result<SessionPhase, SessionError> {
        if percent > 100 {
            return Err(SessionError::PercentOutOfRange(percent));
        }
        self.record_and_advance(f64::from(percent) / 100.0)
    }

    /// Progress counters
    #[inline]
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.results.len(),
            total: self.scenarios.len(),
        }
    }

    /// Results recorded so far, in scenario order
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[SurveyResult] {
        &self.results
    }

    /// Consume the session and hand off the completed batch
    pub fn finish(self) -> Result<Vec<SurveyResult>, SessionError> {
        match self.phase {
            SessionPhase::Complete => Ok(self.results),
            SessionPhase::InProgress { .. } => Err(SessionError::Incomplete {
                answered: self.results.len(),
                total: self.scenarios.len(),
            }),
        }
    }
}
