//! coopnet Core - Experiment configuration and survey sessions
//!
//! The orchestration layer of the coopnet workspace:
//! - [`ExperimentSetup`]: which edges are factors and what their states mean
//! - [`SurveySession`]: the state machine one participant walks through
//! - [`annotate`]: per-edge scenario data for a network renderer
//! - [`ResultSink`]: hand-off seam for the completed batch
//!
//! # Example
//!
//! ```rust
//! use coopnet_core::{ExperimentSetup, SurveySession, ResultSink, LogSink};
//!
//! let mut setup = ExperimentSetup::new();
//! setup.activate("HB-RA".parse()?);
//!
//! let mut session = SurveySession::start(&setup)?;
//! while !session.is_complete() {
//!     session.record_percent(50)?;
//! }
//!
//! let results = session.finish()?;
//! LogSink.deliver(&results)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod render;
pub mod session;
pub mod setup;
pub mod sink;

// Re-exports for convenience
pub use error::{SessionError, SetupError};
pub use render::{annotate, EdgeAnnotation};
pub use session::{Progress, SessionPhase, SurveyResult, SurveySession};
pub use setup::{EdgeConfig, ExperimentSetup, HIGH_LOAD_FACTORS};
pub use sink::{LogSink, MemorySink, ResultSink, SinkError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with coopnet Core
    pub use crate::{
        annotate, EdgeConfig, ExperimentSetup, LogSink, ResultSink, SessionPhase, SurveyResult,
        SurveySession,
    };
    pub use coopnet_design::{generate, AgentId, EdgeId, EdgeState, Scenario};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
