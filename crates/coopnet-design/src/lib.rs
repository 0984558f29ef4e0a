//! coopnet Design - Agent network and factorial design matrices
//!
//! The leaf crate of the coopnet workspace:
//! - Static tables for the four fixed agents and the twelve directed edges
//! - [`generate`]: the full-factorial (`2^k`) design matrix generator
//!
//! # Example
//!
//! ```rust
//! use coopnet_design::{generate, EdgeId};
//!
//! let factors: Vec<EdgeId> = ["HA-RA", "HB-RB"]
//!     .iter()
//!     .map(|s| s.parse())
//!     .collect::<Result<_, _>>()?;
//!
//! let matrix = generate(&factors)?;
//! assert_eq!(matrix.len(), 4);
//! assert_eq!(matrix[0].id(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(unreachable_pub)]

// Core modules
mod agent;
mod edge;
mod matrix;

// Re-exports
pub use agent::{Agent, AgentId, Group, UnknownAgent, AGENTS};
pub use edge::{EdgeError, EdgeId, ALL_EDGES};
pub use matrix::{generate, DesignError, EdgeState, Scenario, MAX_FACTORS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
