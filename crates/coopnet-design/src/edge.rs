//! Directed edges of the agent network
//!
//! The edge universe is the complete directed graph over the four agents
//! minus self-loops: twelve edges, enumerated once in [`ALL_EDGES`].
//! Self-loops are unrepresentable; both constructors reject them.

use crate::agent::{AgentId, UnknownAgent};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a directed relationship between two distinct agents
///
/// Displays as `"SOURCE-TARGET"`, e.g. `"HA-RB"`, which is also the
/// serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    source: AgentId,
    target: AgentId,
}

impl EdgeId {
    /// Create an edge identifier, rejecting self-loops
    pub fn new(source: AgentId, target: AgentId) -> Result<Self, EdgeError> {
        if source == target {
            return Err(EdgeError::SelfLoop(source));
        }
        Ok(Self { source, target })
    }

    /// Source agent
    #[inline]
    #[must_use]
    pub fn source(&self) -> AgentId {
        self.source
    }

    /// Target agent
    #[inline]
    #[must_use]
    pub fn target(&self) -> AgentId {
        self.target
    }

    /// All twelve directed edges, in source-major order
    #[inline]
    #[must_use]
    pub fn all() -> &'static [EdgeId; 12] {
        &ALL_EDGES
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

impl FromStr for EdgeId {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, target) = s
            .split_once('-')
            .ok_or_else(|| EdgeError::Malformed(s.to_string()))?;
        Self::new(source.parse()?, target.parse()?)
    }
}

impl Serialize for EdgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdgeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Errors constructing or parsing an edge identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdgeError {
    /// Source and target are the same agent
    #[error("self-loop edge on agent {0}")]
    SelfLoop(AgentId),

    /// Identifier is not of the form `SOURCE-TARGET`
    #[error("malformed edge identifier: {0:?}")]
    Malformed(String),

    /// One endpoint is not a known agent
    #[error("edge endpoint: {0}")]
    UnknownAgent(#[from] UnknownAgent),
}

const fn edge(source: AgentId, target: AgentId) -> EdgeId {
    EdgeId { source, target }
}

/// All twelve possible directed edges (complete digraph, no self-loops)
pub const ALL_EDGES: [EdgeId; 12] = [
    edge(AgentId::Ha, AgentId::Ra),
    edge(AgentId::Ha, AgentId::Hb),
    edge(AgentId::Ha, AgentId::Rb),
    edge(AgentId::Ra, AgentId::Ha),
    edge(AgentId::Ra, AgentId::Hb),
    edge(AgentId::Ra, AgentId::Rb),
    edge(AgentId::Hb, AgentId::Ha),
    edge(AgentId::Hb, AgentId::Ra),
    edge(AgentId::Hb, AgentId::Rb),
    edge(AgentId::Rb, AgentId::Ha),
    edge(AgentId::Rb, AgentId::Ra),
    edge(AgentId::Rb, AgentId::Hb),
];
