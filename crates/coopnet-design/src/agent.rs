//! The fixed agent network
//!
//! Four agents, two per group, defined once at process start and never
//! created or destroyed. All display data lives in the static [`AGENTS`]
//! table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the four fixed agents
///
/// The two-letter code encodes group membership and whether the agent is
/// automated: `H` human, `R` robot; `A`/`B` the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgentId {
    /// Human agent in group A
    Ha,
    /// Robot agent in group A
    Ra,
    /// Human agent in group B
    Hb,
    /// Robot agent in group B
    Rb,
}

impl AgentId {
    /// All four agents, in table order
    pub const ALL: [AgentId; 4] = [AgentId::Ha, AgentId::Ra, AgentId::Hb, AgentId::Rb];

    /// Two-letter code used in display and edge identifiers
    #[inline]
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AgentId::Ha => "HA",
            AgentId::Ra => "RA",
            AgentId::Hb => "HB",
            AgentId::Rb => "RB",
        }
    }

    /// Look up the static profile for this agent
    #[inline]
    #[must_use]
    pub fn profile(&self) -> &'static Agent {
        match self {
            AgentId::Ha => &AGENTS[0],
            AgentId::Ra => &AGENTS[1],
            AgentId::Hb => &AGENTS[2],
            AgentId::Rb => &AGENTS[3],
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AgentId {
    type Err = UnknownAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HA" => Ok(AgentId::Ha),
            "RA" => Ok(AgentId::Ra),
            "HB" => Ok(AgentId::Hb),
            "RB" => Ok(AgentId::Rb),
            other => Err(UnknownAgent(other.to_string())),
        }
    }
}

/// Error for agent codes outside the fixed four
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown agent: {0}")]
pub struct UnknownAgent(pub String);

/// Experiment group an agent belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    /// Group A
    A,
    /// Group B
    B,
}

/// Static display profile of one agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    /// Agent identifier
    pub id: AgentId,
    /// Participant-facing label
    pub label: &'static str,
    /// Group membership
    pub group: Group,
    /// Whether the agent is automated (display only)
    pub is_automated: bool,
}

/// The four fixed agents
pub const AGENTS: [Agent; 4] = [
    Agent {
        id: AgentId::Ha,
        label: "ID 1",
        group: Group::A,
        is_automated: false,
    },
    Agent {
        id: AgentId::Ra,
        label: "ID 2",
        group: Group::A,
        is_automated: true,
    },
    Agent {
        id: AgentId::Hb,
        label: "ID 3",
        group: Group::B,
        is_automated: false,
    },
    Agent {
        id: AgentId::Rb,
        label: "ID 4",
        group: Group::B,
        is_automated: true,
    },
];
