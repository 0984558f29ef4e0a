//! Full-factorial design matrix generation
//!
//! [`generate`] enumerates every combination of binary edge states for an
//! ordered set of active factors. The bit-to-factor mapping is a contract:
//! the state of factor `j` (in activation order) in scenario `i + 1` is bit
//! `j` of `i`, least significant bit first. Consumers compare scenarios
//! across sessions by this ordering, not just by the final state sets.

use crate::edge::EdgeId;
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Hard ceiling on the number of active factors
///
/// `2^k` scenarios are materialized eagerly; beyond this the enumeration is
/// rejected rather than attempted.
pub const MAX_FACTORS: usize = 20;

/// Binary state of one edge within a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeState {
    /// State 0, the defect-associated meaning
    Low,
    /// State 1, the cooperate-associated meaning
    High,
}

impl EdgeState {
    /// Numeric form: 0 for low, 1 for high
    #[inline]
    #[must_use]
    pub fn bit(&self) -> u8 {
        match self {
            EdgeState::Low => 0,
            EdgeState::High => 1,
        }
    }

    /// Whether this is the high (cooperate-associated) state
    #[inline]
    #[must_use]
    pub fn is_high(&self) -> bool {
        matches!(self, EdgeState::High)
    }
}

impl From<bool> for EdgeState {
    fn from(is_high: bool) -> Self {
        if is_high {
            EdgeState::High
        } else {
            EdgeState::Low
        }
    }
}

impl fmt::Display for EdgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EdgeState::Low => "low",
            EdgeState::High => "high",
        })
    }
}

impl Serialize for EdgeState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bit())
    }
}

impl<'de> Deserialize<'de> for EdgeState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(EdgeState::Low),
            1 => Ok(EdgeState::High),
            other => Err(D::Error::custom(format!(
                "edge state must be 0 or 1, got {other}"
            ))),
        }
    }
}

/// One fully-specified factorial combination
///
/// Every active factor appears exactly once, in activation order. Scenario
/// identifiers are 1-based and sequential within a generated matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    id: u32,
    edge_states: IndexMap<EdgeId, EdgeState>,
}

impl Scenario {
    /// 1-based scenario identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// State of one factor, if it is part of this scenario
    #[inline]
    #[must_use]
    pub fn state(&self, edge: EdgeId) -> Option<EdgeState> {
        self.edge_states.get(&edge).copied()
    }

    /// All factor states, in activation order
    pub fn states(&self) -> impl Iterator<Item = (EdgeId, EdgeState)> + '_ {
        self.edge_states.iter().map(|(e, s)| (*e, *s))
    }

    /// Number of factors in this scenario
    #[inline]
    #[must_use]
    pub fn factor_count(&self) -> usize {
        self.edge_states.len()
    }
}

/// Errors from design matrix generation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesignError {
    /// Factor count exceeds [`MAX_FACTORS`]
    #[error("too many factors: {count} exceeds enumeration ceiling {max}")]
    TooManyFactors {
        /// Requested factor count
        count: usize,
        /// The ceiling that was exceeded
        max: usize,
    },

    /// The same factor was listed more than once
    #[error("duplicate factor: {0}")]
    DuplicateFactor(EdgeId),
}

/// Generate the complete `2^k` factorial design for an ordered factor list
///
/// Scenario `i + 1` assigns factor `j` the value of bit `j` of `i`. With no
/// factors the design is a single scenario with an empty state map. The
/// function is pure: equal inputs produce equal outputs.
pub fn generate(factors: &[EdgeId]) -> Result<Vec<Scenario>, DesignError> {
    let k = factors.len();
    if k > MAX_FACTORS {
        return Err(DesignError::TooManyFactors {
            count: k,
            max: MAX_FACTORS,
        });
    }
    for (pos, factor) in factors.iter().enumerate() {
        if factors[..pos].contains(factor) {
            return Err(DesignError::DuplicateFactor(*factor));
        }
    }

    let total = 1u32 << k;
    let mut scenarios = Vec::with_capacity(total as usize);
    for i in 0..total {
        let mut edge_states = IndexMap::with_capacity(k);
        for (j, factor) in factors.iter().enumerate() {
            edge_states.insert(*factor, EdgeState::from((i >> j) & 1 == 1));
        }
        scenarios.push(Scenario {
            id: i + 1,
            edge_states,
        });
    }
    Ok(scenarios)
}
