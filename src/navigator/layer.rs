//! Disclosure layers and their display status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three ordered disclosure stages.
///
/// Ordering follows the numeric value, so `Snapshot < Insights < Comprehensive`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Layer {
    /// Layer 1: key findings and immediate actions.
    #[default]
    Snapshot = 1,
    /// Layer 2: contextual analysis per insight.
    Insights = 2,
    /// Layer 3: full technical details.
    Comprehensive = 3,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Snapshot, Layer::Insights, Layer::Comprehensive];

    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Snapshot => "Health Snapshot",
            Self::Insights => "Detailed Insights",
            Self::Comprehensive => "Comprehensive",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Snapshot => "Key findings & actions",
            Self::Insights => "Contextual analysis",
            Self::Comprehensive => "Full technical details",
        }
    }
}

/// Rejected raw layer value. Only 1, 2 and 3 name a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid layer {0}: expected 1, 2 or 3")]
pub struct InvalidLayer(pub u64);

impl TryFrom<u8> for Layer {
    type Error = InvalidLayer;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Snapshot),
            2 => Ok(Self::Insights),
            3 => Ok(Self::Comprehensive),
            other => Err(InvalidLayer(u64::from(other))),
        }
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer.number()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// How a layer appears in the journey indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerStatus {
    Completed,
    Current,
    Upcoming,
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
