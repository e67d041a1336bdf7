use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// The category of a generated world. Drives template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorldType {
    /// Magic, dragons, castles.
    Fantasy,
    /// Advanced technology and alien landscapes.
    #[serde(alias = "sci-fi")]
    SciFi,
    /// Real-world locations. The fallback category.
    #[default]
    Realistic,
    /// Dreamlike, reality-defying worlds.
    Surreal,
    /// Settings from the past.
    Historical,
    /// Modern cities and streets.
    Urban,
    /// Forests, mountains, and wilderness.
    Nature,
    /// Cosmic environments.
    Space,
}

impl WorldType {
    /// Every world type, in declaration order.
    pub const ALL: [WorldType; 8] = [
        Self::Fantasy,
        Self::SciFi,
        Self::Realistic,
        Self::Surreal,
        Self::Historical,
        Self::Urban,
        Self::Nature,
        Self::Space,
    ];

    /// The snake_case wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fantasy => "fantasy",
            Self::SciFi => "sci_fi",
            Self::Realistic => "realistic",
            Self::Surreal => "surreal",
            Self::Historical => "historical",
            Self::Urban => "urban",
            Self::Nature => "nature",
            Self::Space => "space",
        }
    }
}

impl fmt::Display for WorldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorldType {
    type Err = GenerationError;

    /// Strict parse: unknown names are rejected rather than coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fantasy" => Ok(Self::Fantasy),
            "sci_fi" | "sci-fi" | "scifi" => Ok(Self::SciFi),
            "realistic" => Ok(Self::Realistic),
            "surreal" => Ok(Self::Surreal),
            "historical" => Ok(Self::Historical),
            "urban" => Ok(Self::Urban),
            "nature" => Ok(Self::Nature),
            "space" => Ok(Self::Space),
            _ => Err(GenerationError::UnknownWorldType(s.to_string())),
        }
    }
}
