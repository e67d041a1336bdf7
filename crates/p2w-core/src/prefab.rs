use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Quaternion, Vector3};

/// Unique identifier for a prefab instance within a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub Uuid);

impl InstanceId {
    /// Generate a new random instance ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Catalog category of a prefab archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefabType {
    /// Castles, stations, houses.
    Building,
    /// Cars, ships, carts.
    Vehicle,
    /// NPCs and creatures.
    Character,
    /// Small decorative or interactive objects.
    Prop,
    /// Trees, rocks, terrain features.
    Environment,
    /// Light sources.
    Lighting,
    /// Particle and visual effects.
    Effect,
    /// In-world interface elements such as holograms.
    Ui,
}

impl fmt::Display for PrefabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Building => write!(f, "building"),
            Self::Vehicle => write!(f, "vehicle"),
            Self::Character => write!(f, "character"),
            Self::Prop => write!(f, "prop"),
            Self::Environment => write!(f, "environment"),
            Self::Lighting => write!(f, "lighting"),
            Self::Effect => write!(f, "effect"),
            Self::Ui => write!(f, "ui"),
        }
    }
}

/// A scalar value stored in instance properties or environment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A boolean flag.
    Boolean(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A text value.
    String(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

/// String-keyed property map. Ordered so serialized output is stable.
pub type Properties = BTreeMap<String, PropertyValue>;

/// One object placed in a world, referencing a catalog archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefabInstance {
    /// Identifier, unique within the owning blueprint.
    pub id: InstanceId,
    /// Catalog archetype this instance refers to.
    pub prefab_id: String,
    /// Category tag of the archetype.
    pub prefab_type: PrefabType,
    /// World position.
    pub position: Vector3,
    /// World rotation.
    pub rotation: Quaternion,
    /// Per-axis scale.
    #[serde(default = "unit_scale")]
    pub scale: Vector3,
    /// Free-form custom properties (theme, size, visual flags).
    #[serde(default)]
    pub properties: Properties,
}

fn unit_scale() -> Vector3 {
    Vector3::ONE
}

impl PrefabInstance {
    /// Create an instance with a fresh ID, identity rotation, unit scale, and
    /// no properties.
    pub fn new(prefab_id: impl Into<String>, prefab_type: PrefabType, position: Vector3) -> Self {
        Self {
            id: InstanceId::new(),
            prefab_id: prefab_id.into(),
            prefab_type,
            position,
            rotation: Quaternion::IDENTITY,
            scale: Vector3::ONE,
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style: set the rotation.
    pub fn with_rotation(mut self, rotation: Quaternion) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder-style: replace the properties map.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}
