use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GenerationError, GenerationResult};
use crate::geometry::Vector3;
use crate::prefab::{InstanceId, PrefabInstance, Properties};
use crate::world_type::WorldType;

/// Maximum prompt length, in characters.
pub const MAX_PROMPT_CHARS: usize = 1000;
/// Maximum title length, in characters.
pub const MAX_TITLE_CHARS: usize = 200;
/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

/// Unique identifier for a generated blueprint. Also the persistence key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlueprintId(pub Uuid);

impl BlueprintId {
    /// Generate a new random blueprint ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a blueprint ID from its hyphenated UUID form.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }
}

impl Default for BlueprintId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlueprintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The complete generated description of a world, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBlueprint {
    /// Unique identifier for this blueprint.
    pub id: BlueprintId,
    /// The prompt the blueprint was generated from.
    pub prompt: String,
    /// Resolved world category.
    pub world_type: WorldType,
    /// Generated title.
    pub title: String,
    /// Generated description.
    pub description: String,
    /// Lighting, weather, ambient sound, skybox, and similar settings.
    pub environment_settings: Properties,
    /// Objects placed in the world, in template order.
    pub prefab_instances: Vec<PrefabInstance>,
    /// Player spawn points, in template order.
    pub spawn_points: Vec<Vector3>,
    /// Timestamp when the blueprint was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the blueprint was last modified.
    pub updated_at: DateTime<Utc>,
    /// Time spent generating, in whole milliseconds. Advisory only.
    pub processing_time_ms: Option<u64>,
}

impl WorldBlueprint {
    /// Create an empty blueprint with a fresh ID and current timestamps.
    pub fn new(
        prompt: impl Into<String>,
        world_type: WorldType,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BlueprintId::new(),
            prompt: prompt.into(),
            world_type,
            title: title.into(),
            description: description.into(),
            environment_settings: Properties::new(),
            prefab_instances: Vec::new(),
            spawn_points: Vec::new(),
            created_at: now,
            updated_at: now,
            processing_time_ms: None,
        }
    }

    /// Check the structural invariants: text fields within their character
    /// bounds, finite coordinates, and pairwise-distinct prefab instance IDs.
    /// Returns the first violation found.
    pub fn validate(&self) -> GenerationResult<()> {
        check_length("prompt", &self.prompt, MAX_PROMPT_CHARS)?;
        check_length("title", &self.title, MAX_TITLE_CHARS)?;
        check_length("description", &self.description, MAX_DESCRIPTION_CHARS)?;

        let mut seen: HashSet<InstanceId> = HashSet::with_capacity(self.prefab_instances.len());
        for instance in &self.prefab_instances {
            if !instance.position.is_finite() || !instance.scale.is_finite() {
                return Err(GenerationError::NonFiniteVector(format!(
                    "prefab instance {}",
                    instance.id
                )));
            }
            if !seen.insert(instance.id) {
                return Err(GenerationError::DuplicateInstanceId(instance.id));
            }
        }

        if let Some(i) = self.spawn_points.iter().position(|p| !p.is_finite()) {
            return Err(GenerationError::NonFiniteVector(format!("spawn point {i}")));
        }
        Ok(())
    }

    /// Number of placed prefab instances.
    pub fn instance_count(&self) -> usize {
        self.prefab_instances.len()
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> GenerationResult<()> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(GenerationError::FieldLength { field, len, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefab::PrefabType;

    fn blueprint() -> WorldBlueprint {
        WorldBlueprint::new(
            "a quiet town",
            WorldType::Realistic,
            "A Quiet Town World",
            "Generated from: 'a quiet town'.",
        )
    }

    #[test]
    fn new_blueprint_has_matching_timestamps() {
        let bp = blueprint();
        assert_eq!(bp.created_at, bp.updated_at);
        assert!(bp.processing_time_ms.is_none());
        assert_eq!(bp.instance_count(), 0);
    }

    #[test]
    fn distinct_ids_validate() {
        let mut bp = blueprint();
        bp.prefab_instances
            .push(PrefabInstance::new("a", PrefabType::Building, Vector3::ZERO));
        bp.prefab_instances
            .push(PrefabInstance::new("b", PrefabType::Prop, Vector3::ONE));
        assert!(bp.validate().is_ok());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut bp = blueprint();
        let first = PrefabInstance::new("a", PrefabType::Building, Vector3::ZERO);
        let mut second = PrefabInstance::new("b", PrefabType::Prop, Vector3::ONE);
        second.id = first.id;
        bp.prefab_instances.push(first.clone());
        bp.prefab_instances.push(second);

        assert_eq!(
            bp.validate(),
            Err(GenerationError::DuplicateInstanceId(first.id))
        );
    }

    #[test]
    fn text_bounds_are_checked() {
        let mut bp = blueprint();
        bp.prompt = "a".repeat(MAX_PROMPT_CHARS + 1);
        assert_eq!(
            bp.validate(),
            Err(GenerationError::FieldLength {
                field: "prompt",
                len: 1001,
                max: 1000
            })
        );

        let mut bp = blueprint();
        bp.title.clear();
        assert!(matches!(
            bp.validate(),
            Err(GenerationError::FieldLength { field: "title", len: 0, .. })
        ));

        let mut bp = blueprint();
        bp.description = "é".repeat(MAX_DESCRIPTION_CHARS);
        assert!(bp.validate().is_ok());
        bp.description.push('x');
        assert!(matches!(
            bp.validate(),
            Err(GenerationError::FieldLength { field: "description", .. })
        ));
    }

    #[test]
    fn non_finite_coordinates_are_reported() {
        let mut bp = blueprint();
        bp.spawn_points.push(Vector3::ZERO);
        bp.spawn_points.push(Vector3::new(0.0, f64::NAN, 0.0));
        assert_eq!(
            bp.validate(),
            Err(GenerationError::NonFiniteVector("spawn point 1".into()))
        );

        let mut bp = blueprint();
        let mut inst = PrefabInstance::new("a", PrefabType::Prop, Vector3::ZERO);
        inst.scale = Vector3::new(f64::INFINITY, 1.0, 1.0);
        bp.prefab_instances.push(inst);
        assert!(matches!(
            bp.validate(),
            Err(GenerationError::NonFiniteVector(_))
        ));
    }

    #[test]
    fn blueprint_id_parses_hyphenated_form() {
        let id = BlueprintId::new();
        assert_eq!(BlueprintId::parse(&id.to_string()), Some(id));
        assert_eq!(BlueprintId::parse("not-a-uuid"), None);
    }

    #[test]
    fn json_uses_wire_field_names() {
        let bp = blueprint();
        let json = serde_json::to_value(&bp).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "id",
            "prompt",
            "world_type",
            "title",
            "description",
            "environment_settings",
            "prefab_instances",
            "spawn_points",
            "created_at",
            "updated_at",
            "processing_time_ms",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(obj["world_type"], "realistic");
    }
}
