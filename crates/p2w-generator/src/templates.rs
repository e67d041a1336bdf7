//! Per-category templates for descriptions, environments, prefabs, and
//! spawn points.
//!
//! A [`TemplateLibrary`] is built once and never mutated afterwards, so one
//! instance can be shared (behind an `Arc`) by any number of concurrent
//! generations. Every lookup is total: categories without a bespoke entry
//! fall back to the realistic base template.

use std::collections::HashMap;

use p2w_core::{PrefabInstance, PrefabType, Properties, PropertyValue, Quaternion, Vector3, WorldType};

/// Description fragment used when a category has no bespoke sentence.
pub const GENERIC_DESCRIPTION: &str = "A unique world to explore.";

/// A default prefab placement for a category.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceTemplate {
    /// Catalog archetype ID.
    pub prefab_id: String,
    /// Archetype category tag.
    pub prefab_type: PrefabType,
    /// Placement position.
    pub position: Vector3,
    /// Placement rotation.
    pub rotation: Quaternion,
    /// Theme, size, and visual flags.
    pub properties: Properties,
}

impl InstanceTemplate {
    /// Create a template at `position` with identity rotation and no
    /// properties.
    pub fn new(prefab_id: impl Into<String>, prefab_type: PrefabType, position: Vector3) -> Self {
        Self {
            prefab_id: prefab_id.into(),
            prefab_type,
            position,
            rotation: Quaternion::IDENTITY,
            properties: Properties::new(),
        }
    }

    /// Builder-style: add a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Materialize a placed instance with a fresh ID and unit scale. All
    /// template data is cloned; the instance shares nothing with the template.
    pub fn instantiate(&self) -> PrefabInstance {
        PrefabInstance::new(self.prefab_id.clone(), self.prefab_type, self.position)
            .with_rotation(self.rotation)
            .with_properties(self.properties.clone())
    }
}

/// A complete template for one category. Used as the realistic base.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldTemplate {
    /// One-sentence flavour text appended to the description.
    pub description: String,
    /// Environment settings (lighting, weather, ambient_sound, skybox).
    pub environment: Properties,
    /// Default prefab placements, in order.
    pub instances: Vec<InstanceTemplate>,
    /// Player spawn points, in order.
    pub spawn_points: Vec<Vector3>,
}

/// Immutable, category-keyed template tables.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    base: WorldTemplate,
    descriptions: HashMap<WorldType, String>,
    environments: HashMap<WorldType, Properties>,
    instances: HashMap<WorldType, Vec<InstanceTemplate>>,
    spawn_points: HashMap<WorldType, Vec<Vector3>>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateLibrary {
    /// Create a library whose only entry is the realistic base template.
    pub fn new(base: WorldTemplate) -> Self {
        let mut descriptions = HashMap::new();
        descriptions.insert(WorldType::Realistic, base.description.clone());
        Self {
            base,
            descriptions,
            environments: HashMap::new(),
            instances: HashMap::new(),
            spawn_points: HashMap::new(),
        }
    }

    /// The built-in template tables.
    pub fn builtin() -> Self {
        let base = WorldTemplate {
            description: "A realistic environment based on real-world locations.".to_string(),
            environment: environment("natural", "clear", "city_traffic", "realistic_sky"),
            instances: vec![
                InstanceTemplate::new("modern_building_01", PrefabType::Building, Vector3::ZERO)
                    .with_property("theme", "modern")
                    .with_property("size", "medium"),
            ],
            spawn_points: vec![Vector3::new(0.0, 1.0, 0.0), Vector3::new(5.0, 1.0, 5.0)],
        };

        Self::new(base)
            .with_description(
                WorldType::Fantasy,
                "A magical realm filled with wonder and enchantment.",
            )
            .with_description(
                WorldType::SciFi,
                "A futuristic world with advanced technology and alien landscapes.",
            )
            .with_description(
                WorldType::Surreal,
                "A dreamlike world that defies conventional reality.",
            )
            .with_description(
                WorldType::Historical,
                "A historical setting that captures the essence of the past.",
            )
            .with_description(
                WorldType::Urban,
                "A bustling urban environment with modern architecture.",
            )
            .with_description(
                WorldType::Nature,
                "A natural environment filled with organic beauty.",
            )
            .with_description(
                WorldType::Space,
                "An otherworldly space environment with cosmic wonders.",
            )
            .with_environment(
                WorldType::Fantasy,
                environment("mystical", "ethereal", "magical_forest", "fantasy_sky"),
            )
            .with_environment(
                WorldType::SciFi,
                environment("neon", "none", "space_station", "space_stars"),
            )
            .with_environment(
                WorldType::Urban,
                environment("street_lights", "overcast", "urban_bustle", "city_skyline"),
            )
            .with_environment(
                WorldType::Nature,
                environment("sunlight", "sunny", "birds_chirping", "forest_canopy"),
            )
            .with_instances(
                WorldType::Fantasy,
                vec![
                    InstanceTemplate::new("fantasy_castle_01", PrefabType::Building, Vector3::ZERO)
                        .with_property("theme", "medieval")
                        .with_property("size", "large"),
                    InstanceTemplate::new(
                        "magic_tree_01",
                        PrefabType::Environment,
                        Vector3::new(10.0, 0.0, 5.0),
                    )
                    .with_property("glow", true)
                    .with_property("animated", true),
                ],
            )
            .with_instances(
                WorldType::SciFi,
                vec![
                    InstanceTemplate::new("space_station_01", PrefabType::Building, Vector3::ZERO)
                        .with_property("theme", "futuristic")
                        .with_property("size", "massive"),
                    InstanceTemplate::new(
                        "hologram_display_01",
                        PrefabType::Ui,
                        Vector3::new(5.0, 2.0, 0.0),
                    )
                    .with_property("interactive", true)
                    .with_property("glow", true),
                ],
            )
            .with_spawn_points(
                WorldType::Fantasy,
                vec![Vector3::new(0.0, 1.0, 0.0), Vector3::new(10.0, 1.0, 5.0)],
            )
            .with_spawn_points(
                WorldType::SciFi,
                vec![Vector3::new(0.0, 1.0, 0.0), Vector3::new(5.0, 1.0, 0.0)],
            )
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Set the description fragment for a category.
    pub fn with_description(mut self, world_type: WorldType, text: impl Into<String>) -> Self {
        let text = text.into();
        if world_type == WorldType::Realistic {
            self.base.description = text.clone();
        }
        self.descriptions.insert(world_type, text);
        self
    }

    /// Set the environment settings for a category.
    pub fn with_environment(mut self, world_type: WorldType, settings: Properties) -> Self {
        if world_type == WorldType::Realistic {
            self.base.environment = settings;
        } else {
            self.environments.insert(world_type, settings);
        }
        self
    }

    /// Set the default prefab placements for a category.
    pub fn with_instances(mut self, world_type: WorldType, templates: Vec<InstanceTemplate>) -> Self {
        if world_type == WorldType::Realistic {
            self.base.instances = templates;
        } else {
            self.instances.insert(world_type, templates);
        }
        self
    }

    /// Set the spawn points for a category.
    pub fn with_spawn_points(mut self, world_type: WorldType, points: Vec<Vector3>) -> Self {
        if world_type == WorldType::Realistic {
            self.base.spawn_points = points;
        } else {
            self.spawn_points.insert(world_type, points);
        }
        self
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Environment settings for a category.
    pub fn environment_settings_for(&self, world_type: WorldType) -> &Properties {
        self.environments
            .get(&world_type)
            .unwrap_or(&self.base.environment)
    }

    /// One-sentence description fragment for a category.
    pub fn description_fragment_for(&self, world_type: WorldType) -> &str {
        self.descriptions
            .get(&world_type)
            .map(String::as_str)
            .unwrap_or(GENERIC_DESCRIPTION)
    }

    /// Default prefab placements for a category, in order.
    pub fn default_instances_for(&self, world_type: WorldType) -> &[InstanceTemplate] {
        self.instances
            .get(&world_type)
            .unwrap_or(&self.base.instances)
    }

    /// Spawn points for a category, in order.
    pub fn spawn_points_for(&self, world_type: WorldType) -> &[Vector3] {
        self.spawn_points
            .get(&world_type)
            .unwrap_or(&self.base.spawn_points)
    }
}

fn environment(lighting: &str, weather: &str, ambient_sound: &str, skybox: &str) -> Properties {
    let mut settings = Properties::new();
    settings.insert("lighting".to_string(), lighting.into());
    settings.insert("weather".to_string(), weather.into());
    settings.insert("ambient_sound".to_string(), ambient_sound.into());
    settings.insert("skybox".to_string(), skybox.into());
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lib() -> TemplateLibrary {
        TemplateLibrary::builtin()
    }

    #[test]
    fn every_type_has_the_four_environment_keys() {
        let lib = lib();
        for wt in WorldType::ALL {
            let keys: Vec<&str> = lib
                .environment_settings_for(wt)
                .keys()
                .map(String::as_str)
                .collect();
            assert_eq!(keys, ["ambient_sound", "lighting", "skybox", "weather"]);
        }
    }

    #[test]
    fn bespoke_environments() {
        let lib = lib();
        let fantasy = lib.environment_settings_for(WorldType::Fantasy);
        assert_eq!(fantasy["lighting"], PropertyValue::from("mystical"));
        let sci_fi = lib.environment_settings_for(WorldType::SciFi);
        assert_eq!(sci_fi["skybox"], PropertyValue::from("space_stars"));
        let urban = lib.environment_settings_for(WorldType::Urban);
        assert_eq!(urban["ambient_sound"], PropertyValue::from("urban_bustle"));
    }

    #[test]
    fn missing_environments_reuse_realistic() {
        let lib = lib();
        let realistic = lib.environment_settings_for(WorldType::Realistic);
        for wt in [WorldType::Surreal, WorldType::Historical, WorldType::Space] {
            assert_eq!(lib.environment_settings_for(wt), realistic);
        }
    }

    #[test]
    fn descriptions_per_type() {
        let lib = lib();
        assert_eq!(
            lib.description_fragment_for(WorldType::Fantasy),
            "A magical realm filled with wonder and enchantment."
        );
        assert_eq!(
            lib.description_fragment_for(WorldType::Space),
            "An otherworldly space environment with cosmic wonders."
        );
    }

    #[test]
    fn description_falls_back_to_generic_sentence() {
        let bare = TemplateLibrary::new(WorldTemplate {
            description: "Base.".to_string(),
            environment: Properties::new(),
            instances: Vec::new(),
            spawn_points: Vec::new(),
        });
        assert_eq!(bare.description_fragment_for(WorldType::Realistic), "Base.");
        assert_eq!(
            bare.description_fragment_for(WorldType::Nature),
            GENERIC_DESCRIPTION
        );
    }

    #[test]
    fn instance_templates_per_type() {
        let lib = lib();
        let fantasy: Vec<&str> = lib
            .default_instances_for(WorldType::Fantasy)
            .iter()
            .map(|t| t.prefab_id.as_str())
            .collect();
        assert_eq!(fantasy, ["fantasy_castle_01", "magic_tree_01"]);

        let sci_fi = lib.default_instances_for(WorldType::SciFi);
        assert_eq!(sci_fi.len(), 2);
        assert_eq!(sci_fi[1].prefab_type, PrefabType::Ui);
        assert_eq!(sci_fi[1].position, Vector3::new(5.0, 2.0, 0.0));

        for wt in [
            WorldType::Realistic,
            WorldType::Surreal,
            WorldType::Historical,
            WorldType::Urban,
            WorldType::Nature,
            WorldType::Space,
        ] {
            let templates = lib.default_instances_for(wt);
            assert_eq!(templates.len(), 1);
            assert_eq!(templates[0].prefab_id, "modern_building_01");
            assert_eq!(templates[0].position, Vector3::ZERO);
        }
    }

    #[test]
    fn all_templates_use_identity_rotation() {
        let lib = lib();
        for wt in WorldType::ALL {
            for t in lib.default_instances_for(wt) {
                assert_eq!(t.rotation, Quaternion::IDENTITY);
            }
        }
    }

    #[test]
    fn spawn_points_per_type() {
        let lib = lib();
        assert_eq!(
            lib.spawn_points_for(WorldType::Fantasy),
            [Vector3::new(0.0, 1.0, 0.0), Vector3::new(10.0, 1.0, 5.0)]
        );
        assert_eq!(
            lib.spawn_points_for(WorldType::SciFi),
            [Vector3::new(0.0, 1.0, 0.0), Vector3::new(5.0, 1.0, 0.0)]
        );
        assert_eq!(
            lib.spawn_points_for(WorldType::Historical),
            [Vector3::new(0.0, 1.0, 0.0), Vector3::new(5.0, 1.0, 5.0)]
        );
    }

    #[test]
    fn instantiate_copies_template_data() {
        let template = InstanceTemplate::new("crate_01", PrefabType::Prop, Vector3::new(1.0, 0.0, 2.0))
            .with_property("breakable", true);
        let a = template.instantiate();
        let b = template.instantiate();
        assert_ne!(a.id, b.id);
        assert_eq!(a.prefab_id, "crate_01");
        assert_eq!(a.scale, Vector3::ONE);
        assert_eq!(a.properties["breakable"], PropertyValue::from(true));
    }

    #[test]
    fn realistic_overrides_replace_base() {
        let lib = lib().with_spawn_points(WorldType::Realistic, vec![Vector3::ZERO]);
        assert_eq!(lib.spawn_points_for(WorldType::Realistic), [Vector3::ZERO]);
        assert_eq!(lib.spawn_points_for(WorldType::Surreal), [Vector3::ZERO]);
    }
}
