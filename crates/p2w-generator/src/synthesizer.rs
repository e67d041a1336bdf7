//! Blueprint synthesis: prompt + category + templates -> blueprint.

use p2w_core::{GenerationResult, WorldBlueprint, WorldType};
use tracing::{debug, error};

use crate::config::TITLE_WORDS;
use crate::templates::TemplateLibrary;

/// Suffix appended to every generated title.
pub const TITLE_SUFFIX: &str = " World";

/// Smallest usable title limit: one character plus the suffix.
pub const MIN_TITLE_CHARS: usize = TITLE_SUFFIX.len() + 1;

/// Builds blueprints from a shared template library.
///
/// Synthesis is deterministic given `(prompt, world_type)` apart from the
/// generated identifiers and timestamps.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
    templates: &'a TemplateLibrary,
    max_title_chars: usize,
}

impl<'a> Synthesizer<'a> {
    /// Create a synthesizer over `templates`.
    pub fn new(templates: &'a TemplateLibrary, max_title_chars: usize) -> Self {
        Self {
            templates,
            max_title_chars,
        }
    }

    /// Build a complete blueprint. Fails only if the instance-ID invariant is
    /// broken, which indicates a defect in ID generation.
    pub fn synthesize(&self, prompt: &str, world_type: WorldType) -> GenerationResult<WorldBlueprint> {
        let title = make_title(prompt, self.max_title_chars);
        let description = format!(
            "Generated from: '{prompt}'. {}",
            self.templates.description_fragment_for(world_type)
        );

        let mut blueprint = WorldBlueprint::new(prompt, world_type, title, description);
        blueprint.environment_settings = self.templates.environment_settings_for(world_type).clone();
        blueprint.prefab_instances = self
            .templates
            .default_instances_for(world_type)
            .iter()
            .map(|t| t.instantiate())
            .collect();
        blueprint.spawn_points = self.templates.spawn_points_for(world_type).to_vec();

        if let Err(e) = blueprint.validate() {
            error!(blueprint_id = %blueprint.id, error = %e, "blueprint failed invariant check");
            return Err(e);
        }

        debug!(
            blueprint_id = %blueprint.id,
            %world_type,
            instances = blueprint.instance_count(),
            spawn_points = blueprint.spawn_points.len(),
            "blueprint synthesized"
        );
        Ok(blueprint)
    }
}

/// Title from the first few prompt words, title-cased, plus " World".
/// The word part is cut on a character boundary so the whole title fits in
/// `max_chars`, which is raised to [`MIN_TITLE_CHARS`] if smaller. A prompt
/// without words yields just "World".
pub fn make_title(prompt: &str, max_chars: usize) -> String {
    let words: Vec<String> = prompt
        .split_whitespace()
        .take(TITLE_WORDS)
        .map(title_case)
        .collect();
    let head = words.join(" ");

    if head.is_empty() {
        return TITLE_SUFFIX.trim_start().to_string();
    }

    let budget = max_chars.max(MIN_TITLE_CHARS) - TITLE_SUFFIX.chars().count();
    let head: String = if head.chars().count() > budget {
        head.chars().take(budget).collect::<String>().trim_end().to_string()
    } else {
        head
    };

    format!("{head}{TITLE_SUFFIX}")
}

/// Uppercase the first letter of each run of alphabetic characters and
/// lowercase the rest, so "sci-fi" becomes "Sci-Fi" and "o'neil" becomes
/// "O'Neil".
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_is_alpha = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use p2w_core::{GenerationError, PrefabType, PropertyValue, Vector3};

    use super::*;

    fn synthesize(prompt: &str, wt: WorldType) -> WorldBlueprint {
        let lib = TemplateLibrary::builtin();
        Synthesizer::new(&lib, 200).synthesize(prompt, wt).unwrap()
    }

    #[test]
    fn title_uses_first_five_words() {
        assert_eq!(
            make_title("A magical forest with ancient trees and glowing mushrooms", 200),
            "A Magical Forest With Ancient World"
        );
    }

    #[test]
    fn short_prompt_uses_all_words() {
        assert_eq!(make_title("neon   alley", 200), "Neon Alley World");
    }

    #[test]
    fn title_case_handles_punctuation() {
        assert_eq!(title_case("sci-fi"), "Sci-Fi");
        assert_eq!(title_case("SHOUTING"), "Shouting");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("42nd"), "42Nd");
    }

    #[test]
    fn long_title_is_truncated_to_limit() {
        let long_word = "a".repeat(500);
        let title = make_title(&long_word, 200);
        assert_eq!(title.chars().count(), 200);
        assert!(title.ends_with(" World"));
    }

    #[test]
    fn tiny_title_limit_keeps_one_character() {
        assert_eq!(make_title("glowing caves", 0), "G World");
        assert_eq!(make_title("glowing caves", 3), "G World");
        assert_eq!(make_title("   ", 200), "World");
    }

    #[test]
    fn invariant_failure_returns_no_blueprint() {
        let lib = TemplateLibrary::builtin().with_spawn_points(
            WorldType::Space,
            vec![Vector3::ZERO, Vector3::new(f64::NAN, 1.0, 0.0)],
        );
        let err = Synthesizer::new(&lib, 200)
            .synthesize("a nebula", WorldType::Space)
            .unwrap_err();
        assert_eq!(err, GenerationError::NonFiniteVector("spawn point 1".into()));
        assert!(!err.is_client_error());
    }

    #[test]
    fn description_template() {
        let bp = synthesize("a quiet harbor", WorldType::Realistic);
        assert_eq!(
            bp.description,
            "Generated from: 'a quiet harbor'. A realistic environment based on real-world locations."
        );
    }

    #[test]
    fn fantasy_blueprint_contents() {
        let bp = synthesize("a dragon keep", WorldType::Fantasy);
        assert_eq!(bp.world_type, WorldType::Fantasy);
        assert_eq!(bp.prefab_instances.len(), 2);
        assert_eq!(bp.prefab_instances[0].prefab_id, "fantasy_castle_01");
        assert_eq!(bp.prefab_instances[0].prefab_type, PrefabType::Building);
        assert_eq!(bp.prefab_instances[1].position, Vector3::new(10.0, 0.0, 5.0));
        assert_eq!(
            bp.spawn_points,
            vec![Vector3::new(0.0, 1.0, 0.0), Vector3::new(10.0, 1.0, 5.0)]
        );
        assert!(bp.processing_time_ms.is_none());
        assert_eq!(bp.created_at, bp.updated_at);
    }

    #[test]
    fn instances_have_unit_scale_and_unique_ids() {
        for wt in WorldType::ALL {
            let bp = synthesize("anything", wt);
            let ids: HashSet<_> = bp.prefab_instances.iter().map(|i| i.id).collect();
            assert_eq!(ids.len(), bp.prefab_instances.len());
            assert!(bp.prefab_instances.iter().all(|i| i.scale == Vector3::ONE));
        }
    }

    #[test]
    fn blueprint_does_not_alias_templates() {
        let lib = TemplateLibrary::builtin();
        let synth = Synthesizer::new(&lib, 200);

        let mut first = synth.synthesize("x", WorldType::Urban).unwrap();
        first
            .environment_settings
            .insert("lighting".to_string(), "pitch_black".into());
        first.prefab_instances.clear();
        first.spawn_points.push(Vector3::ZERO);

        let second = synth.synthesize("x", WorldType::Urban).unwrap();
        assert_eq!(
            second.environment_settings["lighting"],
            PropertyValue::from("street_lights")
        );
        assert_eq!(second.prefab_instances.len(), 1);
        assert_eq!(second.spawn_points.len(), 2);
    }
}
