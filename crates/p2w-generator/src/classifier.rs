//! Prompt classification.
//!
//! A [`Classifier`] maps free text to a [`WorldType`]. The built-in
//! [`KeywordClassifier`] walks an ordered rule list and stops at the first
//! rule with a matching keyword, so precedence is positional rather than
//! based on how many keywords match.

use p2w_core::WorldType;
use tracing::debug;

/// Anything that can assign a world type to a prompt.
///
/// Implementations must be total (never fail) and deterministic.
pub trait Classifier: Send + Sync {
    /// Classify a prompt.
    fn classify(&self, prompt: &str) -> WorldType;
}

/// A single classification rule: if any keyword occurs in the prompt, the
/// rule's world type wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// The world type assigned on match.
    pub world_type: WorldType,
    /// Lower-case keywords, matched as substrings.
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// Create a rule from a keyword list.
    pub fn new(world_type: WorldType, keywords: &[&str]) -> Self {
        Self {
            world_type,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Returns the first keyword that occurs in the lower-cased prompt.
    fn first_match(&self, prompt_lower: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| prompt_lower.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Ordered keyword-rule classifier. First matching rule wins; prompts that
/// match nothing fall back to the default type.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<KeywordRule>,
    fallback: WorldType,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(
            vec![
                KeywordRule::new(
                    WorldType::Fantasy,
                    &["fantasy", "magic", "dragon", "wizard", "castle"],
                ),
                KeywordRule::new(
                    WorldType::SciFi,
                    &["space", "alien", "robot", "future", "sci-fi"],
                ),
                KeywordRule::new(WorldType::Urban, &["city", "urban", "street", "building"]),
                KeywordRule::new(
                    WorldType::Nature,
                    &["forest", "mountain", "nature", "wilderness"],
                ),
                KeywordRule::new(
                    WorldType::Historical,
                    &["medieval", "ancient", "historical", "vintage"],
                ),
            ],
            WorldType::Realistic,
        )
    }
}

impl KeywordClassifier {
    /// Create a classifier from rules in precedence order.
    pub fn new(rules: Vec<KeywordRule>, fallback: WorldType) -> Self {
        Self { rules, fallback }
    }

    /// The rules, in precedence order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// The type returned when no rule matches.
    pub fn fallback(&self) -> WorldType {
        self.fallback
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, prompt: &str) -> WorldType {
        let prompt_lower = prompt.to_lowercase();
        for rule in &self.rules {
            if let Some(keyword) = rule.first_match(&prompt_lower) {
                debug!(world_type = %rule.world_type, keyword, "prompt classified");
                return rule.world_type;
            }
        }
        debug!(world_type = %self.fallback, "no keyword matched, using fallback");
        self.fallback
    }
}

/// A classifier that always returns the same type.
#[derive(Debug, Clone, Copy)]
pub struct FixedClassifier(pub WorldType);

impl Classifier for FixedClassifier {
    fn classify(&self, _prompt: &str) -> WorldType {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(prompt: &str) -> WorldType {
        KeywordClassifier::default().classify(prompt)
    }

    #[test]
    fn fantasy_keywords() {
        assert_eq!(classify("a dragon's lair"), WorldType::Fantasy);
        assert_eq!(classify("The Wizard tower"), WorldType::Fantasy);
    }

    #[test]
    fn sci_fi_keywords() {
        assert_eq!(classify("an alien planet"), WorldType::SciFi);
        assert_eq!(classify("deep SPACE outpost"), WorldType::SciFi);
        assert_eq!(classify("a sci-fi colony"), WorldType::SciFi);
    }

    #[test]
    fn lower_precedence_rules() {
        assert_eq!(classify("a busy street"), WorldType::Urban);
        assert_eq!(classify("misty mountain pass"), WorldType::Nature);
        assert_eq!(classify("a vintage diner"), WorldType::Historical);
    }

    #[test]
    fn no_match_falls_back_to_realistic() {
        assert_eq!(classify("a quiet kitchen table"), WorldType::Realistic);
        assert_eq!(classify(""), WorldType::Realistic);
    }

    #[test]
    fn earlier_rule_wins_over_later() {
        assert_eq!(classify("magic city"), WorldType::Fantasy);
        assert_eq!(classify("a castle in the city"), WorldType::Fantasy);
        assert_eq!(classify("robot city"), WorldType::SciFi);
        assert_eq!(classify("ancient forest"), WorldType::Nature);
    }

    #[test]
    fn keywords_match_as_substrings() {
        assert_eq!(classify("A magical forest"), WorldType::Fantasy);
        assert_eq!(classify("futuristic skyline"), WorldType::SciFi);
    }

    #[test]
    fn custom_rules_and_fallback() {
        let classifier = KeywordClassifier::new(
            vec![KeywordRule::new(WorldType::Surreal, &["Dream"])],
            WorldType::Space,
        );
        assert_eq!(classifier.classify("a dreamscape"), WorldType::Surreal);
        assert_eq!(classifier.classify("a kitchen"), WorldType::Space);
        assert_eq!(classifier.fallback(), WorldType::Space);
    }

    #[test]
    fn fixed_classifier_ignores_prompt() {
        assert_eq!(
            FixedClassifier(WorldType::Space).classify("a dragon"),
            WorldType::Space
        );
    }
}
