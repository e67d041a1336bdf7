//! Configuration for the generation service.

use p2w_core::blueprint::{MAX_PROMPT_CHARS, MAX_TITLE_CHARS};

use crate::synthesizer::MIN_TITLE_CHARS;

/// Number of prompt words used to build a title.
pub const TITLE_WORDS: usize = 5;

/// Configuration for a [`GenerationService`](crate::GenerationService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum accepted prompt length, in characters.
    pub max_prompt_chars: usize,
    /// Maximum generated title length, in characters.
    pub max_title_chars: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: MAX_PROMPT_CHARS,
            max_title_chars: MAX_TITLE_CHARS,
        }
    }
}

impl GeneratorConfig {
    /// Set the maximum prompt length, clamped to `1..=MAX_PROMPT_CHARS` so
    /// every accepted prompt also fits a valid blueprint.
    pub fn with_max_prompt_chars(mut self, max: usize) -> Self {
        self.max_prompt_chars = max.clamp(1, MAX_PROMPT_CHARS);
        self
    }

    /// Set the maximum title length, clamped to `MIN_TITLE_CHARS..=MAX_TITLE_CHARS`.
    pub fn with_max_title_chars(mut self, max: usize) -> Self {
        self.max_title_chars = max.clamp(MIN_TITLE_CHARS, MAX_TITLE_CHARS);
        self
    }
}
