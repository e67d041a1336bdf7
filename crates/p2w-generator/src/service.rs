//! The generation façade: validate, classify, synthesize, time.

use std::sync::Arc;
use std::time::Instant;

use p2w_core::{
    GenerationError, GenerationResult, PromptRequest, PromptResponse, WorldBlueprint, WorldType,
};
use tracing::{info, warn};

use crate::classifier::{Classifier, KeywordClassifier};
use crate::config::GeneratorConfig;
use crate::synthesizer::Synthesizer;
use crate::templates::TemplateLibrary;

/// Single entry point for turning prompts into blueprints.
///
/// Holds no per-request state. Cloning is cheap and clones share the same
/// template library and classifier.
#[derive(Clone)]
pub struct GenerationService {
    config: GeneratorConfig,
    templates: Arc<TemplateLibrary>,
    classifier: Arc<dyn Classifier>,
}

impl Default for GenerationService {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl GenerationService {
    /// Create a service with the built-in templates and keyword classifier.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            templates: Arc::new(TemplateLibrary::builtin()),
            classifier: Arc::new(KeywordClassifier::default()),
        }
    }

    /// Use a different template library.
    pub fn with_templates(mut self, templates: Arc<TemplateLibrary>) -> Self {
        self.templates = templates;
        self
    }

    /// Use a different classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// The shared template library.
    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    /// Classify a prompt without generating anything.
    pub fn classify(&self, prompt: &str) -> WorldType {
        self.classifier.classify(prompt)
    }

    /// Generate a blueprint for `prompt`.
    ///
    /// The world type is `explicit` when given, otherwise inferred from the
    /// prompt. The returned blueprint carries the synthesis time in
    /// `processing_time_ms`.
    pub fn generate(
        &self,
        prompt: &str,
        user_id: &str,
        explicit: Option<WorldType>,
    ) -> GenerationResult<WorldBlueprint> {
        if let Err(e) = self.validate_prompt(prompt) {
            warn!(user_id, error = %e, "rejected prompt");
            return Err(e);
        }

        let world_type = explicit.unwrap_or_else(|| self.classifier.classify(prompt));

        let started = Instant::now();
        let synthesized =
            Synthesizer::new(&self.templates, self.config.max_title_chars).synthesize(prompt, world_type);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let mut blueprint = synthesized?;
        blueprint.processing_time_ms = Some(elapsed_ms);

        info!(
            user_id,
            blueprint_id = %blueprint.id,
            %world_type,
            inferred = explicit.is_none(),
            processing_time_ms = elapsed_ms,
            "world blueprint generated"
        );
        Ok(blueprint)
    }

    /// Handle a request envelope. An explicit `world_type` string must name a
    /// known category; unknown names are rejected rather than coerced.
    pub fn handle(&self, request: &PromptRequest) -> GenerationResult<PromptResponse> {
        let explicit = match request.world_type.as_deref() {
            Some(name) => match name.parse::<WorldType>() {
                Ok(wt) => Some(wt),
                Err(e) => {
                    warn!(user_id = %request.user_id, world_type = name, "unknown world type");
                    return Err(e);
                }
            },
            None => None,
        };

        self.generate(&request.prompt, &request.user_id, explicit)
            .map(PromptResponse::from)
    }

    fn validate_prompt(&self, prompt: &str) -> GenerationResult<()> {
        if prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }
        let len = prompt.chars().count();
        if len > self.config.max_prompt_chars {
            return Err(GenerationError::PromptTooLong {
                len,
                max: self.config.max_prompt_chars,
            });
        }
        Ok(())
    }
}
