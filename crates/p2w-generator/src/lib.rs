//! Prompt-to-world generation for Prompt2World.
//!
//! The pipeline is: [`GenerationService`] validates the prompt, resolves a
//! world type (explicitly or through a [`Classifier`]), and drives the
//! [`Synthesizer`], which reads from an immutable [`TemplateLibrary`].
//!
//! ```
//! use p2w_core::WorldType;
//! use p2w_generator::GenerationService;
//!
//! let service = GenerationService::default();
//! let blueprint = service
//!     .generate("A wizard's tower above the clouds", "user-1", None)
//!     .unwrap();
//! assert_eq!(blueprint.world_type, WorldType::Fantasy);
//! assert_eq!(blueprint.prefab_instances.len(), 2);
//! ```

/// Prompt classification into world types.
pub mod classifier;
/// Service configuration.
pub mod config;
/// The generation façade.
pub mod service;
/// Blueprint persistence collaborators.
pub mod store;
/// Blueprint synthesis from templates.
pub mod synthesizer;
/// Per-category template data.
pub mod templates;

pub use classifier::{Classifier, FixedClassifier, KeywordClassifier, KeywordRule};
pub use config::GeneratorConfig;
pub use service::GenerationService;
pub use store::{BlueprintStore, JsonDirStore, MemoryStore, StoreError, StoreResult};
pub use synthesizer::Synthesizer;
pub use templates::{InstanceTemplate, TemplateLibrary, WorldTemplate};
