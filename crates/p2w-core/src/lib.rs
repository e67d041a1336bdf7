//! Core types for Prompt2World: world types, prefab instances, and blueprints.
//!
//! This crate defines the data model that the generator produces. It holds no
//! generation logic. A [`WorldBlueprint`] can be built programmatically or
//! deserialized from JSON.

/// Request and response envelopes exchanged with callers.
pub mod api;
/// The world blueprint aggregate and its identifier.
pub mod blueprint;
/// Error types used throughout the workspace.
pub mod error;
/// Positions, scales, and rotations.
pub mod geometry;
/// Placed prefab instances and their property values.
pub mod prefab;
/// The closed set of world categories.
pub mod world_type;

/// Re-export request and response envelopes.
pub use api::{ErrorResponse, PromptRequest, PromptResponse};
/// Re-export blueprint types.
pub use blueprint::{BlueprintId, WorldBlueprint};
/// Re-export error types.
pub use error::{GenerationError, GenerationResult};
/// Re-export geometry types.
pub use geometry::{Quaternion, Vector3};
/// Re-export prefab types.
pub use prefab::{InstanceId, PrefabInstance, PrefabType, Properties, PropertyValue};
/// Re-export the world category enum.
pub use world_type::WorldType;
