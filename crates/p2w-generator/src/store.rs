//! Blueprint persistence collaborators.
//!
//! The generation service never persists anything itself; callers hand a
//! finished blueprint to a [`BlueprintStore`] after a successful generate.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use p2w_core::{BlueprintId, GenerationError, WorldBlueprint};
use thiserror::Error;
use tracing::debug;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while saving or loading blueprints.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No blueprint is stored under the given ID.
    #[error("blueprint not found: {0}")]
    NotFound(BlueprintId),

    /// Reading or writing the backing storage failed.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A stored blueprint could not be encoded or decoded.
    #[error("invalid blueprint JSON in {path}: {source}")]
    Json {
        /// The file involved.
        path: PathBuf,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A blueprint breaks the structural invariants and was not stored or
    /// returned.
    #[error("blueprint {id} is invalid: {source}")]
    Invalid {
        /// The blueprint involved.
        id: BlueprintId,
        /// The violated invariant.
        source: GenerationError,
    },

    /// An in-memory store's lock was poisoned by a panicking writer.
    #[error("blueprint store lock poisoned")]
    Poisoned,
}

/// A key-value store for blueprints, keyed by blueprint ID.
pub trait BlueprintStore: Send + Sync {
    /// Store a blueprint, replacing any previous one with the same ID.
    fn save(&self, blueprint: &WorldBlueprint) -> StoreResult<()>;

    /// Load a blueprint by ID.
    fn load(&self, id: BlueprintId) -> StoreResult<WorldBlueprint>;

    /// IDs of every stored blueprint, sorted.
    fn list(&self) -> StoreResult<Vec<BlueprintId>>;
}

/// Rejects blueprints that fail [`WorldBlueprint::validate`].
fn check(blueprint: &WorldBlueprint) -> StoreResult<()> {
    blueprint.validate().map_err(|source| StoreError::Invalid {
        id: blueprint.id,
        source,
    })
}

/// Process-local store backed by a locked map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blueprints: RwLock<HashMap<BlueprintId, WorldBlueprint>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlueprintStore for MemoryStore {
    fn save(&self, blueprint: &WorldBlueprint) -> StoreResult<()> {
        check(blueprint)?;
        let mut map = self.blueprints.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(blueprint.id, blueprint.clone());
        Ok(())
    }

    fn load(&self, id: BlueprintId) -> StoreResult<WorldBlueprint> {
        let map = self.blueprints.read().map_err(|_| StoreError::Poisoned)?;
        map.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> StoreResult<Vec<BlueprintId>> {
        let map = self.blueprints.read().map_err(|_| StoreError::Poisoned)?;
        let mut ids: Vec<BlueprintId> = map.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }
}

/// Directory-backed store: one pretty-printed `<id>.json` file per blueprint.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Use `dir` as the storage directory. The directory is created on the
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding blueprint `id`.
    pub fn path_for(&self, id: BlueprintId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl BlueprintStore for JsonDirStore {
    fn save(&self, blueprint: &WorldBlueprint) -> StoreResult<()> {
        check(blueprint)?;
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(blueprint.id);
        let json = serde_json::to_string_pretty(blueprint).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(blueprint_id = %blueprint.id, path = %path.display(), "blueprint saved");
        Ok(())
    }

    fn load(&self, id: BlueprintId) -> StoreResult<WorldBlueprint> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let blueprint: WorldBlueprint = serde_json::from_str(&content)
            .map_err(|source| StoreError::Json { path, source })?;
        check(&blueprint)?;
        Ok(blueprint)
    }

    fn list(&self) -> StoreResult<Vec<BlueprintId>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| StoreError::Io {
                    path: self.dir.clone(),
                    source,
                })?
                .path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            if let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(BlueprintId::parse)
            {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}
