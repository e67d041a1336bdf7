use std::path::Path;

use p2w_core::BlueprintId;
use p2w_generator::{BlueprintStore, JsonDirStore};

use crate::OutputFormat;

pub fn run(dir: &Path, id: &str, format: OutputFormat) -> Result<(), String> {
    let id = BlueprintId::parse(id).ok_or_else(|| format!("invalid blueprint id: \"{id}\""))?;
    let blueprint = JsonDirStore::new(dir).load(id).map_err(|e| e.to_string())?;
    super::print_blueprint(&blueprint, format)
}
