use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use p2w_generator::{BlueprintStore, JsonDirStore};

pub fn run(dir: &Path) -> Result<(), String> {
    let store = JsonDirStore::new(dir);
    let ids = store.list().map_err(|e| e.to_string())?;

    if ids.is_empty() {
        println!("  No blueprints found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Title", "Type", "Instances", "Created"]);

    for id in &ids {
        let blueprint = store.load(*id).map_err(|e| e.to_string())?;
        table.add_row(vec![
            id.to_string(),
            blueprint.title.clone(),
            blueprint.world_type.to_string(),
            blueprint.instance_count().to_string(),
            blueprint.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} blueprints", ids.len());

    Ok(())
}
