pub mod classify;
pub mod generate;
pub mod list;
pub mod show;
pub mod types;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use p2w_core::WorldBlueprint;
use serde::Serialize;

use crate::OutputFormat;

/// Print a blueprint in the requested format.
fn print_blueprint(blueprint: &WorldBlueprint, format: OutputFormat) -> Result<(), String> {
    match format {
        OutputFormat::Summary => {
            print_summary(blueprint);
            Ok(())
        }
        OutputFormat::Json => print_json(blueprint),
    }
}

/// Pretty-print any serializable value to stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");
    Ok(())
}

/// Print a human-readable blueprint summary.
fn print_summary(blueprint: &WorldBlueprint) {
    println!(
        "  {} [{}]",
        blueprint.title.bold(),
        blueprint.world_type.to_string().dimmed()
    );
    println!("  id: {}", blueprint.id);
    println!();
    println!("  {}", blueprint.description);
    println!();

    println!("  {}", "environment".bold());
    for (key, value) in &blueprint.environment_settings {
        println!("    {key:<14} {value}");
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Instance", "Prefab", "Type", "Position", "Properties"]);
    for inst in &blueprint.prefab_instances {
        let props: Vec<String> = inst
            .properties
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        table.add_row(vec![
            inst.id.to_string(),
            inst.prefab_id.clone(),
            inst.prefab_type.to_string(),
            inst.position.to_string(),
            props.join(", "),
        ]);
    }
    println!("{table}");
    println!();

    let spawns: Vec<String> = blueprint.spawn_points.iter().map(|p| p.to_string()).collect();
    println!("  spawn points: {}", spawns.join(" "));
    if let Some(ms) = blueprint.processing_time_ms {
        println!("  generated in {ms} ms");
    }
}
