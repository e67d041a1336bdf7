use comfy_table::{ContentArrangement, Table};
use p2w_core::WorldType;
use p2w_generator::{KeywordClassifier, TemplateLibrary};

pub fn run() -> Result<(), String> {
    let templates = TemplateLibrary::builtin();
    let classifier = KeywordClassifier::default();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Type", "Keywords", "Prefabs", "Description"]);

    for wt in WorldType::ALL {
        let keywords = match classifier.rules().iter().find(|r| r.world_type == wt) {
            Some(rule) => rule.keywords.join(", "),
            None if wt == classifier.fallback() => "(fallback)".to_string(),
            None => String::new(),
        };
        let prefabs: Vec<&str> = templates
            .default_instances_for(wt)
            .iter()
            .map(|t| t.prefab_id.as_str())
            .collect();
        table.add_row(vec![
            wt.to_string(),
            keywords,
            prefabs.join(", "),
            templates.description_fragment_for(wt).to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
