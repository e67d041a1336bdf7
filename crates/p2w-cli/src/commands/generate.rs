use std::path::Path;

use colored::Colorize;
use p2w_core::{ErrorResponse, PromptRequest};
use p2w_generator::{BlueprintStore, GenerationService, JsonDirStore};
use tracing::error;

use crate::OutputFormat;

pub fn run(
    prompt: &str,
    world_type: Option<String>,
    user: &str,
    format: OutputFormat,
    save: Option<&Path>,
) -> Result<(), String> {
    let mut request = PromptRequest::new(prompt, user);
    request.world_type = world_type;

    let service = GenerationService::default();
    let response = match service.handle(&request) {
        Ok(response) => response,
        Err(e) => {
            if !e.is_client_error() {
                error!(error = %e, "generation defect");
            }
            if format == OutputFormat::Json {
                super::print_json(&ErrorResponse::from(&e))?;
            }
            return Err(e.to_string());
        }
    };

    let Some(blueprint) = response.world_blueprint.as_ref() else {
        return Err("generation returned no blueprint".into());
    };

    if let Some(dir) = save {
        let store = JsonDirStore::new(dir);
        store.save(blueprint).map_err(|e| e.to_string())?;
        eprintln!(
            "  {} {}",
            "Saved".green(),
            store.path_for(blueprint.id).display()
        );
    }

    match format {
        OutputFormat::Summary => super::print_blueprint(blueprint, format),
        OutputFormat::Json => super::print_json(&response),
    }
}
