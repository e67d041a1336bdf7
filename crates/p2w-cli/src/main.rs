//! CLI frontend for the Prompt2World blueprint generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "p2w",
    about = "Prompt2World: turn a text prompt into a world blueprint",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log generation steps to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// How a blueprint is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary with an instance table
    Summary,
    /// The full JSON response envelope
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a world blueprint from a prompt
    Generate {
        /// Free-text description of the world
        prompt: String,

        /// World type (inferred from the prompt when omitted)
        #[arg(short, long)]
        world_type: Option<String>,

        /// User making the request
        #[arg(short, long, default_value = "local")]
        user: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        format: OutputFormat,

        /// Save the blueprint as JSON into this directory
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show which world type a prompt would be classified as
    Classify {
        /// Free-text description of the world
        prompt: String,
    },

    /// List the available world types
    Types,

    /// Show a saved blueprint
    Show {
        /// Blueprint ID
        id: String,

        /// Directory containing saved blueprints
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        format: OutputFormat,
    },

    /// List saved blueprints
    List {
        /// Directory containing saved blueprints
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "p2w=info" } else { "p2w=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            prompt,
            world_type,
            user,
            format,
            save,
        } => commands::generate::run(&prompt, world_type, &user, format, save.as_deref()),
        Commands::Classify { prompt } => commands::classify::run(&prompt),
        Commands::Types => commands::types::run(),
        Commands::Show { id, dir, format } => commands::show::run(&dir, &id, format),
        Commands::List { dir } => commands::list::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
