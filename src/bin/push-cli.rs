use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use push_manifest::PushManifest;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "push-cli")]
#[command(about = "Inspect HTTP/2 push manifests", long_about = None)]
struct Cli {
    /// Path to the push manifest JSON file
    #[arg(short, long)]
    manifest: PathBuf,

    /// Directory relative manifest entries are resolved against
    #[arg(short, long)]
    base_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the manifest and report what it declares
    Check,
    /// Print preload Link header values for request paths
    Headers {
        /// Request paths to evaluate
        paths: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "push_manifest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.manifest)?;
    let document: Value = serde_json::from_str(&raw)?;
    let manifest = PushManifest::new(document, cli.base_path.as_deref())?;

    match cli.command {
        Commands::Check => {
            println!(
                "{}: {} pattern(s) compiled",
                cli.manifest.display(),
                manifest.len()
            );
        }
        Commands::Headers { paths } => {
            for path in paths {
                for value in manifest.link_headers(&path) {
                    println!("{value}");
                }
            }
        }
    }

    Ok(())
}
