// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch and parse the trending page (one GET, one parse, in sequence)
// 3. Export the records to CSV or JSON
// 4. Exit with proper code (0 = success, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; //      src/cli.rs      - command-line parsing
mod error; //    src/error.rs    - error taxonomy
mod export; //   src/export/     - CSV and JSON writers
mod trending; // src/trending/   - fetch + parse pipeline

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, OutputFormat};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(2);
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    let window = cli.period.as_query();
    match cli.language.as_deref() {
        Some(language) => {
            println!("🔍 Fetching GitHub {window} trending repositories ({language})...")
        }
        None => println!("🔍 Fetching GitHub {window} trending repositories..."),
    }

    let repos = trending::get_trending(cli.period, cli.language.as_deref()).await?;

    println!("📦 Extracted {} repositories", repos.len());

    let path = output_path(cli.output.as_deref(), cli.format);
    export::export(&repos, Path::new(&path), cli.format)?;

    println!("💾 Saved to {path}");
    Ok(())
}

// Resolves the output path from the --output and --format flags
//
// No --output: derive a default name from the format. An explicit path
// missing the format's extension gets it appended, so `--output repos
// --format json` lands in repos.json.
fn output_path(output: Option<&str>, format: OutputFormat) -> String {
    let extension = format.extension();
    match output {
        Some(path) if path.ends_with(&format!(".{extension}")) => path.to_string(),
        Some(path) => format!("{path}.{extension}"),
        None => format!("github_trending.{extension}"),
    }
}
