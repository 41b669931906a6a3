// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{Parser, ValueEnum};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "gh-trending",
    version = "0.1.0",
    about = "Scrape GitHub's trending page and export it as CSV or JSON",
    long_about = "gh-trending fetches GitHub's trending page, extracts the repository \
                  listings (name, developer, description, language, stars, forks, stars \
                  gained in the window, URL) and writes them to a CSV or JSON file."
)]
pub struct Cli {
    /// Time window for the trending ranking
    ///
    /// Maps to the `since` query parameter on github.com/trending
    #[arg(long, value_enum, default_value = "daily")]
    pub period: Period,

    /// Programming language filter, e.g. rust, python, c++
    ///
    /// When omitted, the unfiltered trending page is requested
    #[arg(long)]
    pub language: Option<String>,

    /// Output file path
    ///
    /// Defaults to github_trending.csv or github_trending.json depending
    /// on --format. A path missing the format's extension gets it appended.
    #[arg(long)]
    pub output: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: OutputFormat,
}

// The three windows GitHub's trending page understands
//
// ValueEnum lets clap accept the lowercase names on the command line
// (--period weekly) and reject anything else with a helpful message
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// The value GitHub expects in the `since` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// File extension (without the dot) for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}
