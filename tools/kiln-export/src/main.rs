//! kiln-export - scene to binary model converter
//!
//! Converts a parsed scene description (JSON interchange document) into a
//! single compact `.kmodel` container: a length-prefixed JSON metadata
//! header followed by tightly packed big-endian vertex, index, and
//! keyframe data.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use kiln_common::MODEL_EXTENSION;
use kiln_export::Overrides;

#[derive(Parser)]
#[command(name = "kiln-export")]
#[command(about = "Kiln asset export tool")]
#[command(version)]
struct Cli {
    /// Input scene document
    input: PathBuf,

    /// Export flags: skip-binary, sub-anim
    #[arg(value_name = "FLAG")]
    flags: Vec<String>,

    /// Output .kmodel file (defaults to the input path with the model
    /// extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(MODEL_EXTENSION));

    if cli.verbose {
        tracing::info!("Converting {:?} -> {:?}", cli.input, output);
    }
    kiln_export::convert_scene(&cli.input, &output, &cli.flags, Overrides::default())?;
    tracing::info!("Done!");

    Ok(())
}
