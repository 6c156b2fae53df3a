//! Batch command - analyze multiple recognized-text files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use etichetta_core::{LabelAnalyzer, ProductAnalyzer};

use super::analyze::{format_result, load_config, read_labels, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for input text files, e.g. "scans/*.txt"
    #[arg(required = true)]
    pattern: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let inputs: Vec<PathBuf> = glob::glob(&args.pattern)?
        .filter_map(|entry| entry.ok())
        .collect();

    if inputs.is_empty() {
        anyhow::bail!("No files match pattern: {}", args.pattern);
    }

    fs::create_dir_all(&args.output_dir)?;

    info!("Batch analyzing {} files", inputs.len());

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let analyzer = ProductAnalyzer::from_config(&config.extraction);
    let mut failures = 0usize;

    for input in &inputs {
        pb.set_message(input.display().to_string());

        if let Err(e) = analyze_one(&analyzer, input, &args, &config) {
            warn!("{}: {}", input.display(), e);
            failures += 1;
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let succeeded = inputs.len() - failures;
    println!(
        "{} Analyzed {} file(s), {} failure(s)",
        style("✓").green(),
        succeeded,
        failures
    );

    if failures > 0 {
        anyhow::bail!("{} file(s) failed", failures);
    }

    Ok(())
}

fn analyze_one(
    analyzer: &ProductAnalyzer,
    input: &Path,
    args: &BatchArgs,
    config: &etichetta_core::EtichettaConfig,
) -> anyhow::Result<()> {
    let text = fs::read_to_string(input)?;

    // A sibling "<stem>.labels.json" file supplies vision labels when present.
    let labels_path = input.with_extension("labels.json");
    let labels = if labels_path.exists() {
        read_labels(&labels_path)?
    } else {
        Vec::new()
    };

    let result = analyzer.analyze(&text, &labels);
    let output = format_result(&result, config, args.format)?;

    let extension = match args.format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    };

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("result");
    let output_path = args.output_dir.join(format!("{stem}.{extension}"));
    fs::write(output_path, output)?;

    Ok(())
}
