//! Analyze command - extract product data from a single recognized-text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use etichetta_core::models::label::parse_labels;
use etichetta_core::{
    AnalysisResult, EtichettaConfig, Label, LabelAnalyzer, ProductAnalyzer, Verdict,
};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input file containing recognized label text
    #[arg(required = true)]
    input: PathBuf,

    /// JSON file with vision labels: [{"name": ..., "score": ...}]
    #[arg(short, long)]
    labels: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show confidence scores and timing
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Analyzing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let labels = match &args.labels {
        Some(path) => read_labels(path)?,
        None => Vec::new(),
    };

    let analyzer = ProductAnalyzer::from_config(&config.extraction);
    let result = analyzer.analyze(&text, &labels);

    if !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_result(&result, &config, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        let record = &result.record;
        println!();
        println!(
            "{} Italian-origin confidence: {:.1}%",
            style("ℹ").blue(),
            record.confidence_score * 100.0
        );
        println!(
            "{} Authenticity confidence: {:.1}%",
            style("ℹ").blue(),
            record.authenticity_confidence() * 100.0
        );
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    debug!("Analysis finished in {}ms", result.processing_time_ms);

    Ok(())
}

/// Load the pipeline configuration, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<EtichettaConfig> {
    match config_path {
        Some(path) => Ok(EtichettaConfig::from_file(std::path::Path::new(path))?),
        None => Ok(EtichettaConfig::default()),
    }
}

/// Read and decode a labels JSON file.
pub fn read_labels(path: &PathBuf) -> anyhow::Result<Vec<Label>> {
    let json = fs::read_to_string(path)?;
    Ok(parse_labels(&json)?)
}

/// Final verdict for display. A banned-substance hit overrides the score
/// bands: such a product is presented as counterfeit regardless of how
/// complete its label data is.
pub fn verdict_for(result: &AnalysisResult, config: &EtichettaConfig) -> Verdict {
    if result.record.contains_banned_substances {
        Verdict::Counterfeit
    } else {
        Verdict::from_score(result.record.authenticity_confidence(), &config.scoring)
    }
}

/// Render an analysis result in the requested output format.
pub fn format_result(
    result: &AnalysisResult,
    config: &EtichettaConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let record = &result.record;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record([
                "id",
                "name",
                "manufacturer",
                "production_location",
                "production_date",
                "serial_number",
                "certifications",
                "confidence_score",
                "verdict",
                "banned_substances",
            ])?;

            let certifications = record
                .certifications
                .iter()
                .map(|c| c.code())
                .collect::<Vec<_>>()
                .join(";");
            let banned = record.banned_substances_found.join(";");
            let confidence = format!("{:.3}", record.confidence_score);
            let verdict = verdict_for(result, config).to_string();

            writer.write_record([
                record.id.as_str(),
                record.name.as_str(),
                record.manufacturer.as_str(),
                record.production_location.as_str(),
                record.production_date.as_str(),
                record.serial_number.as_str(),
                certifications.as_str(),
                confidence.as_str(),
                verdict.as_str(),
                banned.as_str(),
            ])?;

            let data = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("flushing csv output: {e}"))?;
            Ok(String::from_utf8(data)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            let verdict = verdict_for(result, config);

            out.push_str(&format!("Verdict: {}\n", verdict));

            if record.contains_banned_substances {
                out.push_str("Contains substances not allowed in Italian/EU products:\n");
                for substance in &record.banned_substances_found {
                    out.push_str(&format!("  • {}\n", substance));
                }
            }

            out.push_str(&format!("Name: {}\n", record.name));
            out.push_str(&format!("Manufacturer: {}\n", record.manufacturer));
            if !record.certifications.is_empty() {
                let certs = record
                    .certifications
                    .iter()
                    .map(|c| c.code())
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!("Certifications: {}\n", certs));
            }
            out.push_str(&format!("Origin: {}\n", record.production_location));
            out.push_str(&format!("Production date: {}\n", record.production_date));
            out.push_str(&format!("Serial number: {}\n", record.serial_number));
            out.push_str(&format!(
                "Italian-origin confidence: {:.2}\n",
                record.confidence_score
            ));
            out.push_str(&format!(
                "Authenticity confidence: {:.2}\n",
                record.authenticity_confidence()
            ));

            Ok(out)
        }
    }
}
