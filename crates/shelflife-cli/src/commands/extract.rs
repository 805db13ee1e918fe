//! Extract command - find the expiry date in a single text file or stdin.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use shelflife_core::{ExpiryParser, ExtractionResult, OutputConfig};

use super::{build_extractor, load_config, resolve_today};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file (default: stdin, also "-")
    input: Option<PathBuf>,

    /// Reference date for past/future judgments (YYYY-MM-DD, default: today)
    #[arg(long)]
    today: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// List every ranked candidate in text output
    #[arg(long)]
    show_candidates: bool,
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

/// Envelope written for every processed input.
#[derive(Debug, Serialize)]
pub struct ExtractionReport {
    /// Source file name, absent for stdin.
    pub filename: Option<String>,
    /// Recognized text, when configured to echo it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Extraction outcome.
    pub expiry: ExtractionResult,
}

impl ExtractionReport {
    pub fn new(
        filename: Option<String>,
        text: &str,
        expiry: ExtractionResult,
        output: &OutputConfig,
    ) -> Self {
        Self {
            filename,
            text: output.include_text.then(|| text.to_string()),
            expiry,
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let today = resolve_today(args.today.as_deref())?;
    let extractor = build_extractor(&config)?;

    let (filename, text) = read_input(args.input.as_ref()).await?;
    info!("Read {} bytes of text", text.len());

    let result = extractor.parse(&text, today);
    let report = ExtractionReport::new(filename, &text, result, &config.output);

    let output = match args.format {
        OutputFormat::Json => format_json(&report, config.output.pretty_json)?,
        OutputFormat::Csv => format_csv(std::slice::from_ref(&report))?,
        OutputFormat::Text => format_text(&report, args.show_candidates),
    };

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

async fn read_input(input: Option<&PathBuf>) -> anyhow::Result<(Option<String>, String)> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            let text = tokio::fs::read_to_string(path).await?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            Ok((filename, text))
        }
        _ => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok((None, text))
        }
    }
}

/// Serialize a report as JSON.
pub fn format_json(report: &ExtractionReport, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Render reports as CSV, one row per input.
pub fn format_csv(reports: &[ExtractionReport]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["file", "expiry_date", "confidence", "raw", "score"])?;

    for report in reports {
        let picked = report.expiry.picked.as_ref();
        wtr.write_record([
            report.filename.clone().unwrap_or_default(),
            report.expiry.expiry_iso().unwrap_or_default(),
            format!("{:.3}", report.expiry.confidence),
            picked.map(|p| p.raw.clone()).unwrap_or_default(),
            picked.map(|p| p.score.to_string()).unwrap_or_default(),
        ])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// Render a human-readable summary.
pub fn format_text(report: &ExtractionReport, show_candidates: bool) -> String {
    let mut output = String::new();

    if let Some(name) = &report.filename {
        output.push_str(&format!("File: {}\n", name));
    }

    match &report.expiry.picked {
        Some(picked) => {
            output.push_str(&format!("Expiry date: {}\n", picked.parsed));
            output.push_str(&format!(
                "Confidence: {:.1}%\n",
                report.expiry.confidence * 100.0
            ));
            output.push_str(&format!("Matched: \"{}\" (score {})\n", picked.raw, picked.score));
        }
        None => output.push_str("Expiry date: not found\n"),
    }

    if show_candidates && !report.expiry.candidates.is_empty() {
        output.push_str("\nCandidates:\n");
        for (i, candidate) in report.expiry.candidates.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {}  score {:>3}  \"{}\"\n",
                i + 1,
                candidate.parsed,
                candidate.score,
                candidate.raw
            ));
        }
    }

    output.trim_end().to_string()
}
