//! Config command - inspect and tune the scoring configuration.

use std::fmt::{Display, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Subcommand};
use console::style;
use tracing::debug;

use shelflife_core::ShelflifeConfig;

use super::default_config_path;

/// Keys accepted by `get` and `set`.
const KEYS: &[&str] = &[
    "scoring.expiry_keywords",
    "scoring.non_expiry_clues",
    "scoring.keyword_bonus",
    "scoring.clue_penalty",
    "scoring.past_penalty",
    "scoring.far_future_penalty",
    "scoring.far_future_years",
    "scoring.confidence_offset",
    "scoring.confidence_divisor",
    "scoring.max_candidates",
    "scoring.context_radius",
    "output.pretty_json",
    "output.include_text",
];

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the keyword tables and weights in effect
    Show {
        /// Print the raw JSON document instead
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value (e.g. "scoring.keyword_bonus")
    Get { key: String },

    /// Change one value; keyword lists take comma-separated entries
    Set { key: String, value: String },
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show { json } => show(&path, json),
        ConfigCommand::Init { force } => init(&path, force),
        ConfigCommand::Get { key } => {
            let config = load_or_default(&path)?;
            println!("{}", get_value(&config, &key)?);
            Ok(())
        }
        ConfigCommand::Set { key, value } => set(&path, &key, &value),
    }
}

fn load_or_default(path: &Path) -> anyhow::Result<ShelflifeConfig> {
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(ShelflifeConfig::from_file(path)?)
    } else {
        Ok(ShelflifeConfig::default())
    }
}

fn save(path: &Path, config: &ShelflifeConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn show(path: &Path, json: bool) -> anyhow::Result<()> {
    let config = load_or_default(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let source = if path.exists() {
        path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    println!("{} {}", style("Source:").bold(), source);
    print!("{}", render_summary(&config));

    Ok(())
}

/// Human-readable view of how candidates will be scored.
fn render_summary(config: &ShelflifeConfig) -> String {
    let s = &config.scoring;
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", style("Keywords").bold());
    let _ = writeln!(out, "  expiry      +{:<3} {}", s.keyword_bonus, s.expiry_keywords.join(", "));
    let _ = writeln!(out, "  non-expiry  -{:<3} {}", s.clue_penalty, s.non_expiry_clues.join(", "));

    let _ = writeln!(out, "\n{}", style("Date penalties").bold());
    let _ = writeln!(out, "  past date                -{}", s.past_penalty);
    let _ = writeln!(
        out,
        "  beyond {} years           -{}",
        s.far_future_years, s.far_future_penalty
    );

    let _ = writeln!(out, "\n{}", style("Ranking").bold());
    let _ = writeln!(
        out,
        "  confidence               (score + {}) / {}, clamped to [0, 1]",
        s.confidence_offset, s.confidence_divisor
    );
    let _ = writeln!(out, "  candidates kept          {}", s.max_candidates);
    let _ = writeln!(out, "  context radius           {} chars", s.context_radius);

    let _ = writeln!(out, "\n{}", style("Output").bold());
    let _ = writeln!(out, "  pretty_json              {}", config.output.pretty_json);
    let _ = writeln!(out, "  include_text             {}", config.output.include_text);

    out
}

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    save(path, &ShelflifeConfig::default())?;
    println!(
        "{} Wrote default configuration to {}",
        style("✓").green(),
        path.display()
    );

    Ok(())
}

fn set(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = load_or_default(path)?;
    set_value(&mut config, key, value)?;
    config.scoring.validate()?;
    save(path, &config)?;

    println!(
        "{} {} = {}",
        style("✓").green(),
        key,
        get_value(&config, key)?
    );

    Ok(())
}

fn get_value(config: &ShelflifeConfig, key: &str) -> anyhow::Result<String> {
    let s = &config.scoring;
    let value = match key {
        "scoring.expiry_keywords" => s.expiry_keywords.join(","),
        "scoring.non_expiry_clues" => s.non_expiry_clues.join(","),
        "scoring.keyword_bonus" => s.keyword_bonus.to_string(),
        "scoring.clue_penalty" => s.clue_penalty.to_string(),
        "scoring.past_penalty" => s.past_penalty.to_string(),
        "scoring.far_future_penalty" => s.far_future_penalty.to_string(),
        "scoring.far_future_years" => s.far_future_years.to_string(),
        "scoring.confidence_offset" => s.confidence_offset.to_string(),
        "scoring.confidence_divisor" => s.confidence_divisor.to_string(),
        "scoring.max_candidates" => s.max_candidates.to_string(),
        "scoring.context_radius" => s.context_radius.to_string(),
        "output.pretty_json" => config.output.pretty_json.to_string(),
        "output.include_text" => config.output.include_text.to_string(),
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}

fn set_value(config: &mut ShelflifeConfig, key: &str, value: &str) -> anyhow::Result<()> {
    let s = &mut config.scoring;
    match key {
        "scoring.expiry_keywords" => s.expiry_keywords = parse_list(value),
        "scoring.non_expiry_clues" => s.non_expiry_clues = parse_list(value),
        "scoring.keyword_bonus" => s.keyword_bonus = parse_value(key, value)?,
        "scoring.clue_penalty" => s.clue_penalty = parse_value(key, value)?,
        "scoring.past_penalty" => s.past_penalty = parse_value(key, value)?,
        "scoring.far_future_penalty" => s.far_future_penalty = parse_value(key, value)?,
        "scoring.far_future_years" => s.far_future_years = parse_value(key, value)?,
        "scoring.confidence_offset" => s.confidence_offset = parse_value(key, value)?,
        "scoring.confidence_divisor" => s.confidence_divisor = parse_value(key, value)?,
        "scoring.max_candidates" => s.max_candidates = parse_value(key, value)?,
        "scoring.context_radius" => s.context_radius = parse_value(key, value)?,
        "output.pretty_json" => config.output.pretty_json = parse_value(key, value)?,
        "output.include_text" => config.output.include_text = parse_value(key, value)?,
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn parse_value<T>(key: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid value {:?} for {}: {}", value, key, e))
}

/// Split a comma-separated keyword list; entries are matched against
/// uppercased text, so they are stored uppercased.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "unknown configuration key {:?} (expected one of: {})",
        key,
        KEYS.join(", ")
    )
}
