//! Top-level CLI definition, dispatch, and terminal report rendering.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::config::AnalyzerConfig;
use crate::core::errors::{RaaError, Result};
use crate::scorer::{AnalysisResult, ReviewScorer};

/// Review Authenticity Analyzer — heuristic real-vs-fake review scoring.
#[derive(Parser)]
#[command(name = "raa", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Collect reviews for a product URL and score their authenticity.
    Analyze {
        /// Product page URL (Amazon, Best Buy, and Walmart hosts are
        /// recognized; any URL works).
        url: String,
        /// How many reviews to analyze (10-100).
        #[arg(long, value_parser = clap::value_parser!(u32).range(10..=100))]
        min_reviews: Option<u32>,
        /// Confidence threshold for the fake classification (0.50-0.95).
        #[arg(long)]
        threshold: Option<f64>,
        /// Seed for reproducible runs; omitted means OS entropy.
        #[arg(long)]
        seed: Option<u64>,
        /// Where to write the detailed CSV results.
        #[arg(long)]
        export: Option<PathBuf>,
        /// Emit the full analysis result as JSON instead of the report.
        #[arg(long)]
        json: bool,
        /// Path to a TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the ordered suspicious-phrase pattern table.
    Patterns,
    /// Show the effective configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// `config` subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML.
    Show {
        /// Path to a TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Dispatch CLI commands.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Analyze {
            url,
            min_reviews,
            threshold,
            seed,
            export,
            json,
            config,
        } => {
            let mut effective = AnalyzerConfig::load_or_default(config.as_deref())?;
            if let Some(min_reviews) = min_reviews {
                effective.analysis.min_reviews = *min_reviews;
            }
            if let Some(threshold) = threshold {
                effective.analysis.threshold = *threshold;
            }
            effective.validate()?;
            analyze_command(url, &effective, *seed, export.as_deref(), *json)
        }
        Command::Patterns => {
            patterns_command()?;
            Ok(())
        }
        Command::Config {
            command: ConfigCommand::Show { config },
        } => {
            let effective = AnalyzerConfig::load_or_default(config.as_deref())?;
            println!("{}", effective.to_toml()?);
            Ok(())
        }
        Command::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "raa", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn analyze_command(
    url: &str,
    config: &AnalyzerConfig,
    seed: Option<u64>,
    export: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let result = crate::analyze(
        url,
        config.analysis.min_reviews.try_into().unwrap_or(usize::MAX),
        config.analysis.threshold,
        &mut rng,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    render_report(&result);

    let export_path = export
        .map_or_else(|| PathBuf::from(&config.export.filename), Path::to_path_buf);
    write_export(&export_path, &result.export_csv)?;
    println!(
        "\nDetailed results written to {}",
        export_path.display().to_string().bold()
    );
    Ok(())
}

fn patterns_command() -> Result<()> {
    let scorer = ReviewScorer::new()?;
    println!("{}", "Suspicious-phrase patterns (evaluation order)".bold());
    for (index, (pattern, label)) in scorer.patterns().entries().enumerate() {
        println!("  {}. {:<35} {}", index + 1, pattern, label.yellow());
    }
    Ok(())
}

fn write_export(path: &Path, csv: &str) -> Result<()> {
    let mut file = std::fs::File::create(path).map_err(|source| RaaError::io(path, source))?;
    file.write_all(csv.as_bytes())
        .map_err(|source| RaaError::io(path, source))
}

// ──────────────────── report rendering ────────────────────

/// Gauge bands, matching the dashboard: <30 mostly fake, <70 mixed,
/// otherwise mostly real.
const MIXED_BAND: u8 = 30;
const REAL_BAND: u8 = 70;
/// Characters in the gauge bar; each cell covers two percentage points.
const GAUGE_WIDTH: u8 = 50;
/// Preview rows shown in the breakdown table.
const PREVIEW_ROWS: usize = 10;
/// Preview text is truncated to this many characters.
const PREVIEW_TEXT_CHARS: usize = 100;

fn render_report(result: &AnalysisResult) {
    println!("{}", "Review Authenticity".bold());
    println!("{}", render_gauge(result.real_percentage));
    println!();

    println!("{}", "Summary".bold());
    println!(
        "  {} of reviews appear to be genuine",
        format!("{}%", result.real_percentage).green().bold()
    );
    println!(
        "  {} of reviews appear to be fake",
        format!("{}%", result.fake_percentage).red().bold()
    );
    println!();

    println!("{}", "Recommendation".bold());
    println!("  {}", recommendation(result.real_percentage));
    println!();

    println!("{}", "Review Breakdown".bold());
    println!(
        "  {:<4} {:<6} {:<13} {:<12} Review",
        "#", "Rating", "Authenticity", "Likely Fake"
    );
    for (index, analyzed) in result.reviews.iter().take(PREVIEW_ROWS).enumerate() {
        let verdict = if analyzed.is_fake {
            "fake".red()
        } else {
            "real".green()
        };
        println!(
            "  {:<4} {:<6} {:<13} {:<12} {}",
            index + 1,
            analyzed.review.rating,
            format!("{:.0}%", analyzed.authenticity_score * 100.0),
            verdict,
            truncate_chars(&analyzed.review.text, PREVIEW_TEXT_CHARS),
        );
    }
}

/// One-line gauge: a colored scale with the authentic share filled in.
fn render_gauge(real_percentage: u8) -> String {
    let filled_cells = u16::from(real_percentage) * u16::from(GAUGE_WIDTH) / 100;
    let mut bar = String::new();
    for cell in 0..GAUGE_WIDTH {
        let cell_pct = u16::from(cell) * 100 / u16::from(GAUGE_WIDTH);
        #[allow(clippy::cast_possible_truncation)]
        let band_pct = cell_pct as u8;
        let glyph = if u16::from(cell) < filled_cells {
            "\u{2588}"
        } else {
            "\u{2591}"
        };
        let colored_glyph = if band_pct < MIXED_BAND {
            glyph.red()
        } else if band_pct < REAL_BAND {
            glyph.yellow()
        } else {
            glyph.green()
        };
        bar.push_str(&colored_glyph.to_string());
    }
    format!("  [{bar}] {real_percentage}% authentic")
}

fn recommendation(real_percentage: u8) -> String {
    if real_percentage >= REAL_BAND {
        "Reviews for this product are likely trustworthy."
            .green()
            .to_string()
    } else if real_percentage >= MIXED_BAND {
        "Mixed reviews - proceed with caution and check the negative reviews."
            .yellow()
            .to_string()
    } else {
        "Reviews appear suspicious. Be cautious when considering this product."
            .red()
            .to_string()
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}
