// Land estimate command line entry point
//
// Usage: land-estimate quote --region urban --acres 0.5 --zoning 1.3
//        land-estimate wizard

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use land_value_estimator::export::{Clipboard, Notifier};
use land_value_estimator::summary::{project_with_breakdown, JsonFormatter, MarkdownFormatter};
use land_value_estimator::wizard::{apply_command, render_progress, CommandEffect, WizardCommand};
use land_value_estimator::{
    share_summary, share_text, EstimatorConfig, ExportRecord, FactorKind, Factors, Inputs, Region,
    ShareError, Summary, WizardStateMachine, WizardStep,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "land-estimate", version, about = "Land value estimator")]
struct Cli {
    #[arg(long, global = true, help = "Load settings from a JSON config file")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute and print an estimate
    Quote {
        #[command(flatten)]
        parcel: ParcelArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(long, default_value_t = false, help = "Include every intermediate term")]
        breakdown: bool,
    },
    /// Print shareable text (copied to stdout, no native share in a terminal)
    Share {
        #[command(flatten)]
        parcel: ParcelArgs,
        #[arg(long, help = "Referring URL appended to the text")]
        url: Option<String>,
    },
    /// Write the estimate as a JSON download record
    Export {
        #[command(flatten)]
        parcel: ParcelArgs,
        #[arg(long, help = "Directory to write into")]
        out: Option<PathBuf>,
    },
    /// Interactive step-by-step session on stdin
    Wizard,
}

#[derive(Args, Debug, Clone)]
struct ParcelArgs {
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value = "suburban")]
    region: String,
    #[arg(long, default_value_t = Inputs::DEFAULT_ACRES)]
    acres: f64,
    #[arg(long, default_value_t = Factors::NEUTRAL)]
    soil: f64,
    #[arg(long, default_value_t = Factors::NEUTRAL)]
    access: f64,
    #[arg(long, default_value_t = Factors::NEUTRAL)]
    utilities: f64,
    #[arg(long, default_value_t = Factors::NEUTRAL)]
    zoning: f64,
}

impl ParcelArgs {
    fn to_state(&self) -> (Inputs, Factors) {
        let inputs = Inputs::new(
            self.location.clone(),
            Region::from_label(&self.region),
            self.acres,
        );

        let mut factors = Factors::default();
        factors.set(FactorKind::Soil, self.soil);
        factors.set(FactorKind::Access, self.access);
        factors.set(FactorKind::Utilities, self.utilities);
        factors.set(FactorKind::Zoning, self.zoning);

        (inputs, factors)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

/// Stands in for the system clipboard: the text goes to stdout
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text).map_err(|e| ShareError::ClipboardDenied(e.to_string()))
    }
}

/// Share notifications go to the log (stderr under the default filter)
struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "land_value_estimator=info,land_estimate=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EstimatorConfig::load(path)?,
        None => EstimatorConfig::default(),
    }
    .with_env_overrides()?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Quote {
            parcel,
            format,
            breakdown,
        } => {
            let (inputs, factors) = parcel.to_state();
            print_quote(&inputs, &factors, format, breakdown)?;
        }
        Commands::Share { parcel, url } => {
            let (inputs, factors) = parcel.to_state();
            let summary = land_value_estimator::project(&inputs, &factors);
            let url = url.unwrap_or_else(|| config.share_url.clone());
            share(&summary, &url);
        }
        Commands::Export { parcel, out } => {
            let (inputs, factors) = parcel.to_state();
            let summary = land_value_estimator::project(&inputs, &factors);
            let dir = out.unwrap_or_else(|| config.export_dir.clone());
            let path = export(&inputs, &summary, &dir, &config.export_file_name)?;
            println!("{}", path.display());
        }
        Commands::Wizard => run_wizard(&config)?,
    }

    Ok(())
}

fn print_quote(inputs: &Inputs, factors: &Factors, format: OutputFormat, breakdown: bool) -> Result<()> {
    let (summary, terms) = project_with_breakdown(inputs, factors);

    match format {
        OutputFormat::Text => {
            println!("{}", share_text(&summary));
            println!("Confidence: {}%", summary.confidence_pct());
            println!("Baseline per acre: ${}", summary.baseline_display());
            if breakdown {
                println!(
                    "Scale: {:.4}  Multiplier: {:.4}  Factor distance: {:.2}  Size penalty: {:.2}",
                    terms.scale, terms.multiplier, terms.factor_distance, terms.size_penalty
                );
            }
        }
        OutputFormat::Json => {
            let json = if breakdown {
                serde_json::to_string_pretty(&serde_json::json!({
                    "summary": summary,
                    "breakdown": terms,
                }))
            } else {
                JsonFormatter::format(&summary)
            }
            .with_context(|| "Failed to serialize summary")?;
            println!("{}", json);
        }
        OutputFormat::Markdown => {
            let md = if breakdown {
                MarkdownFormatter::format_with_breakdown(&summary, &terms)
            } else {
                MarkdownFormatter::format(&summary)
            };
            print!("{}", md);
        }
    }

    Ok(())
}

fn share(summary: &Summary, url: &str) {
    // No share sheet in a terminal, so this always takes the clipboard path
    let outcome = share_summary(summary, url, None, &StdoutClipboard, &LogNotifier);
    tracing::debug!(?outcome, "Share finished");
}

fn export(inputs: &Inputs, summary: &Summary, dir: &Path, file_name: &str) -> Result<PathBuf> {
    ExportRecord::new(inputs, summary).write_to(dir, file_name)
}

fn prompt_for(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Intro => "Just a few inputs and you'll get an estimated value for your land. Type 'next' to start.",
        WizardStep::Location => "Where is your land and how large is it? (location <text>, region <urban|suburban|rural>, acres <n>, +, -, next)",
        WizardStep::Factors => "Fine-tune factors (soil|access|utilities|zoning <value>, next to see the estimate)",
        WizardStep::Result => "Your estimate is ready (show, share, export [dir], back, reset, quit)",
    }
}

fn run_wizard(config: &EstimatorConfig) -> Result<()> {
    let mut wizard = WizardStateMachine::new();
    let stdin = io::stdin();

    println!("{}", render_progress(wizard.step()));
    println!("{}", prompt_for(wizard.step()));

    for line in stdin.lock().lines() {
        let line = line.with_context(|| "Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match WizardCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let before = wizard.step();
        match apply_command(&mut wizard, &command) {
            CommandEffect::Applied => {
                if wizard.step() != before {
                    println!("{}", render_progress(wizard.step()));
                    println!("{}", prompt_for(wizard.step()));
                }
                if wizard.step() == WizardStep::Result {
                    print!("{}", MarkdownFormatter::format(&wizard.summary()));
                } else if before == wizard.step() && before != WizardStep::Intro {
                    println!("Preview: {}", share_text(&wizard.preview()).replace('\n', " | "));
                }
            }
            CommandEffect::Ignored => {
                println!("'{}' does nothing on the {} step", line.trim(), wizard.step());
            }
            CommandEffect::Passthrough => match command {
                WizardCommand::Quit => break,
                WizardCommand::Show => print!("{}", MarkdownFormatter::format(&wizard.preview())),
                WizardCommand::Share => share(&wizard.summary(), &config.share_url),
                WizardCommand::Export(dir) => {
                    let dir = dir.unwrap_or_else(|| config.export_dir.clone());
                    match export(wizard.inputs(), &wizard.summary(), &dir, &config.export_file_name) {
                        Ok(path) => println!("Saved {}", path.display()),
                        Err(e) => {
                            tracing::warn!("Export failed: {:#}", e);
                            println!("Could not save the estimate to {}", dir.display());
                        }
                    }
                }
                _ => {}
            },
        }
    }

    Ok(())
}
