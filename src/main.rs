//! Punctuation Analyzer CLI
//!
//! Command-line front end for the punctuation analysis service:
//! - Analyze a CSV file and print its punctuation counts
//! - List the known categories
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use punctuation_analyzer::analysis::{Category, Palette};
use punctuation_analyzer::client::{AnalysisClient, UploadFile};
use punctuation_analyzer::config::{generate_default_config, Config, LoggingConfig, OutputFormat};
use punctuation_analyzer::render::{self, AnalysisReport};
use punctuation_analyzer::view::{Notice, Notifier, UploadAnalyzeView, UploadOutcome};

#[derive(Parser)]
#[command(name = "punctuation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count punctuation marks in a CSV file using the punctuation analysis service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/punctuation/config.toml, then ./punctuation.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a CSV file and show its punctuation counts
    Analyze {
        /// Path to the CSV file
        path: PathBuf,
        /// Analysis endpoint URL (overrides config)
        #[arg(long)]
        endpoint: Option<String>,
        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Skip the bar chart in table output
        #[arg(long)]
        no_chart: bool,
    },

    /// List punctuation categories with their labels and chart colors
    Categories,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Prints notices to stderr, the terminal's blocking notification
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice.message());
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging);

    match cli.command {
        Commands::Analyze {
            path,
            endpoint,
            format,
            no_chart,
        } => {
            let mut config = config;
            if let Some(url) = endpoint {
                config.analyzer.endpoint_url = url;
                config.validate()?;
            }
            if let Some(format) = format {
                config.output.format = format;
            }
            if no_chart {
                config.output.chart = false;
            }
            analyze(&path, &config).await
        }

        Commands::Categories => {
            print_categories(&config.analyzer.palette);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{content}"),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn analyze(path: &Path, config: &Config) -> anyhow::Result<ExitCode> {
    let file = UploadFile::from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if !file.has_csv_extension() {
        tracing::warn!(file = %file.file_name, "File does not have a .csv extension, uploading anyway");
    }
    let file_name = file.file_name.clone();

    let client = AnalysisClient::new(config.analyzer.client_config())?;
    let mut view = UploadAnalyzeView::with_palette(
        client,
        StderrNotifier,
        config.analyzer.palette.clone(),
    );

    view.select_file(file);
    let counts = match view.upload_and_analyze().await {
        UploadOutcome::Analyzed(counts) => counts,
        UploadOutcome::Notified(_) | UploadOutcome::Ignored => return Ok(ExitCode::FAILURE),
    };

    let chart = view.chart_config();
    match config.output.format {
        OutputFormat::Table => {
            print!("{}", render::render_table(&counts));
            if config.output.chart {
                println!();
                print!("{}", render::render_chart(&chart));
            }
        }
        OutputFormat::Json => {
            let report = AnalysisReport::new(file_name, counts, &chart);
            println!("{}", render::render_json(&report)?);
        }
        OutputFormat::Csv => print!("{}", render::render_csv(&counts)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_categories(palette: &Palette) {
    println!("{:<25} {:<25} {}", "KEY", "LABEL", "COLOR");
    for category in Category::ALL {
        println!(
            "{:<25} {:<25} {}",
            category.key(),
            category.label(),
            palette.color(category)
        );
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("punctuation_analyzer={}", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
