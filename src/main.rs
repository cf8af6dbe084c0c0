use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use steply_autocomplete::app::{Demo, Runtime};
use steply_autocomplete::config::{ComponentOptions, Settings};
use steply_autocomplete::search::Catalog;
use steply_autocomplete::terminal::Terminal;
use tracing_subscriber::EnvFilter;

const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Cameroon", "Canada", "Chad",
    "Chile", "China", "Colombia", "Croatia", "Denmark", "Ecuador", "Egypt", "Finland", "France",
    "Germany", "Ghana", "Greece", "Iceland", "India", "Ireland", "Italy", "Japan", "Kenya",
    "Mexico", "Morocco", "Netherlands", "New Zealand", "Norway", "Peru", "Poland", "Portugal",
    "Senegal", "Spain", "Sweden", "Switzerland", "Tunisia", "Uruguay",
];

/// Search-and-select autocomplete running in the terminal.
#[derive(Parser)]
#[command(name = "steply-autocomplete")]
#[command(version)]
#[command(about = "Search-and-select autocomplete demo", long_about = None)]
struct Cli {
    /// Settings file (.yaml, .yml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Labels to search, one per line (defaults to a list of countries)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Collect several selections as chips
    #[arg(long)]
    multi: bool,

    /// Empty the field on blur instead of restoring the last selection
    #[arg(long)]
    no_sync: bool,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &cli.log {
        init_tracing(File::create(path)?);
    }

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::from_labels(COUNTRIES.iter().copied()),
    };

    let mut options = settings.component_options(steply_autocomplete::app::demo::COMPONENT);
    if cli.multi {
        options = ComponentOptions {
            disabled: options.disabled,
            ..ComponentOptions::multi()
        };
    }
    if cli.no_sync {
        options.sync = false;
    }
    tracing::info!(entries = catalog.len(), ?options, "starting demo");

    let demo = Demo::new(settings, catalog, options);
    let mut runtime = Runtime::new(demo, Terminal::new()?);
    runtime.run()?;
    Ok(())
}

fn init_tracing(file: File) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
