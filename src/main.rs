use clap::Parser;
use keycalc::application::engine::CalculatorEngine;
use keycalc::domain::calculator::replay;
use keycalc::domain::key::KeyToken;
use keycalc::domain::ports::SessionStoreBox;
use keycalc::infrastructure::in_memory::InMemorySessionStore;
use keycalc::interfaces::csv::display_writer::{DisplayWriter, OutputFormat};
use keycalc::interfaces::csv::key_reader::KeyEventReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input key events CSV file (`session, key` rows)
    #[arg(required_unless_present = "keys", conflicts_with = "keys")]
    input: Option<PathBuf>,

    /// Whitespace-separated keys for a single session, e.g. "1 . 5 + 2 ="
    #[arg(long, allow_hyphen_values = true)]
    keys: Option<String>,

    /// Output format for the final session states
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(keys) = cli.keys {
        let tokens = keys
            .split_whitespace()
            .map(str::parse::<KeyToken>)
            .collect::<Result<Vec<_>, _>>()
            .into_diagnostic()?;
        println!("{}", replay(tokens).display);
        return Ok(());
    }

    let Some(input) = cli.input else {
        return Err(miette::miette!("either an input file or --keys is required"));
    };

    let store: SessionStoreBox = Box::new(InMemorySessionStore::new());
    let engine = CalculatorEngine::new(store);

    let file = File::open(input).into_diagnostic()?;
    let reader = KeyEventReader::new(file);
    for event in reader.events() {
        match event {
            Ok(event) => {
                if let Err(e) = engine.process_key(event).await {
                    warn!("Error processing key event: {}", e);
                }
            }
            Err(e) => {
                warn!("Error reading key event: {}", e);
            }
        }
    }

    let sessions = engine.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = DisplayWriter::new(stdout.lock(), cli.format);
    writer.write_sessions(&sessions).into_diagnostic()?;

    Ok(())
}
