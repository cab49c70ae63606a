use clap::Parser;
use std::io;
use std::process::ExitCode;
use todo::cli::Cli;
use todo::cli_handlers;
use todo::db::Database;
use todo::error::{Result, TodoError};
use todo::render::Palette;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(TodoError::Connect(e)) => {
            tracing::debug!(error = %e, "database connection failed");
            eprintln!("Could not connect to the database");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// The database connection lives exactly as long as this call
fn run(cli: &Cli) -> Result<()> {
    let mode = cli.mode()?;
    let db = Database::open(&cli.db)?;
    let palette = Palette::for_stdout();

    cli_handlers::dispatch(mode, &db, &mut io::stdout(), &palette)
}
