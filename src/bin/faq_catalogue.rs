//! `faq-catalogue`: seed or report the company FAQ database.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tool_exchange::faq::{DEFAULT_DB_PATH, FAQ_SEED, FaqCatalogue, FaqError, render_report};
use tool_exchange::telemetry;

#[derive(Parser)]
#[command(author, version, about = "Company FAQ SQLite catalogue")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recreate the database file with the built-in FAQ records
    Seed {
        #[arg(long, default_value = DEFAULT_DB_PATH)]
        db: PathBuf,
    },
    /// Print record counts and every record
    Report {
        #[arg(long, default_value = DEFAULT_DB_PATH)]
        db: PathBuf,
    },
}

fn run(command: Commands) -> Result<(), FaqError> {
    match command {
        Commands::Seed { db } => {
            let catalogue = FaqCatalogue::seed(&db, FAQ_SEED)?;
            println!(
                "Done. Created {} FAQ records in {}",
                catalogue.count()?,
                catalogue.path().display()
            );
        }
        Commands::Report { db } => {
            let catalogue = FaqCatalogue::open(&db)?;
            print!("{}", render_report(&catalogue)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let _guard = match telemetry::init_from_env() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(FaqError::Missing(path)) => {
            println!(
                "{} does not exist. Run `faq-catalogue seed` first.",
                path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "faq-catalogue failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
