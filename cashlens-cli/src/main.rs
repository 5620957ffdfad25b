use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use cashlens_analytics::{DateRange, StatementReport};
use cashlens_ingest::{load_statement, parse_statement_date, write_template};

mod render;

#[derive(Parser, Debug)]
#[command(name = "cashlens", version, about = "Personal bank-statement dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a statement CSV and print the KPI summary and tables
    Report {
        /// Path to the statement CSV
        file: PathBuf,

        /// Inclusive range start (DD/MM/YYYY or YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Inclusive range end (DD/MM/YYYY or YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Emit the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Write the fill-in statement template (header row only)
    Template {
        /// Output path
        #[arg(default_value = "template.csv")]
        out: PathBuf,
    },
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn parse_date_arg(raw: Option<&str>, flag: &str) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) => match parse_statement_date(s) {
            Some(d) => Ok(Some(d)),
            None => bail!("{flag}: unrecognized date '{s}' (use DD/MM/YYYY or YYYY-MM-DD)"),
        },
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Report {
            file,
            from,
            to,
            json,
        } => {
            let txns = load_statement(&file)
                .with_context(|| format!("loading statement {}", file.display()))?;
            info!(rows = txns.len(), "statement loaded");

            let range = DateRange {
                start: parse_date_arg(from.as_deref(), "--from")?,
                end: parse_date_arg(to.as_deref(), "--to")?,
            };

            let report = StatementReport::build(&txns, &range);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                render::print_report(&report);
            }
        }

        Command::Template { out } => {
            write_template(&out)
                .with_context(|| format!("writing template {}", out.display()))?;
            println!("Template written to {}", out.display());
        }
    }

    Ok(())
}
