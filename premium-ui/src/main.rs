use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use premium_core::{PremiumEstimator, QuoteError};
use premium_ui::{batch, components::WindowPreferences, config, logging, report, run_gui};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Insurance premium estimator.
///
/// Opens the premium form when run without a subcommand.
#[derive(Debug, Parser)]
#[command(name = "PremiumEstimator", version, about)]
struct Cli {
    /// TOML file overriding field limits, rates and display options.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `premium_core=trace,info`.
    /// Defaults to `RUST_LOG`, then `info` for the form and `warn` for subcommands.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Do not write log output to stdout.
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,

    /// Initial window width in pixels (form only).
    #[arg(long, default_value_t = WindowPreferences::DEFAULT_WIDTH)]
    width: f32,

    /// Initial window height in pixels (form only).
    #[arg(long, default_value_t = WindowPreferences::DEFAULT_HEIGHT)]
    height: f32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Quote a single applicant and print the premium.
    Quote {
        /// Applicant age in years.
        #[arg(long)]
        age: String,

        /// Remaining loan amount; separators are allowed.
        #[arg(long)]
        loan_amount: String,

        /// Coverage period in years.
        #[arg(long)]
        coverage_period: String,
    },

    /// Quote every row of a CSV file (`age,loan_amount,coverage_period`).
    Batch {
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print the active rate table and accepted ranges.
    Rates,
}

// ─── logging ─────────────────────────────────────────────────────────────────

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    logging::init_logging();

    let level = cli.log_level.clone().or_else(|| {
        (cli.command.is_some() && std::env::var_os("RUST_LOG").is_none())
            .then(|| "warn".to_string())
    });
    if let Some(level) = level {
        logging::set_log_level(&level)?;
    }
    if cli.quiet {
        logging::set_stdout_enabled(false)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }
    Ok(())
}

// ─── commands ────────────────────────────────────────────────────────────────

fn quote_one(
    estimator: &PremiumEstimator,
    age: &str,
    loan_amount: &str,
    coverage_period: &str,
) -> anyhow::Result<()> {
    match estimator.quote(age, loan_amount, coverage_period) {
        Ok(quote) => {
            for line in report::quote_lines(estimator, &quote) {
                println!("{line}");
            }
            Ok(())
        }
        Err(err) => {
            if let QuoteError::IncompleteForm { issues } = &err {
                for issue in issues {
                    eprintln!("{issue}");
                }
            }
            bail!(err)
        }
    }
}

fn run_batch(
    estimator: &PremiumEstimator,
    file: &Path,
) -> anyhow::Result<()> {
    let applicants = batch::load_from_file(file)
        .with_context(|| format!("Failed to load batch file: {}", file.display()))?;
    println!("Parsed {} rows from {}", applicants.len(), file.display());

    let outcomes = batch::quote_all(estimator, applicants);
    for outcome in &outcomes {
        println!("{}", batch::render_line(estimator, outcome));
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        bail!("{failed} of {} rows could not be quoted", outcomes.len());
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let estimator = PremiumEstimator::new(config).context("Invalid configuration")?;

    match cli.command {
        None => {
            debug!("opening premium form");
            run_gui(estimator, WindowPreferences::new(cli.width, cli.height));
            Ok(())
        }
        Some(Command::Quote {
            age,
            loan_amount,
            coverage_period,
        }) => quote_one(&estimator, &age, &loan_amount, &coverage_period),
        Some(Command::Batch { file }) => run_batch(&estimator, &file),
        Some(Command::Rates) => {
            for line in report::rate_table_lines(&estimator) {
                println!("{line}");
            }
            Ok(())
        }
    }
}
