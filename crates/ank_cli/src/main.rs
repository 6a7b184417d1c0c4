mod config;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use ank_base::{BirthDate, DomainError, NumerologyError, assemble, name_number, name_sum};
use ank_math::{ReductionPolicy, reduction_steps};
use clap::{Parser, Subcommand};

use config::{AnkConfig, CliOverrides, ConfigError, OutputFormat};
use output::{NameReport, ReductionReport};

#[derive(Parser)]
#[command(name = "ank", about = "Ank birth-date numerology CLI")]
struct Cli {
    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
    /// Config file (default: ./ank.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Tracing filter directive (overrides ANK_LOG and config)
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// All personal numbers for a birth date
    Numbers {
        /// Birth date (DD.MM.YYYY)
        date: String,
    },
    /// Digit-sum reduction trace for one integer
    Reduce {
        /// Positive integer to reduce
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        n: u32,
        /// Reduce through master numbers instead of preserving them
        #[arg(long)]
        always: bool,
    },
    /// Planetary strength grid for a birth date
    Strength {
        /// Birth date (DD.MM.YYYY)
        date: String,
    },
    /// Chaldean name number
    Name {
        /// Full name; multiple words are joined with spaces
        #[arg(required = true)]
        name: Vec<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Numerology(#[from] NumerologyError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Numerology(e) if e.is_client_error() => 2,
            Self::Config(_) => 2,
            _ => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let overrides = CliOverrides {
        format: cli.format,
        log_filter: cli.log,
    };
    let config = AnkConfig::load(cli.config.as_deref(), Some(&overrides))?;
    logging::init_tracing(config.log_filter());
    tracing::debug!(?config, "resolved configuration");

    let format = config.output.format;
    let names = config.output.planet_names;

    let out = match cli.command {
        Commands::Numbers { date } => {
            let date = parse_date(&date)?;
            let result = assemble(&date)?;
            output::render_numbers(&date, &result, format, names)?
        }
        Commands::Reduce { n, always } => {
            let policy = if always {
                ReductionPolicy::AlwaysReduce
            } else {
                ReductionPolicy::PreserveMasters
            };
            let steps = reduction_steps(n, policy)?;
            let result = steps.last().copied().unwrap_or(n);
            let report = ReductionReport {
                input: n,
                policy: policy.name(),
                steps,
                result,
            };
            output::render_reduction(&report, format)?
        }
        Commands::Strength { date } => {
            let date = parse_date(&date)?;
            let strength = ank_base::planetary_strength(&date)?;
            output::render_strength(&strength, format, names)?
        }
        Commands::Name { name } => {
            let name = name.join(" ");
            let report = NameReport {
                name: &name,
                name_sum: name_sum(&name),
                name_number: name_number(&name)?,
            };
            output::render_name(&report, format)?
        }
    };

    // Text renderers end with a newline; pretty JSON does not.
    Ok(if out.ends_with('\n') { out } else { out + "\n" })
}

fn parse_date(input: &str) -> Result<BirthDate, NumerologyError> {
    BirthDate::parse(input).map_err(|e| {
        tracing::debug!(input, error = %e, "rejected birth date");
        NumerologyError::from(e)
    })
}
