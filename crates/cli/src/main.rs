// crates/cli/src/main.rs
//! seedscribe binary.
//!
//! `generate` reads one JSON fixture, renders the EF Core `HasData(...)`
//! seed block for the chosen entity kind, and writes it atomically.
//! `scan` reports duplicate identifier values in a fixture.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use seedscribe_core::{
    generate, load_records, scan_duplicates, write_atomic, DateTimePolicy, EntityKind,
    GenerateOptions,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "seedscribe")]
#[command(version, about = "Generate EF Core HasData seed blocks from JSON fixtures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at INFO instead of WARN
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the seed-code block for one entity kind
    Generate {
        /// Entity kind: category, image, location, review, schedule, or tour
        entity: EntityKind,

        /// Fixture file to read (default: the entity's original fixture name)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file to write, overwritten on each run (default: the
        /// entity's original output name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override how malformed date-and-time values are handled
        #[arg(long, value_enum)]
        datetime_policy: Option<PolicyArg>,
    },

    /// Scan a fixture for duplicate identifier values
    Scan {
        /// Entity kind whose fixture to scan
        entity: EntityKind,

        /// Fixture file to read (default: the entity's original fixture name)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Key field to count (default: the entity's identifier field)
        #[arg(short, long)]
        key: Option<String>,
    },
}

/// CLI spelling of the core date-time policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Malformed timestamps abort the run
    Strict,
    /// Malformed timestamps render as `null`
    NullOnError,
}

impl From<PolicyArg> for DateTimePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => DateTimePolicy::Strict,
            PolicyArg::NullOnError => DateTimePolicy::NullOnError,
        }
    }
}

fn run_generate(
    entity: EntityKind,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    policy: Option<PolicyArg>,
) -> Result<()> {
    let spec = entity.spec();
    let input = input.unwrap_or_else(|| PathBuf::from(spec.input_file));
    let output = output.unwrap_or_else(|| PathBuf::from(spec.output_file));
    let policy = policy.map(Into::into).unwrap_or(spec.datetime_policy);

    let start = Instant::now();
    let records = load_records(&input)?;
    let code = generate(
        &records,
        spec.fields,
        &spec.template(),
        &GenerateOptions {
            datetime_policy: policy,
        },
    )
    .with_context(|| format!("generating {entity} seed code from {}", input.display()))?;
    write_atomic(&output, &code)?;

    tracing::info!(
        entity = %entity,
        records = records.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        output = %output.display(),
        "generated seed block"
    );
    println!(
        "Wrote {} {} record(s) to {}",
        records.len(),
        entity,
        output.display()
    );
    Ok(())
}

fn run_scan(entity: EntityKind, input: Option<PathBuf>, key: Option<String>) -> Result<()> {
    let spec = entity.spec();
    let input = input.unwrap_or_else(|| PathBuf::from(spec.input_file));
    let key = key.unwrap_or_else(|| spec.key_field.to_string());

    let records = load_records(&input)?;
    let duplicates = scan_duplicates(&records, &key)
        .with_context(|| format!("scanning {} for duplicate '{key}' values", input.display()))?;

    if duplicates.is_empty() {
        println!("No duplicate {key} values in {}", input.display());
    } else {
        println!("Duplicate {key} values in {}:", input.display());
        // Sorted for stable operator-facing output; the scan itself carries
        // no ordering guarantee.
        let mut entries: Vec<_> = duplicates.into_iter().collect();
        entries.sort();
        for (value, count) in entries {
            println!(" - {value} appears {count} times");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::INFO } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate {
            entity,
            input,
            output,
            datetime_policy,
        } => run_generate(entity, input, output, datetime_policy),
        Commands::Scan { entity, input, key } => run_scan(entity, input, key),
    }
}
