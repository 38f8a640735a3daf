//! Toolbelt CLI — hashing, shuffling, weighted picks, sorting and random numbers.
//!
//! Commands:
//! - `hash` — bucket a string with the deterministic string hash
//! - `int` / `float` — bounded random numbers
//! - `shuffle` — Fisher–Yates shuffle of the given items
//! - `pick` — weighted pick from `value:weight` pairs
//! - `sort` — sort numbers or `YYYY-MM-DD` dates
//! - `plural` — singular/plural form for a count
//! - `json` — pretty-print JSON or report it as invalid
//!
//! Random commands print the master seed they used; pass it back with
//! `--seed` to replay the run.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;
use toolbelt_core::config::ToolbeltConfig;
use toolbelt_core::{
    date_sort_fn, hash_string_to_number, number_sort_fn, pluralize, random_float, random_int,
    safe_parse_json, shuffle_in_place, weighted_random, Logger, SeedSource, SortDirection,
};

#[derive(Parser)]
#[command(name = "toolbelt", about = "Toolbelt CLI — small deterministic and random helpers")]
struct Cli {
    /// Master seed for random commands. Defaults to the config file, then a fresh seed.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a string to a non-negative integer.
    Hash {
        input: String,

        /// Reduce the hash modulo this many buckets.
        #[arg(long)]
        range: Option<u32>,
    },
    /// Random integer in [min, max). Fractional bounds are rounded inward.
    Int {
        #[arg(long, allow_hyphen_values = true)]
        min: f64,

        #[arg(long, allow_hyphen_values = true)]
        max: f64,
    },
    /// Random float in [min, max).
    Float {
        #[arg(long, allow_hyphen_values = true)]
        max: f64,

        #[arg(long, allow_hyphen_values = true)]
        min: f64,
    },
    /// Shuffle the given items.
    Shuffle {
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Pick one value from `value:weight` pairs.
    Pick {
        #[arg(required = true)]
        options: Vec<String>,
    },
    /// Sort numbers, or dates with --dates.
    Sort {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Sort descending.
        #[arg(long, default_value_t = false)]
        desc: bool,

        /// Parse values as YYYY-MM-DD dates.
        #[arg(long, default_value_t = false)]
        dates: bool,
    },
    /// Singular or plural form of a word for a count.
    Plural {
        #[arg(allow_hyphen_values = true)]
        count: i64,
        singular: String,
        plural: Option<String>,
    },
    /// Pretty-print a JSON document.
    Json { text: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ToolbeltConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ToolbeltConfig::default(),
    };
    // Results go to stdout, diagnostics to stderr.
    let logger = Logger::with_writer(
        Some(config.log_scope.as_deref().unwrap_or("toolbelt")),
        io::stderr(),
    );
    execute(&cli, &config, &logger)
}

/// Run the command and log any failure before handing it back.
fn execute<W: Write>(cli: &Cli, config: &ToolbeltConfig, logger: &Logger<W>) -> Result<()> {
    let result = run(cli, config, logger);
    if let Err(err) = &result {
        logger.error(&format!("{err:#}"));
    }
    result
}

fn run<W: Write>(cli: &Cli, config: &ToolbeltConfig, logger: &Logger<W>) -> Result<()> {
    let seeds = || {
        let source = match cli.seed.or(config.seed) {
            Some(seed) => SeedSource::new(seed),
            None => SeedSource::from_entropy(),
        };
        logger.info(&format!("seed {}", source.master_seed()));
        source
    };

    match &cli.command {
        Commands::Hash { input, range } => run_hash(input, range.or(config.hash_range))?,
        Commands::Int { min, max } => {
            let mut rng = seeds().rng_for("int", 0);
            println!("{}", random_int(&mut rng, *min, *max)?);
        }
        Commands::Float { max, min } => {
            let mut rng = seeds().rng_for("float", 0);
            println!("{}", random_float(&mut rng, *max, *min));
        }
        Commands::Shuffle { items } => {
            let mut rng = seeds().rng_for("shuffle", 0);
            let mut items = items.clone();
            println!("{}", shuffle_in_place(&mut items, &mut rng).join(" "));
        }
        Commands::Pick { options } => {
            let parsed = parse_weighted(options)?;
            let mut rng = seeds().rng_for("pick", 0);
            println!("{}", weighted_random(&mut rng, &parsed)?);
        }
        Commands::Sort {
            values,
            desc,
            dates,
        } => {
            let dir = if *desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            let sorted = if *dates {
                sort_dates(values, dir)?
            } else {
                sort_numbers(values, dir)?
            };
            println!("{}", sorted.join(" "));
        }
        Commands::Plural {
            count,
            singular,
            plural,
        } => println!("{count} {}", pluralize(*count, singular, plural.as_deref())),
        Commands::Json { text } => match safe_parse_json::<serde_json::Value>(text) {
            Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            None => bail!("invalid JSON"),
        },
    }
    Ok(())
}

fn run_hash(input: &str, range: Option<u32>) -> Result<()> {
    let range = match range {
        Some(r) => Some(NonZeroU32::new(r).context("--range must be at least 1")?),
        None => None,
    };
    println!("{}", hash_string_to_number(input, range));
    Ok(())
}

/// Parse `value:weight` pairs. The weight follows the last colon.
fn parse_weighted(raw: &[String]) -> Result<Vec<(String, f64)>> {
    raw.iter()
        .map(|entry| {
            let (value, weight) = entry
                .rsplit_once(':')
                .with_context(|| format!("expected value:weight, got {entry:?}"))?;
            let weight: f64 = weight
                .parse()
                .with_context(|| format!("invalid weight in {entry:?}"))?;
            Ok((value.to_string(), weight))
        })
        .collect()
}

fn sort_numbers(values: &[String], dir: SortDirection) -> Result<Vec<String>> {
    let mut parsed = values
        .iter()
        .map(|v| -> Result<(f64, String)> {
            let n: f64 = v.parse().with_context(|| format!("not a number: {v:?}"))?;
            if !n.is_finite() {
                bail!("not a finite number: {v:?}");
            }
            Ok((n, v.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    parsed.sort_by(number_sort_fn(dir, |p: &(f64, String)| p.0));
    Ok(parsed.into_iter().map(|(_, raw)| raw).collect())
}

fn sort_dates(values: &[String], dir: SortDirection) -> Result<Vec<String>> {
    let mut parsed = values
        .iter()
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").with_context(|| format!("not a date: {v:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    parsed.sort_by(date_sort_fn(dir, |d: &NaiveDate| *d));
    Ok(parsed.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect())
}
