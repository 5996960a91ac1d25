//! rusty-exchange-rate CLI - historical reference rate lookups
//!
//! ## Example Usage
//!
//! ```bash
//! # Rate between two currencies on a date
//! rusty-exchange-rate convert EUR SEK --date 2018-04-17
//!
//! # Convert an amount using today's (or the latest prior) rates
//! rusty-exchange-rate convert NOK SEK --amount 250
//!
//! # Every rate against the anchor on a date
//! rusty-exchange-rate rates --date 2018-04-15
//!
//! # Machine-readable quote
//! rusty-exchange-rate convert EUR NOK --date 2018-04-15 --json
//!
//! # Show what the data file covers
//! rusty-exchange-rate --data eurofxref-hist-90d.xml info
//! ```

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rusty_exchange_rate::config::Config;
use rusty_exchange_rate::currency::Currency;
use rusty_exchange_rate::data::fx::{RateResolver, RateTable};
use rusty_exchange_rate::data::sources::open_source;
use rusty_exchange_rate::types::{parse_date, DateKey};
use std::path::PathBuf;
use std::process;

/// rusty-exchange-rate: historical currency conversion from reference rates
#[derive(Parser)]
#[command(name = "rusty-exchange-rate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Historical currency conversion from reference rates", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Rate data file (ECB XML or CSV, or JSON); overrides the config
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Number of dates checked when falling back; overrides the config
    #[arg(long, global = true)]
    max_lookback: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange rate from BASE to COUNTER
    Convert {
        /// Currency converted from
        #[arg(value_name = "BASE")]
        base: String,

        /// Currency converted to
        #[arg(value_name = "COUNTER")]
        counter: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short = 'D', long)]
        date: Option<String>,

        /// Amount of BASE to convert
        #[arg(short, long)]
        amount: Option<f64>,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// All rates against the anchor currency on a date
    Rates {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short = 'D', long)]
        date: Option<String>,
    },

    /// Show the loaded rate table
    Info,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(data) = cli.data {
        config.data_source = data;
    }
    if let Some(max_lookback) = cli.max_lookback {
        config.max_lookback = max_lookback;
        config.validate()?;
    }

    if cli.verbose {
        println!(
            "{} v{}",
            "rusty-exchange-rate".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!(
            "Data source: {}",
            config.data_source.display().to_string().dimmed()
        );
    }

    let source = open_source(&config.data_source);
    let table = RateTable::from_source(source.as_ref(), config.anchor)
        .with_context(|| format!("Failed to load rates from {}", config.data_source.display()))?;
    let resolver = RateResolver::new(&table).with_max_lookback(config.max_lookback);

    match cli.command {
        Commands::Convert {
            base,
            counter,
            date,
            amount,
            json,
        } => convert(&resolver, &base, &counter, date.as_deref(), amount, json),
        Commands::Rates { date } => show_rates(&resolver, date.as_deref()),
        Commands::Info => show_info(&table),
    }
}

fn requested_date(date: Option<&str>) -> Result<DateKey> {
    match date {
        Some(date) => Ok(parse_date(date)?),
        None => Ok(Local::now().date_naive()),
    }
}

fn convert(
    resolver: &RateResolver<'_>,
    base: &str,
    counter: &str,
    date: Option<&str>,
    amount: Option<f64>,
    json: bool,
) -> Result<()> {
    let base: Currency = base.parse()?;
    let counter: Currency = counter.parse()?;
    let requested = requested_date(date)?;

    let quote = resolver.quote(requested, base, counter)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    if quote.is_fallback() {
        println!(
            "{} no rates for {}, using {}",
            "Note:".yellow(),
            quote.requested,
            quote.effective
        );
    }

    match amount {
        Some(amount) => println!(
            "{:.2} {} = {} {}",
            amount,
            base,
            format!("{:.4}", amount * quote.rate).green().bold(),
            counter
        ),
        None => println!(
            "1 {} = {} {}  ({})",
            base,
            format!("{:.6}", quote.rate).green().bold(),
            counter,
            quote.effective
        ),
    }

    Ok(())
}

fn show_rates(resolver: &RateResolver<'_>, date: Option<&str>) -> Result<()> {
    let requested = requested_date(date)?;
    let (effective, rates) = resolver.rates_on(requested)?;
    let anchor = resolver.table().anchor();

    println!(
        "{} {} (anchor {})",
        "Reference rates for".bold(),
        effective.to_string().cyan(),
        anchor
    );
    if effective != requested {
        println!("{} requested {}", "Note:".yellow(), requested);
    }
    for (currency, rate) in rates {
        println!("  {:<4} {:>12.4}", currency.as_str(), rate);
    }

    Ok(())
}

fn show_info(table: &RateTable) -> Result<()> {
    println!("{}", "Rate table".bold());
    println!("  Anchor:     {}", table.anchor());
    println!("  Dates:      {}", table.len());
    match (table.first_date(), table.last_date()) {
        (Some(first), Some(last)) => println!("  Range:      {} to {}", first, last),
        _ => println!("  Range:      {}", "empty".dimmed()),
    }
    let supported: Vec<&str> = Currency::ALL.iter().map(|c| c.as_str()).collect();
    println!("  Supported:  {}", supported.join(", "));

    Ok(())
}
