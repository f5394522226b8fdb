//! `tariff` — validate car-park tariff slot configurations from the shell.
//!
//! Reads a JSON [`TariffSchedule`] (one slot list per day bucket, camelCase
//! field names as the back office exchanges them) from a file or stdin and
//! runs the same validation gate the save flow uses.

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tariff_engine::{normalize_slot, validate_day, DayBucket, TariffSchedule};

#[derive(Parser)]
#[command(
    name = "tariff",
    about = "Validate car-park tariff slot configurations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a schedule; exits non-zero on the first rule violation
    Validate {
        /// Input file, or '-' for stdin
        #[arg(default_value = "-")]
        file: String,
        /// Restrict to one day bucket (all-day, mon-fri, sat, sun, ph)
        #[arg(long)]
        day: Option<String>,
    },
    /// Print the normalized minute intervals for every slot
    Show {
        /// Input file, or '-' for stdin
        #[arg(default_value = "-")]
        file: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Validate { file, day } => {
            let schedule = load_schedule(&file)?;
            let buckets: Vec<DayBucket> = match day {
                Some(name) => vec![parse_day(&name)?],
                None => DayBucket::ALL.to_vec(),
            };
            for bucket in buckets {
                let slots = schedule.day(bucket);
                validate_day(bucket, slots)?;
                println!(
                    "{bucket}: {} slot{} OK",
                    slots.len(),
                    if slots.len() == 1 { "" } else { "s" }
                );
            }
            Ok(())
        }
        Command::Show { file } => {
            let schedule = load_schedule(&file)?;
            for (bucket, slots) in schedule.iter() {
                if slots.is_empty() {
                    continue;
                }
                println!("{bucket}:");
                for (index, slot) in slots.iter().enumerate() {
                    let n = normalize_slot(slot)
                        .with_context(|| format!("{bucket}: slot {index}"))?;
                    println!(
                        "  [{index}] {} {}-{} ({}-{}, {} min{})",
                        slot.vehicle_type,
                        slot.from,
                        slot.to,
                        n.from_minutes,
                        n.to_minutes,
                        n.duration_minutes(),
                        if n.crosses_midnight() {
                            ", crosses midnight"
                        } else {
                            ""
                        }
                    );
                }
            }
            Ok(())
        }
    }
}

fn load_schedule(file: &str) -> Result<TariffSchedule> {
    let text = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        fs::read_to_string(file).with_context(|| format!("reading {file}"))?
    };
    serde_json::from_str(&text).context("parsing tariff schedule JSON")
}

fn parse_day(name: &str) -> Result<DayBucket> {
    let bucket = match name.to_lowercase().as_str() {
        "all-day" | "allday" | "all" => DayBucket::AllDay,
        "mon-fri" | "monfri" | "weekday" => DayBucket::MonFri,
        "sat" | "saturday" => DayBucket::Sat,
        "sun" | "sunday" => DayBucket::Sun,
        "ph" | "public-holiday" => DayBucket::PublicHoliday,
        _ => bail!("unknown day bucket '{name}' (expected all-day, mon-fri, sat, sun, or ph)"),
    };
    Ok(bucket)
}
