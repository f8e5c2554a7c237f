//! `slots` CLI — generate and resolve barber appointment slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Candidate start times for an open window
//! slots generate --open 09:00 --close 18:00 --step 30
//!
//! # Bookable times for a service with a barber on a date (dataset from file)
//! slots resolve -i shop.json --barber b1 --date 2026-03-16 --service cut
//!
//! # Same, dataset on stdin, JSON output
//! cat shop.json | slots resolve --barber b1 --date 2026-03-16 --service cut --json
//!
//! # Validate a dataset and print a summary
//! slots check -i shop.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use slot_engine::resolver::{DayAvailability, ResolveOptions};
use slot_engine::slots::{generate_candidates, OpenWindow};
use slot_engine::time_of_day::{format_hhmm, parse_date, parse_time_of_day};
use slot_engine::{Dataset, DEFAULT_STEP_MINUTES};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Barber appointment slot generator and resolver"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List start-time candidates for an open window
    Generate {
        /// Opening time (HH:mm)
        #[arg(long)]
        open: String,
        /// Closing time (HH:mm)
        #[arg(long)]
        close: String,
        /// Minutes between candidates
        #[arg(long, default_value_t = DEFAULT_STEP_MINUTES)]
        step: u32,
    },
    /// Resolve bookable times for a service with a barber on a date
    Resolve {
        /// Dataset file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Barber id
        #[arg(long)]
        barber: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Service id
        #[arg(long)]
        service: String,
        /// Minutes between candidates
        #[arg(long, default_value_t = DEFAULT_STEP_MINUTES)]
        step: u32,
        /// Print `{"availableTimes": [...]}` instead of one time per line
        #[arg(long)]
        json: bool,
    },
    /// Validate a dataset and print a summary
    Check {
        /// Dataset file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { open, close, step } => {
            let window = OpenWindow {
                open: parse_time_of_day(&open).context("Invalid --open")?,
                close: parse_time_of_day(&close).context("Invalid --close")?,
            };
            let candidates = generate_candidates(&window, step).context("Invalid --step")?;
            for time in candidates {
                println!("{}", format_hhmm(time));
            }
        }
        Commands::Resolve {
            input,
            barber,
            date,
            service,
            step,
            json,
        } => {
            let dataset = load_dataset(input.as_deref())?;
            let date = parse_date(&date).context("Invalid --date")?;
            let options = ResolveOptions {
                step_minutes: step,
                not_before: None,
            };

            let availability = dataset
                .resolve(&barber, date, &service, &options)
                .with_context(|| format!("Failed to resolve slots for barber '{}'", barber))?;

            if json {
                let body = json!({ "availableTimes": availability.formatted() });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                if let DayAvailability::DayOff { reason } = &availability {
                    eprintln!(
                        "{} is a day off{}",
                        date,
                        reason
                            .as_deref()
                            .map(|r| format!(" ({})", r))
                            .unwrap_or_default()
                    );
                } else if availability == DayAvailability::Closed {
                    eprintln!("barber '{}' does not work on {}", barber, date.format("%A"));
                }
                for time in availability.formatted() {
                    println!("{}", time);
                }
            }
        }
        Commands::Check { input } => {
            let dataset = load_dataset(input.as_deref())?;
            println!("Barbers:       {}", dataset.barbers.len());
            println!("Services:      {}", dataset.services.len());
            println!("Weekly rows:   {}", dataset.weekly_availability.len());
            println!("Days off:      {}", dataset.days_off.len());
            println!(
                "Appointments:  {} ({} active)",
                dataset.appointments.len(),
                dataset.appointments.iter().filter(|a| a.is_active()).count()
            );
        }
    }

    Ok(())
}

fn load_dataset(path: Option<&str>) -> Result<Dataset> {
    let raw = read_input(path)?;
    Dataset::from_json(&raw).context("Failed to load dataset")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
