//! `bookcheck` CLI — check proposed stays against a dump of existing bookings.
//!
//! ## Usage
//!
//! ```sh
//! # Check a proposed stay against a bookings dump (stdin → verdict)
//! cat bookings.json | bookcheck check --start 2024-06-03 --end 2024-06-10 --spot 7 --user 3
//!
//! # Same, reading from a file, evaluated as of a fixed day
//! bookcheck check -i bookings.json --start 2024-06-03 --end 2024-06-10 --today 2024-01-01
//!
//! # Re-check while editing booking 2 (its own range is ignored)
//! bookcheck check -i bookings.json --start 2024-06-05 --end 2024-06-08 --spot 7 --exclude 2
//!
//! # Open windows for spot 7 in June, at least 2 nights
//! bookcheck windows -i bookings.json --spot 7 --from 2024-06-01 --to 2024-06-30 --min-nights 2
//! ```
//!
//! A clear check prints a one-line summary and exits 0. A rejected check
//! prints the rejection body (the same JSON a web layer would return) and
//! exits 1.

use anyhow::{Context, Result};
use booking_engine::candidates::{self, Booking, BookingId, SpotId, UserId};
use booking_engine::{admission, availability, conflict};
use booking_engine::{BookingError, DateRange, Rejection};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "bookcheck", version, about = "Booking date-conflict checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a proposed stay against existing bookings
    Check {
        /// Input file with a JSON array of bookings (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Proposed check-in day (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Proposed check-out day (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Scope candidates to this spot
        #[arg(long)]
        spot: Option<SpotId>,
        /// Scope candidates to this user's own bookings
        #[arg(long)]
        user: Option<UserId>,
        /// Ignore this booking id (the booking being edited)
        #[arg(long)]
        exclude: Option<BookingId>,
        /// Evaluate "today" as this day instead of the system date
        #[arg(long)]
        today: Option<String>,
    },
    /// List open windows for a spot within a date window
    Windows {
        /// Input file with a JSON array of bookings (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Spot whose calendar to inspect (all bookings if omitted)
        #[arg(long)]
        spot: Option<SpotId>,
        /// Window start day (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Window end day (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        /// Keep only windows of at least this many nights
        #[arg(long, default_value_t = 1)]
        min_nights: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            start,
            end,
            spot,
            user,
            exclude,
            today,
        } => {
            let bookings = read_bookings(input.as_deref())?;
            let proposed = DateRange::new(parse_day(&start, "--start")?, parse_day(&end, "--end")?);
            let today = match today {
                Some(raw) => parse_day(&raw, "--today")?,
                None => Utc::now().date_naive(),
            };

            if let Err(err) = admission::admit_proposal(&proposed, today) {
                reject(&err);
            }

            let pool: Vec<Booking> = bookings
                .into_iter()
                .filter(|b| Some(b.id) != exclude)
                .collect();
            let ranges = scope(&pool, spot, user);

            let verdict = conflict::check_booking_conflict(&proposed, &ranges);
            if !verdict.is_clear() {
                reject(&BookingError::Conflict(verdict));
            }

            println!(
                "No conflicts: {} to {} ({} nights, {} candidate bookings)",
                proposed.start,
                proposed.end,
                proposed.nights(),
                ranges.len()
            );
        }
        Commands::Windows {
            input,
            spot,
            from,
            to,
            min_nights,
        } => {
            let bookings = read_bookings(input.as_deref())?;
            let window = DateRange::new(parse_day(&from, "--from")?, parse_day(&to, "--to")?);

            let booked: Vec<DateRange> = bookings
                .iter()
                .filter(|b| spot.is_none_or(|s| b.spot_id == s))
                .map(|b| b.range)
                .collect();

            let windows: Vec<availability::OpenWindow> =
                availability::open_windows(&booked, &window)
                    .into_iter()
                    .filter(|w| w.nights >= min_nights)
                    .collect();

            let pretty = serde_json::to_string_pretty(&windows)?;
            println!("{}", pretty);
        }
    }

    Ok(())
}

/// Candidate ranges for the check, per the scoping flags.
///
/// With both `--spot` and `--user` this is the create-time rule (same spot
/// OR same user); with one flag, just that dimension; with neither, every
/// booking in the dump.
fn scope(bookings: &[Booking], spot: Option<SpotId>, user: Option<UserId>) -> Vec<DateRange> {
    match (spot, user) {
        (Some(s), Some(u)) => candidates::candidates_for_create(bookings, s, u),
        (Some(s), None) => bookings
            .iter()
            .filter(|b| b.spot_id == s)
            .map(|b| b.range)
            .collect(),
        (None, Some(u)) => bookings
            .iter()
            .filter(|b| b.user_id == u)
            .map(|b| b.range)
            .collect(),
        (None, None) => bookings.iter().map(|b| b.range).collect(),
    }
}

/// Print the rejection body a web layer would return, then exit non-zero.
fn reject(err: &BookingError) -> ! {
    let rejection = Rejection::from(err);
    match serde_json::to_string_pretty(&rejection.body) {
        Ok(body) => println!("{}", body),
        Err(e) => eprintln!("Failed to render rejection: {}", e),
    }
    process::exit(1);
}

fn parse_day(raw: &str, flag: &str) -> Result<NaiveDate> {
    raw.parse()
        .with_context(|| format!("Invalid date for {}: '{}' (expected YYYY-MM-DD)", flag, raw))
}

fn read_bookings(path: Option<&str>) -> Result<Vec<Booking>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Input must be a JSON array of bookings")
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
