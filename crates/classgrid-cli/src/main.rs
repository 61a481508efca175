//! `classgrid` CLI — check, add, and render weekly classroom bookings.
//!
//! The booking store is a plain JSON array of booking objects; this binary
//! owns all loading and persisting so the core library stays pure.
//!
//! ## Usage
//!
//! ```sh
//! # Check a candidate against the store (exit code 1 on conflict)
//! classgrid check -s bookings.json --classroom 1 --days 13 --start 09:00 --end 10:30
//!
//! # Validate, check, and persist in one step (refuses on conflict)
//! classgrid add -s bookings.json --classroom 1 --days 24 --start 10:00 --end 11:30 \
//!     --course CS101 --instructor "Dr A" --students 25
//!
//! # Render a classroom's weekly grid as a text table
//! classgrid grid -s bookings.json --classroom 1 --weekdays sun-thu
//!
//! # Same grid as JSON
//! classgrid grid -s bookings.json --classroom 1 --json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::process;

use classgrid_core::clock::SLOT_KEYS;
use classgrid_core::{build_grid, find_conflict, Booking, ScheduleGrid, WeekdayConfig};

#[derive(Parser)]
#[command(
    name = "classgrid",
    version,
    about = "Weekly classroom booking schedule CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// The candidate booking fields shared by `check` and `add`.
#[derive(Args)]
struct CandidateArgs {
    /// Classroom identifier
    #[arg(long)]
    classroom: String,
    /// Day codes, e.g. "13" for the first and third weekday
    #[arg(long)]
    days: String,
    /// Start time, short-hour HH:MM (e.g. 09:00, or 1:00 for 13:00)
    #[arg(long)]
    start: String,
    /// End time, short-hour HH:MM
    #[arg(long)]
    end: String,
    /// Course name
    #[arg(long, default_value = "")]
    course: String,
    /// Instructor name
    #[arg(long, default_value = "")]
    instructor: String,
    /// Number of students (kept verbatim, not used by any computation)
    #[arg(long)]
    students: Option<String>,
}

impl CandidateArgs {
    fn into_booking(self) -> Booking {
        Booking {
            classroom: self.classroom,
            days: self.days,
            start_time: self.start,
            end_time: self.end,
            course: self.course,
            instructor: self.instructor,
            student_count: self.students,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check a candidate booking against the store (exit code 1 on conflict)
    Check {
        /// Booking store file (JSON array)
        #[arg(short, long)]
        store: String,
        #[command(flatten)]
        candidate: CandidateArgs,
    },
    /// Validate a candidate, check it, and append it to the store
    Add {
        /// Booking store file (JSON array; created if missing)
        #[arg(short, long)]
        store: String,
        #[command(flatten)]
        candidate: CandidateArgs,
    },
    /// Render a classroom's weekly grid
    Grid {
        /// Booking store file (JSON array)
        #[arg(short, long)]
        store: String,
        /// Classroom identifier
        #[arg(long)]
        classroom: String,
        /// Weekday configuration: sun-thu or mon-fri
        #[arg(long, default_value = "sun-thu")]
        weekdays: WeekdayConfig,
        /// Emit the grid as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { store, candidate } => {
            let bookings = read_store(&store)?;
            let candidate = candidate.into_booking();
            match find_conflict(&candidate, &bookings) {
                Some(clash) => {
                    println!(
                        "conflict: {} - {} (days {}, {}-{}, overlap {} min)",
                        clash.existing.course,
                        clash.existing.instructor,
                        clash.existing.days,
                        clash.existing.start_time,
                        clash.existing.end_time,
                        clash.overlap_minutes
                    );
                    process::exit(1);
                }
                None => println!("no conflict"),
            }
        }
        Commands::Add { store, candidate } => {
            let mut bookings = read_store_or_empty(&store)?;
            let mut booking = candidate.into_booking();
            booking.validate().context("candidate booking rejected")?;
            if let Some(clash) = find_conflict(&booking, &bookings) {
                anyhow::bail!(
                    "conflict with {} - {} ({}-{}), not added",
                    clash.existing.course,
                    clash.existing.instructor,
                    clash.existing.start_time,
                    clash.existing.end_time
                );
            }
            booking.days = booking.canonical_days();
            bookings.push(booking);
            write_store(&store, &bookings)?;
            println!("added ({} bookings in store)", bookings.len());
        }
        Commands::Grid {
            store,
            classroom,
            weekdays,
            json,
        } => {
            let mut bookings = read_store(&store)?;
            bookings.retain(|b| b.classroom == classroom);
            // Display follows retrieval order: a stable sort on the raw
            // start-time label, matching how the store pages its cursor.
            bookings.sort_by(|a, b| a.start_time.cmp(&b.start_time));

            let grid = build_grid(&bookings, weekdays);
            if json {
                println!("{}", serde_json::to_string_pretty(&grid_to_json(&grid))?);
            } else {
                print_grid(&grid);
            }
        }
    }

    Ok(())
}

fn read_store(path: &str) -> Result<Vec<Booking>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read store file: {}", path))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Store file is not a JSON booking array: {}", path))
}

/// Like [`read_store`], but a missing file is an empty store (first `add`).
fn read_store_or_empty(path: &str) -> Result<Vec<Booking>> {
    if !std::path::Path::new(path).exists() {
        return Ok(Vec::new());
    }
    read_store(path)
}

fn write_store(path: &str, bookings: &[Booking]) -> Result<()> {
    let json = serde_json::to_string_pretty(bookings)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write store file: {}", path))
}

/// Serialize a grid as a day → slot → label JSON object.
///
/// Relies on `serde_json::Map` with the `preserve_order` feature so day rows
/// and slot columns keep their display order in the output.
fn grid_to_json(grid: &ScheduleGrid) -> serde_json::Value {
    let mut days = serde_json::Map::new();
    for row in &grid.rows {
        let mut cells = serde_json::Map::new();
        for (slot, label) in &row.cells {
            cells.insert(slot.clone(), serde_json::Value::String(label.clone()));
        }
        days.insert(row.day.clone(), serde_json::Value::Object(cells));
    }
    serde_json::Value::Object(days)
}

/// Print the grid as an aligned text table: slots across, days down.
fn print_grid(grid: &ScheduleGrid) {
    let width = grid
        .rows
        .iter()
        .flat_map(|row| row.cells.iter())
        .map(|(_, label)| label.len())
        .max()
        .unwrap_or(0)
        .max(2);

    print!("{:<5}", "");
    for slot in SLOT_KEYS {
        print!(" {:<width$}", slot, width = width);
    }
    println!();

    for row in &grid.rows {
        print!("{:<5}", row.day);
        for (_, label) in &row.cells {
            print!(" {:<width$}", label, width = width);
        }
        println!();
    }
}
