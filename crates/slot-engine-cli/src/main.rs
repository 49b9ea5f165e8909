//! `slots` CLI: inspect reservation snapshots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Schedule of a day (stdin → stdout)
//! cat reservations.json | slots day --date 2024-06-01
//!
//! # Only one building, as JSON
//! slots day --date 2024-06-01 -i reservations.json --building "One Three North" --json
//!
//! # Check a slot the way the booking form does
//! slots validate --date 2024-06-01 --start "9:00 AM" --end "11:00 AM"
//!
//! # Time picker labels
//! slots options
//!
//! # Day-by-month grids for a year, one per configured building, plus history
//! slots export --year 2025 -i reservations.json --history history.json
//!
//! # History rows
//! slots history -i history.json --building "Two Three North"
//! ```
//!
//! `--config path.toml` selects the window, timezone and picker step.

mod logging;

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use slot_engine::export::YearExport;
use slot_engine::history::{history_rows, BuildingFilter, HistoryEntry};
use slot_engine::schedule::resolve_records;
use slot_engine::{time_options, validate_new_slot, DaySchedule, DayStatus, EngineConfig, ReservationRecord};
use tracing::{info, warn, Level};

#[derive(Parser)]
#[command(name = "slots", version, about = "Building reservation availability CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file (window, timezone, picker step, buildings)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Default log level for slot-engine output on stderr
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the reservations of one day and whether it is fully booked
    Day {
        /// Day to show (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// JSON array of reservation records (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Only consider reservations of this building
        #[arg(long)]
        building: Option<String>,
        /// Print the schedule as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a slot as entered in the booking form
    Validate {
        /// Day of the slot (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Start label, e.g. "9:00 AM"
        #[arg(long, default_value = "")]
        start: String,
        /// End label, e.g. "11:00 AM"
        #[arg(long, default_value = "")]
        end: String,
        /// Book the whole window
        #[arg(long)]
        all_day: bool,
    },
    /// List the time picker labels
    Options,
    /// Print the day-by-month grids of a year, one per building, as JSON
    Export {
        /// Year to export
        #[arg(long)]
        year: i32,
        /// JSON array of reservation records (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Only export this building (default: every configured building)
        #[arg(long)]
        building: Option<String>,
        /// JSON array of history entries to include for the same year
        #[arg(long)]
        history: Option<String>,
    },
    /// Print history rows as JSON
    History {
        /// JSON array of history entries (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Building name, or "All"
        #[arg(long, default_value = "All")]
        building: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_with_level(cli.log_level);

    let config = load_config(cli.config.as_deref())?;
    let zone = config.zone().context("Failed to set up calendar zone")?;
    let window = config.window;

    match cli.command {
        Commands::Day {
            date,
            input,
            building,
            json,
        } => {
            let records = select_building(read_records(input.as_deref())?, building.as_deref(), &config);
            let schedule = DaySchedule::build(&records, date, zone.as_ref(), &window);
            info!(day = %date, rows = schedule.rows.len(), "built day schedule");

            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                print_schedule(&schedule);
            }
        }
        Commands::Validate {
            date,
            start,
            end,
            all_day,
        } => match validate_new_slot(date, &start, &end, all_day, &window) {
            Ok(slot) => {
                println!(
                    "{} - {}",
                    slot.start.format(slot_engine::reservation::TIMESTAMP_FORMAT),
                    slot.end.format(slot_engine::reservation::TIMESTAMP_FORMAT)
                );
            }
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        Commands::Options => {
            for label in time_options(&window, config.time_step_minutes) {
                println!("{}", label);
            }
        }
        Commands::Export {
            year,
            input,
            building,
            history,
        } => {
            let records = select_building(read_records(input.as_deref())?, building.as_deref(), &config);
            let (reservations, _) = resolve_records(&records, zone.as_ref());
            let buildings = match &building {
                Some(b) => vec![b.clone()],
                None => config.buildings.clone(),
            };

            let mut export = YearExport::build(&reservations, year, &buildings);
            if let Some(path) = history.as_deref() {
                let entries = read_history(Some(path))?;
                let filter = building.as_deref().map(BuildingFilter::from_param).unwrap_or_default();
                export = export.with_history(&entries, &filter, zone.as_ref(), &window);
            }
            info!(year, grids = export.grids.len(), history = export.history.len(), "built year export");
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
        Commands::History { input, building } => {
            let entries = read_history(input.as_deref())?;
            let filter = BuildingFilter::from_param(&building);
            let rows = history_rows(&entries, &filter, zone.as_ref(), &window);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            EngineConfig::from_toml_str(&contents)
                .with_context(|| format!("Failed to load config file: {}", path))
        }
        None => Ok(EngineConfig::default()),
    }
}

fn read_records(path: Option<&str>) -> Result<Vec<ReservationRecord>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse reservation records")
}

fn read_history(path: Option<&str>) -> Result<Vec<HistoryEntry>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse history entries")
}

fn select_building(
    records: Vec<ReservationRecord>,
    building: Option<&str>,
    config: &EngineConfig,
) -> Vec<ReservationRecord> {
    if let Some(b) = building.filter(|b| !config.is_known_building(b)) {
        warn!(building = %b, "building is not in the configured list");
    }
    match building {
        Some(b) => records.into_iter().filter(|r| r.building == b).collect(),
        None => records,
    }
}

fn print_schedule(schedule: &DaySchedule) {
    let status = match schedule.status {
        DayStatus::Free => "free",
        DayStatus::Partial => "partially booked",
        DayStatus::FullyBooked => "fully booked",
    };
    println!("{}: {}", schedule.day, status);

    if let Some(label) = schedule.empty_label() {
        println!("{}", label);
        return;
    }
    for row in &schedule.rows {
        println!("{}\t{}", row.time, row.owner);
    }
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
