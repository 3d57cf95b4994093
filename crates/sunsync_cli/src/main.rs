use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use sunsync_base::{
    GeographicCoordinate, LunarPhase, RiseSetResult, moon_phase, sun_declination_at_noon,
    sunrise_and_sunset_times,
};
use sunsync_config::{RegionTable, SyncConfig, parse_location};
use sunsync_cycle::{CycleConstants, DegenerateDay, GameTime, game_time_at};
use sunsync_host::{
    Clock, OffsetClock, SyncOutcome, Synchronizer, SystemClock, TICKS_PER_SECOND,
    command_changes_game_time, fallback_ticks, moon_phase_to_cycle_day, parse_clock_time,
};
use sunsync_time::{fractional_day, to_julian_date};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sunsync", about = "Real-world sunrise, sunset and moon phase for game clocks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian date of a UTC date or date-time
    Julian {
        /// UTC date (YYYY-MM-DD) or datetime (YYYY-MM-DDThh:mm:ss[Z])
        #[arg(long)]
        date: String,
    },
    /// Sunrise and sunset (UTC) for a date and location
    Sunrise {
        /// UTC date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// "auto", decimal or sexagesimal degrees
        #[arg(long)]
        location: String,
    },
    /// Lunar phase at an instant
    MoonPhase {
        /// UTC date (YYYY-MM-DD) or datetime (YYYY-MM-DDThh:mm:ss[Z])
        #[arg(long)]
        date: String,
    },
    /// Game time interpolated from the real sun
    GameTime {
        /// UTC datetime (YYYY-MM-DDThh:mm:ss[Z])
        #[arg(long)]
        date: String,
        /// "auto", decimal or sexagesimal degrees
        #[arg(long)]
        location: String,
    },
    /// Parse and normalize a location string
    ParseLocation {
        /// "auto", decimal or sexagesimal degrees
        text: String,
    },
    /// Check whether a game command changes the time of day
    CheckCommand {
        /// Command as typed, e.g. "/time set day"
        command: String,
    },
    /// Run the synchronizer against the system clock
    Run {
        /// Settings file; created with defaults when missing
        #[arg(long, default_value = "sunsync.toml")]
        config: PathBuf,
        /// Stop after this many steps (default: run forever)
        #[arg(long)]
        count: Option<u64>,
        /// Pretend the current UTC time of day is HH:MM[:SS]
        #[arg(long)]
        clock: Option<String>,
    },
}

fn parse_utc(s: &str) -> Result<NaiveDateTime, String> {
    // "YYYY-MM-DD", "YYYY-MM-DDThh:mm:ss" or "YYYY-MM-DDThh:mm:ssZ"
    let s = s.trim().trim_end_matches('Z');
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    parse_date(s)
        .map(|d| d.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| format!("expected YYYY-MM-DD or YYYY-MM-DDThh:mm:ss, got {s}"))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {s}: {e}"))
}

fn require<T, E: std::fmt::Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Invalid {what}: {e}");
        std::process::exit(1);
    })
}

fn require_location(text: &str) -> GeographicCoordinate {
    require(parse_location(text, &RegionTable::bundled()), "location")
}

fn degenerate_message(reason: DegenerateDay) -> &'static str {
    match reason {
        DegenerateDay::NeverRises => "Sun never rises (polar night)",
        DegenerateDay::NeverSets => "Sun never sets (midnight sun)",
    }
}

fn load_or_create_config(path: &Path) -> SyncConfig {
    if path.exists() {
        return require(SyncConfig::load(path), "configuration");
    }
    let config = SyncConfig::default();
    match config.save(path) {
        Ok(()) => info!(path = %path.display(), "wrote default configuration"),
        Err(e) => error!("{e}; continuing with defaults"),
    }
    config
}

fn run<C: Clock>(mut sync: Synchronizer<C>, count: Option<u64>) {
    let interval = Duration::from_secs(sync.config().synchronization_interval_seconds);
    info!(
        interval_ticks = sync.config().synchronization_interval_seconds * TICKS_PER_SECOND,
        "starting synchronization"
    );
    let mut step = 0u64;
    loop {
        match sync.tick() {
            Ok(SyncOutcome::Synchronized { ticks, period, moon_day }) => println!(
                "{}  game time {ticks:>6}  ({}, moon day {moon_day})",
                sync.now().format("%Y-%m-%d %H:%M:%S"),
                period.name()
            ),
            Ok(SyncOutcome::Fallback { ticks, reason }) => println!(
                "{}  game time {ticks:>6}  ({})",
                sync.now().format("%Y-%m-%d %H:%M:%S"),
                degenerate_message(reason)
            ),
            Ok(SyncOutcome::Paused) => {}
            Err(e) => error!("synchronization failed: {e}"),
        }
        step += 1;
        if count.is_some_and(|n| step >= n) {
            break;
        }
        thread::sleep(interval);
    }
}

fn init_logging() {
    // per-step detail is only emitted by the synchronizer in debug mode
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sunsync_host=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Julian { date } => {
            let dt = require(parse_utc(&date), "date");
            let jd = to_julian_date(fractional_day(dt), dt.month(), dt.year());
            println!("JD {jd:.6}");
        }

        Commands::Sunrise { date, location } => {
            let date = require(parse_date(&date), "date");
            let loc = require_location(&location);
            println!("Location: {loc}");
            println!("Solar declination at noon: {:.4} deg", sun_declination_at_noon(date));
            match require(sunrise_and_sunset_times(&loc, date), "input") {
                RiseSetResult::Event(e) => {
                    println!("Sunrise: {} UTC", e.rise_utc.format("%Y-%m-%d %H:%M:%S"));
                    println!("Sunset:  {} UTC", e.set_utc.format("%Y-%m-%d %H:%M:%S"));
                }
                RiseSetResult::NeverRises => {
                    println!("{}", degenerate_message(DegenerateDay::NeverRises))
                }
                RiseSetResult::NeverSets => {
                    println!("{}", degenerate_message(DegenerateDay::NeverSets))
                }
            }
        }

        Commands::MoonPhase { date } => {
            let dt = require(parse_utc(&date), "date");
            let phase = moon_phase(dt);
            println!(
                "Phase {phase:.4}: {} (game moon day {})",
                LunarPhase::from_phase(phase).name(),
                moon_phase_to_cycle_day(phase)
            );
        }

        Commands::GameTime { date, location } => {
            let dt = require(parse_utc(&date), "date");
            let loc = require_location(&location);
            match require(game_time_at(&loc, dt, &CycleConstants::default()), "input") {
                GameTime::Interpolated(t) => {
                    println!(
                        "{} {:.1}% -> game time {}",
                        t.period.name(),
                        t.fraction * 100.0,
                        t.value as u64
                    );
                    println!(
                        "  between {} and {} UTC",
                        t.last_event.format("%Y-%m-%d %H:%M:%S"),
                        t.next_event.format("%Y-%m-%d %H:%M:%S")
                    );
                }
                GameTime::Degenerate(reason) => println!(
                    "{} -> game time {}",
                    degenerate_message(reason),
                    fallback_ticks(reason)
                ),
            }
        }

        Commands::ParseLocation { text } => {
            let loc = require_location(&text);
            println!("{loc}");
        }

        Commands::CheckCommand { command } => {
            if command_changes_game_time(&command) {
                println!("changes game time");
            } else {
                println!("does not change game time");
            }
        }

        Commands::Run { config, count, clock } => {
            let settings = load_or_create_config(&config);
            let regions = RegionTable::bundled();
            let clock = match clock {
                Some(text) => {
                    OffsetClock::reading(SystemClock, require(parse_clock_time(&text), "clock"))
                }
                None => OffsetClock::system(),
            };
            let sync = require(Synchronizer::new(settings, regions, clock), "configuration");
            run(sync, count);
        }
    }
}
