//! Command-line front end for the Sun/Moon event searches.

use clap::{Parser, Subcommand};
use soluna_ephem::{Body, GeoLocation, Instant, OracleConfig, PositionOracle};
use soluna_search::{
    DayState, PhaseAngle, SearchWindow, Target, compute_phase, compute_times,
};

#[derive(Parser)]
#[command(name = "soluna", about = "Sun/Moon rise, set, culmination, and phase times")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rise, set, and culmination times for the Sun or Moon
    Times {
        /// UTC datetime anchor (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Body: sun or moon
        #[arg(long, default_value = "sun")]
        body: String,
        /// Target: visual, visual-lower, horizon, civil, nautical,
        /// astronomical, golden-hour, blue-hour, or a custom altitude in
        /// degrees
        #[arg(long, default_value = "visual")]
        target: String,
        /// Observer latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Observer longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Observer elevation in meters
        #[arg(long, default_value = "0")]
        elevation: f64,
        /// Scan backward from the anchor
        #[arg(long)]
        reverse: bool,
        /// Bound the scan to this many hours from the anchor
        #[arg(long)]
        limit_hours: Option<f64>,
        /// Presentation timezone offset in minutes east of UTC
        #[arg(long, default_value = "0")]
        tz_offset_min: i32,
        /// Disable the atmospheric refraction correction
        #[arg(long)]
        no_refraction: bool,
        /// Disable the diurnal parallax correction
        #[arg(long)]
        no_parallax: bool,
    },
    /// Lunar phase instant by target elongation
    Phase {
        /// UTC datetime anchor (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Phase: new, first-quarter, full, last-quarter, or an elongation
        /// in degrees
        #[arg(long, default_value = "full")]
        phase: String,
        /// Scan backward from the anchor
        #[arg(long)]
        reverse: bool,
        /// Bound the scan to this many days from the anchor
        #[arg(long)]
        limit_days: Option<f64>,
        /// Presentation timezone offset in minutes east of UTC
        #[arg(long, default_value = "0")]
        tz_offset_min: i32,
    },
}

fn parse_utc(s: &str) -> Result<Instant, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month out of range: {month}"));
    }
    if !(1..=31).contains(&day) {
        return Err(format!("day out of range: {day}"));
    }
    if hour > 23 {
        return Err(format!("hour out of range: {hour}"));
    }
    if minute > 59 {
        return Err(format!("minute out of range: {minute}"));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(format!("second out of range: {second}"));
    }
    Ok(Instant::from_utc(year, month, day, hour, minute, second))
}

fn parse_body(s: &str) -> Body {
    match s.to_ascii_lowercase().as_str() {
        "sun" => Body::Sun,
        "moon" => Body::Moon,
        _ => {
            eprintln!("Invalid body: {s}");
            eprintln!("Valid: sun, moon");
            std::process::exit(1);
        }
    }
}

fn parse_target(s: &str) -> Target {
    match s.to_ascii_lowercase().as_str() {
        "visual" => Target::Visual,
        "visual-lower" => Target::VisualLower,
        "horizon" => Target::Horizon,
        "civil" => Target::Civil,
        "nautical" => Target::Nautical,
        "astronomical" => Target::Astronomical,
        "golden-hour" => Target::GoldenHour,
        "blue-hour" => Target::BlueHour,
        other => match other.parse::<f64>() {
            Ok(deg) => Target::Custom(deg),
            Err(_) => {
                eprintln!("Invalid target: {s}");
                eprintln!(
                    "Valid: visual, visual-lower, horizon, civil, nautical, \
                     astronomical, golden-hour, blue-hour, or degrees"
                );
                std::process::exit(1);
            }
        },
    }
}

fn parse_phase(s: &str) -> PhaseAngle {
    match s.to_ascii_lowercase().as_str() {
        "new" => PhaseAngle::NewMoon,
        "first-quarter" => PhaseAngle::FirstQuarter,
        "full" => PhaseAngle::FullMoon,
        "last-quarter" => PhaseAngle::LastQuarter,
        other => match other.parse::<f64>() {
            Ok(deg) => PhaseAngle::Custom(deg),
            Err(_) => {
                eprintln!("Invalid phase: {s}");
                eprintln!("Valid: new, first-quarter, full, last-quarter, or degrees");
                std::process::exit(1);
            }
        },
    }
}

fn build_window(anchor: Instant, reverse: bool, limit_days: Option<f64>) -> SearchWindow {
    match (reverse, limit_days) {
        (false, None) => SearchWindow::forward_from(anchor),
        (true, None) => SearchWindow::reverse_from(anchor),
        (false, Some(days)) => SearchWindow::bounded_days(anchor, days),
        (true, Some(days)) => SearchWindow::bounded_days(anchor, -days),
    }
}

fn print_slot(label: &str, slot: Option<Instant>) {
    match slot {
        Some(t) => println!("{label}: {t}"),
        None => println!("{label}: -"),
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Times {
            date,
            body,
            target,
            lat,
            lon,
            elevation,
            reverse,
            limit_hours,
            tz_offset_min,
            no_refraction,
            no_parallax,
        } => {
            let anchor = match parse_utc(&date) {
                Ok(t) => t.with_tz_offset(tz_offset_min),
                Err(e) => {
                    eprintln!("Invalid date: {e}");
                    std::process::exit(1);
                }
            };
            let location = match GeoLocation::new(lat, lon, elevation) {
                Ok(loc) => loc,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            let oracle = PositionOracle::new(OracleConfig {
                refraction: !no_refraction,
                parallax: !no_parallax,
            });
            let window = build_window(anchor, reverse, limit_hours.map(|h| h / 24.0));

            match compute_times(&oracle, parse_body(&body), parse_target(&target), &location, window)
            {
                Ok(et) => {
                    match et.day_state {
                        DayState::Normal => {}
                        DayState::AlwaysAbove => println!("day-state: always above target"),
                        DayState::AlwaysBelow => println!("day-state: always below target"),
                    }
                    print_slot("rise", et.rise);
                    print_slot("set", et.set);
                    print_slot("noon", et.noon);
                    print_slot("nadir", et.nadir);
                }
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Phase {
            date,
            phase,
            reverse,
            limit_days,
            tz_offset_min,
        } => {
            let anchor = match parse_utc(&date) {
                Ok(t) => t.with_tz_offset(tz_offset_min),
                Err(e) => {
                    eprintln!("Invalid date: {e}");
                    std::process::exit(1);
                }
            };
            let window = build_window(anchor, reverse, limit_days);

            match compute_phase(parse_phase(&phase), window) {
                Ok(Some(event)) => {
                    println!("instant: {}", event.instant);
                    println!("elongation: {:.4} deg", event.angle_deg);
                    println!("moon longitude: {:.4} deg", event.moon_longitude_deg);
                    println!("sun longitude: {:.4} deg", event.sun_longitude_deg);
                }
                Ok(None) => println!("no event within the window"),
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
