use std::env;
use std::process::ExitCode;

use chrono::NaiveDateTime;
use log::error;
use serde_json::json;

use solar_flight_clock::preference::{self, REPORT_JSON};
use solar_flight_clock::util::time_format::TimeFormat;
use solar_flight_clock::util::Logger;
use solar_flight_clock::{TrackedFlight, Tracker, TripContext};

const USAGE: &str = "Usage: solar_flight_clock [--json] <dep-lat> <dep-lon> <arr-lat> <arr-lon> \
<departure-local-time (YYYY-MM-DDTHH:MM:SS)> <utc-offset-hours> <flying-minutes>";

fn main() -> ExitCode {
    let _logger = Logger::new();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut json_report = preference::manager()
        .get::<bool>(REPORT_JSON)
        .unwrap_or(false);
    if let Some(pos) = args.iter().position(|a| a.as_str() == "--json") {
        args.remove(pos);
        json_report = true;
    }

    let trip = match parse_trip(&args) {
        Ok(trip) => trip,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match Tracker::new().track(&trip) {
        Ok(flight) => {
            if json_report {
                print_json(&flight);
            } else {
                print_report(&flight);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn parse_trip(args: &[String]) -> Result<TripContext, String> {
    if args.len() != 7 {
        return Err(format!("Expected 7 arguments, got {}", args.len()));
    }

    let numeric = |s: &String, name: &str| {
        s.parse::<f64>()
            .map_err(|_| format!("{} must be numeric, got '{}'", name, s))
    };

    let departure_lat = numeric(&args[0], "Departure latitude")?;
    let departure_lon = numeric(&args[1], "Departure longitude")?;
    let arrival_lat = numeric(&args[2], "Arrival latitude")?;
    let arrival_lon = numeric(&args[3], "Arrival longitude")?;
    let departure_time = NaiveDateTime::parse_from_str(&args[4], "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("Departure time '{}' is invalid: {}", args[4], e))?;
    let utc_offset_hours = numeric(&args[5], "UTC offset")?;
    let flying_time_minutes = numeric(&args[6], "Flying time")?;

    TripContext::from_degrees(
        departure_lat,
        departure_lon,
        arrival_lat,
        arrival_lon,
        departure_time,
        utc_offset_hours,
        flying_time_minutes,
    )
    .map_err(|e| e.to_string())
}

fn print_report(flight: &TrackedFlight) {
    let format = TimeFormat::new();
    for time in flight.get_clock().get_times() {
        println!("{}", format.format(time));
    }
}

fn print_json(flight: &TrackedFlight) {
    let format = TimeFormat::new();
    let times: Vec<String> = flight
        .get_clock()
        .get_times()
        .iter()
        .map(|t| format.format(t))
        .collect();
    let report = json!({
        "route": flight.get_route().get_points(),
        "sun_track": flight.get_sun_track().get_points(),
        "solar_clock": times,
    });
    println!("{}", report);
}
