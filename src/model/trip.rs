use chrono::NaiveDateTime;
use serde::Serialize;

use crate::earth::coordinate::Coordinate;
use crate::error::Error;

/// The immutable inputs for one run: where the flight starts and ends,
/// when it departs on the local clock, and how long it stays airborne.
#[derive(Debug, Clone, Serialize)]
pub struct TripContext {
    departure: Coordinate,
    arrival: Coordinate,
    departure_time: NaiveDateTime,
    utc_offset_hours: f64,
    flying_time_minutes: f64,
}

impl TripContext {
    /// Builds a trip from already-validated coordinates. Flying time must
    /// be positive; zero is accepted only for a degenerate trip whose
    /// departure and arrival coincide.
    pub fn new(
        departure: Coordinate,
        arrival: Coordinate,
        departure_time: NaiveDateTime,
        utc_offset_hours: f64,
        flying_time_minutes: f64,
    ) -> Result<Self, Error> {
        if flying_time_minutes < 0.0 || (flying_time_minutes == 0.0 && departure != arrival) {
            return Err(Error::NonPositiveDuration(flying_time_minutes));
        }
        Ok(Self {
            departure,
            arrival,
            departure_time,
            utc_offset_hours,
            flying_time_minutes,
        })
    }

    /// The single call boundary for raw caller input: validates the
    /// coordinate ranges before anything is computed.
    pub fn from_degrees(
        departure_lat: f64,
        departure_lon: f64,
        arrival_lat: f64,
        arrival_lon: f64,
        departure_time: NaiveDateTime,
        utc_offset_hours: f64,
        flying_time_minutes: f64,
    ) -> Result<Self, Error> {
        let departure = Coordinate::checked(departure_lat, departure_lon)?;
        let arrival = Coordinate::checked(arrival_lat, arrival_lon)?;
        Self::new(
            departure,
            arrival,
            departure_time,
            utc_offset_hours,
            flying_time_minutes,
        )
    }

    pub fn get_departure(&self) -> Coordinate {
        self.departure
    }

    pub fn get_arrival(&self) -> Coordinate {
        self.arrival
    }

    pub fn get_departure_time(&self) -> NaiveDateTime {
        self.departure_time
    }

    pub fn get_utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    pub fn get_flying_time_minutes(&self) -> f64 {
        self.flying_time_minutes
    }
}
