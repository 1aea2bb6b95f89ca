use chrono::NaiveDateTime;
use serde::Serialize;

use crate::earth::coordinate::Coordinate;
use crate::earth::solar;
use crate::earth::{EARTH_ROTATION_DEG_PER_MINUTE, MINUTES_PER_DEGREE};
use crate::model::route::Route;
use crate::model::trip::TripContext;

/// The Sun's state at the departure instant, derived once per trip and
/// read-only afterwards. The declination is held constant for the whole
/// flight; a flight's duration is negligible on the orbital timescale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolarState {
    declination: f64,
    initial_sun_longitude: f64,
    drift_deg_per_minute: f64,
}

impl SolarState {
    pub fn for_trip(trip: &TripContext) -> Self {
        let departure_time = trip.get_departure_time();
        let day = solar::day_of_year(departure_time.date());
        let declination = solar::declination(day);

        let departure_solar_time = solar::local_solar_time(
            departure_time,
            trip.get_departure().get_longitude(),
            trip.get_utc_offset_hours(),
        );
        let noon = solar::solar_noon(departure_time.date());

        // Minutes still to run until solar noon (negative once past noon),
        // converted to degrees east of the departure longitude.
        let minutes_to_noon = minutes_between(departure_solar_time, noon);
        let initial_sun_longitude =
            trip.get_departure().get_longitude() + minutes_to_noon / MINUTES_PER_DEGREE;

        Self {
            declination,
            initial_sun_longitude,
            drift_deg_per_minute: EARTH_ROTATION_DEG_PER_MINUTE,
        }
    }

    pub fn get_declination(&self) -> f64 {
        self.declination
    }

    pub fn get_initial_sun_longitude(&self) -> f64 {
        self.initial_sun_longitude
    }

    pub fn get_drift_deg_per_minute(&self) -> f64 {
        self.drift_deg_per_minute
    }
}

fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / 60.0
}

/// The Sun's sub-point at each route index, synchronized with the
/// aircraft: index k of both sequences is the elapsed fraction k/(N-1) of
/// the flight. The drift is uniform over flight time while the route is
/// uniform over distance; the two coincide only for a ground speed uniform
/// in longitude, which this model accepts.
#[derive(Debug, Clone, Serialize)]
pub struct SunTrack {
    state: SolarState,
    points: Vec<Coordinate>,
}

impl SunTrack {
    pub fn synchronized(trip: &TripContext, route: &Route) -> Self {
        let state = SolarState::for_trip(trip);
        let n = route.len();
        let total_drift = state.drift_deg_per_minute * trip.get_flying_time_minutes();

        let points = if n <= 1 {
            // Degenerate route: the whole "flight" is the departure instant.
            vec![Coordinate::new(
                state.declination,
                state.initial_sun_longitude,
            )]
        } else {
            (0..n)
                .map(|k| {
                    let lon = state.initial_sun_longitude
                        - total_drift * k as f64 / (n - 1) as f64;
                    Coordinate::new(state.declination, lon)
                })
                .collect()
        };

        SunTrack { state, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get_points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn get_point(&self, pos: usize) -> Option<&Coordinate> {
        self.points.get(pos)
    }

    pub fn get_state(&self) -> &SolarState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{SolarState, SunTrack};
    use crate::model::route::{Route, DEFAULT_SPACING_KM, DEFAULT_TOLERANCE_KM};
    use crate::model::trip::TripContext;

    fn icn_lhr_trip() -> TripContext {
        let departure_time = NaiveDate::from_ymd_opt(2022, 6, 25)
            .unwrap()
            .and_hms_opt(11, 50, 0)
            .unwrap();
        TripContext::from_degrees(
            37.4602, 126.4407, 51.47, -0.4543, departure_time, 9.0, 900.0,
        )
        .unwrap()
    }

    #[test]
    fn test_solar_state() {
        let state = SolarState::for_trip(&icn_lhr_trip());
        // June 25 declination sits near the positive peak
        assert!(state.get_declination() > 23.3 && state.get_declination() < 23.5);
        assert_eq!(state.get_drift_deg_per_minute(), 0.25);
        // Departure is 11:50 local at 126.44E in UTC+9: local solar time is
        // about 11:13, still before noon, so the sub-point lies east of the
        // departure longitude by roughly 46 minutes / 4 = 11.6 degrees.
        let lon = state.get_initial_sun_longitude();
        assert!(lon > 136.0 && lon < 140.0, "sun longitude {}", lon);
    }

    #[test]
    fn test_track_len_matches_route() {
        let trip = icn_lhr_trip();
        let route = Route::great_circle(
            trip.get_departure(),
            trip.get_arrival(),
            DEFAULT_SPACING_KM,
            DEFAULT_TOLERANCE_KM,
        )
        .unwrap();
        let track = SunTrack::synchronized(&trip, &route);
        assert_eq!(track.len(), route.len());
    }

    #[test]
    fn test_declination_constant_and_longitudes_normalized() {
        let trip = icn_lhr_trip();
        let route = Route::great_circle(
            trip.get_departure(),
            trip.get_arrival(),
            DEFAULT_SPACING_KM,
            DEFAULT_TOLERANCE_KM,
        )
        .unwrap();
        let track = SunTrack::synchronized(&trip, &route);
        let declination = track.get_state().get_declination();
        for point in track.get_points() {
            assert_eq!(point.get_latitude(), declination);
            let lon = point.get_longitude();
            assert!(lon > -180.0 && lon <= 180.0);
        }
    }

    #[test]
    fn test_total_drift_spans_flying_time() {
        let trip = icn_lhr_trip();
        let route = Route::great_circle(
            trip.get_departure(),
            trip.get_arrival(),
            DEFAULT_SPACING_KM,
            DEFAULT_TOLERANCE_KM,
        )
        .unwrap();
        let track = SunTrack::synchronized(&trip, &route);
        let first = track.get_point(0).unwrap().get_longitude();
        let last = track.get_point(track.len() - 1).unwrap().get_longitude();
        // 900 minutes at 0.25 deg/min is 225 degrees westward, wrapped.
        let westward = (first - last).rem_euclid(360.0);
        assert!((westward - 225.0).abs() < 1e-6, "drifted {}", westward);
    }

    #[test]
    fn test_degenerate_route_single_sun_point() {
        let departure_time = NaiveDate::from_ymd_opt(2022, 6, 25)
            .unwrap()
            .and_hms_opt(11, 50, 0)
            .unwrap();
        let trip =
            TripContext::from_degrees(37.4602, 126.4407, 37.4602, 126.4407, departure_time, 9.0, 0.0)
                .unwrap();
        let route = Route::great_circle(
            trip.get_departure(),
            trip.get_arrival(),
            DEFAULT_SPACING_KM,
            DEFAULT_TOLERANCE_KM,
        )
        .unwrap();
        let track = SunTrack::synchronized(&trip, &route);
        assert_eq!(track.len(), 1);
    }
}
