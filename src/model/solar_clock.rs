use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::earth::MINUTES_PER_DEGREE;
use crate::model::route::Route;
use crate::model::sun_track::SunTrack;

/// The apparent local solar time an observer aboard the aircraft would
/// read at each route index. Only the time of day is meaningful; the date
/// is discarded.
#[derive(Debug, Clone, Serialize)]
pub struct SolarClockSeries {
    times: Vec<NaiveTime>,
}

impl SolarClockSeries {
    /// Zips the aircraft and Sun tracks into the observed clock. A one
    /// degree gap between the Sun's sub-point and the observer is four
    /// minutes of local solar time; the sign convention
    /// `noon - 4 * (sun_lon - plane_lon)` is deliberately carried over
    /// from the reference model unchanged.
    pub fn from_tracks(route: &Route, sun_track: &SunTrack, noon: NaiveDateTime) -> Self {
        let times = route
            .get_points()
            .iter()
            .zip(sun_track.get_points())
            .map(|(plane, sun)| {
                let offset_minutes =
                    MINUTES_PER_DEGREE * (sun.get_longitude() - plane.get_longitude());
                (noon - Duration::seconds((offset_minutes * 60.0).round() as i64)).time()
            })
            .collect();

        SolarClockSeries { times }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn get_times(&self) -> &[NaiveTime] {
        &self.times
    }

    pub fn get_time(&self, pos: usize) -> Option<NaiveTime> {
        self.times.get(pos).copied()
    }
}
