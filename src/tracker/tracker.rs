/*
 * Copyright (c) 2026. The Solar Flight Clock authors.
 *
 * This file is part of Solar Flight Clock.
 *
 * Solar Flight Clock is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Solar Flight Clock is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 */
use std::time::Instant;

use log::info;

use crate::earth::solar;
use crate::error::Error;
use crate::model::route::{Route, DEFAULT_SPACING_KM, DEFAULT_TOLERANCE_KM};
use crate::model::solar_clock::SolarClockSeries;
use crate::model::sun_track::SunTrack;
use crate::model::trip::TripContext;
use crate::preference::{ROUTE_SPACING_KM, ROUTE_SPACING_TOLERANCE_KM};

/// The three index-aligned sequences produced by one run: aircraft
/// positions, Sun sub-points and the observed solar clock.
pub struct TrackedFlight {
    route: Route,
    sun_track: SunTrack,
    clock: SolarClockSeries,
}

impl TrackedFlight {
    pub fn get_route(&self) -> &Route {
        &self.route
    }

    pub fn get_sun_track(&self) -> &SunTrack {
        &self.sun_track
    }

    pub fn get_clock(&self) -> &SolarClockSeries {
        &self.clock
    }

    pub fn into_parts(self) -> (Route, SunTrack, SolarClockSeries) {
        (self.route, self.sun_track, self.clock)
    }
}

/// Sequences the pipeline for a trip: discretize the great circle, derive
/// the synchronized Sun track, zip the two into the solar clock. Performs
/// no I/O beyond logging.
pub struct Tracker {
    spacing_km: f64,
    tolerance_km: f64,
}

impl Tracker {
    pub fn new() -> Self {
        let pref = crate::preference::manager();

        Self {
            spacing_km: pref.get::<f64>(ROUTE_SPACING_KM).unwrap_or(DEFAULT_SPACING_KM),
            tolerance_km: pref
                .get::<f64>(ROUTE_SPACING_TOLERANCE_KM)
                .unwrap_or(DEFAULT_TOLERANCE_KM),
        }
    }

    pub fn with_spacing(spacing_km: f64, tolerance_km: f64) -> Self {
        Self {
            spacing_km,
            tolerance_km,
        }
    }

    pub fn track(&self, trip: &TripContext) -> Result<TrackedFlight, Error> {
        let timer = Instant::now();

        let route = Route::great_circle(
            trip.get_departure(),
            trip.get_arrival(),
            self.spacing_km,
            self.tolerance_km,
        )?;
        let sun_track = SunTrack::synchronized(trip, &route);
        let noon = solar::solar_noon(trip.get_departure_time().date());
        let clock = SolarClockSeries::from_tracks(&route, &sun_track, noon);

        info!(
            "Tracked {} points over {:.0} km in {:?}",
            route.len(),
            route.total_distance(),
            timer.elapsed()
        );

        Ok(TrackedFlight {
            route,
            sun_track,
            clock,
        })
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
