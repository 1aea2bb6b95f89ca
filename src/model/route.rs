use serde::Serialize;

use crate::earth::coordinate::Coordinate;
use crate::error::Error;

pub const DEFAULT_SPACING_KM: f64 = 15.0;
pub const DEFAULT_TOLERANCE_KM: f64 = 0.01;

/// An ordered sequence of points along the minor great-circle arc from
/// departure to arrival, in flight direction. Every point's longitude is
/// normalized into (-180, 180] at the point of production.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    /// Discretizes the great circle between the endpoints by stepping
    /// `spacing_km` along the running bearing; every segment except the
    /// last lies within `spacing_km +/- tolerance_km`, and both endpoints
    /// are carried through exactly.
    ///
    /// Identical endpoints yield a single-point route. Antipodal endpoints
    /// are rejected; the great circle between them is ambiguous.
    pub fn great_circle(
        departure: Coordinate,
        arrival: Coordinate,
        spacing_km: f64,
        tolerance_km: f64,
    ) -> Result<Route, Error> {
        if departure == arrival {
            return Ok(Route {
                points: vec![departure],
            });
        }
        if departure.is_antipode_of(&arrival) {
            return Err(Error::AntipodalRoute);
        }

        let mut points = vec![departure];
        let mut current = departure;
        while current.distance_to(&arrival) > spacing_km + tolerance_km {
            let heading = current.bearing_to_deg(&arrival);
            current = current.coordinate_at(spacing_km, heading);
            points.push(current);
        }
        points.push(arrival);

        Ok(Route { points })
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

    pub fn first(&self) -> &Coordinate {
        &self.points[0]
    }

    pub fn last(&self) -> &Coordinate {
        &self.points[self.points.len() - 1]
    }

    /// Great-circle length of the discretized route in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}
