use std::f64::consts::PI;

use serde::Serialize;

use crate::error::Error;

/// Wraps any real-valued longitude into (-180, 180].
///
/// `rem_euclid` handles values arbitrarily far outside the range, not just
/// a single wrap.
pub fn normalize_longitude(longitude: f64) -> f64 {
    // In-range values pass through unchanged so valid caller input is
    // never perturbed by rem_euclid round-off.
    if longitude > -180.0 && longitude <= 180.0 {
        return longitude;
    }
    let wrapped = longitude.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    const ANTIPODE_EPSILON: f64 = 1e-9;

    /// Builds a coordinate, normalizing the longitude into (-180, 180].
    /// The latitude is taken as given; use [`Coordinate::checked`] at the
    /// input boundary.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude: normalize_longitude(longitude),
        }
    }

    /// Validates caller-supplied values: latitude must lie in [-90, 90]
    /// and longitude in [-180, 180].
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self::new(latitude, longitude))
    }

    pub fn bearing_to(&self, l: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lon2 = l.longitude.to_radians();

        let d_lon = lon1 - lon2;
        let d_lat = lat1 - lat2;

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let d = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        let x = ((lat2.sin() - lat1.sin() * d.cos()) / (d.sin() * lat1.cos())).clamp(-1.0, 1.0);
        let mut heading = x.acos();

        if (lon2 - lon1).sin() < 0.0 {
            heading = 2.0 * PI - heading;
        }

        heading
    }

    pub fn bearing_to_deg(&self, l: &Coordinate) -> f64 {
        self.bearing_to(l).to_degrees()
    }

    /// The point `distance` kilometres from here along the given true
    /// heading (degrees), following the great circle.
    pub fn coordinate_at(&self, distance: f64, heading: f64) -> Coordinate {
        let d = distance / Self::EARTH_RADIUS_KM;
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let tc = heading.to_radians();
        let lat = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * tc.cos()).asin();
        let d_lon = (tc.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat.sin());

        Coordinate::new(lat.to_degrees(), (lon1 + d_lon).to_degrees())
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_to(&self, l: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lon2 = l.longitude.to_radians();
        let d_lon = lon1 - lon2;
        let d_lat = lat1 - lat2;

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let d = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Self::EARTH_RADIUS_KM * d.abs()
    }

    /// The diametrically opposite point on the sphere.
    pub fn antipode(&self) -> Coordinate {
        Coordinate::new(-self.latitude, self.longitude + 180.0)
    }

    /// True when `l` is the exact antipode of this point, within a tight
    /// epsilon. Near-antipodal pairs are still considered routable.
    pub fn is_antipode_of(&self, l: &Coordinate) -> bool {
        let opposite = l.antipode();
        if (self.latitude - opposite.latitude).abs() >= Self::ANTIPODE_EPSILON {
            return false;
        }
        // Longitude is degenerate at the poles; opposite latitudes alone
        // make a pole pair antipodal.
        if self.latitude.abs() >= 90.0 - Self::ANTIPODE_EPSILON {
            return true;
        }
        normalize_longitude(self.longitude - opposite.longitude).abs() < Self::ANTIPODE_EPSILON
    }

    pub fn get_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn get_longitude(&self) -> f64 {
        self.longitude
    }
}
