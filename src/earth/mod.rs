pub mod coordinate;
pub mod solar;

/// Earth rotates 360 degrees in 24 hours.
pub const EARTH_ROTATION_DEG_PER_MINUTE: f64 = 0.25;

/// Equivalent statement of the same rate: 4 minutes of solar time per
/// degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// One hour of UTC offset spans 15 degrees of longitude.
pub const DEGREES_PER_HOUR: f64 = 15.0;
