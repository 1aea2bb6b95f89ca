pub mod route;
pub mod solar_clock;
pub mod sun_track;
pub mod trip;
