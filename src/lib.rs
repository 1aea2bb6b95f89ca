#![forbid(unsafe_code)]

//! Computes the apparent local solar time aboard a great-circle flight by
//! tracking the Sun's sub-point against the aircraft's moving longitude.

pub mod earth;
pub mod error;
pub mod model;
pub mod preference;
pub mod tracker;
pub mod util;

pub use error::Error;
pub use model::route::Route;
pub use model::solar_clock::SolarClockSeries;
pub use model::sun_track::SunTrack;
pub use model::trip::TripContext;
pub use tracker::tracker::{TrackedFlight, Tracker};
