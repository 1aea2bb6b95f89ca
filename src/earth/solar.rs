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
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::{DEGREES_PER_HOUR, MINUTES_PER_DEGREE};

/// Ordinal day within the calendar year, in [1, 366].
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

// The seasonal angle shared by the declination and equation-of-time
// approximations. Day 81 is the model's March-equinox reference.
fn seasonal_angle_rad(day_of_year: u32) -> f64 {
    (360.0 / 365.0 * (day_of_year as f64 - 81.0)).to_radians()
}

/// Solar declination (degrees), single-harmonic seasonal approximation:
/// `23.45 * sin(360/365 * (d - 81))`.
pub fn declination(day_of_year: u32) -> f64 {
    23.45 * seasonal_angle_rad(day_of_year).sin()
}

/// Approximate equation of time (minutes).
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    let b = seasonal_angle_rad(day_of_year);

    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Correction (minutes) from local standard time to local solar time at the
/// given longitude: 4 minutes per degree east of the standard meridian,
/// plus the equation of time.
pub fn time_correction_minutes(longitude: f64, utc_offset_hours: f64, day_of_year: u32) -> f64 {
    let standard_meridian = DEGREES_PER_HOUR * utc_offset_hours;
    MINUTES_PER_DEGREE * (longitude - standard_meridian) + equation_of_time_minutes(day_of_year)
}

/// Local solar time for an observer at `longitude` in the zone given by
/// `utc_offset_hours`, reading the local clock `local_time`.
pub fn local_solar_time(
    local_time: NaiveDateTime,
    longitude: f64,
    utc_offset_hours: f64,
) -> NaiveDateTime {
    let day = day_of_year(local_time.date());
    let correction = time_correction_minutes(longitude, utc_offset_hours, day);
    local_time + Duration::seconds((correction * 60.0).round() as i64)
}

/// The model's fixed reference for "Sun overhead along the standard
/// meridian": the same calendar date at 12:00:00 local standard time.
pub fn solar_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_year() {
        let date = NaiveDate::from_ymd_opt(2022, 6, 25).unwrap();
        assert_eq!(day_of_year(date), 176);
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(day_of_year(date), 366);
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(day_of_year(date), 1);
    }

    #[test]
    fn test_declination_reference_day_is_zero() {
        assert!(declination(81).abs() < 1e-9);
    }

    #[test]
    fn test_declination_bounds() {
        for day in 1..=366 {
            let d = declination(day);
            assert!(d >= -23.45 && d <= 23.45, "day {} gave {}", day, d);
        }
    }

    #[test]
    fn test_declination_solstices() {
        // Northern summer solstice sits near the model's positive peak
        assert!(declination(172) > 23.4);
        // Northern winter solstice near the negative peak
        assert!(declination(355) < -23.3);
    }

    #[test]
    fn test_declination_june_25() {
        let d = declination(176);
        assert!(d > 23.3 && d < 23.5);
    }

    #[test]
    fn test_equation_of_time() {
        // At the reference day only the cos term survives
        assert!((equation_of_time_minutes(81) - -7.53).abs() < 1e-9);
        // Early November peak, mid-February trough
        assert!(equation_of_time_minutes(307) > 15.0);
        assert!(equation_of_time_minutes(42) < -13.0);
    }

    #[test]
    fn test_solar_model_is_deterministic() {
        for day in [1, 81, 176, 307, 366] {
            assert_eq!(declination(day), declination(day));
            assert_eq!(equation_of_time_minutes(day), equation_of_time_minutes(day));
        }
    }

    #[test]
    fn test_time_correction_no_meridian_term() {
        // Longitude 0, offset 0: only the equation of time remains
        let day = 176;
        let correction = time_correction_minutes(0.0, 0.0, day);
        assert_eq!(correction, equation_of_time_minutes(day));
    }

    #[test]
    fn test_local_solar_time_east_of_meridian() {
        // 7.5 degrees east of the standard meridian is +30 minutes, before
        // the equation-of-time term.
        let t = NaiveDate::from_ymd_opt(2022, 3, 22).unwrap() // day 81
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let lst = local_solar_time(t, 7.5, 0.0);
        let expected = t + Duration::seconds((30.0 * 60.0 + -7.53 * 60.0_f64).round() as i64);
        assert_eq!(lst, expected);
    }

    #[test]
    fn test_solar_noon() {
        let date = NaiveDate::from_ymd_opt(2022, 6, 25).unwrap();
        let noon = solar_noon(date);
        assert_eq!(noon.date(), date);
        assert_eq!(noon.time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }
}
