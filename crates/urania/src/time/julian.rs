//! Julian Day arithmetic on the proleptic Gregorian calendar.

use chrono::{Datelike, NaiveDate};
use swisseph::swe::julday;

/// Julian Day of J2000.0 (2000-01-01 12:00).
pub const J2000: f64 = 2_451_545.0;

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// SE_GREG_CAL
const GREGORIAN: u32 = 1;

/// Julian Day (UT) for a UTC date and decimal hour of that date.
pub fn date_hours_to_jd(date: NaiveDate, hours: f64) -> f64 {
    julday(
        date.year(),
        date.month() as i32,
        date.day() as i32,
        hours,
        GREGORIAN,
    )
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}
