use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::ephemeris::GeoLocation;
use crate::error::ChartError;

/// Date formats accepted for birth dates.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Years the engine accepts; keeps the ±1 day rollover inside chrono's range.
const MIN_YEAR: i32 = -9999;
const MAX_YEAR: i32 = 9999;

/// Civil UTC offsets in use span UTC-12 to UTC+14.
const MIN_OFFSET_HOURS: f64 = -12.0;
const MAX_OFFSET_HOURS: f64 = 14.0;

/// Local civil birth date and clock time at a location.
///
/// Only constructed through [`BirthMoment::new`] or [`BirthMoment::parse`],
/// so every value satisfies `hour < 24`, `minute < 60` and carries finite,
/// in-range coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthMoment {
    date: NaiveDate,
    hour: u32,
    minute: u32,
    latitude: f64,
    longitude: f64,
    place: Option<String>,
    /// Offset supplied by the caller (or a geocoder), hours east of Greenwich
    #[serde(skip_serializing_if = "Option::is_none")]
    utc_offset: Option<f64>,
}

impl BirthMoment {
    pub fn new(
        date: NaiveDate,
        hour: u32,
        minute: u32,
        latitude: f64,
        longitude: f64,
        place: Option<&str>,
    ) -> Result<Self, ChartError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(ChartError::invalid(
                "date",
                format!("year {} outside {}..={}", date.year(), MIN_YEAR, MAX_YEAR),
            ));
        }
        if hour >= 24 {
            return Err(ChartError::invalid("hour", format!("{hour} is not in 0..24")));
        }
        if minute >= 60 {
            return Err(ChartError::invalid("minute", format!("{minute} is not in 0..60")));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ChartError::invalid(
                "latitude",
                format!("{latitude} is not in -90..=90"),
            ));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ChartError::invalid(
                "longitude",
                format!("{longitude} is not in -180..=180"),
            ));
        }

        let place = place
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Self {
            date,
            hour,
            minute,
            latitude,
            longitude,
            place,
            utc_offset: None,
        })
    }

    /// Use a known UTC offset instead of looking one up from the place or
    /// longitude.
    pub fn with_utc_offset(mut self, hours: f64) -> Result<Self, ChartError> {
        if !hours.is_finite() || !(MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&hours) {
            return Err(ChartError::invalid(
                "utc_offset",
                format!("{hours} is not in {MIN_OFFSET_HOURS}..={MAX_OFFSET_HOURS}"),
            ));
        }
        self.utc_offset = Some(hours);
        Ok(self)
    }

    /// Parse user input: `YYYY-MM-DD`, `DD/MM/YYYY` or `DD-MM-YYYY` dates and
    /// 24-hour `HH:MM` times.
    pub fn parse(
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        place: Option<&str>,
    ) -> Result<Self, ChartError> {
        let date_str = date.trim();
        let parsed_date = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date_str, fmt).ok())
            .ok_or_else(|| {
                ChartError::invalid(
                    "date",
                    format!(
                        "'{date_str}' must be in YYYY-MM-DD, DD/MM/YYYY, or DD-MM-YYYY format and be a valid date"
                    ),
                )
            })?;

        let time_str = time.trim();
        let parsed_time = NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|_| {
            ChartError::invalid(
                "time",
                format!("'{time_str}' must be in HH:MM format (24-hour) and be a valid time"),
            )
        })?;

        Self::new(
            parsed_date,
            parsed_time.hour(),
            parsed_time.minute(),
            latitude,
            longitude,
            place,
        )
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    pub fn utc_offset(&self) -> Option<f64> {
        self.utc_offset
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation {
            lat: self.latitude,
            lon: self.longitude,
        }
    }

    /// Local clock time as decimal hours.
    pub fn local_hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_all_date_formats() {
        for date in ["1974-11-22", "22/11/1974", "22-11-1974"] {
            let moment = BirthMoment::parse(date, "19:10", -34.9285, 138.6007, None).unwrap();
            assert_eq!(moment.date(), ymd(1974, 11, 22), "{date}");
            assert_eq!((moment.hour(), moment.minute()), (19, 10));
        }
    }

    #[test]
    fn rejects_bad_dates_and_times() {
        let err = BirthMoment::parse("1974-02-30", "10:00", 0.0, 0.0, None).unwrap_err();
        assert!(matches!(err, ChartError::InvalidBirthMoment { field: "date", .. }));

        let err = BirthMoment::parse("1974-11-22", "24:00", 0.0, 0.0, None).unwrap_err();
        assert!(matches!(err, ChartError::InvalidBirthMoment { field: "time", .. }));

        let err = BirthMoment::parse("1974-11-22", "7pm", 0.0, 0.0, None).unwrap_err();
        assert!(matches!(err, ChartError::InvalidBirthMoment { field: "time", .. }));
    }

    #[test]
    fn enforces_clock_and_coordinate_ranges() {
        let date = ymd(1990, 6, 15);
        assert!(matches!(
            BirthMoment::new(date, 24, 0, 0.0, 0.0, None),
            Err(ChartError::InvalidBirthMoment { field: "hour", .. })
        ));
        assert!(matches!(
            BirthMoment::new(date, 23, 60, 0.0, 0.0, None),
            Err(ChartError::InvalidBirthMoment { field: "minute", .. })
        ));
        assert!(matches!(
            BirthMoment::new(date, 12, 0, 91.0, 0.0, None),
            Err(ChartError::InvalidBirthMoment { field: "latitude", .. })
        ));
        assert!(matches!(
            BirthMoment::new(date, 12, 0, 0.0, f64::NAN, None),
            Err(ChartError::InvalidBirthMoment { field: "longitude", .. })
        ));
        assert!(BirthMoment::new(date, 23, 59, -90.0, 180.0, None).is_ok());
    }

    #[test]
    fn blank_place_is_dropped() {
        let moment = BirthMoment::new(ymd(1990, 6, 15), 14, 30, 40.7, -74.0, Some("  ")).unwrap();
        assert_eq!(moment.place(), None);
        let moment =
            BirthMoment::new(ymd(1990, 6, 15), 14, 30, 40.7, -74.0, Some(" New York ")).unwrap();
        assert_eq!(moment.place(), Some("New York"));
        assert!((moment.local_hours() - 14.5).abs() < 1e-12);
    }

    #[test]
    fn utc_offset_is_range_checked() {
        let moment = BirthMoment::new(ymd(1990, 6, 15), 14, 30, 40.7, -74.0, None).unwrap();
        assert_eq!(moment.utc_offset(), None);

        let moment = moment.with_utc_offset(-4.0).unwrap();
        assert_eq!(moment.utc_offset(), Some(-4.0));

        for bad in [-12.5, 14.5, f64::NAN] {
            let err = moment.clone().with_utc_offset(bad).unwrap_err();
            assert!(matches!(err, ChartError::InvalidBirthMoment { field: "utc_offset", .. }));
        }
    }
}
