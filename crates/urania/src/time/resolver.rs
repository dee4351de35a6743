use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::birth::BirthMoment;
use crate::time::julian::date_hours_to_jd;
use crate::time::regions::{find_region, normalize_place, RegionRule};

/// How the UTC offset of a birth moment was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionMethod {
    /// The caller supplied the offset.
    ExplicitOffset,
    /// The place label matched an entry of the historical region table.
    HistoricalTable,
    /// A place label was given but unknown; offset approximated from longitude.
    CoordinateApprox,
    /// Only coordinates were available; offset approximated from longitude.
    LongitudeFallback,
}

impl ResolutionMethod {
    pub fn tag(self) -> &'static str {
        match self {
            Self::ExplicitOffset => "explicit-offset",
            Self::HistoricalTable => "historical-table",
            Self::CoordinateApprox => "coordinate-approx",
            Self::LongitudeFallback => "longitude-fallback",
        }
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Low,
}

/// A birth moment pinned to Universal Time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedInstant {
    /// UTC calendar date; may be one day before or after the local date
    pub utc_date: NaiveDate,
    /// UTC decimal hours in [0, 24)
    pub utc_hours: f64,
    /// Offset subtracted from local time, in hours east of Greenwich
    pub offset_hours: f64,
    pub method: ResolutionMethod,
    pub confidence: Confidence,
    pub region: Option<&'static str>,
    pub dst_active: bool,
}

impl ResolvedInstant {
    /// Julian Day (UT) of the instant.
    pub fn julian_day(&self) -> f64 {
        date_hours_to_jd(self.utc_date, self.utc_hours)
    }

    pub fn is_low_confidence(&self) -> bool {
        self.confidence == Confidence::Low
    }

    /// Days between the local birth date and the UTC date (-1, 0 or 1).
    pub fn day_shift(&self, local_date: NaiveDate) -> i64 {
        (self.utc_date - local_date).num_days()
    }

    /// UTC clock time to the nearest minute ("08:40").
    pub fn utc_clock(&self) -> String {
        let total_minutes = ((self.utc_hours * 60.0).round() as u32) % (24 * 60);
        format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }

    /// Human-readable description, e.g. "UTC+10.5 (adelaide, DST active)".
    pub fn summary(&self) -> String {
        let mut summary = format!("UTC{:+.1}", self.offset_hours);
        match self.method {
            ResolutionMethod::ExplicitOffset => summary.push_str(" (supplied offset)"),
            ResolutionMethod::HistoricalTable => {
                let region = self.region.unwrap_or("unknown");
                let dst = if self.dst_active {
                    "DST active"
                } else {
                    "Standard time"
                };
                summary.push_str(&format!(" ({region}, {dst})"));
            }
            ResolutionMethod::CoordinateApprox => {
                summary.push_str(" (coordinate-based approximation)")
            }
            ResolutionMethod::LongitudeFallback => {
                summary.push_str(" (longitude approximation - less accurate)")
            }
        }
        summary
    }
}

/// Resolves local birth times to UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeResolver;

struct OffsetChoice {
    offset: f64,
    method: ResolutionMethod,
    region: Option<&'static RegionRule>,
    dst_active: bool,
}

impl TimeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Best-effort UTC instant for a birth moment. Never fails; uncertain
    /// results are tagged with `Confidence::Low`.
    pub fn resolve(&self, moment: &BirthMoment) -> ResolvedInstant {
        let date = moment.date();
        let choice = self.determine_offset(date.year(), date.month(), moment);
        let (utc_date, utc_hours) = local_to_utc(date, moment.local_hours(), choice.offset);

        let confidence = match choice.method {
            ResolutionMethod::ExplicitOffset | ResolutionMethod::HistoricalTable => {
                Confidence::High
            }
            ResolutionMethod::CoordinateApprox | ResolutionMethod::LongitudeFallback => {
                Confidence::Low
            }
        };

        let instant = ResolvedInstant {
            utc_date,
            utc_hours,
            offset_hours: choice.offset,
            method: choice.method,
            confidence,
            region: choice.region.map(|r| r.key),
            dst_active: choice.dst_active,
        };

        info!(
            "Timezone calculation: {} {} Local {:02}:{:02} = UTC {} {:.2} (offset {:+.1}h, {})",
            moment.place().unwrap_or("-"),
            date,
            moment.hour(),
            moment.minute(),
            instant.utc_date,
            instant.utc_hours,
            instant.offset_hours,
            instant.method
        );
        instant
    }

    fn determine_offset(&self, year: i32, month: u32, moment: &BirthMoment) -> OffsetChoice {
        if let Some(offset) = moment.utc_offset() {
            return OffsetChoice {
                offset,
                method: ResolutionMethod::ExplicitOffset,
                region: None,
                dst_active: false,
            };
        }

        let longitude = moment.longitude();
        let Some(place) = moment.place() else {
            let offset = approximate_offset(longitude);
            warn!("Using longitude approximation for timezone: {offset:+.1}h");
            return OffsetChoice {
                offset,
                method: ResolutionMethod::LongitudeFallback,
                region: None,
                dst_active: false,
            };
        };

        if let Some(rule) = normalize_place(place).and_then(find_region) {
            let dst_active = rule.dst_active(year, month);
            return OffsetChoice {
                offset: rule.offset_for(year, month),
                method: ResolutionMethod::HistoricalTable,
                region: Some(rule),
                dst_active,
            };
        }

        let offset = approximate_offset(longitude);
        warn!("No timezone rule for '{place}', approximating from coordinates: {offset:+.1}h (ignores borders and DST)");
        OffsetChoice {
            offset,
            method: ResolutionMethod::CoordinateApprox,
            region: None,
            dst_active: false,
        }
    }
}

/// Longitude-based offset rounded to the nearest half hour (ties to even).
pub fn approximate_offset(longitude: f64) -> f64 {
    (longitude / 15.0 * 2.0).round_ties_even() / 2.0
}

/// Shift a local date and decimal time by `offset` hours, rolling the date
/// over when the result leaves [0, 24).
pub fn local_to_utc(date: NaiveDate, local_hours: f64, offset: f64) -> (NaiveDate, f64) {
    let mut utc_hours = local_hours - offset;
    let mut utc_date = date;
    if utc_hours < 0.0 {
        utc_hours += 24.0;
        utc_date = date.pred_opt().unwrap_or(date);
    } else if utc_hours >= 24.0 {
        utc_hours -= 24.0;
        utc_date = date.succ_opt().unwrap_or(date);
    }
    (utc_date, utc_hours)
}
