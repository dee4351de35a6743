//! Zodiac signs and longitude interpretation.
//!
//! Turns an ecliptic longitude into a sign, a degree within that sign and the
//! `D°MM'SS"` string shown to users. Minutes and seconds are truncated, never
//! rounded, so the display can be compared against other chart software.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Signs in zodiac order, starting at 0° Aries.
pub const SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Position in the zodiac, 0 (Aries) to 11 (Pisces).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        SIGNS[index % 12]
    }

    pub fn from_longitude(longitude: f64) -> Self {
        let lon = normalize_degrees(longitude);
        Self::from_index(((lon / 30.0).floor() as usize).min(11))
    }

    /// The sign `steps` places further along the zodiac.
    pub fn offset(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps % 12)
    }

    pub fn opposite(self) -> Self {
        self.offset(6)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An interpreted ecliptic longitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacPosition {
    /// Normalized longitude in [0, 360)
    pub longitude: f64,
    pub sign: Sign,
    /// Degree within the sign, in [0, 30)
    pub degree: f64,
    pub exact_degree: String,
}

/// Normalize an angle to [0, 360) degrees. Non-finite input maps to 0.
pub fn normalize_degrees(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Sign, degree-in-sign and DMS string for an ecliptic longitude.
pub fn interpret(longitude: f64) -> ZodiacPosition {
    let lon = normalize_degrees(longitude);
    let sign = Sign::from_longitude(lon);
    let degree = (lon - sign.index() as f64 * 30.0).max(0.0);
    ZodiacPosition {
        longitude: lon,
        sign,
        degree,
        exact_degree: format_dms(degree),
    }
}

/// Format a degree-in-sign as `D°MM'SS"`, truncating minutes and seconds.
pub fn format_dms(degree: f64) -> String {
    let deg = degree.floor();
    let minutes_float = (degree - deg) * 60.0;
    let minutes = minutes_float.floor();
    let seconds = ((minutes_float - minutes) * 60.0).floor();
    format!("{}°{:02}'{:02}\"", deg as i64, minutes as i64, seconds as i64)
}
