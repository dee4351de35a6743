//! Moon phase from the Sun-Moon elongation.
//!
//! Seven named phases over 45° octants. The New Moon spans both octants
//! around conjunction (315° to 45°).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::western::zodiac::normalize_degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhaseName {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
}

impl MoonPhaseName {
    pub fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
        }
    }
}

impl fmt::Display for MoonPhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhase {
    pub phase: MoonPhaseName,
    /// Moon minus Sun longitude, in [0, 360)
    pub elongation: f64,
    /// Approximate lit fraction, in percent
    pub illumination: u8,
}

/// Phase of the Moon for the given Sun and Moon longitudes.
pub fn moon_phase(sun_longitude: f64, moon_longitude: f64) -> MoonPhase {
    let elongation = normalize_degrees(moon_longitude - sun_longitude);
    let (phase, illumination) = match elongation {
        e if !(45.0..315.0).contains(&e) => (MoonPhaseName::NewMoon, 0),
        e if e < 90.0 => (MoonPhaseName::WaxingCrescent, 25),
        e if e < 135.0 => (MoonPhaseName::FirstQuarter, 50),
        e if e < 180.0 => (MoonPhaseName::WaxingGibbous, 75),
        e if e < 225.0 => (MoonPhaseName::FullMoon, 100),
        e if e < 270.0 => (MoonPhaseName::WaningGibbous, 75),
        _ => (MoonPhaseName::LastQuarter, 50),
    };
    MoonPhase {
        phase,
        elongation,
        illumination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octant_boundaries() {
        assert_eq!(moon_phase(100.0, 100.0).phase, MoonPhaseName::NewMoon);
        assert_eq!(moon_phase(100.0, 145.0).phase, MoonPhaseName::WaxingCrescent);
        assert_eq!(moon_phase(100.0, 190.0).phase, MoonPhaseName::FirstQuarter);
        assert_eq!(moon_phase(100.0, 280.0).phase, MoonPhaseName::FullMoon);
        assert_eq!(moon_phase(100.0, 10.0).phase, MoonPhaseName::LastQuarter);
        assert_eq!(moon_phase(100.0, 60.0).phase, MoonPhaseName::NewMoon);
        assert_eq!(moon_phase(100.0, 54.0).phase, MoonPhaseName::LastQuarter);
    }

    #[test]
    fn elongation_wraps_past_aries() {
        let phase = moon_phase(350.0, 20.0);
        assert!((phase.elongation - 30.0).abs() < 1e-9);
        assert_eq!(phase.phase, MoonPhaseName::NewMoon);
        assert_eq!(phase.illumination, 0);
    }

    #[test]
    fn full_moon_is_fully_lit() {
        let phase = moon_phase(0.0, 200.0);
        assert_eq!(phase.phase, MoonPhaseName::FullMoon);
        assert_eq!(phase.illumination, 100);
        assert_eq!(phase.phase.to_string(), "Full Moon");
    }
}
