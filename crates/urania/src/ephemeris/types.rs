use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EphemerisError;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Bodies placed in a natal chart, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    NorthNode,
    SouthNode,
}

/// Every supported body, in chart order.
pub const ALL_BODIES: [BodyId; 13] = [
    BodyId::Sun,
    BodyId::Moon,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::Uranus,
    BodyId::Neptune,
    BodyId::Pluto,
    BodyId::Chiron,
    BodyId::NorthNode,
    BodyId::SouthNode,
];

impl BodyId {
    pub const fn all() -> &'static [BodyId] {
        &ALL_BODIES
    }

    /// Display name used in chart output ("North Node").
    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Chiron => "Chiron",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
        }
    }

    /// Stable lowercase identifier ("north_node").
    pub fn id(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::Chiron => "chiron",
            Self::NorthNode => "north_node",
            Self::SouthNode => "south_node",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase().replace([' ', '-'], "_");
        ALL_BODIES.iter().copied().find(|b| b.id() == id)
    }

    /// Sun and Moon.
    pub fn is_luminary(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }

    pub fn is_node(self) -> bool {
        matches!(self, Self::NorthNode | Self::SouthNode)
    }

    /// Bodies whose absence is papered over with an estimate instead of
    /// failing the chart.
    pub fn is_optional(self) -> bool {
        matches!(self, Self::Chiron | Self::NorthNode | Self::SouthNode)
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which lunar node the provider should compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeSource {
    /// Smooth mean motion; always moving backwards through the zodiac.
    Mean,
    /// Osculating node; occasionally stationary or direct.
    #[default]
    True,
}

/// Raw provider output for one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyReading {
    pub body: BodyId,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    /// Speed in longitude (degrees per day); `None` for fixed substitutes
    pub daily_motion: Option<f64>,
    /// True when the reading stands in for a failed provider call
    pub estimated: bool,
}

impl BodyReading {
    pub fn measured(body: BodyId, longitude: f64, daily_motion: f64) -> Self {
        Self {
            body,
            longitude,
            daily_motion: Some(daily_motion),
            estimated: false,
        }
    }

    pub fn estimated(body: BodyId, longitude: f64, daily_motion: Option<f64>) -> Self {
        Self {
            body,
            longitude,
            daily_motion,
            estimated: true,
        }
    }

    /// The point 180 degrees away, moving with the same speed.
    pub fn opposite(&self, body: BodyId) -> Self {
        Self {
            body,
            longitude: (self.longitude + 180.0) % 360.0,
            daily_motion: self.daily_motion,
            estimated: self.estimated,
        }
    }
}

/// Ascendant and Midheaven longitudes from a house computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleReading {
    pub ascendant: f64,
    pub midheaven: f64,
}

/// House systems the provider can use to locate the angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
    Porphyry,
}

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, HouseSystem, u8)] = &[
    ("placidus", HouseSystem::Placidus, b'P'),
    ("whole_sign", HouseSystem::WholeSign, b'W'),
    ("koch", HouseSystem::Koch, b'K'),
    ("equal", HouseSystem::Equal, b'E'),
    ("regiomontanus", HouseSystem::Regiomontanus, b'R'),
    ("campanus", HouseSystem::Campanus, b'C'),
    ("alcabitius", HouseSystem::Alcabitius, b'A'),
    ("morinus", HouseSystem::Morinus, b'M'),
    ("porphyry", HouseSystem::Porphyry, b'O'),
];

impl HouseSystem {
    /// Single-letter Swiss Ephemeris code.
    pub fn code(self) -> u8 {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| *system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(b'P')
    }

    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| *system == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("placidus")
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _, code)| {
                *name == lower || (lower.len() == 1 && lower.as_bytes()[0] == code.to_ascii_lowercase())
            })
            .map(|(_, system, _)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _, _)| name.to_string()).collect(),
            })
    }
}
