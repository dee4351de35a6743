use serde::Serialize;
use std::fmt;

use crate::chart::angles::ChartAngles;
use crate::ephemeris::BodyId;
use crate::time::{BirthMoment, ResolutionMethod, ResolvedInstant};
use crate::western::houses::HouseInfo;
use crate::western::lunar_phase::MoonPhase;
use crate::western::zodiac::Sign;

/// A body placed in the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub body: BodyId,
    pub longitude: f64,
    pub sign: Sign,
    /// Degree within the sign, in [0, 30)
    pub degree: f64,
    pub exact_degree: String,
    /// Whole-sign house, 1-12
    pub house: u8,
    pub retrograde: bool,
    /// Set when the provider failed and a fixed substitute was used
    pub estimated: bool,
}

/// The ruler of the rising sign and where it is placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRuler {
    pub body: BodyId,
    pub sign: Sign,
    pub house: u8,
    pub degree: f64,
    pub exact_degree: String,
    pub retrograde: bool,
}

/// Non-fatal conditions met while building a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ChartWarning {
    /// The provider failed for an optional body; an estimate was used.
    #[serde(rename = "optionalBodyUnavailable")]
    OptionalBodyUnavailable { body: BodyId, reason: String },
    /// The UTC offset was approximated from longitude.
    #[serde(rename = "lowConfidenceTimezone")]
    LowConfidenceTimezone {
        method: ResolutionMethod,
        #[serde(rename = "offsetHours")]
        offset_hours: f64,
    },
    /// A configured retrograde flag replaced the computed one.
    #[serde(rename = "retrogradeOverride")]
    RetrogradeOverride { body: BodyId, retrograde: bool },
}

impl fmt::Display for ChartWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptionalBodyUnavailable { body, reason } => {
                write!(f, "{body} position estimated: {reason}")
            }
            Self::LowConfidenceTimezone {
                method,
                offset_hours,
            } => write!(f, "UTC offset {offset_hours:+.1}h is a {method} guess"),
            Self::RetrogradeOverride { body, retrograde } => {
                let motion = if *retrograde { "retrograde" } else { "direct" };
                write!(f, "{body} forced {motion} by configuration")
            }
        }
    }
}

/// A natal chart. Built once by `ChartAssembler`, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub birth: BirthMoment,
    pub instant: ResolvedInstant,
    pub angles: ChartAngles,
    /// One per body, in `BodyId` order
    pub placements: Vec<Placement>,
    pub houses: Vec<HouseInfo>,
    pub chart_ruler: Option<ChartRuler>,
    pub moon_phase: Option<MoonPhase>,
    /// Whole-sign house of the Midheaven; 10 unless the angles are skewed
    pub midheaven_house: u8,
    pub warnings: Vec<ChartWarning>,
}

impl Chart {
    /// Whole sign, in Swiss Ephemeris notation.
    pub const HOUSE_SYSTEM: &'static str = "W";

    pub fn house_system(&self) -> &'static str {
        Self::HOUSE_SYSTEM
    }

    pub fn rising_sign(&self) -> Sign {
        self.angles.rising_sign()
    }

    pub fn sun_sign(&self) -> Option<Sign> {
        self.placement(BodyId::Sun).map(|p| p.sign)
    }

    pub fn moon_sign(&self) -> Option<Sign> {
        self.placement(BodyId::Moon).map(|p| p.sign)
    }

    pub fn placement(&self, body: BodyId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.body == body)
    }

    pub fn estimated_bodies(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.placements.iter().filter(|p| p.estimated).map(|p| p.body)
    }
}
