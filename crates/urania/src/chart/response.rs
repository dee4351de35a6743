//! JSON contract for chart consumers.
//!
//! Signs and bodies are rendered as display names ("North Node"), field
//! names are camelCase and the house system is always `"W"`.

use serde::Serialize;

use crate::chart::types::{Chart, ChartRuler, ChartWarning, Placement};
use crate::time::{Confidence, ResolutionMethod, ResolvedInstant};
use crate::western::houses::HouseInfo;
use crate::western::lunar_phase::MoonPhase;
use crate::western::zodiac::{Sign, ZodiacPosition};

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub rising_sign: String,
    pub sun_sign: String,
    pub moon_sign: String,
    pub ascendant: AngleDto,
    pub midheaven: AngleDto,
    pub descendant: AngleDto,
    pub imum_coeli: AngleDto,
    pub placements: Vec<PlacementDto>,
    pub house_system: &'static str,
    pub houses: Vec<HouseDto>,
    pub chart_ruler: Option<ChartRulerDto>,
    pub moon_phase: Option<MoonPhaseDto>,
    pub midheaven_house: u8,
    pub timezone: TimezoneDto,
    pub warnings: Vec<ChartWarning>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleDto {
    pub sign: String,
    pub degree: f64,
    pub exact_degree: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDto {
    pub planet: String,
    pub sign: String,
    pub house: u8,
    pub degree: f64,
    pub exact_degree: String,
    pub retrograde: bool,
    pub estimated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseDto {
    pub house: u8,
    pub sign: String,
    pub ruler: String,
    pub planets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRulerDto {
    pub planet: String,
    pub sign: String,
    pub house: u8,
    pub degree: f64,
    pub exact_degree: String,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseDto {
    pub phase_name: String,
    pub illumination: f64,
    pub elongation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneDto {
    pub method: ResolutionMethod,
    pub confidence: Confidence,
    pub offset_hours: f64,
    pub region: Option<String>,
    pub dst_active: bool,
    pub utc_date: String,
    pub utc_time: String,
    pub julian_day: f64,
    pub summary: String,
}

fn sign_name(sign: Option<Sign>) -> String {
    sign.map_or_else(|| UNKNOWN.to_string(), |s| s.name().to_string())
}

impl From<&ZodiacPosition> for AngleDto {
    fn from(pos: &ZodiacPosition) -> Self {
        Self {
            sign: pos.sign.name().to_string(),
            degree: pos.degree,
            exact_degree: pos.exact_degree.clone(),
        }
    }
}

impl From<&Placement> for PlacementDto {
    fn from(p: &Placement) -> Self {
        Self {
            planet: p.body.name().to_string(),
            sign: p.sign.name().to_string(),
            house: p.house,
            degree: p.degree,
            exact_degree: p.exact_degree.clone(),
            retrograde: p.retrograde,
            estimated: p.estimated,
        }
    }
}

impl From<&HouseInfo> for HouseDto {
    fn from(h: &HouseInfo) -> Self {
        Self {
            house: h.house,
            sign: h.sign.name().to_string(),
            ruler: h.ruler.name().to_string(),
            planets: h.planets.iter().map(|b| b.name().to_string()).collect(),
        }
    }
}

impl From<&ChartRuler> for ChartRulerDto {
    fn from(r: &ChartRuler) -> Self {
        Self {
            planet: r.body.name().to_string(),
            sign: r.sign.name().to_string(),
            house: r.house,
            degree: r.degree,
            exact_degree: r.exact_degree.clone(),
            retrograde: r.retrograde,
        }
    }
}

impl From<&MoonPhase> for MoonPhaseDto {
    fn from(m: &MoonPhase) -> Self {
        Self {
            phase_name: m.phase.label().to_string(),
            illumination: f64::from(m.illumination),
            elongation: m.elongation,
        }
    }
}

impl From<&ResolvedInstant> for TimezoneDto {
    fn from(i: &ResolvedInstant) -> Self {
        Self {
            method: i.method,
            confidence: i.confidence,
            offset_hours: i.offset_hours,
            region: i.region.map(str::to_string),
            dst_active: i.dst_active,
            utc_date: i.utc_date.format("%Y-%m-%d").to_string(),
            utc_time: i.utc_clock(),
            julian_day: i.julian_day(),
            summary: i.summary(),
        }
    }
}

impl From<&Chart> for ChartResponse {
    fn from(chart: &Chart) -> Self {
        Self {
            rising_sign: chart.rising_sign().name().to_string(),
            sun_sign: sign_name(chart.sun_sign()),
            moon_sign: sign_name(chart.moon_sign()),
            ascendant: AngleDto::from(&chart.angles.ascendant),
            midheaven: AngleDto::from(&chart.angles.midheaven),
            descendant: AngleDto::from(&chart.angles.descendant),
            imum_coeli: AngleDto::from(&chart.angles.imum_coeli),
            placements: chart.placements.iter().map(PlacementDto::from).collect(),
            house_system: chart.house_system(),
            houses: chart.houses.iter().map(HouseDto::from).collect(),
            chart_ruler: chart.chart_ruler.as_ref().map(ChartRulerDto::from),
            moon_phase: chart.moon_phase.as_ref().map(MoonPhaseDto::from),
            midheaven_house: chart.midheaven_house,
            timezone: TimezoneDto::from(&chart.instant),
            warnings: chart.warnings.clone(),
        }
    }
}

impl ChartResponse {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
