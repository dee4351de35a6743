//! Natal chart computation.
//!
//! A [`BirthMoment`] is resolved to Universal Time ([`time`]), positions are
//! read from an [`EphemerisProvider`] ([`ephemeris`]), and [`ChartAssembler`]
//! turns them into zodiac placements with whole-sign houses ([`western`],
//! [`chart`]).

pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod time;
pub mod western;

pub use chart::{
    Chart, ChartAngles, ChartAssembler, ChartResponse, ChartSettings, ChartWarning,
    OppositeAngleMethod, Placement,
};
pub use ephemeris::{BodyId, EphemerisProvider, HouseSystem, NodeSource, SwissEphemerisAdapter};
pub use error::{ChartError, EphemerisError};
pub use time::{BirthMoment, ResolvedInstant, TimeResolver};
pub use western::{NodeRetrogradePolicy, Sign};

/// Build a chart with the Swiss Ephemeris from files at `ephemeris_path`
/// (or the default location).
pub fn natal_chart(
    moment: &BirthMoment,
    ephemeris_path: Option<std::path::PathBuf>,
    settings: ChartSettings,
) -> Result<Chart, ChartError> {
    let adapter = SwissEphemerisAdapter::new(ephemeris_path).map_err(|source| {
        ChartError::EphemerisUnavailable {
            target: "ephemeris files".to_string(),
            source,
        }
    })?;
    ChartAssembler::new(adapter, settings).assemble(moment)
}
