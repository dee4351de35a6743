//! Error types for the chart engine.
//!
//! `EphemerisError` is what a provider reports; `ChartError` is what chart
//! assembly surfaces to callers. Recoverable conditions (estimated bodies,
//! approximate timezones) are not errors, see `chart::ChartWarning`.

use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate position for {target} at JD {jd_ut}: {message}")]
    CalculationFailed {
        target: String,
        jd_ut: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Fatal chart assembly errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Malformed birth date, time or coordinates.
    #[error("Invalid birth moment ({field}): {message}")]
    InvalidBirthMoment { field: &'static str, message: String },
    /// The provider failed for a required body or for the chart angles.
    #[error("Ephemeris unavailable for {target}: {source}")]
    EphemerisUnavailable {
        target: String,
        #[source]
        source: EphemerisError,
    },
}

impl ChartError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidBirthMoment {
            field,
            message: message.into(),
        }
    }

    /// Name of the body or angle query that failed, if any.
    pub fn failing_target(&self) -> Option<&str> {
        match self {
            Self::EphemerisUnavailable { target, .. } => Some(target),
            Self::InvalidBirthMoment { .. } => None,
        }
    }
}
