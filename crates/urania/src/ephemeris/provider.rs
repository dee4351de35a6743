use std::sync::Arc;

use crate::ephemeris::types::{AngleReading, BodyId, BodyReading, GeoLocation, HouseSystem, NodeSource};
use crate::error::EphemerisError;

/// Source of ecliptic positions for chart assembly.
///
/// Instants are Julian Days in Universal Time. Implementations must be safe
/// to call from several threads; a binding over a native library with global
/// state has to serialize its calls internally (see `SwissEphemerisAdapter`).
pub trait EphemerisProvider: Send + Sync {
    /// Longitude and daily motion of `body`. `nodes` selects the mean or
    /// true lunar node and is ignored for every other body.
    fn body_position(
        &self,
        jd_ut: f64,
        body: BodyId,
        nodes: NodeSource,
    ) -> Result<BodyReading, EphemerisError>;

    /// Ascendant and Midheaven for the location.
    fn angles(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<AngleReading, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn body_position(
        &self,
        jd_ut: f64,
        body: BodyId,
        nodes: NodeSource,
    ) -> Result<BodyReading, EphemerisError> {
        (**self).body_position(jd_ut, body, nodes)
    }

    fn angles(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<AngleReading, EphemerisError> {
        (**self).angles(jd_ut, location, house_system)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Arc<P> {
    fn body_position(
        &self,
        jd_ut: f64,
        body: BodyId,
        nodes: NodeSource,
    ) -> Result<BodyReading, EphemerisError> {
        (**self).body_position(jd_ut, body, nodes)
    }

    fn angles(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<AngleReading, EphemerisError> {
        (**self).angles(jd_ut, location, house_system)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn body_position(
        &self,
        jd_ut: f64,
        body: BodyId,
        nodes: NodeSource,
    ) -> Result<BodyReading, EphemerisError> {
        (**self).body_position(jd_ut, body, nodes)
    }

    fn angles(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<AngleReading, EphemerisError> {
        (**self).angles(jd_ut, location, house_system)
    }
}
