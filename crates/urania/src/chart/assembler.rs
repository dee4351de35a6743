//! Chart assembly.
//!
//! Runs four stages in order, never going back: resolve the birth moment to
//! UTC, query the angles, query every body, derive the chart. Angle and
//! required-body failures abort; optional bodies fall back to estimates.

use log::{debug, info, warn};

use crate::chart::angles::derive_angles;
use crate::chart::settings::ChartSettings;
use crate::chart::types::{Chart, ChartRuler, ChartWarning, Placement};
use crate::ephemeris::{
    mean_north_node_deg, AngleReading, BodyId, BodyReading, EphemerisProvider,
    MEAN_NODE_DAILY_MOTION, ALL_BODIES,
};
use crate::error::{ChartError, EphemerisError};
use crate::time::{BirthMoment, ResolvedInstant, TimeResolver};
use crate::western::houses::{assign_house, house_breakdown};
use crate::western::lunar_phase::moon_phase;
use crate::western::retrograde::RetrogradeClassifier;
use crate::western::rulers::sign_ruler;
use crate::western::zodiac::interpret;

/// Builds natal charts from birth moments using an ephemeris provider.
pub struct ChartAssembler<P> {
    provider: P,
    settings: ChartSettings,
    resolver: TimeResolver,
}

impl<P: EphemerisProvider> ChartAssembler<P> {
    pub fn new(provider: P, settings: ChartSettings) -> Self {
        Self {
            provider,
            settings,
            resolver: TimeResolver::new(),
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn assemble(&self, moment: &BirthMoment) -> Result<Chart, ChartError> {
        let mut warnings = Vec::new();

        // Resolve
        let instant = self.resolver.resolve(moment);
        if instant.is_low_confidence() {
            warn!(
                "Low-confidence timezone ({}): {}",
                instant.method,
                instant.summary()
            );
            warnings.push(ChartWarning::LowConfidenceTimezone {
                method: instant.method,
                offset_hours: instant.offset_hours,
            });
        }
        let jd_ut = instant.julian_day();
        debug!("Resolved instant: JD {jd_ut:.6} UT");

        // Query angles
        let angle_reading = self
            .provider
            .angles(jd_ut, &moment.location(), self.settings.angle_house_system)
            .map_err(|source| ChartError::EphemerisUnavailable {
                target: "angles".to_string(),
                source,
            })?;
        debug!(
            "Angles ({}): ASC {:.4}, MC {:.4}",
            self.settings.angle_house_system.name(),
            angle_reading.ascendant,
            angle_reading.midheaven
        );

        // Query bodies
        let readings = self.query_bodies(jd_ut, &mut warnings)?;

        // Derive
        let chart = self.derive(moment, instant, &angle_reading, &readings, warnings);
        info!(
            "Chart assembled: {} rising, {} placements ({} estimated)",
            chart.rising_sign(),
            chart.placements.len(),
            chart.estimated_bodies().count()
        );
        Ok(chart)
    }

    fn query_bodies(
        &self,
        jd_ut: f64,
        warnings: &mut Vec<ChartWarning>,
    ) -> Result<Vec<BodyReading>, ChartError> {
        let mut readings = Vec::with_capacity(ALL_BODIES.len());
        let mut north_node: Option<BodyReading> = None;

        for body in ALL_BODIES {
            let reading = match body {
                BodyId::SouthNode => match north_node {
                    Some(north) => north.opposite(BodyId::SouthNode),
                    None => continue,
                },
                _ => {
                    let result = self
                        .provider
                        .body_position(jd_ut, body, self.settings.node_source)
                        .map(|reading| BodyReading { body, ..reading });
                    match result {
                        Ok(reading) => reading,
                        Err(err) if body.is_optional() => {
                            self.substitute(body, jd_ut, err, warnings)
                        }
                        Err(source) => {
                            return Err(ChartError::EphemerisUnavailable {
                                target: body.name().to_string(),
                                source,
                            })
                        }
                    }
                }
            };

            debug!(
                "{}: {:.4}° (motion {:?}{})",
                body,
                reading.longitude,
                reading.daily_motion,
                if reading.estimated { ", estimated" } else { "" }
            );
            if body == BodyId::NorthNode {
                north_node = Some(reading);
            }
            readings.push(reading);
        }

        Ok(readings)
    }

    /// Estimated reading for an optional body the provider failed on.
    fn substitute(
        &self,
        body: BodyId,
        jd_ut: f64,
        err: EphemerisError,
        warnings: &mut Vec<ChartWarning>,
    ) -> BodyReading {
        let reading = match body {
            BodyId::NorthNode => BodyReading::estimated(
                body,
                mean_north_node_deg(jd_ut),
                Some(MEAN_NODE_DAILY_MOTION),
            ),
            _ => BodyReading::estimated(
                body,
                self.settings.chiron_fallback.normalized_longitude(),
                None,
            ),
        };
        warn!(
            "{body} unavailable ({err}), using estimate at {:.4}°",
            reading.longitude
        );
        warnings.push(ChartWarning::OptionalBodyUnavailable {
            body,
            reason: err.to_string(),
        });
        reading
    }

    fn derive(
        &self,
        moment: &BirthMoment,
        instant: ResolvedInstant,
        angle_reading: &AngleReading,
        readings: &[BodyReading],
        mut warnings: Vec<ChartWarning>,
    ) -> Chart {
        let angles = derive_angles(angle_reading, self.settings.opposite_angles);
        let rising = angles.rising_sign();
        let classifier = RetrogradeClassifier::new(self.settings.node_retrograde);

        let placements: Vec<Placement> = readings
            .iter()
            .map(|reading| {
                let position = interpret(reading.longitude);
                let retrograde = match self.retrograde_override(reading) {
                    Some(forced) => {
                        warnings.push(ChartWarning::RetrogradeOverride {
                            body: reading.body,
                            retrograde: forced,
                        });
                        forced
                    }
                    None => classifier.classify_reading(reading.body, reading.daily_motion),
                };
                Placement {
                    body: reading.body,
                    longitude: position.longitude,
                    sign: position.sign,
                    degree: position.degree,
                    exact_degree: position.exact_degree,
                    house: assign_house(position.sign, rising),
                    retrograde,
                    estimated: reading.estimated,
                }
            })
            .collect();

        let occupants: Vec<(BodyId, u8)> =
            placements.iter().map(|p| (p.body, p.house)).collect();
        let houses = house_breakdown(rising, &occupants, self.settings.modern_rulers);

        let ruler = sign_ruler(rising, self.settings.modern_rulers);
        let chart_ruler = placements
            .iter()
            .find(|p| p.body == ruler)
            .map(|p| ChartRuler {
                body: p.body,
                sign: p.sign,
                house: p.house,
                degree: p.degree,
                exact_degree: p.exact_degree.clone(),
                retrograde: p.retrograde,
            });

        let longitude_of = |body: BodyId| {
            placements
                .iter()
                .find(|p| p.body == body)
                .map(|p| p.longitude)
        };
        let phase = longitude_of(BodyId::Sun)
            .zip(longitude_of(BodyId::Moon))
            .map(|(sun, moon)| moon_phase(sun, moon));

        let midheaven_house = assign_house(angles.midheaven.sign, rising);
        if midheaven_house != 10 {
            debug!("Midheaven falls in whole-sign house {midheaven_house}");
        }

        Chart {
            birth: moment.clone(),
            instant,
            angles,
            placements,
            houses,
            chart_ruler,
            moon_phase: phase,
            midheaven_house,
            warnings,
        }
    }

    /// Configured retrograde flag for an estimated Chiron, if any.
    fn retrograde_override(&self, reading: &BodyReading) -> Option<bool> {
        if reading.estimated && reading.body == BodyId::Chiron {
            self.settings.chiron_fallback.retrograde
        } else {
            None
        }
    }
}
