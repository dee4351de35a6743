#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use chrono::NaiveDate;
use urania::ephemeris::{AngleReading, BodyReading, GeoLocation};
use urania::{BirthMoment, BodyId, EphemerisError, EphemerisProvider, HouseSystem, NodeSource};

/// Provider returning canned positions, with failures on demand.
pub struct FixedEphemeris {
    bodies: HashMap<BodyId, (f64, f64)>,
    angles: AngleReading,
    failing: HashSet<BodyId>,
    fail_angles: bool,
    queried: Mutex<Vec<f64>>,
}

impl FixedEphemeris {
    /// Taurus rising, Sun late Scorpio.
    pub fn sample() -> Self {
        let bodies = [
            (BodyId::Sun, 239.6, 1.01),
            (BodyId::Moon, 95.2, 13.2),
            (BodyId::Mercury, 225.3, -0.4),
            (BodyId::Venus, 260.1, 1.2),
            (BodyId::Mars, 215.7, 0.7),
            (BodyId::Jupiter, 335.2, 0.05),
            (BodyId::Saturn, 101.4, -0.03),
            (BodyId::Uranus, 208.9, 0.06),
            (BodyId::Neptune, 249.0, 0.03),
            (BodyId::Pluto, 188.2, 0.03),
            (BodyId::Chiron, 21.5, -0.04),
            (BodyId::NorthNode, 250.3, -0.08),
        ]
        .into_iter()
        .map(|(body, lon, speed)| (body, (lon, speed)))
        .collect();

        Self {
            bodies,
            angles: AngleReading {
                ascendant: 45.5,
                midheaven: 310.25,
            },
            failing: HashSet::new(),
            fail_angles: false,
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn with_body(mut self, body: BodyId, longitude: f64, daily_motion: f64) -> Self {
        self.bodies.insert(body, (longitude, daily_motion));
        self
    }

    pub fn with_angles(mut self, ascendant: f64, midheaven: f64) -> Self {
        self.angles = AngleReading {
            ascendant,
            midheaven,
        };
        self
    }

    pub fn failing(mut self, body: BodyId) -> Self {
        self.failing.insert(body);
        self
    }

    pub fn failing_angles(mut self) -> Self {
        self.fail_angles = true;
        self
    }

    /// Julian Days the assembler asked for, in call order.
    pub fn queried_days(&self) -> Vec<f64> {
        self.queried.lock().unwrap().clone()
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn body_position(
        &self,
        jd_ut: f64,
        body: BodyId,
        _nodes: NodeSource,
    ) -> Result<BodyReading, EphemerisError> {
        self.queried.lock().unwrap().push(jd_ut);
        match self.bodies.get(&body) {
            Some(&(lon, speed)) if !self.failing.contains(&body) => {
                Ok(BodyReading::measured(body, lon, speed))
            }
            _ => Err(EphemerisError::CalculationFailed {
                target: body.id().to_string(),
                jd_ut,
                message: "no data".to_string(),
            }),
        }
    }

    fn angles(
        &self,
        jd_ut: f64,
        _location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<AngleReading, EphemerisError> {
        self.queried.lock().unwrap().push(jd_ut);
        if self.fail_angles {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("{} undefined", house_system.name()),
            });
        }
        Ok(self.angles)
    }
}

/// Sun from the low-precision solar theory of Meeus (chapter 25); every
/// other body from [`FixedEphemeris::sample`].
pub struct AnalyticSun {
    rest: FixedEphemeris,
}

impl AnalyticSun {
    pub fn new() -> Self {
        Self {
            rest: FixedEphemeris::sample(),
        }
    }

    pub fn apparent_longitude(jd_ut: f64) -> f64 {
        let t = (jd_ut - 2_451_545.0) / 36_525.0;
        let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
        let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
        let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
            + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
            + 0.000_289 * (3.0 * m).sin();
        let omega = (125.04 - 1_934.136 * t).to_radians();
        (l0 + c - 0.005_69 - 0.004_78 * omega.sin()).rem_euclid(360.0)
    }
}

impl EphemerisProvider for AnalyticSun {
    fn body_position(
        &self,
        jd_ut: f64,
        body: BodyId,
        nodes: NodeSource,
    ) -> Result<BodyReading, EphemerisError> {
        if body == BodyId::Sun {
            return Ok(BodyReading::measured(
                body,
                Self::apparent_longitude(jd_ut),
                0.9856,
            ));
        }
        self.rest.body_position(jd_ut, body, nodes)
    }

    fn angles(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<AngleReading, EphemerisError> {
        self.rest.angles(jd_ut, location, house_system)
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 1974-11-22 19:10, Adelaide.
pub fn adelaide_birth() -> BirthMoment {
    BirthMoment::new(
        ymd(1974, 11, 22),
        19,
        10,
        -34.9285,
        138.6007,
        Some("Adelaide, SA, Australia"),
    )
    .unwrap()
}
