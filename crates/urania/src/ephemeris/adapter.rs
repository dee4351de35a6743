use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{debug, warn};
use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};
use swisseph::AscMc;

use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::types::{AngleReading, BodyId, BodyReading, GeoLocation, HouseSystem, NodeSource};
use crate::error::EphemerisError;

/// The Swiss Ephemeris keeps its data path, open file handles and cached
/// coefficients in process globals, so every native call goes through this
/// lock. The guarded value is the data path last handed to the library.
static SWISSEPH_LOCK: Mutex<Option<PathBuf>> = Mutex::new(None);

const FLG_SWIEPH: i32 = 2;
/// FLG_SWIEPH (use Swiss Ephemeris files) | FLG_SPEED (fill in daily motion)
const CALC_FLAGS: i32 = FLG_SWIEPH | 256;
/// FLG_SWIEPH: houses_ex takes obliquity and nutation for the angles from
/// the data files
const HOUSE_FLAGS: i32 = FLG_SWIEPH;

const MEAN_NODE: i32 = 10;
const TRUE_NODE: i32 = 11;

// Swiss Ephemeris body numbers. The South Node has no number of its own and
// is derived from the North Node by the chart assembler.
const PLANET_IDS: &[(BodyId, i32)] = &[
    (BodyId::Sun, 0),
    (BodyId::Moon, 1),
    (BodyId::Mercury, 2),
    (BodyId::Venus, 3),
    (BodyId::Mars, 4),
    (BodyId::Jupiter, 5),
    (BodyId::Saturn, 6),
    (BodyId::Uranus, 7),
    (BodyId::Neptune, 8),
    (BodyId::Pluto, 9),
    (BodyId::Chiron, 15),
];

/// Swiss Ephemeris adapter implementation
#[derive(Debug, Clone)]
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(default_ephemeris_path);

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        if path.to_str().map_or(true, |p| p.contains('\0')) {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path must be valid UTF-8 without NUL bytes.".to_string(),
            });
        }

        let adapter = Self {
            ephemeris_path: path,
        };
        drop(adapter.lock());
        debug!(
            "Swiss Ephemeris data directory: {}",
            adapter.ephemeris_path.display()
        );
        Ok(adapter)
    }

    /// Take the native-call lock with the library pointed at this adapter's
    /// data directory. Adapters with different directories may coexist; the
    /// path is only re-sent when it changes.
    fn lock(&self) -> MutexGuard<'static, Option<PathBuf>> {
        // A panic while holding the lock leaves no state of ours behind.
        let mut guard = SWISSEPH_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.as_deref() != Some(self.ephemeris_path.as_path()) {
            // Checked for UTF-8 and NUL bytes in `new`.
            set_ephe_path(&self.ephemeris_path.to_string_lossy());
            *guard = Some(self.ephemeris_path.clone());
        }
        guard
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn body_position(
        &self,
        jd_ut: f64,
        body: BodyId,
        nodes: NodeSource,
    ) -> Result<BodyReading, EphemerisError> {
        let code = swiss_body_code(body, nodes).ok_or_else(|| EphemerisError::CalculationFailed {
            target: body.id().to_string(),
            jd_ut,
            message: format!("No Swiss Ephemeris body number for {}", body.id()),
        })?;

        let result = {
            let _guard = self.lock();
            calc_ut(jd_ut, code as u32, CALC_FLAGS as u32)
        }
        .map_err(|e| EphemerisError::CalculationFailed {
            target: body.id().to_string(),
            jd_ut,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        if !read_from_files(result.code) {
            warn!(
                "{} at JD {jd_ut}: no Swiss Ephemeris file in {}, used the Moshier fallback",
                body.id(),
                self.ephemeris_path.display()
            );
        }

        let out = result.out;
        let longitude = out[0];
        let speed_longitude = out[3];
        if !longitude.is_finite() || !speed_longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                target: body.id().to_string(),
                jd_ut,
                message: "Swiss Ephemeris returned a non-finite position".to_string(),
            });
        }

        Ok(BodyReading::measured(
            body,
            longitude.rem_euclid(360.0),
            speed_longitude,
        ))
    }

    fn angles(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<AngleReading, EphemerisError> {
        let (_cusps, ascmc) = {
            let _guard = self.lock();
            houses_ex(
                jd_ut,
                HOUSE_FLAGS,
                location.lat,
                location.lon,
                house_system.code() as i32,
            )
        };
        let ascmc = AscMc::from_array(ascmc);

        if !ascmc.ascendant.is_finite() || !ascmc.mc.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} angles undefined at lat {:.4}, lon {:.4}",
                    house_system.name(),
                    location.lat,
                    location.lon
                ),
            });
        }

        Ok(AngleReading {
            ascendant: ascmc.ascendant.rem_euclid(360.0),
            midheaven: ascmc.mc.rem_euclid(360.0),
        })
    }
}

fn default_ephemeris_path() -> PathBuf {
    env::var("SWISS_EPHEMERIS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
}

/// Whether `calc_ut` answered from the data files. The returned flags drop
/// FLG_SWIEPH when the library had to fall back to its analytic Moshier model.
fn read_from_files(returned_flags: i32) -> bool {
    returned_flags & FLG_SWIEPH != 0
}

fn swiss_body_code(body: BodyId, nodes: NodeSource) -> Option<i32> {
    match body {
        BodyId::NorthNode => Some(match nodes {
            NodeSource::Mean => MEAN_NODE,
            NodeSource::True => TRUE_NODE,
        }),
        BodyId::SouthNode => None,
        _ => PLANET_IDS
            .iter()
            .find(|(id, _)| *id == body)
            .map(|(_, code)| *code),
    }
}
