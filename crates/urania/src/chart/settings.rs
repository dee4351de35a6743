use serde::{Deserialize, Serialize};

use crate::chart::angles::OppositeAngleMethod;
use crate::ephemeris::{HouseSystem, NodeSource};
use crate::western::retrograde::NodeRetrogradePolicy;
use crate::western::zodiac::normalize_degrees;

/// Chart assembly options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    /// House system the provider uses to locate Ascendant and Midheaven.
    /// Placements always use whole-sign houses.
    pub angle_house_system: HouseSystem,

    // Lunar nodes
    pub node_source: NodeSource,
    pub node_retrograde: NodeRetrogradePolicy,

    pub opposite_angles: OppositeAngleMethod,

    /// Stand-in used when the provider cannot compute Chiron.
    pub chiron_fallback: FixedSubstitute,

    /// Use Uranus/Neptune/Pluto rulerships for houses and the chart ruler.
    pub modern_rulers: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            angle_house_system: HouseSystem::Placidus,
            node_source: NodeSource::True,
            node_retrograde: NodeRetrogradePolicy::FromMotion,
            opposite_angles: OppositeAngleMethod::OppositePoint,
            chiron_fallback: FixedSubstitute::default(),
            modern_rulers: false,
        }
    }
}

/// A fixed longitude standing in for a body the provider failed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixedSubstitute {
    /// Ecliptic longitude in degrees
    pub longitude: f64,
    /// Retrograde flag to force on the estimate. `None` leaves it direct;
    /// a forced value is reported as a chart warning.
    pub retrograde: Option<bool>,
}

impl FixedSubstitute {
    pub fn normalized_longitude(&self) -> f64 {
        normalize_degrees(self.longitude)
    }
}

impl Default for FixedSubstitute {
    fn default() -> Self {
        // 20° Aries
        Self {
            longitude: 20.0,
            retrograde: None,
        }
    }
}
