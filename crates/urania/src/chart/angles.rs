//! The four chart angles.
//!
//! Ascendant and Midheaven come from the provider. Descendant and Imum Coeli
//! are derived by one of two methods, chosen with [`OppositeAngleMethod`]:
//! the exact opposite ecliptic point, or the sign of whole-sign house 7/4.
//! They disagree whenever the Midheaven does not fall in the tenth
//! whole-sign house.

use serde::{Deserialize, Serialize};

use crate::ephemeris::AngleReading;
use crate::western::houses::house_sign;
use crate::western::zodiac::{interpret, Sign, ZodiacPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OppositeAngleMethod {
    /// Descendant = Ascendant + 180°, Imum Coeli = Midheaven + 180°.
    #[default]
    OppositePoint,
    /// Descendant and Imum Coeli sit at 0° of the signs on houses 7 and 4.
    WholeSignHouse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAngles {
    pub ascendant: ZodiacPosition,
    pub midheaven: ZodiacPosition,
    pub descendant: ZodiacPosition,
    pub imum_coeli: ZodiacPosition,
    pub method: OppositeAngleMethod,
}

impl ChartAngles {
    pub fn rising_sign(&self) -> Sign {
        self.ascendant.sign
    }
}

pub fn derive_angles(reading: &AngleReading, method: OppositeAngleMethod) -> ChartAngles {
    let ascendant = interpret(reading.ascendant);
    let midheaven = interpret(reading.midheaven);
    let (descendant, imum_coeli) = derive_opposite_angles(&ascendant, &midheaven, method);
    ChartAngles {
        ascendant,
        midheaven,
        descendant,
        imum_coeli,
        method,
    }
}

/// Descendant and Imum Coeli for the given Ascendant and Midheaven.
pub fn derive_opposite_angles(
    ascendant: &ZodiacPosition,
    midheaven: &ZodiacPosition,
    method: OppositeAngleMethod,
) -> (ZodiacPosition, ZodiacPosition) {
    match method {
        OppositeAngleMethod::OppositePoint => (
            interpret(ascendant.longitude + 180.0),
            interpret(midheaven.longitude + 180.0),
        ),
        OppositeAngleMethod::WholeSignHouse => {
            let rising = ascendant.sign;
            (sign_start(house_sign(rising, 7)), sign_start(house_sign(rising, 4)))
        }
    }
}

fn sign_start(sign: Sign) -> ZodiacPosition {
    interpret(sign.index() as f64 * 30.0)
}
