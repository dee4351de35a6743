//! Whole-sign houses.
//!
//! Each house is exactly one sign; house 1 is the rising sign. Membership
//! depends on sign identity only, never on the degree within the sign.

use serde::Serialize;

use crate::ephemeris::BodyId;
use crate::western::rulers::sign_ruler;
use crate::western::zodiac::Sign;

/// Whole-sign house (1-12) of `body_sign` counted from `rising`.
pub fn assign_house(body_sign: Sign, rising: Sign) -> u8 {
    let diff = (body_sign.index() + 12 - rising.index()) % 12;
    diff as u8 + 1
}

/// Sign occupying `house` (1-12) when `rising` is on the first house.
pub fn house_sign(rising: Sign, house: u8) -> Sign {
    rising.offset(usize::from(house.saturating_sub(1)))
}

/// One row of a house breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseInfo {
    pub house: u8,
    pub sign: Sign,
    pub ruler: BodyId,
    pub planets: Vec<BodyId>,
}

/// All twelve houses with their sign, ruler and occupants.
///
/// `occupants` pairs each body with its house; bodies keep the order they
/// are given in.
pub fn house_breakdown(
    rising: Sign,
    occupants: &[(BodyId, u8)],
    modern_rulers: bool,
) -> Vec<HouseInfo> {
    (1..=12u8)
        .map(|house| {
            let sign = house_sign(rising, house);
            HouseInfo {
                house,
                sign,
                ruler: sign_ruler(sign, modern_rulers),
                planets: occupants
                    .iter()
                    .filter(|(_, h)| *h == house)
                    .map(|(body, _)| *body)
                    .collect(),
            }
        })
        .collect()
}
