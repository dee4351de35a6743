//! Sign rulers for Western astrology.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).

use crate::ephemeris::BodyId;
use crate::western::zodiac::Sign;

/// Traditional rulerships, Aries to Pisces
const TRADITIONAL_RULERS: [BodyId; 12] = [
    BodyId::Mars,    // Aries
    BodyId::Venus,   // Taurus
    BodyId::Mercury, // Gemini
    BodyId::Moon,    // Cancer
    BodyId::Sun,     // Leo
    BodyId::Mercury, // Virgo
    BodyId::Venus,   // Libra
    BodyId::Mars,    // Scorpio
    BodyId::Jupiter, // Sagittarius
    BodyId::Saturn,  // Capricorn
    BodyId::Saturn,  // Aquarius
    BodyId::Jupiter, // Pisces
];

/// Modern rulerships include outer planets
const MODERN_RULERS: [BodyId; 12] = [
    BodyId::Mars,
    BodyId::Venus,
    BodyId::Mercury,
    BodyId::Moon,
    BodyId::Sun,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Pluto,   // Scorpio (modern)
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::Uranus,  // Aquarius (modern)
    BodyId::Neptune, // Pisces (modern)
];

/// Ruler of `sign`.
pub fn sign_ruler(sign: Sign, modern: bool) -> BodyId {
    if modern {
        MODERN_RULERS[sign.index()]
    } else {
        TRADITIONAL_RULERS[sign.index()]
    }
}

/// Ruler of the sign containing `longitude`.
pub fn sign_ruler_from_longitude(longitude: f64, modern: bool) -> BodyId {
    sign_ruler(Sign::from_longitude(longitude), modern)
}
