pub mod houses;
pub mod lunar_phase;
pub mod retrograde;
pub mod rulers;
pub mod zodiac;

pub use houses::{assign_house, house_breakdown, house_sign, HouseInfo};
pub use lunar_phase::{moon_phase, MoonPhase, MoonPhaseName};
pub use retrograde::{NodeRetrogradePolicy, RetrogradeClassifier};
pub use rulers::{sign_ruler, sign_ruler_from_longitude};
pub use zodiac::{format_dms, interpret, normalize_degrees, Sign, ZodiacPosition, SIGNS};
