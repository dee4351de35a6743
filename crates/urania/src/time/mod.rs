pub mod birth;
pub mod julian;
pub mod regions;
pub mod resolver;

pub use birth::BirthMoment;
pub use regions::{find_region, normalize_place, RegionRule, REGIONS};
pub use resolver::{
    approximate_offset, local_to_utc, Confidence, ResolutionMethod, ResolvedInstant, TimeResolver,
};
