pub mod adapter;
pub mod mean_node;
pub mod provider;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use mean_node::{mean_north_node_deg, MEAN_NODE_DAILY_MOTION};
pub use provider::EphemerisProvider;
pub use types::{
    AngleReading, BodyId, BodyReading, GeoLocation, HouseSystem, NodeSource, ALL_BODIES,
};
