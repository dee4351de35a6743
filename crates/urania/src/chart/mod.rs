pub mod angles;
pub mod assembler;
pub mod response;
pub mod settings;
pub mod types;

pub use angles::{derive_angles, derive_opposite_angles, ChartAngles, OppositeAngleMethod};
pub use assembler::ChartAssembler;
pub use response::ChartResponse;
pub use settings::{ChartSettings, FixedSubstitute};
pub use types::{Chart, ChartRuler, ChartWarning, Placement};
