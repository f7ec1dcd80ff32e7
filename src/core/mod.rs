pub mod layout;
pub mod stage;
pub mod types;

pub use layout::{
    PipelineLayout, Silhouette, SilhouetteSet, StageKind, StagePlacement, compute_silhouettes,
    compute_stage_placements,
};
pub use stage::Stage;
pub use types::{Dimensions, Point};
