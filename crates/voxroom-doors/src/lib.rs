use thiserror::Error;
use voxroom_base::WallName;

pub mod animation;
pub mod config;
pub mod door;
pub mod lighting;
pub mod manager;
pub mod registry;
pub mod validation;
pub mod visuals;

pub use animation::{Animator, LeafAnimation, ease_in_out};
pub use config::{DoorConfig, DoorConfigPatch};
pub use door::{Door, DoorHandle, DoorSummary, DoorVisuals};
pub use lighting::{LightProfile, TimeOfDay};
pub use manager::DoorManager;
pub use registry::openings_on_wall;
pub use validation::{ValidationReport, validate_opening};

#[derive(Error, Debug)]
pub enum DoorError {
    #[error("door not found: {0}")]
    DoorNotFound(String),
    #[error("door already exists: {0}")]
    DuplicateDoor(String),
    #[error("wall not found: {0}")]
    WallNotFound(WallName),
    #[error("validation failed: {0}")]
    ValidationFailed(ValidationReport),
    #[error("opening synthesis failed: {0}")]
    OpeningSynthesisFailed(#[source] voxroom_room::Error),
    #[error("structural rebuild failed: {0}")]
    StructuralRebuildFailed(#[source] voxroom_room::Error),
}

pub type Result<T> = std::result::Result<T, DoorError>;
