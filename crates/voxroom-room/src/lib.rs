use thiserror::Error;
use voxroom_base::WallName;

pub mod builder;
pub mod config;
pub mod mutation;
pub mod opening;
pub mod scene;

pub use builder::{
    DroppedOpening, WallSolid, build_plain_wall, build_wall_solid, build_wall_with_openings,
    clamp_opening,
};
pub use config::{RoomConfig, WallDescriptor};
pub use mutation::{install_solid, installed_wall};
pub use opening::{Opening, OpeningKind, OpeningMetadata, OpeningPosition};
pub use scene::{ObjectPayload, PointLight, Room, Scene, SceneObject, SceneObjectKind, WallHandle};

#[derive(Error, Debug)]
pub enum Error {
    #[error("wall not found: {0}")]
    WallNotFound(WallName),
    #[error("invalid wall dimensions {width} x {height} x {thickness}")]
    InvalidWallDimensions {
        width: f64,
        height: f64,
        thickness: f64,
    },
    #[error("no openings provided for wall {0}")]
    NoOpeningsProvided(WallName),
    #[error("all {dropped} openings on wall {wall} were rejected after clamping")]
    AllOpeningsInvalid { wall: WallName, dropped: usize },
    #[error("opening of {owner_id} is too small after clamping ({width:.3} x {height:.3})")]
    OpeningTooSmall {
        owner_id: String,
        width: f64,
        height: f64,
    },
    #[error("scene rejected object: {0}")]
    Scene(String),
    #[error(transparent)]
    Topology(#[from] voxroom_topology::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
