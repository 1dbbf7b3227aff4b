use serde::{Deserialize, Serialize};
use voxroom_base::{Guid, WallName};
use voxroom_room::{Opening, OpeningPosition};

use crate::config::DoorConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoorVisuals {
    pub frame: Guid,
    pub leaf: Guid,
    pub light_rig: Guid,
}

impl DoorVisuals {
    pub fn ids(&self) -> [Guid; 3] {
        [self.frame, self.leaf, self.light_rig]
    }
}

#[derive(Clone, Debug)]
pub struct Door {
    pub id: String,
    pub wall_name: WallName,
    pub position: OpeningPosition,
    pub config: DoorConfig,
    pub is_open: bool,
    pub visuals: DoorVisuals,
    pub base_rotation: f64,
    pub leaf_rotation: f64,
}

impl Door {
    pub fn opening(&self) -> Opening {
        Opening::door(
            self.id.clone(),
            self.config.width,
            self.config.height,
            self.position,
        )
    }

    pub fn open_rotation(&self) -> f64 {
        self.base_rotation + self.wall_name.profile().open_sign * self.config.open_angle
    }

    pub fn target_rotation(&self) -> f64 {
        if self.is_open {
            self.open_rotation()
        } else {
            self.base_rotation
        }
    }

    pub fn summary(&self) -> DoorSummary {
        DoorSummary {
            id: self.id.clone(),
            wall_name: self.wall_name,
            position: self.position,
            is_open: self.is_open,
            config: self.config,
        }
    }

    pub fn handle(&self) -> DoorHandle {
        DoorHandle {
            id: self.id.clone(),
            wall_name: self.wall_name,
            visuals: self.visuals,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoorSummary {
    pub id: String,
    pub wall_name: WallName,
    pub position: OpeningPosition,
    pub is_open: bool,
    pub config: DoorConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoorHandle {
    pub id: String,
    pub wall_name: WallName,
    pub visuals: DoorVisuals,
}
