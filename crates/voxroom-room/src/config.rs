use serde::{Deserialize, Serialize};
use voxroom_base::{RoomDimensions, WallName};
use voxroom_geometry::{Point3, Rect2, Transform};

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub wall_thickness: f64,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 6.0,
            height: 3.0,
            depth: 5.0,
            wall_thickness: 0.2,
        }
    }
}

impl RoomConfig {
    pub fn dimensions(&self) -> RoomDimensions {
        RoomDimensions {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let valid = [self.width, self.height, self.depth, self.wall_thickness]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0);
        if !valid {
            return Err(Error::InvalidWallDimensions {
                width: self.width.max(self.depth),
                height: self.height,
                thickness: self.wall_thickness,
            });
        }
        Ok(())
    }

    pub fn wall_descriptor(&self, name: WallName) -> WallDescriptor {
        WallDescriptor {
            name,
            outer_width: self.dimensions().wall_width(name),
            outer_height: self.height,
            thickness: self.wall_thickness,
        }
    }

    pub fn wall_transform(&self, name: WallName) -> Transform {
        let half_height = self.height * 0.5;
        let position = match name {
            WallName::Front => Point3::new(0.0, half_height, self.depth * 0.5),
            WallName::Back => Point3::new(0.0, half_height, -self.depth * 0.5),
            WallName::Left => Point3::new(-self.width * 0.5, half_height, 0.0),
            WallName::Right => Point3::new(self.width * 0.5, half_height, 0.0),
        };
        Transform::from_position_yaw(position, name.profile().yaw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallDescriptor {
    pub name: WallName,
    pub outer_width: f64,
    pub outer_height: f64,
    pub thickness: f64,
}

impl WallDescriptor {
    pub fn outer_rect(&self) -> Rect2 {
        Rect2::centered(self.outer_width, self.outer_height)
    }
}
