use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub frame_width: f64,
    pub open_angle: f64,
    pub animation_speed: f64,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            width: 0.9,
            height: 2.1,
            thickness: 0.05,
            frame_width: 0.08,
            open_angle: FRAC_PI_2,
            animation_speed: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfigPatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub thickness: Option<f64>,
    pub frame_width: Option<f64>,
    pub open_angle: Option<f64>,
    pub animation_speed: Option<f64>,
}

impl DoorConfigPatch {
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, base: &DoorConfig) -> DoorConfig {
        DoorConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            thickness: self.thickness.unwrap_or(base.thickness),
            frame_width: self.frame_width.unwrap_or(base.frame_width),
            open_angle: self.open_angle.unwrap_or(base.open_angle),
            animation_speed: self.animation_speed.unwrap_or(base.animation_speed),
        }
    }
}
