use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

pub const OPENING_MARGIN: f64 = 0.1;
pub const MIN_OPENING_SIZE: f64 = 0.1;
pub const WALL_USABLE_MARGIN: f64 = 0.4;
pub const EDGE_CLEARANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Guid(Uuid);

impl Guid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tolerance {
    pub linear: f64,
    pub angular: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            linear: 1.0e-6,
            angular: 1.0e-6,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallName {
    Front,
    Back,
    Left,
    Right,
}

impl WallName {
    pub const ALL: [WallName; 4] = [
        WallName::Front,
        WallName::Back,
        WallName::Left,
        WallName::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WallName::Front => "front",
            WallName::Back => "back",
            WallName::Left => "left",
            WallName::Right => "right",
        }
    }

    pub fn is_lateral(&self) -> bool {
        matches!(self, WallName::Left | WallName::Right)
    }

    pub fn profile(&self) -> &'static WallProfile {
        match self {
            WallName::Front => &WALL_PROFILES[0],
            WallName::Back => &WALL_PROFILES[1],
            WallName::Left => &WALL_PROFILES[2],
            WallName::Right => &WALL_PROFILES[3],
        }
    }
}

impl std::fmt::Display for WallName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WallName {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(WallName::Front),
            "back" => Ok(WallName::Back),
            "left" => Ok(WallName::Left),
            "right" => Ok(WallName::Right),
            _ => Err(Error::UnknownWall(text.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallProfile {
    pub name: WallName,
    pub axis_sign: f64,
    pub yaw: f64,
    pub base_rotation: f64,
    pub open_sign: f64,
}

// open_sign swings each leaf toward the room center.
pub const WALL_PROFILES: [WallProfile; 4] = [
    WallProfile {
        name: WallName::Front,
        axis_sign: 1.0,
        yaw: 0.0,
        base_rotation: 0.0,
        open_sign: 1.0,
    },
    WallProfile {
        name: WallName::Back,
        axis_sign: 1.0,
        yaw: 0.0,
        base_rotation: PI,
        open_sign: 1.0,
    },
    WallProfile {
        name: WallName::Left,
        axis_sign: -1.0,
        yaw: FRAC_PI_2,
        base_rotation: FRAC_PI_2,
        open_sign: -1.0,
    },
    WallProfile {
        name: WallName::Right,
        axis_sign: -1.0,
        yaw: FRAC_PI_2,
        base_rotation: -FRAC_PI_2,
        open_sign: -1.0,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl RoomDimensions {
    pub fn wall_width(&self, wall: WallName) -> f64 {
        if wall.is_lateral() {
            self.depth
        } else {
            self.width
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("unknown wall: {0}")]
    UnknownWall(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_names_parse_case_insensitively() -> Result<()> {
        assert_eq!("Front".parse::<WallName>()?, WallName::Front);
        assert_eq!(" right ".parse::<WallName>()?, WallName::Right);
        assert!("ceiling".parse::<WallName>().is_err());
        Ok(())
    }

    #[test]
    fn profile_table_is_indexed_by_name() {
        for wall in WallName::ALL {
            assert_eq!(wall.profile().name, wall);
        }
    }

    #[test]
    fn lateral_walls_invert_axis_and_span_depth() {
        let dims = RoomDimensions {
            width: 6.0,
            height: 3.0,
            depth: 4.0,
        };
        assert_eq!(dims.wall_width(WallName::Back), 6.0);
        assert_eq!(dims.wall_width(WallName::Left), 4.0);
        assert_eq!(WallName::Left.profile().axis_sign, -1.0);
        assert_eq!(WallName::Front.profile().axis_sign, 1.0);
    }
}
