use serde::{Deserialize, Serialize};
use voxroom_base::WallName;
use voxroom_geometry::Rect2;

// y == 0 puts the bottom edge on the floor line; any other y is the vertical center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningPosition {
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl OpeningPosition {
    pub fn ground(x: f64) -> Self {
        Self { x, y: 0.0 }
    }

    pub fn is_ground_anchored(&self) -> bool {
        self.y == 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    #[default]
    Door,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub owner_id: String,
    pub kind: OpeningKind,
    pub width: f64,
    pub height: f64,
    pub position: OpeningPosition,
}

impl Opening {
    pub fn door(
        owner_id: impl Into<String>,
        width: f64,
        height: f64,
        position: OpeningPosition,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            kind: OpeningKind::Door,
            width,
            height,
            position,
        }
    }

    pub fn local_rect(&self, wall: WallName, outer_height: f64) -> Rect2 {
        let center_x = wall.profile().axis_sign * self.position.x;
        let (min_y, max_y) = if self.position.is_ground_anchored() {
            let floor = -outer_height * 0.5;
            (floor, floor + self.height)
        } else {
            (
                self.position.y - self.height * 0.5,
                self.position.y + self.height * 0.5,
            )
        };
        Rect2 {
            min_x: center_x - self.width * 0.5,
            max_x: center_x + self.width * 0.5,
            min_y,
            max_y,
        }
    }

    pub fn span(&self) -> (f64, f64) {
        (
            self.position.x - self.width * 0.5,
            self.position.x + self.width * 0.5,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningMetadata {
    pub has_opening: bool,
    pub has_multiple_openings: bool,
    pub openings: Vec<Opening>,
}

impl OpeningMetadata {
    pub fn from_openings(openings: &[Opening]) -> Self {
        Self {
            has_opening: !openings.is_empty(),
            has_multiple_openings: openings.len() > 1,
            openings: openings.to_vec(),
        }
    }

    pub fn find(&self, owner_id: &str) -> Option<&Opening> {
        self.openings
            .iter()
            .find(|opening| opening.owner_id == owner_id)
    }
}
