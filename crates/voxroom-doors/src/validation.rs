use serde::{Deserialize, Serialize};
use voxroom_base::{EDGE_CLEARANCE, Tolerance, WALL_USABLE_MARGIN};
use voxroom_room::{Opening, OpeningPosition, WallDescriptor};

use crate::config::DoorConfig;

const NARROW_DOOR_WIDTH: f64 = 0.6;
const TIGHT_GAP: f64 = 0.1;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![error.into()],
            warnings: Vec::new(),
        }
    }

    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    fn finish(mut self) -> Self {
        self.valid = self.errors.is_empty();
        self
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("ok");
        }
        f.write_str(&self.errors.join("; "))
    }
}

pub fn validate_opening(
    wall: &WallDescriptor,
    position: OpeningPosition,
    config: &DoorConfig,
    siblings: &[Opening],
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (name, value) in [
        ("width", config.width),
        ("height", config.height),
        ("thickness", config.thickness),
    ] {
        if !(value.is_finite() && value > 0.0) {
            report.error(format!("door {name} must be > 0"));
        }
    }
    if !position.x.is_finite() || !position.y.is_finite() {
        report.error("door position must be finite".to_string());
    }
    if !report.errors.is_empty() {
        return report.finish();
    }

    let max_width = wall.outer_width - WALL_USABLE_MARGIN;
    let max_height = wall.outer_height - WALL_USABLE_MARGIN;
    if config.width > max_width {
        report.error(format!(
            "door width {:.2} m exceeds usable wall width {:.2} m",
            config.width, max_width
        ));
    }
    if config.height > max_height {
        report.error(format!(
            "door height {:.2} m exceeds usable wall height {:.2} m",
            config.height, max_height
        ));
    } else if config.height > max_height - TIGHT_GAP {
        report.warn(format!(
            "door height {:.2} m is within {TIGHT_GAP} m of the usable limit",
            config.height
        ));
    }

    let limit = wall.outer_width * 0.5 - config.width * 0.5 - EDGE_CLEARANCE;
    if position.x.abs() > limit {
        report.error(format!(
            "door at x = {:.2} must stay within ±{:.2} m of the wall center",
            position.x,
            limit.max(0.0)
        ));
    }
    if !position.is_ground_anchored() {
        report.warn(format!(
            "door vertical position {:.2} will be snapped to the floor",
            position.y
        ));
    }
    if config.width < NARROW_DOOR_WIDTH {
        report.warn(format!("narrow door ({:.2} m)", config.width));
    }

    let tol = Tolerance::default();
    let candidate = Opening::door("", config.width, config.height, position);
    let span = candidate.local_rect(wall.name, wall.outer_height);
    for sibling in siblings {
        let other = sibling.local_rect(wall.name, wall.outer_height);
        let (min_x, max_x) = sibling.span();
        if span.overlaps_horizontally(&other, &tol) {
            report.error(format!(
                "overlaps door {} spanning [{min_x:.2}, {max_x:.2}]",
                sibling.owner_id
            ));
            continue;
        }
        let gap = (span.min_x - other.max_x).max(other.min_x - span.max_x);
        if gap < TIGHT_GAP - tol.linear {
            report.warn(format!(
                "only {gap:.2} m between door and {}",
                sibling.owner_id
            ));
        }
    }

    report.finish()
}
