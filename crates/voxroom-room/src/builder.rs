use tracing::{debug, warn};
use voxroom_base::{Guid, MIN_OPENING_SIZE, OPENING_MARGIN, WallName};
use voxroom_geometry::{Aabb, Rect2, ShapeWithHoles};
use voxroom_topology::{Solid, SolidBuilder, solid_bounds};

use crate::config::WallDescriptor;
use crate::opening::Opening;
use crate::{Error, Result};

#[derive(Clone, Debug)]
pub struct WallSolid {
    pub guid: Guid,
    pub solid: Solid,
    pub local_bounds: Aabb,
    pub openings: Vec<Opening>,
    pub dropped: Vec<DroppedOpening>,
    holes: Vec<Rect2>,
}

impl WallSolid {
    pub fn holes(&self) -> &[Rect2] {
        &self.holes
    }

    pub fn is_plain(&self) -> bool {
        self.holes.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DroppedOpening {
    pub owner_id: String,
    pub clamped_width: f64,
    pub clamped_height: f64,
}

impl DroppedOpening {
    pub fn to_error(&self) -> Error {
        Error::OpeningTooSmall {
            owner_id: self.owner_id.clone(),
            width: self.clamped_width,
            height: self.clamped_height,
        }
    }
}

pub fn clamp_opening(
    opening: &Opening,
    outer_width: f64,
    outer_height: f64,
    wall: WallName,
) -> std::result::Result<Rect2, DroppedOpening> {
    let bounds = Rect2::centered(outer_width, outer_height);
    let clamped = opening
        .local_rect(wall, outer_height)
        .clamped_inside(&bounds, OPENING_MARGIN);
    let width = clamped.width();
    let height = clamped.height();
    // NaN falls through to the rejection branch
    if width >= MIN_OPENING_SIZE && height >= MIN_OPENING_SIZE {
        Ok(clamped)
    } else {
        Err(DroppedOpening {
            owner_id: opening.owner_id.clone(),
            clamped_width: width,
            clamped_height: height,
        })
    }
}

pub fn build_wall_with_openings(
    outer_width: f64,
    outer_height: f64,
    thickness: f64,
    openings: &[Opening],
    wall: WallName,
) -> Result<WallSolid> {
    ensure_wall_dimensions(outer_width, outer_height, thickness)?;
    if openings.is_empty() {
        return Err(Error::NoOpeningsProvided(wall));
    }

    let mut shape = ShapeWithHoles::from_outer(&Rect2::centered(outer_width, outer_height));
    let mut kept = Vec::with_capacity(openings.len());
    let mut holes = Vec::with_capacity(openings.len());
    let mut dropped = Vec::new();

    for opening in openings {
        match clamp_opening(opening, outer_width, outer_height, wall) {
            Ok(rect) => {
                shape.push_hole(&rect);
                holes.push(rect);
                kept.push(opening.clone());
            }
            Err(rejected) => {
                warn!(wall = %wall, error = %rejected.to_error(), "skipping opening");
                dropped.push(rejected);
            }
        }
    }

    if holes.is_empty() {
        return Err(Error::AllOpeningsInvalid {
            wall,
            dropped: dropped.len(),
        });
    }

    let solid = SolidBuilder::extrude_shape(&shape, thickness)?;
    let local_bounds = local_bounds(&solid, outer_width, outer_height, thickness);
    debug!(wall = %wall, holes = holes.len(), dropped = dropped.len(), "built wall with openings");

    Ok(WallSolid {
        guid: Guid::new(),
        solid,
        local_bounds,
        openings: kept,
        dropped,
        holes,
    })
}

pub fn build_plain_wall(outer_width: f64, outer_height: f64, thickness: f64) -> Result<WallSolid> {
    ensure_wall_dimensions(outer_width, outer_height, thickness)?;
    let solid = SolidBuilder::centered_block(outer_width, outer_height, thickness)?;
    let local_bounds = local_bounds(&solid, outer_width, outer_height, thickness);
    Ok(WallSolid {
        guid: Guid::new(),
        solid,
        local_bounds,
        openings: Vec::new(),
        dropped: Vec::new(),
        holes: Vec::new(),
    })
}

pub fn build_wall_solid(descriptor: &WallDescriptor, openings: &[Opening]) -> Result<WallSolid> {
    if openings.is_empty() {
        debug!(wall = %descriptor.name, "rebuilding plain wall");
        return build_plain_wall(
            descriptor.outer_width,
            descriptor.outer_height,
            descriptor.thickness,
        );
    }
    build_wall_with_openings(
        descriptor.outer_width,
        descriptor.outer_height,
        descriptor.thickness,
        openings,
        descriptor.name,
    )
}

fn ensure_wall_dimensions(width: f64, height: f64, thickness: f64) -> Result<()> {
    let valid = [width, height, thickness]
        .iter()
        .all(|value| value.is_finite() && *value > 0.0);
    if !valid {
        return Err(Error::InvalidWallDimensions {
            width,
            height,
            thickness,
        });
    }
    Ok(())
}

fn local_bounds(solid: &Solid, width: f64, height: f64, thickness: f64) -> Aabb {
    solid_bounds(solid).unwrap_or_else(|| {
        let rect = Rect2::centered(width, height);
        Aabb {
            min: voxroom_geometry::Point3::new(rect.min_x, rect.min_y, -thickness * 0.5),
            max: voxroom_geometry::Point3::new(rect.max_x, rect.max_y, thickness * 0.5),
        }
    })
}
