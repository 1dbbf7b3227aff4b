use thiserror::Error;
use truck_modeling::builder;
use voxroom_geometry::{Aabb, Point2, ShapeWithHoles, Transform};

pub use truck_modeling::{Curve, Edge, Face, Point3, Shell, Solid, Surface, Vector3, Vertex, Wire};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Modeling(#[from] truck_modeling::errors::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct SolidBuilder;

impl SolidBuilder {
    pub fn box_solid(width: f64, height: f64, depth: f64) -> Result<Solid> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        ensure_positive("depth", depth)?;

        let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
        let e = builder::tsweep(&v, Vector3::unit_x() * width);
        let f = builder::tsweep(&e, Vector3::unit_y() * height);
        Ok(builder::tsweep(&f, Vector3::unit_z() * depth))
    }

    pub fn centered_block(width: f64, height: f64, thickness: f64) -> Result<Solid> {
        let solid = Self::box_solid(width, height, thickness)?;
        Ok(builder::translated(
            &solid,
            Vector3::new(-width * 0.5, -height * 0.5, -thickness * 0.5),
        ))
    }

    pub fn box_between(min: Point3, max: Point3) -> Result<Solid> {
        let solid = Self::box_solid(max.x - min.x, max.y - min.y, max.z - min.z)?;
        Ok(builder::translated(&solid, Vector3::new(min.x, min.y, min.z)))
    }

    pub fn extrude_shape(shape: &ShapeWithHoles, thickness: f64) -> Result<Solid> {
        ensure_positive("thickness", thickness)?;
        if shape.outer.len() < 3 {
            return Err(Error::InvalidParameter(
                "outer boundary needs at least three points".to_string(),
            ));
        }
        if let Some(hole) = shape.holes.iter().find(|hole| hole.len() < 3) {
            return Err(Error::InvalidParameter(format!(
                "hole boundary has {} points",
                hole.len()
            )));
        }

        let mut wires = Vec::with_capacity(1 + shape.holes.len());
        wires.push(loop_wire(&shape.outer));
        for hole in &shape.holes {
            wires.push(loop_wire(hole));
        }

        let face = builder::try_attach_plane(&wires)?;
        let solid = builder::tsweep(&face, Vector3::unit_z() * thickness);
        Ok(builder::translated(
            &solid,
            Vector3::new(0.0, 0.0, -thickness * 0.5),
        ))
    }
}

pub fn placed(solid: &Solid, transform: &Transform) -> Solid {
    builder::transformed(solid, transform.matrix())
}

pub fn solid_bounds(solid: &Solid) -> Option<Aabb> {
    Aabb::from_points(solid.vertex_iter().map(|vertex| vertex.point()))
}

pub fn hole_count(solid: &Solid) -> usize {
    solid
        .face_iter()
        .map(|face| face.boundaries().len())
        .max()
        .unwrap_or(0)
        .saturating_sub(1)
}

fn loop_wire(points: &[Point2]) -> Wire {
    let vertices: Vec<_> = points
        .iter()
        .map(|point| builder::vertex(Point3::new(point.x, point.y, 0.0)))
        .collect();
    let mut edges = Vec::with_capacity(vertices.len());
    for idx in 0..vertices.len() {
        let next = (idx + 1) % vertices.len();
        edges.push(builder::line(&vertices[idx], &vertices[next]));
    }
    edges.into()
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 || !value.is_finite() {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxroom_geometry::Rect2;

    #[test]
    fn box_solid_exists() -> Result<()> {
        let solid = SolidBuilder::box_solid(1.0, 2.0, 3.0)?;
        assert!(solid.face_iter().count() > 0);
        Ok(())
    }

    #[test]
    fn centered_block_straddles_origin() -> Result<()> {
        let solid = SolidBuilder::centered_block(4.0, 3.0, 0.2)?;
        let bounds = solid_bounds(&solid).ok_or(Error::InvalidParameter("empty".into()))?;
        assert!((bounds.min.x + 2.0).abs() < 1.0e-9);
        assert!((bounds.max.y - 1.5).abs() < 1.0e-9);
        assert!((bounds.min.z + 0.1).abs() < 1.0e-9);
        assert_eq!(hole_count(&solid), 0);
        Ok(())
    }

    #[test]
    fn extruded_shape_keeps_holes() -> Result<()> {
        let mut shape = ShapeWithHoles::from_outer(&Rect2::centered(4.0, 3.0));
        shape.push_hole(&Rect2 {
            min_x: -1.5,
            max_x: -0.5,
            min_y: -1.4,
            max_y: 0.6,
        });
        shape.push_hole(&Rect2 {
            min_x: 0.5,
            max_x: 1.5,
            min_y: -1.4,
            max_y: 0.6,
        });

        let solid = SolidBuilder::extrude_shape(&shape, 0.2)?;
        assert_eq!(hole_count(&solid), 2);
        let bounds = solid_bounds(&solid).ok_or(Error::InvalidParameter("empty".into()))?;
        assert!((bounds.min.z + 0.1).abs() < 1.0e-9);
        assert!((bounds.max.z - 0.1).abs() < 1.0e-9);
        Ok(())
    }

    #[test]
    fn rejects_flat_slab() {
        let shape = ShapeWithHoles::from_outer(&Rect2::centered(4.0, 3.0));
        assert!(SolidBuilder::extrude_shape(&shape, 0.0).is_err());
    }
}
