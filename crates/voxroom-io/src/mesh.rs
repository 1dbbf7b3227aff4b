use anyhow::{Context, Result, bail};
use std::fs::File;
use std::path::Path;
use truck_meshalgo::prelude::*;
use truck_polymesh::{PolygonMesh, obj};
use voxroom_room::Room;
use voxroom_topology::{Solid, placed};

pub const DEFAULT_TESSELLATION_TOLERANCE: f64 = 0.01;

pub fn triangulate_solid(solid: &Solid, tol: f64) -> PolygonMesh {
    let mut mesh = solid.triangulation(tol).to_polygon();
    mesh.add_naive_normals(true);
    mesh.put_together_same_attrs(truck_base::tolerance::TOLERANCE);
    mesh.remove_unused_attrs();
    mesh
}

// walls and door solids in world coordinates; light rigs have no geometry
pub fn room_mesh(room: &Room, tol: f64) -> PolygonMesh {
    let mut mesh = PolygonMesh::default();
    for wall in room.walls() {
        mesh.merge(triangulate_solid(&placed(&wall.solid.solid, &wall.transform), tol));
    }
    for (_, object) in room.objects() {
        for solid in object.solids() {
            mesh.merge(triangulate_solid(&placed(solid, &object.transform), tol));
        }
    }
    mesh
}

pub fn export_obj(solid: &Solid, path: impl AsRef<Path>, tol: f64) -> Result<()> {
    write_obj(&triangulate_solid(solid, tol), path.as_ref())
}

pub(crate) fn write_obj(mesh: &PolygonMesh, path: &Path) -> Result<()> {
    if mesh.positions().is_empty() {
        bail!("triangulation for {} produced an empty mesh", path.display());
    }
    ensure_parent(path)?;
    let file = File::create(path).with_context(|| format!("create OBJ file {}", path.display()))?;
    obj::write(mesh, file).with_context(|| format!("write OBJ file {}", path.display()))?;
    Ok(())
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    Ok(())
}
