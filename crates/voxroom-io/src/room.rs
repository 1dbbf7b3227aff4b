use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use voxroom_room::{Room, WallHandle};
use voxroom_topology::placed;

use crate::mesh::{export_obj, room_mesh, write_obj};
use crate::step::export_step;

fn wall_path(dir: &Path, wall: &WallHandle, ext: &str) -> PathBuf {
    dir.join(format!("wall_{}.{ext}", wall.name()))
}

pub fn export_room_obj(room: &Room, dir: impl AsRef<Path>, tol: f64) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut written = Vec::new();

    for wall in room.walls() {
        let path = wall_path(dir, wall, "obj");
        let world = placed(&wall.solid.solid, &wall.transform);
        export_obj(&world, &path, tol).with_context(|| format!("export wall {}", wall.name()))?;
        written.push(path);
    }

    for (_, object) in room.objects() {
        for (idx, solid) in object.solids().iter().enumerate() {
            let path = dir.join(format!(
                "{}_{}_{idx}.obj",
                object.owner_id,
                object.kind.as_str()
            ));
            let world = placed(solid, &object.transform);
            export_obj(&world, &path, tol)
                .with_context(|| format!("export {} of {}", object.kind.as_str(), object.owner_id))?;
            written.push(path);
        }
    }
    debug!(files = written.len(), "room pieces exported");
    Ok(written)
}

pub fn export_room_mesh(room: &Room, path: impl AsRef<Path>, tol: f64) -> Result<()> {
    let path = path.as_ref();
    write_obj(&room_mesh(room, tol), path).context("export room mesh")
}

pub fn export_room_step(room: &Room, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    room.walls()
        .map(|wall| {
            let path = wall_path(dir, wall, "step");
            let world = placed(&wall.solid.solid, &wall.transform);
            export_step(&world, &path).with_context(|| format!("export wall {}", wall.name()))?;
            Ok(path)
        })
        .collect()
}
