use tracing::debug;
use voxroom_base::WallName;
use voxroom_geometry::Transform;

use crate::builder::WallSolid;
use crate::config::WallDescriptor;
use crate::opening::OpeningMetadata;
use crate::scene::{Scene, WallHandle};
use crate::{Error, Result};

pub fn installed_wall(descriptor: WallDescriptor, transform: Transform, solid: WallSolid) -> WallHandle {
    let world_bounds = solid.local_bounds.transformed(&transform);
    let metadata = OpeningMetadata::from_openings(&solid.openings);
    WallHandle {
        descriptor,
        transform,
        world_matrix: transform.matrix(),
        world_bounds,
        solid,
        metadata,
    }
}

pub fn install_solid<S: Scene + ?Sized>(
    scene: &mut S,
    name: WallName,
    built: Result<WallSolid>,
) -> Result<()> {
    let (descriptor, transform) = match scene.find_wall(name) {
        Some(wall) => (wall.descriptor, wall.transform),
        None => return Err(Error::WallNotFound(name)),
    };
    let solid = built?;
    let installed = installed_wall(descriptor, transform, solid);
    debug!(
        wall = %name,
        solid = %installed.solid.guid,
        openings = installed.metadata.openings.len(),
        "installing wall solid"
    );
    if let Some(previous) = scene.replace_wall(installed) {
        scene.dispose_solid(previous.solid);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_wall_solid;
    use crate::config::RoomConfig;
    use crate::opening::{Opening, OpeningPosition};
    use crate::scene::Room;

    #[test]
    fn install_keeps_transform_bits_and_disposes_old_solid() -> Result<()> {
        let mut room = Room::new(RoomConfig::default())?;
        let before = room
            .find_wall(WallName::Front)
            .ok_or(Error::WallNotFound(WallName::Front))?
            .clone();

        let openings = [Opening::door("d1", 0.9, 2.1, OpeningPosition::ground(0.5))];
        let built = build_wall_solid(&before.descriptor, &openings);
        install_solid(&mut room, WallName::Front, built)?;

        let after = room
            .find_wall(WallName::Front)
            .ok_or(Error::WallNotFound(WallName::Front))?;
        assert_eq!(after.transform.to_bits(), before.transform.to_bits());
        assert_ne!(after.solid.guid, before.solid.guid);
        assert_eq!(room.disposed_solids(), &[before.solid.guid]);
        assert!(after.metadata.has_opening);
        assert_eq!(after.metadata.openings[0].owner_id, "d1");
        Ok(())
    }

    #[test]
    fn failed_build_leaves_wall_untouched() -> Result<()> {
        let mut room = Room::new(RoomConfig::default())?;
        let before = room
            .find_wall(WallName::Back)
            .map(|wall| wall.solid.guid)
            .ok_or(Error::WallNotFound(WallName::Back))?;

        let result = install_solid(
            &mut room,
            WallName::Back,
            Err(Error::NoOpeningsProvided(WallName::Back)),
        );
        assert!(result.is_err());
        let after = room.find_wall(WallName::Back).map(|wall| wall.solid.guid);
        assert_eq!(after, Some(before));
        assert!(room.disposed_solids().is_empty());
        Ok(())
    }

    #[test]
    fn missing_wall_is_reported() -> Result<()> {
        let config = RoomConfig::default();
        let mut room = Room::with_walls(config, &[WallName::Front])?;
        let descriptor = config.wall_descriptor(WallName::Left);
        let result = install_solid(&mut room, WallName::Left, build_wall_solid(&descriptor, &[]));
        assert!(matches!(result, Err(Error::WallNotFound(WallName::Left))));
        Ok(())
    }
}
