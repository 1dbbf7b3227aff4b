use anyhow::Result;
use voxroom_base::WallName;
use voxroom_io::{DEFAULT_TESSELLATION_TOLERANCE, export_obj};
use voxroom_room::{Opening, OpeningPosition, RoomConfig, build_wall_solid};

fn main() -> Result<()> {
    let descriptor = RoomConfig::default().wall_descriptor(WallName::Front);
    let openings = [
        Opening::door("d1", 0.9, 2.1, OpeningPosition::ground(-1.2)),
        Opening::door("d2", 0.9, 2.1, OpeningPosition::ground(1.2)),
    ];
    let wall = build_wall_solid(&descriptor, &openings)?;
    export_obj(&wall.solid, "out/front_wall.obj", DEFAULT_TESSELLATION_TOLERANCE)?;
    Ok(())
}
