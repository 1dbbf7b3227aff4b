use anyhow::{Result, bail};
use voxroom_base::WallName;
use voxroom_doors::{DoorConfig, DoorConfigPatch, DoorManager};
use voxroom_io::{DEFAULT_TESSELLATION_TOLERANCE, export_room_obj};
use voxroom_room::{OpeningPosition, Room, RoomConfig};

fn main() -> Result<()> {
    let mut doors = DoorManager::new(Room::new(RoomConfig::default())?);

    let config = DoorConfig::default();
    doors.try_create_door("entry", WallName::Front, OpeningPosition::ground(0.0), config)?;
    doors.try_create_door("closet", WallName::Left, OpeningPosition::ground(1.0), config)?;
    doors.try_toggle_door("entry")?;
    for _ in 0..30 {
        doors.tick(1.0 / 60.0);
    }
    doors.try_resize_door("closet", DoorConfigPatch::size(0.8, 2.0))?;
    doors.try_transfer_door("closet", WallName::Back, OpeningPosition::ground(-1.5))?;
    doors.settle();

    if doors.list_doors().len() != 2 {
        bail!("expected two doors");
    }
    export_room_obj(doors.scene(), "out/room", DEFAULT_TESSELLATION_TOLERANCE)?;
    Ok(())
}
