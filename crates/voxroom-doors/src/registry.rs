use voxroom_base::WallName;
use voxroom_room::Opening;

use crate::door::Door;

pub fn openings_on_wall<'a>(
    doors: impl IntoIterator<Item = &'a Door>,
    wall: WallName,
    exclude_id: Option<&str>,
) -> Vec<Opening> {
    doors
        .into_iter()
        .filter(|door| door.wall_name == wall)
        .filter(|door| exclude_id != Some(door.id.as_str()))
        .map(Door::opening)
        .collect()
}
