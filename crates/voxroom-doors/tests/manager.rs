use std::f64::consts::FRAC_PI_2;

use voxroom_base::{Guid, WallName};
use voxroom_doors::{DoorConfig, DoorConfigPatch, DoorError, DoorManager, TimeOfDay};
use voxroom_geometry::Point3;
use voxroom_room::{
    Error as RoomError, OpeningPosition, Room, RoomConfig, Scene, SceneObject, WallHandle,
    WallSolid,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

// Room wrapper that starts rejecting objects after a set number of adds.
struct FlakyScene {
    inner: Room,
    adds_left: Option<usize>,
}

impl Scene for FlakyScene {
    fn room_config(&self) -> &RoomConfig {
        self.inner.room_config()
    }

    fn find_wall(&self, name: WallName) -> Option<&WallHandle> {
        self.inner.find_wall(name)
    }

    fn replace_wall(&mut self, wall: WallHandle) -> Option<WallHandle> {
        self.inner.replace_wall(wall)
    }

    fn dispose_solid(&mut self, solid: WallSolid) {
        self.inner.dispose_solid(solid)
    }

    fn add_object(&mut self, object: SceneObject) -> voxroom_room::Result<Guid> {
        if let Some(left) = self.adds_left.as_mut() {
            if *left == 0 {
                return Err(RoomError::Scene("scene is full".to_string()));
            }
            *left -= 1;
        }
        self.inner.add_object(object)
    }

    fn remove_object(&mut self, id: Guid) -> Option<SceneObject> {
        self.inner.remove_object(id)
    }

    fn object(&self, id: Guid) -> Option<&SceneObject> {
        self.inner.object(id)
    }

    fn object_mut(&mut self, id: Guid) -> Option<&mut SceneObject> {
        self.inner.object_mut(id)
    }
}

fn wall<S: Scene>(manager: &DoorManager<S>, name: WallName) -> &WallHandle {
    match manager.scene().find_wall(name) {
        Some(wall) => wall,
        None => panic!("room is missing wall {name}"),
    }
}

fn opening_ids<S: Scene>(manager: &DoorManager<S>, name: WallName) -> Vec<String> {
    wall(manager, name)
        .metadata
        .openings
        .iter()
        .map(|opening| opening.owner_id.clone())
        .collect()
}

fn create<S: Scene>(manager: &mut DoorManager<S>, id: &str, name: WallName, x: f64) -> TestResult {
    manager.try_create_door(id, name, OpeningPosition::ground(x), DoorConfig::default())?;
    Ok(())
}

#[test]
fn create_cuts_opening_and_adds_visuals() -> TestResult {
    let mut manager = DoorManager::new(Room::new(RoomConfig::default())?);
    let before = wall(&manager, WallName::Front).transform.to_bits();

    let handle = manager.create_door(
        "d1",
        WallName::Front,
        OpeningPosition { x: 0.5, y: 0.7 },
        DoorConfig::default(),
    );
    let Some(handle) = handle else {
        panic!("door was not created");
    };

    let front = wall(&manager, WallName::Front);
    assert!(front.metadata.has_opening);
    assert!(!front.metadata.has_multiple_openings);
    assert_eq!(front.transform.to_bits(), before);
    assert_eq!(manager.scene().object_count(), 3);
    assert!(handle.visuals.ids().iter().all(|id| manager.scene().object(*id).is_some()));
    assert_eq!(manager.door("d1").map(|door| door.position.y), Some(0.0));
    Ok(())
}

#[test]
fn duplicate_id_is_rejected() -> TestResult {
    let mut manager = DoorManager::new(Room::new(RoomConfig::default())?);
    create(&mut manager, "d1", WallName::Front, -1.0)?;

    let result = manager.try_create_door(
        "d1",
        WallName::Back,
        OpeningPosition::ground(0.0),
        DoorConfig::default(),
    );
    assert!(matches!(result, Err(DoorError::DuplicateDoor(_))));
    assert_eq!(manager.scene().object_count(), 3);
    assert!(!wall(&manager, WallName::Back).metadata.has_opening);
    Ok(())
}

#[test]
fn missing_wall_is_reported() -> TestResult {
    let room = Room::with_walls(RoomConfig::default(), &[WallName::Front])?;
    let mut manager = DoorManager::new(room);

    let result = manager.try_create_door(
        "d1",
        WallName::Left,
        OpeningPosition::ground(0.0),
        DoorConfig::default(),
    );
    assert!(matches!(result, Err(DoorError::WallNotFound(WallName::Left))));

    let report = manager.validate_door_operation(
        WallName::Left,
        OpeningPosition::ground(0.0),
        &DoorConfig::default(),
        None,
    );
    assert!(!report.valid);
    assert!(manager.list_doors().is_empty());
    Ok(())
}

#[test]
fn invalid_placement_never_touches_the_wall() -> TestResult {
    let mut manager = DoorManager::new(Room::new(RoomConfig::default())?);
    let solid = wall(&manager, WallName::Front).solid.guid;

    let result = manager.try_create_door(
        "d1",
        WallName::Front,
        OpeningPosition::ground(2.9),
        DoorConfig::default(),
    );
    let Err(DoorError::ValidationFailed(report)) = result else {
        panic!("expected a validation failure");
    };
    assert!(!report.errors.is_empty());
    assert_eq!(wall(&manager, WallName::Front).solid.guid, solid);
    assert_eq!(manager.scene().object_count(), 0);
    Ok(())
}

#[test]
fn moving_the_middle_door_keeps_its_neighbors() -> TestResult {
    let config = RoomConfig {
        width: 8.0,
        ..RoomConfig::default()
    };
    let mut manager = DoorManager::new(Room::new(config)?);
    create(&mut manager, "d1", WallName::Front, -1.5)?;
    create(&mut manager, "d2", WallName::Front, 0.0)?;
    create(&mut manager, "d3", WallName::Front, 1.5)?;
    let bits = wall(&manager, WallName::Front).transform.to_bits();

    assert!(manager.move_door("d2", OpeningPosition::ground(2.5)));

    let front = wall(&manager, WallName::Front);
    assert_eq!(front.metadata.openings.len(), 3);
    assert_eq!(front.transform.to_bits(), bits);
    let x_of = |id: &str| front.metadata.find(id).map(|opening| opening.position.x);
    assert_eq!(x_of("d1"), Some(-1.5));
    assert_eq!(x_of("d2"), Some(2.5));
    assert_eq!(x_of("d3"), Some(1.5));
    assert_eq!(manager.scene().object_count(), 9);
    Ok(())
}

#[test]
fn transfer_moves_exactly_one_opening() -> TestResult {
    let config = RoomConfig {
        depth: 6.0,
        ..RoomConfig::default()
    };
    let mut manager = DoorManager::new(Room::new(config)?);
    create(&mut manager, "a1", WallName::Left, -1.5)?;
    create(&mut manager, "a2", WallName::Left, 0.0)?;
    create(&mut manager, "a3", WallName::Left, 1.5)?;
    create(&mut manager, "b1", WallName::Right, 0.0)?;

    assert!(manager.transfer_door("a3", WallName::Right, OpeningPosition::ground(1.5)));
    assert_eq!(opening_ids(&manager, WallName::Left), vec!["a1", "a2"]);
    assert_eq!(opening_ids(&manager, WallName::Right), vec!["b1", "a3"]);
    assert_eq!(manager.door("a3").map(|door| door.wall_name), Some(WallName::Right));

    // a2 would land on top of b1
    let left = wall(&manager, WallName::Left).solid.guid;
    let right = wall(&manager, WallName::Right).solid.guid;
    let result = manager.try_transfer_door("a2", WallName::Right, OpeningPosition::ground(0.2));
    assert!(matches!(result, Err(DoorError::ValidationFailed(_))));
    assert_eq!(wall(&manager, WallName::Left).solid.guid, left);
    assert_eq!(wall(&manager, WallName::Right).solid.guid, right);
    assert_eq!(opening_ids(&manager, WallName::Left), vec!["a1", "a2"]);
    assert_eq!(manager.door("a2").map(|door| door.wall_name), Some(WallName::Left));
    assert_eq!(manager.scene().object_count(), 12);
    Ok(())
}

#[test]
fn transfer_to_own_wall_is_a_move() -> TestResult {
    let mut manager = DoorManager::new(Room::new(RoomConfig::default())?);
    create(&mut manager, "d1", WallName::Back, 0.0)?;

    manager.try_transfer_door("d1", WallName::Back, OpeningPosition::ground(1.0))?;
    let back = wall(&manager, WallName::Back);
    assert_eq!(back.metadata.openings.len(), 1);
    assert_eq!(back.metadata.openings[0].position.x, 1.0);
    Ok(())
}

#[test]
fn toggling_twice_restores_the_closed_leaf() -> TestResult {
    let mut manager = DoorManager::new(Room::new(RoomConfig::default())?);
    create(&mut manager, "d1", WallName::Front, 0.0)?;

    assert!(manager.try_toggle_door("d1")?);
    manager.settle();
    let Some(door) = manager.door("d1").cloned() else {
        panic!("door d1 vanished");
    };
    assert_eq!(door.leaf_rotation, FRAC_PI_2);
    let rig = manager.scene().object(door.visuals.light_rig);
    assert!(rig.is_some_and(|rig| rig.lights().iter().all(|light| light.intensity > 0.0)));

    // rebuild while open keeps the door open
    assert!(manager.resize_door("d1", DoorConfigPatch::size(1.0, 2.0)));
    let Some(door) = manager.door("d1").cloned() else {
        panic!("door d1 vanished");
    };
    assert!(door.is_open);
    assert_eq!(door.leaf_rotation, door.open_rotation());

    assert!(!manager.try_toggle_door("d1")?);
    manager.settle();
    let Some(door) = manager.door("d1").cloned() else {
        panic!("door d1 vanished");
    };
    assert_eq!(door.leaf_rotation, door.base_rotation);
    let leaf = manager.scene().object(door.visuals.leaf);
    assert_eq!(leaf.map(|leaf| leaf.transform.rotation.y), Some(door.base_rotation));
    let rig = manager.scene().object(door.visuals.light_rig);
    assert!(rig.is_some_and(|rig| rig.lights().iter().all(|light| light.intensity == 0.0)));
    Ok(())
}

#[test]
fn open_leaves_swing_into_the_room() -> TestResult {
    let config = RoomConfig::default();
    let mut manager = DoorManager::new(Room::new(config)?);
    for name in WallName::ALL {
        let id = name.to_string();
        create(&mut manager, &id, name, 0.0)?;
        manager.try_toggle_door(&id)?;
    }
    manager.settle();

    let limit_x = config.width * 0.5 - 0.5;
    let limit_z = config.depth * 0.5 - 0.5;
    for name in WallName::ALL {
        let Some(door) = manager.door(&name.to_string()).cloned() else {
            panic!("door on {name} vanished");
        };
        let Some(leaf) = manager.scene().object(door.visuals.leaf) else {
            panic!("leaf on {name} vanished");
        };
        let free_edge = leaf.transform.apply(Point3::new(door.config.width, 0.0, 0.0));
        assert!(free_edge.x.abs() < limit_x, "{name}: x = {}", free_edge.x);
        assert!(free_edge.z.abs() < limit_z, "{name}: z = {}", free_edge.z);
    }
    Ok(())
}

#[test]
fn second_toggle_supersedes_the_running_swing() -> TestResult {
    let mut manager = DoorManager::new(Room::new(RoomConfig::default())?);
    create(&mut manager, "d1", WallName::Right, 0.0)?;
    let base = manager.door("d1").map(|door| door.base_rotation).unwrap_or_default();

    manager.try_toggle_door("d1")?;
    manager.tick(0.2);
    let midway = manager.door("d1").map(|door| door.leaf_rotation).unwrap_or_default();
    assert!(midway != base);

    manager.try_toggle_door("d1")?;
    let target = manager.animator().get("d1").map(|animation| animation.target);
    assert_eq!(target, Some(base));
    manager.tick(10.0);
    assert!(manager.animator().is_idle());
    assert_eq!(manager.door("d1").map(|door| door.leaf_rotation), Some(base));
    Ok(())
}

#[test]
fn removing_the_last_door_restores_a_plain_wall() -> TestResult {
    let mut manager = DoorManager::new(Room::new(RoomConfig::default())?);
    create(&mut manager, "d1", WallName::Left, 0.5)?;

    assert!(manager.remove_door("d1"));
    let left = wall(&manager, WallName::Left);
    assert!(!left.metadata.has_opening);
    assert!(left.solid.is_plain());
    assert_eq!(manager.scene().object_count(), 0);
    assert!(!manager.remove_door("d1"));
    Ok(())
}

#[test]
fn failed_resize_keeps_the_old_config() -> TestResult {
    let mut manager = DoorManager::new(Room::new(RoomConfig::default())?);
    create(&mut manager, "d1", WallName::Front, 0.0)?;

    assert!(!manager.resize_door("d1", DoorConfigPatch::size(10.0, 2.1)));
    assert_eq!(manager.door("d1").map(|door| door.config), Some(DoorConfig::default()));
    let front = wall(&manager, WallName::Front);
    assert_eq!(front.metadata.openings[0].width, DoorConfig::default().width);
    Ok(())
}

#[test]
fn rejected_visuals_roll_everything_back() -> TestResult {
    let scene = FlakyScene {
        inner: Room::new(RoomConfig::default())?,
        adds_left: None,
    };
    let mut manager = DoorManager::new(scene);
    create(&mut manager, "d1", WallName::Front, 0.0)?;
    let Some(before) = manager.door("d1").cloned() else {
        panic!("door d1 vanished");
    };
    let solid = wall(&manager, WallName::Front).solid.guid;

    // the frame goes in, the leaf is refused
    manager.scene_mut().adds_left = Some(1);
    let result = manager.try_move_door("d1", OpeningPosition::ground(1.0));
    assert!(matches!(result, Err(DoorError::StructuralRebuildFailed(_))));

    let Some(after) = manager.door("d1").cloned() else {
        panic!("door d1 vanished");
    };
    assert_eq!(after.position, before.position);
    assert_eq!(after.visuals, before.visuals);
    assert_eq!(wall(&manager, WallName::Front).solid.guid, solid);
    assert_eq!(manager.scene().inner.object_count(), 3);
    assert_eq!(manager.scene().inner.disposed_solids().len(), 1);
    Ok(())
}

#[test]
fn night_light_for_open_doors() -> TestResult {
    let mut manager = DoorManager::new(Room::new(RoomConfig::default())?);
    create(&mut manager, "d1", WallName::Back, 0.0)?;
    manager.try_toggle_door("d1")?;

    manager.set_time_of_day(TimeOfDay::new(23.0));
    let rig = manager
        .door("d1")
        .and_then(|door| manager.scene().object(door.visuals.light_rig));
    assert!(rig.is_some_and(|rig| rig.lights().iter().all(|light| light.intensity == 0.35)));
    Ok(())
}
