use std::collections::BTreeMap;

use tracing::{debug, info, warn};
use voxroom_base::{Guid, WallName};
use voxroom_room::{
    Opening, OpeningPosition, Scene, WallDescriptor, WallSolid, build_wall_solid, install_solid,
};

use crate::animation::Animator;
use crate::config::{DoorConfig, DoorConfigPatch};
use crate::door::{Door, DoorHandle, DoorSummary, DoorVisuals};
use crate::lighting::{LightProfile, TimeOfDay};
use crate::registry::openings_on_wall;
use crate::validation::{ValidationReport, validate_opening};
use crate::visuals::VisualSet;
use crate::{DoorError, Result};

struct Placement {
    id: String,
    wall_name: WallName,
    position: OpeningPosition,
    config: DoorConfig,
}

pub struct DoorManager<S: Scene> {
    scene: S,
    doors: BTreeMap<String, Door>,
    animator: Animator,
    time_of_day: TimeOfDay,
}

impl<S: Scene> DoorManager<S> {
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            doors: BTreeMap::new(),
            animator: Animator::default(),
            time_of_day: TimeOfDay::default(),
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn into_scene(self) -> S {
        self.scene
    }

    pub fn door(&self, id: &str) -> Option<&Door> {
        self.doors.get(id)
    }

    pub fn doors(&self) -> impl Iterator<Item = &Door> {
        self.doors.values()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn set_time_of_day(&mut self, time: TimeOfDay) {
        self.time_of_day = time;
        for door in self.doors.values().filter(|door| door.is_open) {
            sync_lights(&mut self.scene, door, time);
        }
        debug!(hours = time.hours(), "time of day changed");
    }

    pub fn openings_on_wall(&self, wall: WallName, exclude_id: Option<&str>) -> Vec<Opening> {
        openings_on_wall(self.doors.values(), wall, exclude_id)
    }

    pub fn list_doors(&self) -> Vec<DoorSummary> {
        self.doors.values().map(Door::summary).collect()
    }

    pub fn validate_door_operation(
        &self,
        wall: WallName,
        position: OpeningPosition,
        config: &DoorConfig,
        exclude_id: Option<&str>,
    ) -> ValidationReport {
        match self.scene.find_wall(wall) {
            Some(handle) => validate_opening(
                &handle.descriptor,
                position,
                config,
                &self.openings_on_wall(wall, exclude_id),
            ),
            None => ValidationReport::failed(format!("wall {wall} not found")),
        }
    }

    pub fn create_door(
        &mut self,
        id: &str,
        wall: WallName,
        position: OpeningPosition,
        config: DoorConfig,
    ) -> Option<DoorHandle> {
        match self.try_create_door(id, wall, position, config) {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!(door = id, wall = %wall, error = %err, "create door failed");
                None
            }
        }
    }

    pub fn toggle_door(&mut self, id: &str) -> bool {
        match self.try_toggle_door(id) {
            Ok(_) => true,
            Err(err) => {
                warn!(door = id, error = %err, "toggle door failed");
                false
            }
        }
    }

    pub fn remove_door(&mut self, id: &str) -> bool {
        match self.try_remove_door(id) {
            Ok(()) => true,
            Err(err) => {
                warn!(door = id, error = %err, "remove door failed");
                false
            }
        }
    }

    pub fn resize_door(&mut self, id: &str, patch: DoorConfigPatch) -> bool {
        match self.try_resize_door(id, patch) {
            Ok(()) => true,
            Err(err) => {
                warn!(door = id, error = %err, "resize door failed");
                false
            }
        }
    }

    pub fn move_door(&mut self, id: &str, position: OpeningPosition) -> bool {
        match self.try_move_door(id, position) {
            Ok(()) => true,
            Err(err) => {
                warn!(door = id, error = %err, "move door failed");
                false
            }
        }
    }

    pub fn transfer_door(&mut self, id: &str, wall: WallName, position: OpeningPosition) -> bool {
        match self.try_transfer_door(id, wall, position) {
            Ok(()) => true,
            Err(err) => {
                warn!(door = id, wall = %wall, error = %err, "transfer door failed");
                false
            }
        }
    }

    pub fn try_create_door(
        &mut self,
        id: &str,
        wall: WallName,
        position: OpeningPosition,
        config: DoorConfig,
    ) -> Result<DoorHandle> {
        if id.is_empty() {
            return Err(DoorError::ValidationFailed(ValidationReport::failed(
                "door id must not be empty",
            )));
        }
        if self.doors.contains_key(id) {
            return Err(DoorError::DuplicateDoor(id.to_string()));
        }
        let position = OpeningPosition::ground(position.x);
        self.check_placement(wall, position, &config, id)?;

        let candidate = Opening::door(id, config.width, config.height, position);
        let built = self.synthesize(wall, id, Some(&candidate))?;
        let handle = self.commit(
            Placement {
                id: id.to_string(),
                wall_name: wall,
                position,
                config,
            },
            vec![(wall, built)],
        )?;
        info!(door = id, wall = %wall, x = position.x, "door created");
        Ok(handle)
    }

    pub fn try_toggle_door(&mut self, id: &str) -> Result<bool> {
        let Some(door) = self.doors.get_mut(id) else {
            return Err(DoorError::DoorNotFound(id.to_string()));
        };
        door.is_open = !door.is_open;
        let token = self.animator.start(
            id,
            door.leaf_rotation,
            door.target_rotation(),
            door.config.animation_speed,
        );
        sync_lights(&mut self.scene, door, self.time_of_day);
        info!(door = id, open = door.is_open, token, "door toggled");
        Ok(door.is_open)
    }

    pub fn try_remove_door(&mut self, id: &str) -> Result<()> {
        let wall = match self.doors.get(id) {
            Some(door) => door.wall_name,
            None => return Err(DoorError::DoorNotFound(id.to_string())),
        };
        let built = self.synthesize(wall, id, None)?;

        self.animator.cancel(id);
        if let Some(door) = self.doors.remove(id) {
            self.release_visuals(&door.visuals);
        }
        install_solid(&mut self.scene, wall, Ok(built))
            .map_err(DoorError::StructuralRebuildFailed)?;
        info!(door = id, wall = %wall, "door removed");
        Ok(())
    }

    pub fn try_resize_door(&mut self, id: &str, patch: DoorConfigPatch) -> Result<()> {
        let door = self.existing(id)?;
        let config = patch.apply_to(&door.config);
        self.relocate(&door, door.wall_name, door.position, config)?;
        info!(
            door = id,
            width = config.width,
            height = config.height,
            "door resized"
        );
        Ok(())
    }

    pub fn try_move_door(&mut self, id: &str, position: OpeningPosition) -> Result<()> {
        let door = self.existing(id)?;
        let position = OpeningPosition::ground(position.x);
        self.relocate(&door, door.wall_name, position, door.config)?;
        info!(door = id, x = position.x, "door moved");
        Ok(())
    }

    pub fn try_transfer_door(
        &mut self,
        id: &str,
        wall: WallName,
        position: OpeningPosition,
    ) -> Result<()> {
        let door = self.existing(id)?;
        if door.wall_name == wall {
            return self.try_move_door(id, position);
        }
        let position = OpeningPosition::ground(position.x);
        self.relocate(&door, wall, position, door.config)?;
        info!(door = id, from = %door.wall_name, to = %wall, x = position.x, "door transferred");
        Ok(())
    }

    pub fn tick(&mut self, dt: f64) {
        let angles = self.animator.advance(dt);
        self.apply_angles(angles);
    }

    pub fn settle(&mut self) {
        let angles = self.animator.finish_all();
        self.apply_angles(angles);
    }

    fn apply_angles(&mut self, angles: Vec<(String, f64)>) {
        for (id, angle) in angles {
            if let Some(door) = self.doors.get_mut(&id) {
                door.leaf_rotation = angle;
                sync_leaf(&mut self.scene, door);
            }
        }
    }

    fn existing(&self, id: &str) -> Result<Door> {
        self.doors
            .get(id)
            .cloned()
            .ok_or_else(|| DoorError::DoorNotFound(id.to_string()))
    }

    fn wall_descriptor(&self, wall: WallName) -> Result<WallDescriptor> {
        self.scene
            .find_wall(wall)
            .map(|handle| handle.descriptor)
            .ok_or(DoorError::WallNotFound(wall))
    }

    fn check_placement(
        &self,
        wall: WallName,
        position: OpeningPosition,
        config: &DoorConfig,
        id: &str,
    ) -> Result<()> {
        self.wall_descriptor(wall)?;
        let report = self.validate_door_operation(wall, position, config, Some(id));
        for warning in &report.warnings {
            debug!(door = id, wall = %wall, "{warning}");
        }
        if report.valid {
            Ok(())
        } else {
            Err(DoorError::ValidationFailed(report))
        }
    }

    fn synthesize(&self, wall: WallName, id: &str, candidate: Option<&Opening>) -> Result<WallSolid> {
        let descriptor = self.wall_descriptor(wall)?;
        let mut openings = self.openings_on_wall(wall, Some(id));
        openings.extend(candidate.cloned());

        let built =
            build_wall_solid(&descriptor, &openings).map_err(DoorError::OpeningSynthesisFailed)?;
        if let Some(dropped) = built.dropped.iter().find(|dropped| dropped.owner_id == id) {
            return Err(DoorError::OpeningSynthesisFailed(dropped.to_error()));
        }
        Ok(built)
    }

    fn relocate(
        &mut self,
        door: &Door,
        wall: WallName,
        position: OpeningPosition,
        config: DoorConfig,
    ) -> Result<()> {
        self.check_placement(wall, position, &config, &door.id)?;
        let candidate = Opening::door(door.id.clone(), config.width, config.height, position);

        let mut walls = Vec::with_capacity(2);
        if wall != door.wall_name {
            walls.push((door.wall_name, self.synthesize(door.wall_name, &door.id, None)?));
        }
        walls.push((wall, self.synthesize(wall, &door.id, Some(&candidate))?));

        self.commit(
            Placement {
                id: door.id.clone(),
                wall_name: wall,
                position,
                config,
            },
            walls,
        )?;
        Ok(())
    }

    fn commit(&mut self, placement: Placement, walls: Vec<(WallName, WallSolid)>) -> Result<DoorHandle> {
        let set = match self.scene.find_wall(placement.wall_name) {
            Some(handle) => VisualSet::build(
                &placement.id,
                handle,
                placement.position,
                &placement.config,
            )
            .map_err(DoorError::StructuralRebuildFailed)?,
            None => return Err(DoorError::WallNotFound(placement.wall_name)),
        };
        let base_rotation = set.base_rotation;
        let visuals = self.add_visuals(set)?;

        let was_open = match self.doors.remove(&placement.id) {
            Some(previous) => {
                self.release_visuals(&previous.visuals);
                previous.is_open
            }
            None => false,
        };
        self.animator.cancel(&placement.id);
        for (name, solid) in walls {
            install_solid(&mut self.scene, name, Ok(solid))
                .map_err(DoorError::StructuralRebuildFailed)?;
        }

        let mut door = Door {
            id: placement.id,
            wall_name: placement.wall_name,
            position: placement.position,
            config: placement.config,
            is_open: false,
            visuals,
            base_rotation,
            leaf_rotation: base_rotation,
        };
        if was_open {
            door.is_open = true;
            door.leaf_rotation = door.open_rotation();
            sync_leaf(&mut self.scene, &door);
            sync_lights(&mut self.scene, &door, self.time_of_day);
        }
        let handle = door.handle();
        self.doors.insert(door.id.clone(), door);
        Ok(handle)
    }

    fn add_visuals(&mut self, set: VisualSet) -> Result<DoorVisuals> {
        let mut added: Vec<Guid> = Vec::with_capacity(3);
        for object in [set.frame, set.leaf, set.light_rig] {
            match self.scene.add_object(object) {
                Ok(id) => added.push(id),
                Err(err) => {
                    for id in added {
                        self.scene.remove_object(id);
                    }
                    return Err(DoorError::StructuralRebuildFailed(err));
                }
            }
        }
        Ok(DoorVisuals {
            frame: added[0],
            leaf: added[1],
            light_rig: added[2],
        })
    }

    fn release_visuals(&mut self, visuals: &DoorVisuals) {
        for id in visuals.ids() {
            if self.scene.remove_object(id).is_none() {
                warn!(object = %id, "door visual already gone from scene");
            }
        }
    }
}

fn sync_leaf<S: Scene>(scene: &mut S, door: &Door) {
    if let Some(leaf) = scene.object_mut(door.visuals.leaf) {
        leaf.transform.rotation.y = door.leaf_rotation;
    }
}

fn sync_lights<S: Scene>(scene: &mut S, door: &Door, time: TimeOfDay) {
    let profile = if door.is_open {
        LightProfile::for_time(time)
    } else {
        LightProfile::OFF
    };
    if let Some(lights) = scene
        .object_mut(door.visuals.light_rig)
        .and_then(|rig| rig.lights_mut())
    {
        profile.apply(lights);
    }
}
