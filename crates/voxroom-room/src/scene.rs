use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use voxroom_base::{Guid, RoomDimensions, WallName};
use voxroom_geometry::{Aabb, Matrix4, Point3, Transform};
use voxroom_topology::Solid;

use crate::builder::{WallSolid, build_plain_wall};
use crate::config::{RoomConfig, WallDescriptor};
use crate::mutation::installed_wall;
use crate::opening::OpeningMetadata;
use crate::{Error, Result};

#[derive(Clone, Debug)]
pub struct WallHandle {
    pub descriptor: WallDescriptor,
    pub transform: Transform,
    pub world_matrix: Matrix4,
    pub world_bounds: Aabb,
    pub solid: WallSolid,
    pub metadata: OpeningMetadata,
}

impl WallHandle {
    pub fn name(&self) -> WallName {
        self.descriptor.name
    }

    pub fn local_to_world(&self, point: Point3) -> Point3 {
        self.transform.apply(point)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneObjectKind {
    Frame,
    Leaf,
    LightRig,
}

impl SceneObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneObjectKind::Frame => "frame",
            SceneObjectKind::Leaf => "leaf",
            SceneObjectKind::LightRig => "light_rig",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub color: [f64; 3],
    pub intensity: f64,
}

// payload coordinates are local to the owning object's transform
#[derive(Clone, Debug)]
pub enum ObjectPayload {
    Solids(Vec<Solid>),
    Lights(Vec<PointLight>),
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub kind: SceneObjectKind,
    pub owner_id: String,
    pub transform: Transform,
    pub payload: ObjectPayload,
}

impl SceneObject {
    pub fn lights(&self) -> &[PointLight] {
        match &self.payload {
            ObjectPayload::Lights(lights) => lights,
            ObjectPayload::Solids(_) => &[],
        }
    }

    pub fn world_lights(&self) -> Vec<PointLight> {
        self.lights()
            .iter()
            .map(|light| PointLight {
                position: self.transform.apply(light.position),
                ..*light
            })
            .collect()
    }

    pub fn lights_mut(&mut self) -> Option<&mut Vec<PointLight>> {
        match &mut self.payload {
            ObjectPayload::Lights(lights) => Some(lights),
            ObjectPayload::Solids(_) => None,
        }
    }

    pub fn solids(&self) -> &[Solid] {
        match &self.payload {
            ObjectPayload::Solids(solids) => solids,
            ObjectPayload::Lights(_) => &[],
        }
    }
}

pub trait Scene {
    fn room_config(&self) -> &RoomConfig;

    fn dimensions(&self) -> RoomDimensions {
        self.room_config().dimensions()
    }

    fn find_wall(&self, name: WallName) -> Option<&WallHandle>;

    fn replace_wall(&mut self, wall: WallHandle) -> Option<WallHandle>;

    fn dispose_solid(&mut self, solid: WallSolid);

    fn add_object(&mut self, object: SceneObject) -> Result<Guid>;

    fn remove_object(&mut self, id: Guid) -> Option<SceneObject>;

    fn object(&self, id: Guid) -> Option<&SceneObject>;

    fn object_mut(&mut self, id: Guid) -> Option<&mut SceneObject>;
}

#[derive(Debug)]
pub struct Room {
    config: RoomConfig,
    walls: BTreeMap<WallName, WallHandle>,
    objects: BTreeMap<Guid, SceneObject>,
    disposed: Vec<Guid>,
}

impl Room {
    pub fn new(config: RoomConfig) -> Result<Self> {
        Self::with_walls(config, &WallName::ALL)
    }

    pub fn with_walls(config: RoomConfig, names: &[WallName]) -> Result<Self> {
        config.validate()?;
        let mut walls = BTreeMap::new();
        for &name in names {
            let descriptor = config.wall_descriptor(name);
            let solid = build_plain_wall(
                descriptor.outer_width,
                descriptor.outer_height,
                descriptor.thickness,
            )?;
            let wall = installed_wall(descriptor, config.wall_transform(name), solid);
            walls.insert(name, wall);
        }
        Ok(Self {
            config,
            walls,
            objects: BTreeMap::new(),
            disposed: Vec::new(),
        })
    }

    pub fn walls(&self) -> impl Iterator<Item = &WallHandle> {
        self.walls.values()
    }

    pub fn objects(&self) -> impl Iterator<Item = (&Guid, &SceneObject)> {
        self.objects.iter()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn disposed_solids(&self) -> &[Guid] {
        &self.disposed
    }
}

impl Scene for Room {
    fn room_config(&self) -> &RoomConfig {
        &self.config
    }

    fn find_wall(&self, name: WallName) -> Option<&WallHandle> {
        self.walls.get(&name)
    }

    fn replace_wall(&mut self, wall: WallHandle) -> Option<WallHandle> {
        self.walls.insert(wall.name(), wall)
    }

    fn dispose_solid(&mut self, solid: WallSolid) {
        self.disposed.push(solid.guid);
    }

    fn add_object(&mut self, object: SceneObject) -> Result<Guid> {
        if object.owner_id.is_empty() {
            return Err(Error::Scene("object has no owner".to_string()));
        }
        let id = Guid::new();
        self.objects.insert(id, object);
        Ok(id)
    }

    fn remove_object(&mut self, id: Guid) -> Option<SceneObject> {
        self.objects.remove(&id)
    }

    fn object(&self, id: Guid) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    fn object_mut(&mut self, id: Guid) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }
}
