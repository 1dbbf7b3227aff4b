use voxroom_geometry::{Point3, Transform, Vector3};
use voxroom_room::{
    ObjectPayload, OpeningPosition, PointLight, Result, SceneObject, SceneObjectKind, WallHandle,
};
use voxroom_topology::SolidBuilder;

use crate::config::DoorConfig;
use crate::lighting::LightProfile;

const FRAME_PROUD: f64 = 0.01;
const LIGHTS_PER_RIG: usize = 2;

#[derive(Clone, Debug)]
pub struct VisualSet {
    pub frame: SceneObject,
    pub leaf: SceneObject,
    pub light_rig: SceneObject,
    pub base_rotation: f64,
}

impl VisualSet {
    pub fn build(
        owner_id: &str,
        wall: &WallHandle,
        position: OpeningPosition,
        config: &DoorConfig,
    ) -> Result<Self> {
        let base_rotation = wall.name().profile().base_rotation;
        Ok(Self {
            frame: build_frame(owner_id, wall, position, config)?,
            leaf: build_leaf(owner_id, wall, position, config)?,
            light_rig: build_light_rig(owner_id, wall, position, config),
            base_rotation,
        })
    }
}

pub fn door_anchor(wall: &WallHandle, position: OpeningPosition, config: &DoorConfig) -> Point3 {
    let profile = wall.name().profile();
    let local_y = if position.is_ground_anchored() {
        -wall.descriptor.outer_height * 0.5 + config.height * 0.5
    } else {
        position.y
    };
    wall.local_to_world(Point3::new(profile.axis_sign * position.x, local_y, 0.0))
}

pub fn leaf_direction(rotation: f64) -> Vector3 {
    Vector3::new(rotation.cos(), 0.0, -rotation.sin())
}

fn build_frame(
    owner_id: &str,
    wall: &WallHandle,
    position: OpeningPosition,
    config: &DoorConfig,
) -> Result<SceneObject> {
    let half_w = config.width * 0.5;
    let half_h = config.height * 0.5;
    let fw = config.frame_width;
    let half_t = wall.descriptor.thickness * 0.5 + FRAME_PROUD;

    let left_post = SolidBuilder::box_between(
        Point3::new(-half_w - fw, -half_h, -half_t),
        Point3::new(-half_w, half_h, half_t),
    )?;
    let right_post = SolidBuilder::box_between(
        Point3::new(half_w, -half_h, -half_t),
        Point3::new(half_w + fw, half_h, half_t),
    )?;
    let lintel = SolidBuilder::box_between(
        Point3::new(-half_w - fw, half_h, -half_t),
        Point3::new(half_w + fw, half_h + fw, half_t),
    )?;

    Ok(SceneObject {
        kind: SceneObjectKind::Frame,
        owner_id: owner_id.to_string(),
        transform: Transform::from_position_yaw(
            door_anchor(wall, position, config),
            wall.name().profile().yaw,
        ),
        payload: ObjectPayload::Solids(vec![left_post, right_post, lintel]),
    })
}

fn build_leaf(
    owner_id: &str,
    wall: &WallHandle,
    position: OpeningPosition,
    config: &DoorConfig,
) -> Result<SceneObject> {
    let base_rotation = wall.name().profile().base_rotation;
    let anchor = door_anchor(wall, position, config);
    let hinge = anchor - leaf_direction(base_rotation) * (config.width * 0.5);
    let half_h = config.height * 0.5;
    let half_t = config.thickness * 0.5;
    let panel = SolidBuilder::box_between(
        Point3::new(0.0, -half_h, -half_t),
        Point3::new(config.width, half_h, half_t),
    )?;

    Ok(SceneObject {
        kind: SceneObjectKind::Leaf,
        owner_id: owner_id.to_string(),
        transform: Transform::from_position_yaw(hinge, base_rotation),
        payload: ObjectPayload::Solids(vec![panel]),
    })
}

fn build_light_rig(
    owner_id: &str,
    wall: &WallHandle,
    position: OpeningPosition,
    config: &DoorConfig,
) -> SceneObject {
    let off = LightProfile::OFF;
    let lights = (0..LIGHTS_PER_RIG)
        .map(|idx| {
            let side = if idx % 2 == 0 { -1.0 } else { 1.0 };
            PointLight {
                position: Point3::new(
                    side * config.width * 0.3,
                    config.height * 0.5 - 0.1,
                    0.0,
                ),
                color: off.color,
                intensity: off.intensity,
            }
        })
        .collect();

    SceneObject {
        kind: SceneObjectKind::LightRig,
        owner_id: owner_id.to_string(),
        transform: Transform::from_position_yaw(
            door_anchor(wall, position, config),
            wall.name().profile().yaw,
        ),
        payload: ObjectPayload::Lights(lights),
    }
}
