use truck_base::cgmath64::{Matrix4, Rad};
use truck_geometry::base::{Point3, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Point3,
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn from_position_yaw(position: Point3, yaw: f64) -> Self {
        Self {
            position,
            rotation: Vector3::new(0.0, yaw, 0.0),
            ..Self::identity()
        }
    }

    pub fn matrix(&self) -> Matrix4 {
        let translation = Matrix4::from_translation(Vector3::new(
            self.position.x,
            self.position.y,
            self.position.z,
        ));
        let rotation = Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z));
        let scale = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        translation * rotation * scale
    }

    pub fn apply(&self, point: Point3) -> Point3 {
        Point3::from_homogeneous(self.matrix() * point.to_homogeneous())
    }

    pub fn to_bits(&self) -> [u64; 9] {
        [
            self.position.x.to_bits(),
            self.position.y.to_bits(),
            self.position.z.to_bits(),
            self.rotation.x.to_bits(),
            self.rotation.y.to_bits(),
            self.rotation.z.to_bits(),
            self.scale.x.to_bits(),
            self.scale.y.to_bits(),
            self.scale.z.to_bits(),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb {
    pub fn from_points(points: impl IntoIterator<Item = Point3>) -> Option<Aabb> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Aabb {
            min: first,
            max: first,
        };
        for point in iter {
            bounds.min.x = bounds.min.x.min(point.x);
            bounds.min.y = bounds.min.y.min(point.y);
            bounds.min.z = bounds.min.z.min(point.z);
            bounds.max.x = bounds.max.x.max(point.x);
            bounds.max.y = bounds.max.y.max(point.y);
            bounds.max.z = bounds.max.z.max(point.z);
        }
        Some(bounds)
    }

    pub fn size(&self) -> Vector3 {
        Vector3::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }

    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    pub fn corners(&self) -> [Point3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }

    pub fn transformed(&self, transform: &Transform) -> Aabb {
        let corners = self.corners().map(|corner| transform.apply(corner));
        // eight corners always yield a box
        Aabb::from_points(corners).unwrap_or(*self)
    }
}
