pub use truck_base::cgmath64::{Matrix4, Rad, Vector4};
pub use truck_geometry::base::{Point2, Point3, Vector2, Vector3};

pub mod profiles;
mod transform;

pub use profiles::{Rect2, ShapeWithHoles};
pub use transform::{Aabb, Transform};
