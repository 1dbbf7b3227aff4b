pub mod format;
pub mod mesh;
pub mod room;
pub mod step;

pub use format::{ExportFormat, export_solid};
pub use mesh::{DEFAULT_TESSELLATION_TOLERANCE, export_obj, room_mesh, triangulate_solid};
pub use room::{export_room_mesh, export_room_obj, export_room_step};
pub use step::{export_step, step_text};
