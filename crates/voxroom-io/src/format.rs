use anyhow::{Result, bail};
use std::path::Path;
use voxroom_topology::Solid;

use crate::mesh::export_obj;
use crate::step::export_step;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Obj,
    Step,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            bail!("{} has no file extension; use .obj, .step or .stp", path.display());
        };
        if ext.eq_ignore_ascii_case("obj") {
            Ok(ExportFormat::Obj)
        } else if ext.eq_ignore_ascii_case("step") || ext.eq_ignore_ascii_case("stp") {
            Ok(ExportFormat::Step)
        } else {
            bail!("unsupported export format .{ext}; use .obj, .step or .stp")
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Obj => "obj",
            ExportFormat::Step => "step",
        }
    }
}

pub fn export_solid(solid: &Solid, path: impl AsRef<Path>, tol: f64) -> Result<ExportFormat> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    match format {
        ExportFormat::Obj => export_obj(solid, path, tol)?,
        ExportFormat::Step => export_step(solid, path)?,
    }
    Ok(format)
}
