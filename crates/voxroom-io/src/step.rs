use anyhow::{Context, Result};
use std::path::Path;
use truck_stepio::out;
use voxroom_topology::Solid;

use crate::mesh::ensure_parent;

pub fn step_text(solid: &Solid, file_name: &str) -> String {
    let header = out::StepHeaderDescriptor {
        file_name: file_name.to_string(),
        organization_system: "voxroom".to_string(),
        ..Default::default()
    };
    let compressed = solid.compress();
    out::CompleteStepDisplay::new(out::StepModel::from(&compressed), header).to_string()
}

pub fn export_step(solid: &Solid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no file name", path.display()))?;
    ensure_parent(path)?;
    std::fs::write(path, step_text(solid, file_name))
        .with_context(|| format!("write STEP file {}", path.display()))?;
    Ok(())
}
