use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use voxroom_base::WallName;
use voxroom_doors::{
    DoorConfig, DoorConfigPatch, DoorManager, DoorSummary, TimeOfDay, ValidationReport,
};
use voxroom_room::{OpeningPosition, Room, RoomConfig};

#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub room: RoomConfig,
    #[serde(default)]
    pub time_of_day: Option<f64>,
    pub ops: Vec<Op>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Create {
        id: String,
        wall: WallName,
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        config: DoorConfig,
    },
    Move {
        id: String,
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Resize {
        id: String,
        patch: DoorConfigPatch,
    },
    Transfer {
        id: String,
        wall: WallName,
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Remove {
        id: String,
    },
    Toggle {
        id: String,
    },
    Validate {
        wall: WallName,
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        config: DoorConfig,
        #[serde(default)]
        exclude: Option<String>,
    },
    Time {
        hours: f64,
    },
    Tick {
        seconds: f64,
    },
}

impl Op {
    fn name(&self) -> &'static str {
        match self {
            Op::Create { .. } => "create",
            Op::Move { .. } => "move",
            Op::Resize { .. } => "resize",
            Op::Transfer { .. } => "transfer",
            Op::Remove { .. } => "remove",
            Op::Toggle { .. } => "toggle",
            Op::Validate { .. } => "validate",
            Op::Time { .. } => "time",
            Op::Tick { .. } => "tick",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StepOutcome {
    pub index: usize,
    pub op: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ValidationReport>,
}

#[derive(Debug, Serialize)]
pub struct ScriptReport {
    pub steps: Vec<StepOutcome>,
    pub doors: Vec<DoorSummary>,
}

pub fn run(script: Script) -> Result<(ScriptReport, Room)> {
    let room = Room::new(script.room).context("invalid room")?;
    let mut manager = DoorManager::new(room);
    if let Some(hours) = script.time_of_day {
        manager.set_time_of_day(TimeOfDay::new(hours));
    }

    let mut steps = Vec::with_capacity(script.ops.len());
    for (index, op) in script.ops.into_iter().enumerate() {
        let name = op.name();
        let (ok, report) = apply(&mut manager, op);
        info!(index, op = name, ok, "script step");
        steps.push(StepOutcome {
            index,
            op: name,
            ok,
            report,
        });
    }
    manager.settle();

    let report = ScriptReport {
        steps,
        doors: manager.list_doors(),
    };
    Ok((report, manager.into_scene()))
}

fn apply(manager: &mut DoorManager<Room>, op: Op) -> (bool, Option<ValidationReport>) {
    match op {
        Op::Create {
            id,
            wall,
            x,
            y,
            config,
        } => {
            let created = manager.create_door(&id, wall, OpeningPosition { x, y }, config);
            (created.is_some(), None)
        }
        Op::Move { id, x, y } => (manager.move_door(&id, OpeningPosition { x, y }), None),
        Op::Resize { id, patch } => (manager.resize_door(&id, patch), None),
        Op::Transfer { id, wall, x, y } => (
            manager.transfer_door(&id, wall, OpeningPosition { x, y }),
            None,
        ),
        Op::Remove { id } => (manager.remove_door(&id), None),
        Op::Toggle { id } => (manager.toggle_door(&id), None),
        Op::Validate {
            wall,
            x,
            y,
            config,
            exclude,
        } => {
            let report = manager.validate_door_operation(
                wall,
                OpeningPosition { x, y },
                &config,
                exclude.as_deref(),
            );
            (report.valid, Some(report))
        }
        Op::Time { hours } => {
            manager.set_time_of_day(TimeOfDay::new(hours));
            (true, None)
        }
        Op::Tick { seconds } => {
            manager.tick(seconds);
            (true, None)
        }
    }
}
