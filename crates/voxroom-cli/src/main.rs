use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use voxroom_base::WallName;
use voxroom_io::{DEFAULT_TESSELLATION_TOLERANCE, ExportFormat, export_solid};
use voxroom_room::{Opening, OpeningPosition, RoomConfig, build_wall_solid};

mod script;

#[derive(Parser)]
#[command(name = "voxroom")]
#[command(about = "Room walls with door openings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Wall(WallArgs),
    Script(ScriptArgs),
}

#[derive(Args)]
struct WallArgs {
    #[arg(long)]
    side: WallName,
    #[arg(long)]
    room: String,
    #[arg(long)]
    thickness: Option<f64>,
    #[arg(long = "opening")]
    openings: Vec<String>,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = DEFAULT_TESSELLATION_TOLERANCE)]
    tolerance: f64,
}

#[derive(Args)]
struct ScriptArgs {
    #[arg(long = "in")]
    input: PathBuf,
    #[arg(long)]
    out_dir: Option<PathBuf>,
    #[arg(long)]
    mesh: Option<PathBuf>,
    #[arg(long)]
    step_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Wall(args) => export_wall(args),
        Command::Script(args) => run_script(args),
    }
}

fn export_wall(args: WallArgs) -> Result<()> {
    let (width, height, depth) = parse_triple(&args.room).context("invalid --room")?;
    let mut config = RoomConfig {
        width,
        height,
        depth,
        ..RoomConfig::default()
    };
    if let Some(thickness) = args.thickness {
        config.wall_thickness = thickness;
    }
    config.validate().context("invalid room")?;
    ExportFormat::from_path(&args.out)?;

    let openings = args
        .openings
        .iter()
        .enumerate()
        .map(|(idx, text)| parse_opening(idx, text))
        .collect::<Result<Vec<_>>>()?;

    let descriptor = config.wall_descriptor(args.side);
    let wall = build_wall_solid(&descriptor, &openings)
        .with_context(|| format!("failed to build wall {}", args.side))?;
    info!(
        wall = %args.side,
        holes = wall.holes().len(),
        dropped = wall.dropped.len(),
        "wall built"
    );

    let format = export_solid(&wall.solid, &args.out, args.tolerance)
        .with_context(|| format!("failed to export wall {}", args.side))?;
    info!(path = %args.out.display(), format = format.extension(), "wall export complete");
    Ok(())
}

fn run_script(args: ScriptArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("read script {}", args.input.display()))?;
    let script: script::Script = serde_json::from_str(&text)
        .with_context(|| format!("parse script {}", args.input.display()))?;

    let (report, room) = script::run(script)?;
    if let Some(dir) = &args.out_dir {
        let written = voxroom_io::export_room_obj(&room, dir, DEFAULT_TESSELLATION_TOLERANCE)
            .context("room export failed")?;
        info!(files = written.len(), dir = %dir.display(), "room export complete");
    }
    if let Some(path) = &args.mesh {
        voxroom_io::export_room_mesh(&room, path, DEFAULT_TESSELLATION_TOLERANCE)?;
        info!(path = %path.display(), "room mesh written");
    }
    if let Some(dir) = &args.step_dir {
        let written = voxroom_io::export_room_step(&room, dir)?;
        info!(files = written.len(), dir = %dir.display(), "room STEP export complete");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_triple(text: &str) -> Result<(f64, f64, f64)> {
    let values = parse_numbers(text)?;
    let [a, b, c] = values[..] else {
        bail!("expected three comma-separated numbers, e.g. 6,3,5");
    };
    Ok((a, b, c))
}

fn parse_opening(idx: usize, text: &str) -> Result<Opening> {
    let values = parse_numbers(text).with_context(|| format!("invalid --opening {text}"))?;
    let [x, y, width, height] = values[..] else {
        bail!("--opening expects x,y,w,h, got {text}");
    };
    Ok(Opening::door(
        format!("opening-{}", idx + 1),
        width,
        height,
        OpeningPosition { x, y },
    ))
}

fn parse_numbers(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("not a number: {part:?}"))
        })
        .collect()
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
