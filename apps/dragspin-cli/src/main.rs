use clap::{Parser, Subcommand};
use dragspin_input::{
    AccelerationPolicy, DragRotation, InertiaConfig, PointerEvent, PointerSample,
};
use dragspin_render::{DebugTextRenderer, FixedScheduler, FrameLoop};
use dragspin_scene::Scene;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dragspin-cli", about = "Headless tool for drag-inertia rotation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file with inertia settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Acceleration policy: `ceiling` clamps at the max level, `floor` raises to at least it
    #[arg(long, global = true)]
    policy: Option<AccelerationPolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info and the effective inertia settings
    Info,
    /// Drag once, let go, and print every frame until the spin settles
    Simulate {
        /// Horizontal drag distance in pixels
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        dx: f32,
        /// Vertical drag distance in pixels
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        dy: f32,
        /// Number of drag moves before release, each covering dx/dy
        #[arg(long, default_value = "1")]
        moves: u64,
        /// Number of frames to run
        #[arg(short, long, default_value = "12")]
        frames: u64,
        /// Pace frames at this rate (0 runs as fast as possible)
        #[arg(long, default_value = "0")]
        fps: u32,
        /// Also print camera and light every frame
        #[arg(long)]
        full: bool,
    },
}

/// Scheduler that presses at the origin, moves `moves` times by (dx, dy),
/// one move per frame, then releases.
fn scripted_drag(frames: u64, fps: u32, dx: f32, dy: f32, moves: u64) -> FixedScheduler {
    let mut sched = FixedScheduler::new(frames)
        .with_fps(fps)
        .with_event(0, PointerEvent::Move(PointerSample::new(0.0, 0.0)))
        .with_event(0, PointerEvent::DragStart);
    for i in 0..moves {
        let step = (i + 1) as f32;
        sched = sched.with_event(i, PointerEvent::Move(PointerSample::new(dx * step, dy * step)));
    }
    sched.with_event(moves.saturating_sub(1), PointerEvent::DragEnd)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = InertiaConfig::resolve(cli.config.as_deref(), cli.policy)?;

    match cli.command {
        Commands::Info => {
            println!("dragspin-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("input: {}", dragspin_input::crate_info());
            println!("render: {}", dragspin_render::crate_info());
            println!("euler order: {:?}", dragspin_input::EULER_ORDER);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Simulate {
            dx,
            dy,
            moves,
            frames,
            fps,
            full,
        } => {
            println!(
                "Simulating drag of ({dx}, {dy}) x{moves}, {frames} frames, policy={}",
                config.policy
            );

            let mut scene = Scene::demo();
            let mut renderer = DebugTextRenderer { verbose: full };
            let mut sched = scripted_drag(frames, fps, dx, dy, moves);
            let mut frame_loop = FrameLoop::new(DragRotation::new(config));

            let produced = frame_loop.run(&mut scene, &mut renderer, &mut sched, |n, line| {
                println!("[{n:>4}] {line}");
            });

            let c = frame_loop.controller();
            println!(
                "Done: frames={produced}, level={}, settled={}",
                c.level(),
                c.level() == 0
            );
            tracing::debug!(orientation = ?scene.orientation(), "simulation finished");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_simulate() {
        let cli = Cli::try_parse_from([
            "dragspin-cli",
            "simulate",
            "--dx",
            "-4",
            "--frames",
            "3",
            "--policy",
            "floor",
        ])
        .unwrap();
        assert_eq!(cli.policy, Some(AccelerationPolicy::Floor));
        assert!(matches!(
            cli.command,
            Commands::Simulate { dx, frames: 3, .. } if dx == -4.0
        ));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let parsed = Cli::try_parse_from(["dragspin-cli", "--policy", "clamp", "info"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn scripted_drag_releases_after_last_move() {
        let mut frame_loop = FrameLoop::default();
        let mut scene = Scene::demo();
        let mut renderer = DebugTextRenderer::new();
        let mut sched = scripted_drag(12, 0, 10.0, 0.0, 3);

        let mut lines = Vec::new();
        frame_loop.run(&mut scene, &mut renderer, &mut sched, |n, line| {
            lines.push((n, line))
        });

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].0, 1);
        let c = frame_loop.controller();
        assert!(!c.is_dragging());
        assert_eq!(c.delta().x, 10.0);
        assert_eq!(c.delta().y, 0.0);
        // Level peaks at 6 on release, then decays one per frame.
        assert_eq!(c.level(), 0);
        assert!(scene.orientation().y > 0.0);
    }
}
