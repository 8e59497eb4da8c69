//! Rally CLI
//!
//! Drives a rally editing session from a JSON action script and prints
//! the resulting document or the resolved shot trajectories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rally_core::api::{SessionEnvelope, SCHEMA_VERSION};
use rally_core::engine::{resolve_path, to_svg_path_d, PathParams};
use rally_core::state::{Action, EditorState};

#[derive(Parser)]
#[command(name = "rally_cli")]
#[command(about = "Replay rally editing scripts and dump trajectories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an action script to a fresh session, print the final state
    Replay {
        /// Input JSON file: an array of actions
        #[arg(long)]
        script: PathBuf,

        /// Pretty-print the output
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Replay a script, then print every shot's SVG path data
    Trace {
        /// Input JSON file: an array of actions
        #[arg(long)]
        script: PathBuf,

        /// Rendering surface width in pixels
        #[arg(long, default_value = "360")]
        width: f32,

        /// Rendering surface height in pixels
        #[arg(long, default_value = "600")]
        height: f32,
    },
}

fn load_script(path: &Path) -> Result<Vec<Action>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn run_script(actions: &[Action]) -> EditorState {
    actions
        .iter()
        .fold(EditorState::new(), |state, action| state.dispatch(action))
}

fn replay(script: &Path, pretty: bool) -> Result<()> {
    let state = run_script(&load_script(script)?);
    let envelope = SessionEnvelope { schema_version: SCHEMA_VERSION, state };
    let out = if pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    println!("{out}");
    Ok(())
}

fn trace(script: &Path, width: f32, height: f32) -> Result<()> {
    let state = run_script(&load_script(script)?);
    for (si, scene) in state.document.scenes.iter().enumerate() {
        for shot in &scene.shots {
            let trajectory = resolve_path(&PathParams {
                hit_from: shot.hit_from,
                bounce: shot.bounce.pixel(),
                return_at: shot.return_at,
                shot_type: shot.shot_type,
                curve_level: shot.curve_level,
                container: Some((width, height)),
            });
            println!(
                "scene {si} shot {} {:?} {:?} curve {}",
                shot.id, shot.shot_type, shot.shot_side, shot.curve_level
            );
            println!("  d: {}", to_svg_path_d(&trajectory));
            for marker in &trajectory.markers {
                println!("  {:?} at ({:.1}, {:.1})", marker.kind, marker.at.x, marker.at.y);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay { script, pretty } => replay(&script, pretty),
        Commands::Trace { script, width, height } => trace(&script, width, height),
    }
}
