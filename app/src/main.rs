use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod state;
mod web;

use shotplan::{Club, GeoPoint, Shape, Trajectory, UnitSystem, WindVector};
use state::AppState;

#[derive(Parser, Debug, Clone)]
#[command(name = "shotplan", about = "Golf shot planner")]
struct Cli {
    /// Config file path (default: ~/.config/shotplan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Plan a single shot and print distance, carry and drift
    Plan(PlanArgs),
    /// List clubs, shapes and trajectories
    Catalog,
    /// List the holes of the configured course
    Course,
    /// Serve the planning API and live session over HTTP/WebSocket
    Serve {
        /// Bind address (overrides the config's webserver.bind)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Player position as "lat,lon"
    #[arg(long, requires = "to", conflicts_with = "hole", allow_hyphen_values = true)]
    pub from: Option<GeoPoint>,

    /// Target position as "lat,lon"
    #[arg(long, requires = "from", allow_hyphen_values = true)]
    pub to: Option<GeoPoint>,

    /// Play from the tee of this hole of the configured course
    #[arg(long, required_unless_present = "from")]
    pub hole: Option<u8>,

    /// Wind as "<speed>@<bearing>", e.g. "10mph@270" (bearing = direction it blows from)
    #[arg(long, default_value = "calm")]
    pub wind: WindVector,

    /// Club code (DR, 3W, 5H, 7I, PW, ...)
    #[arg(long, default_value = "DR")]
    pub club: Club,

    #[arg(long, value_enum, default_value_t = Shape::Straight)]
    pub shape: Shape,

    #[arg(long, value_enum, default_value_t = Trajectory::Mid)]
    pub trajectory: Trajectory,

    /// Display units (default: the config's default_units)
    #[arg(long, value_enum)]
    pub units: Option<UnitSystem>,

    /// Print the full plan as JSON
    #[arg(long)]
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("shotplan=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("debug logging enabled");

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(state::config::default_config_path);
    let config = state::config::load(&config_path);

    match cli.command {
        Command::Catalog => {
            commands::print_catalog();
            Ok(())
        }
        Command::Course => {
            let state = AppState::new(config)?;
            commands::print_course(state.course())
        }
        Command::Plan(args) => {
            let state = AppState::new(config)?;
            commands::plan(&state, &args)
        }
        Command::Serve { bind } => {
            let addr = match bind {
                Some(addr) => addr,
                None => config.webserver.bind.parse().with_context(|| {
                    format!("invalid webserver bind address '{}'", config.webserver.bind)
                })?,
            };
            let state = Arc::new(AppState::new(config)?);

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(web::serve(addr, state, async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutting down...");
            }))
        }
    }
}
