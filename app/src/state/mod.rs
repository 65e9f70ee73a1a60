pub mod config;
mod session;

pub use session::Session;

use std::path::Path;

use anyhow::Context;

use config::ShotplanConfig;
use shotplan::Course;

/// Root entry point for application state.
///
/// Passed as `Arc<AppState>` to the web layer. The config is read once at
/// startup and never mutated; all live data sits in the session.
pub struct AppState {
    pub config: ShotplanConfig,
    pub session: Session,
}

impl AppState {
    pub fn new(config: ShotplanConfig) -> anyhow::Result<Self> {
        let course = match &config.course {
            Some(path) => Some(load_course(path)?),
            None => None,
        };
        let session = Session::new(config.model, course);
        Ok(Self { config, session })
    }

    pub fn course(&self) -> Option<&Course> {
        self.session.course()
    }
}

/// Read and validate a course file.
pub fn load_course(path: &Path) -> anyhow::Result<Course> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read course file {}", path.display()))?;
    let course = Course::from_toml_str(&contents)
        .with_context(|| format!("failed to load course file {}", path.display()))?;
    tracing::info!(
        "loaded course '{}' ({} holes) from {}",
        course.name,
        course.holes.len(),
        path.display()
    );
    Ok(course)
}
