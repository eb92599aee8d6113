//! Application State
//!
//! Application lifecycle state around the navigator.

use crate::app::config::AppConfig;
use std::path::PathBuf;

/// Application running state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningState {
    /// Application is starting up
    Starting,
    /// Application is running normally
    Running,
    /// Application is shutting down
    ShuttingDown,
    /// Application has stopped
    Stopped,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Path of the deck being presented
    pub deck_path: PathBuf,

    /// Current running state
    pub running_state: RunningState,
}

impl AppState {
    /// Create a new application state with the given configuration
    #[must_use]
    pub fn new(config: AppConfig, deck_path: PathBuf) -> Self {
        Self {
            config,
            deck_path,
            running_state: RunningState::Starting,
        }
    }

    /// Transition to running state
    pub fn start(&mut self) {
        self.running_state = RunningState::Running;
        tracing::info!(
            deck = %self.deck_path.display(),
            "Presentation started"
        );
    }

    /// Request application shutdown
    pub fn request_shutdown(&mut self) {
        if self.running_state == RunningState::Running {
            self.running_state = RunningState::ShuttingDown;
            tracing::info!("Shutdown requested");
        }
    }

    /// Mark application as stopped
    pub fn stop(&mut self) {
        self.running_state = RunningState::Stopped;
        tracing::info!("Presentation stopped");
    }

    /// Check if application is running
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running_state == RunningState::Running
    }
}
