//! Launcher library for hosting a Node.js web application
//!
//! This library provides a small, testable launcher that starts an external
//! Node.js project via its package manager's `start` script, gates on
//! application readiness, and hands back a handle the host can wait on or
//! terminate.

pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::{LaunchConfig, OutputPolicy, ReadyCheck, RuntimeMode};
pub use error::{LauncherError, LauncherResult};
pub use launcher::Launcher;
pub use traits::{AppProcess, EnvVar, ProcessSpawner, ReadinessProbe, SpawnRequest};
