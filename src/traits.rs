//! Trait definitions with mockall annotations for testing
//!
//! These seams separate the launcher's decision making (what to spawn, when
//! it counts as ready) from the operating-system work of actually spawning
//! and signalling processes, so every launch path is testable with mocks.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::LauncherResult;

/// Key/value pair layered onto the child's inherited environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Everything needed to start the application process
///
/// Materialized before the spawn call so tests can observe the exact
/// command, working directory, and environment at spawn time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    /// Program to execute (the package manager)
    pub program: String,

    /// Arguments to the program
    pub args: Vec<String>,

    /// Working directory for the child
    pub working_dir: PathBuf,

    /// Environment pairs applied on top of the inherited environment
    pub env: Vec<EnvVar>,
}

impl SpawnRequest {
    /// Look up an environment pair by key
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|var| var.key == key)
            .map(|var| var.value.as_str())
    }
}

/// Handle to a spawned application process
///
/// Owned exclusively by the caller. Once `wait` returns, the process is
/// gone and the remaining operations degrade to no-ops.
#[mockall::automock]
#[async_trait::async_trait]
pub trait AppProcess: Send + Sync {
    /// OS process id, if the process is still addressable
    fn id(&self) -> Option<u32>;

    /// Block until the process exits, returning its exit code
    ///
    /// Signal deaths carry no exit code on unix and report -1.
    async fn wait(&mut self) -> LauncherResult<i32>;

    /// Whether the process has not yet exited
    fn is_running(&mut self) -> bool;

    /// Force-terminate the process and reap it
    async fn kill(&mut self) -> LauncherResult<()>;

    /// Ask the process to exit, escalating to a hard kill after `grace`
    async fn terminate(&mut self, grace: Duration) -> LauncherResult<()>;
}

/// Process spawning abstraction for dependency injection
#[mockall::automock]
#[async_trait::async_trait]
pub trait ProcessSpawner: Send + Sync {
    /// Spawn the application described by `request`
    ///
    /// # Returns
    /// A handle to the running process, or `SpawnFailed` when the program
    /// cannot be started.
    async fn spawn(&self, request: SpawnRequest) -> LauncherResult<Box<dyn AppProcess>>;
}

/// Readiness gate applied between spawning and handing the process back
#[mockall::automock]
#[async_trait::async_trait]
pub trait ReadinessProbe: Send + Sync {
    /// Resolve once the application is considered ready to serve
    async fn wait_ready(&self) -> LauncherResult<()>;
}
