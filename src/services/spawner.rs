//! Real process spawning via the package manager
//!
//! Spawns the application with `tokio::process`, working directory pinned to
//! the project, the configured environment pairs layered over the inherited
//! environment, and stdout/stderr piped into the output consumers.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::debug;

use crate::config::OutputPolicy;
use crate::error::{LauncherError, LauncherResult};
use crate::services::output;
use crate::traits::{AppProcess, ProcessSpawner, SpawnRequest};

/// Real spawner implementation backed by the operating system
pub struct RealProcessSpawner {
    /// What happens to the child's stdout/stderr
    output: OutputPolicy,
}

impl RealProcessSpawner {
    /// Create a new spawner with default settings
    pub fn new() -> Self {
        Self {
            output: OutputPolicy::default(),
        }
    }

    /// Configure output policy (fluent API)
    pub fn with_output(mut self, output: OutputPolicy) -> Self {
        self.output = output;
        self
    }
}

#[async_trait::async_trait]
impl ProcessSpawner for RealProcessSpawner {
    async fn spawn(&self, request: SpawnRequest) -> LauncherResult<Box<dyn AppProcess>> {
        if !request.working_dir.is_dir() {
            return Err(LauncherError::InvalidProjectDir {
                path: request.working_dir.clone(),
            });
        }

        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args).current_dir(&request.working_dir);
        for var in &request.env {
            cmd.env(&var.key, &var.value);
        }

        cmd.stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::null());

        let mut child = cmd
            .spawn()
            .map_err(|e| LauncherError::spawn(format!("{}: {e}", request.program)))?;

        output::consume_child_output(&mut child, self.output);

        debug!(
            "📦 Spawned {} (PID: {}) in {}",
            request.program,
            child
                .id()
                .map(|pid| pid.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            request.working_dir.display()
        );

        Ok(Box::new(RealAppProcess { child }))
    }
}

/// Handle for the spawned application process
pub struct RealAppProcess {
    child: Child,
}

#[async_trait::async_trait]
impl AppProcess for RealAppProcess {
    fn id(&self) -> Option<u32> {
        self.child.id()
    }

    async fn wait(&mut self) -> LauncherResult<i32> {
        let status = self.child.wait().await?;
        Ok(status.code().unwrap_or(-1))
    }

    fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    async fn kill(&mut self) -> LauncherResult<()> {
        let _ = self.child.kill().await;
        let _ = self.child.wait().await;
        Ok(())
    }

    async fn terminate(&mut self, grace: Duration) -> LauncherResult<()> {
        #[cfg(unix)]
        {
            use nix::sys::signal::{self, Signal};
            use nix::unistd::Pid;
            use tokio::time::{sleep, Instant};

            if let Some(pid) = self.child.id() {
                match signal::kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
                    Ok(()) => {
                        let deadline = Instant::now() + grace;
                        while Instant::now() < deadline {
                            if !self.is_running() {
                                debug!("✅ Application exited after SIGTERM");
                                return Ok(());
                            }
                            sleep(Duration::from_millis(100)).await;
                        }
                        tracing::warn!("🔨 Application ignored SIGTERM, force killing");
                    }
                    // Process already gone
                    Err(nix::errno::Errno::ESRCH) => return Ok(()),
                    Err(e) => return Err(e.into()),
                }
            }
        }
        #[cfg(not(unix))]
        let _ = grace;

        self.kill().await
    }
}
