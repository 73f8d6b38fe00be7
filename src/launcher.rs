//! Core launcher implementation
//!
//! The launcher turns a [`LaunchConfig`] into a running application process:
//! it materializes the spawn request, hands it to the injected spawner, and
//! gates on the injected readiness probe before returning the handle.

use tracing::{debug, info};

use crate::config::{LaunchConfig, MODE_ENV_VAR, PORT_ENV_VAR};
use crate::error::LauncherResult;
use crate::traits::{AppProcess, EnvVar, ProcessSpawner, ReadinessProbe, SpawnRequest};

/// Launcher that starts the hosted application with injected dependencies
pub struct Launcher<S, R>
where
    S: ProcessSpawner + Send + Sync + 'static,
    R: ReadinessProbe + Send + Sync + 'static,
{
    config: LaunchConfig,
    spawner: S,
    readiness: R,
}

impl<S, R> Launcher<S, R>
where
    S: ProcessSpawner + Send + Sync + 'static,
    R: ReadinessProbe + Send + Sync + 'static,
{
    /// Create a new launcher with injected dependencies
    pub fn new(config: LaunchConfig, spawner: S, readiness: R) -> Self {
        Self {
            config,
            spawner,
            readiness,
        }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Build the spawn request for the configured project
    ///
    /// Pure function of the config: `npm start` in the project directory,
    /// with the runtime mode and listen port layered onto the inherited
    /// environment.
    pub fn spawn_request(&self) -> SpawnRequest {
        SpawnRequest {
            program: "npm".to_string(),
            args: vec!["start".to_string()],
            working_dir: self.config.project_dir.clone(),
            env: vec![
                EnvVar::new(MODE_ENV_VAR, self.config.mode.as_str()),
                EnvVar::new(PORT_ENV_VAR, self.config.port.to_string()),
            ],
        }
    }

    /// Start the application and wait until it is ready to serve
    ///
    /// The environment pairs are part of the spawn request, so they are in
    /// place before the child exists. On spawn failure the readiness probe
    /// is never consulted.
    pub async fn start(&self) -> LauncherResult<Box<dyn AppProcess>> {
        let request = self.spawn_request();

        debug!(
            "📦 Launching {} {} in {}",
            request.program,
            request.args.join(" "),
            request.working_dir.display()
        );

        let handle = self.spawner.spawn(request).await?;

        debug!(
            "🏭 Application process started (PID: {})",
            handle
                .id()
                .map(|pid| pid.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );

        self.readiness.wait_ready().await?;

        info!(
            "✅ Application ready in {} mode on port {}",
            self.config.mode, self.config.port
        );

        Ok(handle)
    }
}
