//! Test helpers and builder patterns for launcher tests
//!
//! Builder over the mockall seams to cut test boilerplate, plus a
//! hand-rolled application double whose exit the test controls.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use launcher::traits::{MockAppProcess, MockProcessSpawner, MockReadinessProbe};
use launcher::{AppProcess, LaunchConfig, Launcher, LauncherResult};

use super::fixtures::TestFixtures;

/// Builder pattern for creating test launchers with sensible defaults
pub struct LauncherBuilder {
    config: LaunchConfig,
    spawner: MockProcessSpawner,
    probe: MockReadinessProbe,
}

impl LauncherBuilder {
    /// Create a new builder with permissive mock defaults
    pub fn new() -> Self {
        let mut spawner = MockProcessSpawner::new();
        spawner
            .expect_spawn()
            .returning(|_| Ok(Box::new(MockAppProcess::new())))
            .times(0..);

        let mut probe = MockReadinessProbe::new();
        probe.expect_wait_ready().returning(|| Ok(())).times(0..);

        Self {
            config: TestFixtures::config(),
            spawner,
            probe,
        }
    }

    /// Replace the launch configuration
    pub fn with_config(mut self, config: LaunchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the mock spawner
    pub fn with_spawner(mut self, spawner: MockProcessSpawner) -> Self {
        self.spawner = spawner;
        self
    }

    /// Replace the mock readiness probe
    pub fn with_probe(mut self, probe: MockReadinessProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn build(self) -> Launcher<MockProcessSpawner, MockReadinessProbe> {
        Launcher::new(self.config, self.spawner, self.probe)
    }
}

/// Application double whose exit is signalled by the test
pub struct FakeApp {
    exit_code: i32,
    done: Arc<Notify>,
    exited: bool,
}

impl FakeApp {
    /// Create the double and the handle used to signal its termination
    pub fn new(exit_code: i32) -> (Self, Arc<Notify>) {
        let done = Arc::new(Notify::new());
        (
            Self {
                exit_code,
                done: done.clone(),
                exited: false,
            },
            done,
        )
    }
}

#[async_trait::async_trait]
impl AppProcess for FakeApp {
    fn id(&self) -> Option<u32> {
        Some(4242)
    }

    async fn wait(&mut self) -> LauncherResult<i32> {
        if !self.exited {
            self.done.notified().await;
            self.exited = true;
        }
        Ok(self.exit_code)
    }

    fn is_running(&mut self) -> bool {
        !self.exited
    }

    async fn kill(&mut self) -> LauncherResult<()> {
        self.exited = true;
        Ok(())
    }

    async fn terminate(&mut self, _grace: Duration) -> LauncherResult<()> {
        self.exited = true;
        Ok(())
    }
}
