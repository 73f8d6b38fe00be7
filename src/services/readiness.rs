//! Application readiness probing
//!
//! Replaces a blind settle sleep with an explicit bounded check: poll the
//! application's listen port until it accepts connections, or (opt-in)
//! suspend for a fixed settle delay.

use std::net::SocketAddr;

use tokio::net::TcpStream;
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::config::{LaunchConfig, ReadyCheck};
use crate::error::{LauncherError, LauncherResult};
use crate::traits::ReadinessProbe;

/// Real readiness probe derived from the launch configuration
pub struct RealReadinessProbe {
    check: ReadyCheck,
    addr: SocketAddr,
}

impl RealReadinessProbe {
    /// Build the probe for the configured port and readiness check
    pub fn from_config(config: &LaunchConfig) -> Self {
        Self {
            check: config.ready,
            addr: SocketAddr::from(([127, 0, 0, 1], config.port)),
        }
    }
}

#[async_trait::async_trait]
impl ReadinessProbe for RealReadinessProbe {
    async fn wait_ready(&self) -> LauncherResult<()> {
        match self.check {
            ReadyCheck::Delay { wait } => {
                debug!("⏳ Settling for {:?} before handing the application back", wait);
                sleep(wait).await;
                Ok(())
            }
            ReadyCheck::PortBind {
                timeout,
                poll_interval,
            } => {
                let deadline = Instant::now() + timeout;

                while Instant::now() < deadline {
                    if TcpStream::connect(self.addr).await.is_ok() {
                        debug!("🔌 Port {} accepting connections", self.addr.port());
                        return Ok(());
                    }
                    sleep(poll_interval).await;
                }

                Err(LauncherError::ReadinessTimeout { timeout })
            }
        }
    }
}
