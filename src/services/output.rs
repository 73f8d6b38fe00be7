//! Child process stdout/stderr handling
//!
//! Child output is always piped and always consumed, so the child can never
//! block on a full pipe buffer. The policy decides whether the lines reach
//! the launcher's log or are dropped.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Child;
use tracing::{info, warn};

use crate::config::OutputPolicy;

/// Take the child's piped stdout/stderr and consume them per `policy`
///
/// Forwarded lines are logged under the `app` target, stdout at info and
/// stderr at warn.
pub fn consume_child_output(child: &mut Child, policy: OutputPolicy) {
    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if policy == OutputPolicy::Forward {
                    info!(target: "app", "{line}");
                }
            }
        });
    }

    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if policy == OutputPolicy::Forward {
                    warn!(target: "app", "{line}");
                }
            }
        });
    }
}
