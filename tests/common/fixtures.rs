//! Test fixtures and data for launcher tests
//!
//! Consistent configuration values used across the test suites.

use std::path::PathBuf;

use launcher::LaunchConfig;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Project directory used by mock-driven tests (never touched on disk)
    pub const PROJECT_DIR: &'static str = "/app";

    /// Standard configuration values
    pub const DEFAULT_PORT: u16 = 3000;
    pub const MODE: &'static str = "production";

    /// Launch configuration rooted at the standard project directory
    pub fn config() -> LaunchConfig {
        LaunchConfig::new(PathBuf::from(Self::PROJECT_DIR))
    }
}
