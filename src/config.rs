//! Launch configuration for the hosted application
//!
//! Everything the launcher needs is carried in an explicit [`LaunchConfig`]
//! rather than process-wide state, so the spawn path stays a pure function
//! of its inputs.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{LauncherError, LauncherResult};

/// Environment variable the application reads its runtime mode from
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Environment variable the application reads its listen port from
pub const PORT_ENV_VAR: &str = "PORT";

/// TCP port the application binds unless configured otherwise
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime mode handed to the application via `NODE_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Production,
    Development,
}

impl RuntimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMode::Production => "production",
            RuntimeMode::Development => "development",
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeMode {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(RuntimeMode::Production),
            "development" => Ok(RuntimeMode::Development),
            other => Err(LauncherError::config(format!("Unknown runtime mode: {other}"))),
        }
    }
}

/// How the launcher decides the application is ready to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyCheck {
    /// Poll a TCP connect against the configured port until it succeeds
    /// or the deadline passes
    PortBind {
        timeout: Duration,
        poll_interval: Duration,
    },

    /// Suspend for a fixed settle delay after the spawn
    Delay { wait: Duration },
}

impl Default for ReadyCheck {
    fn default() -> Self {
        ReadyCheck::PortBind {
            timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(250),
        }
    }
}

/// What happens to the child's stdout/stderr
///
/// Both policies consume the pipes, so the child can never block on a full
/// pipe buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputPolicy {
    /// Forward child output line by line into the launcher's log
    #[default]
    Forward,

    /// Silently drain child output
    Discard,
}

/// Configuration for launching the hosted application
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Runtime mode passed as `NODE_ENV`
    pub mode: RuntimeMode,

    /// TCP port passed as `PORT`
    pub port: u16,

    /// Directory containing the Node.js project (`package.json`)
    pub project_dir: PathBuf,

    /// Readiness check applied after the spawn
    pub ready: ReadyCheck,

    /// Child stdout/stderr handling
    pub output: OutputPolicy,
}

impl LaunchConfig {
    /// Create a config for the given project directory with default settings
    pub fn new(project_dir: PathBuf) -> Self {
        Self {
            mode: RuntimeMode::Production,
            port: DEFAULT_PORT,
            project_dir,
            ready: ReadyCheck::default(),
            output: OutputPolicy::default(),
        }
    }

    /// Configure runtime mode (fluent API)
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Configure listen port (fluent API)
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Configure readiness check (fluent API)
    pub fn with_ready(mut self, ready: ReadyCheck) -> Self {
        self.ready = ready;
        self
    }

    /// Configure output policy (fluent API)
    pub fn with_output(mut self, output: OutputPolicy) -> Self {
        self.output = output;
        self
    }

    /// Resolve the project directory to an absolute path
    ///
    /// An explicit path wins; otherwise the directory containing the current
    /// executable is used, independent of the caller's working directory.
    pub fn resolve_project_dir(explicit: Option<PathBuf>) -> LauncherResult<PathBuf> {
        let dir = match explicit {
            Some(dir) => dir,
            None => std::env::current_exe()?
                .parent()
                .map(PathBuf::from)
                .ok_or_else(|| LauncherError::config("Executable has no parent directory"))?,
        };

        let dir = std::fs::canonicalize(&dir)
            .map_err(|_| LauncherError::InvalidProjectDir { path: dir.clone() })?;

        if !dir.is_dir() {
            return Err(LauncherError::InvalidProjectDir { path: dir });
        }

        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_mode_parsing() {
        assert_eq!("production".parse::<RuntimeMode>().unwrap(), RuntimeMode::Production);
        assert_eq!(
            "development".parse::<RuntimeMode>().unwrap(),
            RuntimeMode::Development
        );

        let err = "staging".parse::<RuntimeMode>().unwrap_err();
        assert!(matches!(err, LauncherError::ConfigurationError { .. }));
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_defaults() {
        let config = LaunchConfig::new(PathBuf::from("/app"));

        assert_eq!(config.mode, RuntimeMode::Production);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.project_dir, PathBuf::from("/app"));
        assert_eq!(config.output, OutputPolicy::Forward);
        assert!(matches!(config.ready, ReadyCheck::PortBind { .. }));
    }

    #[test]
    fn test_fluent_configuration() {
        let config = LaunchConfig::new(PathBuf::from("/app"))
            .with_mode(RuntimeMode::Development)
            .with_port(8080)
            .with_ready(ReadyCheck::Delay {
                wait: Duration::from_secs(3),
            })
            .with_output(OutputPolicy::Discard);

        assert_eq!(config.mode, RuntimeMode::Development);
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.ready,
            ReadyCheck::Delay {
                wait: Duration::from_secs(3)
            }
        );
        assert_eq!(config.output, OutputPolicy::Discard);
    }

    #[test]
    fn test_resolve_explicit_project_dir() {
        let dir = tempfile::tempdir().unwrap();

        let resolved = LaunchConfig::resolve_project_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_missing_project_dir() {
        let result = LaunchConfig::resolve_project_dir(Some(PathBuf::from("/no/such/project")));
        assert!(matches!(result, Err(LauncherError::InvalidProjectDir { .. })));
    }

    #[test]
    fn test_resolve_defaults_to_executable_dir() {
        let resolved = LaunchConfig::resolve_project_dir(None).unwrap();
        let exe_dir = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .canonicalize()
            .unwrap();

        assert_eq!(resolved, exe_dir);
    }
}
