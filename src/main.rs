//! Main entry point for the launcher binary
//!
//! Wires the real services together, starts the hosted application, and
//! stays in the foreground until the application exits or the launcher is
//! told to shut down.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;
use tokio::signal;

use launcher::{
    logging,
    services::{RealProcessSpawner, RealReadinessProbe},
    LaunchConfig, Launcher, LauncherResult, OutputPolicy, ReadyCheck, RuntimeMode,
};

/// Hosts a Node.js web application as a supervised child process
#[derive(Parser)]
#[command(name = "launcher")]
#[command(about = "Runs `npm start` for a Node.js project and supervises the process")]
pub struct Args {
    /// Project directory containing package.json (defaults to the directory
    /// of this executable)
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// TCP port the application should bind (passed as PORT)
    #[arg(long, default_value_t = launcher::config::DEFAULT_PORT)]
    pub port: u16,

    /// Runtime mode passed as NODE_ENV (production, development)
    #[arg(long, default_value = "production")]
    pub mode: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Seconds to wait for the application port to accept connections
    #[arg(long, default_value_t = 30)]
    pub ready_timeout: u64,

    /// Fixed settle delay in seconds instead of probing the port
    #[arg(long, num_args = 0..=1, default_missing_value = "3")]
    pub settle_delay: Option<u64>,

    /// Discard child output instead of forwarding it to the log
    #[arg(long)]
    pub quiet_child: bool,
}

#[tokio::main]
async fn main() -> LauncherResult<()> {
    dotenv().ok();
    let args = Args::parse();

    logging::init_tracing(&args.log_level);

    let mode: RuntimeMode = args.mode.parse()?;
    let project_dir = LaunchConfig::resolve_project_dir(args.project_dir.clone())?;

    let ready = match args.settle_delay {
        Some(secs) => ReadyCheck::Delay {
            wait: Duration::from_secs(secs),
        },
        None => ReadyCheck::PortBind {
            timeout: Duration::from_secs(args.ready_timeout),
            poll_interval: Duration::from_millis(250),
        },
    };

    let output = if args.quiet_child {
        OutputPolicy::Discard
    } else {
        OutputPolicy::Forward
    };

    let config = LaunchConfig::new(project_dir)
        .with_mode(mode)
        .with_port(args.port)
        .with_ready(ready)
        .with_output(output);

    logging::log_startup(&format!(
        "application in {} ({} mode, port {})",
        config.project_dir.display(),
        config.mode,
        config.port
    ));

    let spawner = RealProcessSpawner::new().with_output(config.output);
    let readiness = RealReadinessProbe::from_config(&config);
    let launcher = Launcher::new(config, spawner, readiness);

    let mut app = match launcher.start().await {
        Ok(app) => app,
        Err(e) => {
            logging::log_error("Application startup", &e);
            return Err(e);
        }
    };

    // Stay in the foreground until the application exits or we are stopped
    tokio::select! {
        status = app.wait() => {
            let code = status?;
            if code == 0 {
                logging::log_success("Application exited cleanly");
            } else {
                logging::log_error("Application", &format!("exit code {code}"));
                // Propagate the child's lifetime into the parent's
                std::process::exit(code);
            }
        }
        _ = signal::ctrl_c() => {
            logging::log_shutdown("Received Ctrl+C signal");
            app.terminate(Duration::from_secs(5)).await?;
        }
    }

    logging::log_success("Launcher stopped gracefully");
    Ok(())
}
