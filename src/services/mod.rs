//! Service implementations
//!
//! Real implementations of the launcher's trait seams. These are the
//! production implementations that touch the operating system.

pub mod output;
pub mod readiness;
pub mod spawner;

// Re-export all service implementations
pub use readiness::RealReadinessProbe;
pub use spawner::RealProcessSpawner;
