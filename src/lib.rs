//! # wallet-sentinel
//!
//! Security posture scanner for wallet runtimes. Drives a configurable,
//! ordered set of independent asynchronous security probes against the
//! platform capabilities an embedder supplies, aggregates their verdicts
//! into one overall trust status, and exposes live progress without ever
//! blocking the caller.
//!
//! ## Design
//!
//! - **Checks** share one async contract: a probe reads platform state
//!   through narrow capability traits and returns a graded verdict. An
//!   absent capability is a failed verdict, never a crash.
//! - **Transient failures** (probe timeouts and errors) are retried a
//!   bounded number of times; a probe's considered negative verdict is
//!   final and never retried.
//! - **One driver** runs the enabled checks strictly sequentially under a
//!   global deadline, with cooperative cancellation between steps.
//! - **Progress** is owned by the scanner; consumers poll point-in-time
//!   snapshots or subscribe to a watch channel, and the terminal report is
//!   plain serializable data.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wallet_sentinel::{Capabilities, ScanConfig, SecurityScanner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScanConfig::builder()
//!         .timeout_ms(10_000)
//!         .retry_attempts(2)
//!         .delay_ms(100)
//!         .build()?;
//!
//!     // Attach whatever the platform actually offers; absent capabilities
//!     // simply fail their checks.
//!     let scanner = SecurityScanner::new(config, Capabilities::new())?;
//!
//!     let report = scanner.start().await?;
//!     println!("overall status: {}", report.status);
//!     for result in &report.snapshot.results {
//!         println!("  {}: passed={}", result.kind, result.passed);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod capabilities;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use capabilities::{
    BiometricCapability, Capabilities, CertificateInfo, ComplianceCapability, ControlAttestation,
    CookieInfo, CryptoCapability, DeviceCapability, DocumentCapability, ScreenInfo,
    StorageCapability, TransportCapability,
};
pub use config::{EnabledChecks, ScanConfig, ScanConfigBuilder, Validate};
pub use core::aggregator::{aggregate, aggregate_run};
pub use core::checks::SecurityCheck;
pub use core::orchestrator::SecurityScanner;
pub use core::types::{
    CheckDetail, CheckKind, CheckResult, OverallStatus, ProgressSnapshot, RunState, ScanReport,
    ThreatLevel, Verdict,
};
pub use utils::error::{Result, SentinelError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
