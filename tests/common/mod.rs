//! Common test utilities for wallet-sentinel
//!
//! Scripted capability providers with deterministic behavior, so scanner
//! runs can be driven through every settlement path without real platform
//! APIs.

pub mod providers;

pub use providers::{
    clean_document, secure_capabilities, secure_transport, FlakyCrypto, GatedCrypto,
    WorkingBiometric, WorkingCompliance, WorkingDevice, WorkingStorage,
};

/// Install a subscriber once so `RUST_LOG=debug` surfaces scanner traces
/// during test runs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
