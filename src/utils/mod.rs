//! Utility modules for the scanner

pub mod error;

pub use error::{Result, SentinelError};
