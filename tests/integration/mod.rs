//! Integration tests for wallet-sentinel
//!
//! These tests drive the scanner end to end over scripted capability
//! providers and verify real run behavior without mocking internals.

pub mod scanner_tests;
