//! Test utilities shared across the netrc workspace
//!
//! This crate provides common testing infrastructure including:
//! - Temporary `.netrc` fixtures ([`create_test_netrc`])
//! - HOME directory isolation ([`NetrcGuard`])
//!
//! The dead_code lint is disabled for this crate because test utilities may
//! not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod netrc;

// Re-export commonly used items
pub use netrc::{NetrcGuard, create_test_netrc};
