//! Foundation module - core utilities and types
//!
//! Fundamental building blocks used throughout the engine:
//! - Math type aliases
//! - Handle-based collections
//! - Logging bootstrap

pub mod collections;
pub mod logging;
pub mod math;
