//! Shared utilities for committee-rs
//!
//! This crate provides common functionality used across the committee-rs
//! workspace, currently logging setup.

pub mod logging;

pub use logging::init_tracing;
