//! Repository implementations module.
//!
//! This module contains the implementations of the `RecordRepository` trait:
//! - `local`: in-memory implementation with optional JSON snapshot
//!   persistence, for unit testing and local deployments
pub mod local;

pub use local::LocalRepository;
