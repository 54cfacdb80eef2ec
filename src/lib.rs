//! # Docente++ Rust Backend
//!
//! Document-import analysis and scheduling-validation engine.
//!
//! This crate provides a Rust-based backend for the Docente++ teacher
//! productivity tool, offering classification and pattern-based analysis of
//! free-text didactic documents, roster CSV parsing, and rule-based timetable
//! slot validation. The backend can expose a REST API via Axum for the web
//! frontend.
//!
//! ## Features
//!
//! - **Document Import**: Classify uploaded documents and extract candidate
//!   lesson/activity records from line-oriented patterns
//! - **Schedule Planner**: Validate timetable placements against working-day,
//!   working-hour, collision and daily-capacity rules, and search forward for
//!   the next free slot
//! - **Roster Import**: Parse student and grade CSV files with per-line error
//!   reporting
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Shared data shapes and Data Transfer Objects (DTOs)
//! - [`models`]: Domain value types (documents, hour slots)
//! - [`services`]: High-level business logic (classifier, analyzer, planner,
//!   roster parsing, import pipeline)
//! - [`db`]: Repository pattern and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
