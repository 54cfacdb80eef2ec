//! Domain value types.
//!
//! These are the small, self-contained types the services operate on:
//! uploaded documents and timetable hour slots.

pub mod document;
pub mod slot;

pub use document::Document;
pub use slot::HourSlot;
