//! High-level business logic.
//!
//! The two cores — document-import analysis and timetable slot validation —
//! plus the roster parsers and the collaborator seams (file source,
//! notification sink) that connect them to the hosting application.

pub mod analyzer;
pub mod classifier;
pub mod import_pipeline;
pub mod notify;
pub mod planner;
pub mod roster;

pub use analyzer::{analyze_document_content, analyze_document_content_at};
pub use classifier::classify_document;
pub use import_pipeline::{confirm_import, handle_file_upload, FileSource, PathFileSource};
pub use notify::{LogSink, MemorySink, NotificationSink, Severity};
pub use planner::{can_schedule, find_next_available_slot, find_next_available_slot_from_today};
pub use roster::{parse_grades, parse_roster};
