//! Checklist orchestration.

pub mod checklist;

pub use checklist::{ChecklistReport, ChecklistRunner, PullPolicy, PULL_PROMPT_KEY};
