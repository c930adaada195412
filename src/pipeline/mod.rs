//! Pipeline orchestration.
//!
//! [`runner::SummaryPipeline`] wires the stages together: normalize → split
//! sentences → tokenize/TF-IDF → score → extract. Each stage produces a new
//! artifact consumed by the next; nothing is mutated across a stage
//! boundary.

pub mod runner;
