//! Stage trait, step context, and pipeline runner for slick.
//!
//! A property pipeline is an ordered list of [`Stage`]s executed once per
//! solver step. Each stage declares the fields it reads and writes; the
//! pipeline is validated once at startup and then run with no per-step
//! conditionals. The runner commits each stage's writes before the next
//! stage executes, which is the global synchronization barrier the
//! smearing → mixing hand-off requires.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod pipeline;
pub mod stage;
pub mod store;

pub use context::StepContext;
pub use pipeline::{validate_pipeline, PipelineError, StagePlan, WriteConflict};
pub use stage::{Stage, WriteMode};
pub use store::{FieldStore, Pipeline};
