// src/engine/mod.rs

//! Sequencing engine for checkseq.
//!
//! Walks a [`Plan`](crate::plan::Plan) in order, hands each invocation to an
//! [`ExecutorBackend`](crate::exec::ExecutorBackend), and stops at the first
//! invocation that does not succeed.

pub mod report;
pub mod sequencer;

pub use report::{InvocationRecord, SequenceReport};
pub use sequencer::{InvocationOutcome, Sequencer};
