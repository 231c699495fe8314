//! TreeHash Core — the concurrent digest pipeline.
//!
//! This crate contains all pipeline logic with zero CLI dependencies.
//! It is designed to be reusable across different frontends (CLI, service,
//! test harness).
//!
//! # Modules
//!
//! - [`config`] — Pipeline configuration and queue capacity constants.
//! - [`error`] — Pipeline-fatal error taxonomy.
//! - [`hasher`] — Streaming SHA-256 over arbitrary byte streams.
//! - [`model`] — Data carried between stages (`FileOutcome`, `HashRecord`).
//! - [`pipeline`] — Walker, worker pool, completion monitor, aggregator.
//! - [`sink`] — Record sinks (`RecordSink` trait, JSON-lines file sink).

pub mod config;
pub mod error;
pub mod hasher;
pub mod model;
pub mod pipeline;
pub mod sink;
