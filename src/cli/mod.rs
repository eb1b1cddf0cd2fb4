//! Command Line Interface (CLI) layer for quizcard.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `normal` batch flow and the
//! `test` preview flow. It wires user-provided options to the library
//! functionality exposed via `quizcard::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
