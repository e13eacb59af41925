#![forbid(unsafe_code)]

//! Scenario replay and diagnostics for the dragsort list engine.
//!
//! The `dragsort-harness` binary loads a JSON scenario (configuration,
//! initial tasks, scripted pointer and host steps), drives a
//! `DragList<Task>` with it, and prints one JSONL record per step followed by
//! a summary. The same pieces are exposed here for tests.

pub mod cli;
pub mod error;
pub mod replay;
pub mod scenario;
pub mod task;
pub mod util;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{HarnessError, Result};
