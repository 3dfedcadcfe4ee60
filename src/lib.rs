//! # Ritual - activity logging and coaching from the command line
//!
//! A command-line client for a remote activity-tracking and coaching
//! service: log time-boxed activities, read summaries, manage goals and
//! subgoals, and tune the coach's response personality.
//!
//! ## Features
//!
//! - **Interval Parsing**: `1y2m3w4d` style tokens resolved to date ranges
//! - **Boxed Output**: Uniform framed, word-wrapped terminal blocks
//! - **Request Pipeline**: One authenticated request path shared by every command
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ritual::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
