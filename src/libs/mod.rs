//! Core library modules for the ritual application.
//!
//! ## Features
//!
//! - **Interval Parsing**: Compact `1y2m3w4d` tokens to absolute date ranges
//! - **Layout**: Framed, word-wrapped, fixed-width terminal blocks
//! - **Styling**: Symbolic colors with a no-color fallback
//! - **Configuration**: Explicit per-invocation settings read from the environment
//! - **Messaging**: Centralized user-facing text and output macros
//!
//! ## Usage
//!
//! ```rust
//! use ritual::libs::interval::parse_interval;
//! use ritual::libs::layout::Layout;
//! use ritual::libs::style::Style;
//!
//! let range = parse_interval("2w")?;
//! let block = Layout::new(Style::Plain).text_block(Some("Range"), &range.begin_date());
//! println!("{}", block);
//! # Ok::<(), ritual::libs::interval::IntervalError>(())
//! ```

pub mod config;
pub mod interval;
pub mod layout;
pub mod logging;
pub mod messages;
pub mod style;
