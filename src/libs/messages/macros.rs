//! Output macros.
//!
//! Command output and the final error are always written to stdout and
//! stderr. Debug mode (`RITUAL_DEBUG` or `RUST_LOG` set) only adds tracing
//! events on top; a log filter never hides what the user asked for.
//!
//! ```rust
//! use ritual::libs::messages::Message;
//! use ritual::{msg_error, msg_print};
//!
//! msg_print!("rendered block");
//! msg_error!(Message::MissingCredentials);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether debug logging was requested. Cached after the first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Application-specific flag or standard Rust logging configuration
        std::env::var("RITUAL_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a message on stdout.
///
/// Rendered output always goes to stdout, whatever the log filter says.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        println!("{}", $msg);
    };
}

/// Prints an error with ❌ prefix on stderr.
///
/// In debug mode the error is also recorded as a tracing event, so it shows
/// up next to the request logs.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("{}", $msg);
        }
        eprintln!("❌ {}", $msg);
    };
}

/// Debug-only message with 🔍 prefix. Suppressed in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
