//! Tracing subscriber setup.
//!
//! Logging is off unless debug mode is requested. With `RUST_LOG` set its
//! filter is used as-is, otherwise `RITUAL_DEBUG` enables debug events for
//! this crate only. Logs always go to stderr so rendered output on stdout
//! stays clean.

use super::messages::{macros::is_debug_mode, Message};
use crate::msg_debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "ritual=debug";

/// Installs the global subscriber when debug mode is on.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let description = filter.to_string();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        msg_debug!(Message::DebugModeEnabled(description));
    }
}
