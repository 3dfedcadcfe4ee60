//! Display implementation for ritual application messages.
//!
//! All user-facing text lives here so commands, the request pipeline and the
//! error types print the same wording for the same situation.

use super::types::Message;
use crate::libs::config::{PASSWORD_VAR, USERNAME_VAR};
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CREDENTIAL MESSAGES ===
            Message::MissingCredentials => format!(
                "Both the ${} and ${} environment variables need to be set for this command",
                USERNAME_VAR, PASSWORD_VAR
            ),

            // === SUMMARY / LIST MESSAGES ===
            Message::SummaryTitle { begin, end } => format!("Summary of {} to {}", begin, end),
            Message::NoActivitiesFound { begin, end } => format!("No activities logged between {} and {}", begin, end),
            Message::ActivityTitle { time, name, minutes } => format!("{}, {} - {} minutes", time, name, minutes),

            // === SIGNUP MESSAGES ===
            Message::InvalidEmail(email) => format!("Invalid email address: '{}'", email),

            // === LOGGING MESSAGES ===
            Message::DebugModeEnabled(filter) => format!("Debug logging enabled ({})", filter),
        };
        write!(f, "{}", text)
    }
}
