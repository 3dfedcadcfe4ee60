#[derive(Debug, Clone)]
pub enum Message {
    // === CREDENTIAL MESSAGES ===
    MissingCredentials,

    // === SUMMARY / LIST MESSAGES ===
    SummaryTitle {
        begin: String,
        end: String,
    },
    NoActivitiesFound {
        begin: String,
        end: String,
    },
    ActivityTitle {
        time: String,
        name: String,
        minutes: i64,
    },

    // === SIGNUP MESSAGES ===
    InvalidEmail(String),

    // === LOGGING MESSAGES ===
    DebugModeEnabled(String), // filter
}
