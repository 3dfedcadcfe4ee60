use super::Context;
use crate::{
    api::{
        ritual::{LogRequest, ACTIVITY_TIME_FORMAT},
        Transport,
    },
    msg_debug,
};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(help = "Name of the activity")]
    activity_name: String,
    #[arg(help = "Duration of the activity (in minutes)")]
    duration: u32,
    #[arg(help = "Memo or description of the activity")]
    message: String,
}

/// Logs an activity that ended now and prints the coach's feedback.
pub async fn cmd<T: Transport>(args: LogArgs, context: &Context<T>) -> Result<String> {
    let end = context.now;
    let begin = end - Duration::minutes(i64::from(args.duration));

    let activity = LogRequest {
        activity_name: args.activity_name,
        activity_begin: begin.format(ACTIVITY_TIME_FORMAT).to_string(),
        activity_end: end.format(ACTIVITY_TIME_FORMAT).to_string(),
        memo: args.message,
    };
    msg_debug!(format!("Logging '{}' from {} to {}", activity.activity_name, activity.activity_begin, activity.activity_end));

    let response = context.api.add_activity(&activity).await?;

    // Older backends only fill in `message`
    let text = if response.feedback.is_empty() { &response.message } else { &response.feedback };
    Ok(context.layout.text_block(None, text).to_string())
}
