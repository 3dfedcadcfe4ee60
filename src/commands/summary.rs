use super::{Context, IntervalParser};
use crate::{
    api::Transport,
    libs::{
        interval::{IntervalToken, INTERVAL_HELP},
        messages::Message,
    },
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[arg(help = INTERVAL_HELP, value_parser = IntervalParser)]
    interval: IntervalToken,
}

pub async fn cmd<T: Transport>(args: SummaryArgs, context: &Context<T>) -> Result<String> {
    let range = args.interval.range_from(context.today())?;
    let summary = context.api.summary(&range).await?;

    let title = Message::SummaryTitle {
        begin: range.begin_date(),
        end: range.end_date(),
    }
    .to_string();
    Ok(context.layout.text_block(Some(&title), &summary.response).to_string())
}
