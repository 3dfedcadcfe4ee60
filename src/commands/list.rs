use super::{Context, IntervalParser};
use crate::{
    api::{ritual::ActivityListItem, Transport},
    libs::{
        interval::{IntervalToken, INTERVAL_HELP},
        layout::DisplayItem,
        messages::Message,
    },
};
use anyhow::Result;
use chrono::NaiveTime;
use clap::Args;

const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";
const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(help = INTERVAL_HELP, value_parser = IntervalParser)]
    interval: IntervalToken,
}

/// Prints one block per day, oldest first.
pub async fn cmd<T: Transport>(args: ListArgs, context: &Context<T>) -> Result<String> {
    let range = args.interval.range_from(context.today())?;
    let activities = context.api.activities(&range).await?;

    if activities.is_empty() {
        return Ok(Message::NoActivitiesFound {
            begin: range.begin_date(),
            end: range.end_date(),
        }
        .to_string());
    }

    let blocks = activities
        .iter()
        .map(|(date, day)| {
            let items: Vec<DisplayItem> = day.iter().map(activity_item).collect();
            context.layout.item_list(Some(date), &items).to_string()
        })
        .collect::<Vec<_>>();

    Ok(blocks.join("\n"))
}

/// Converts an activity into a display item.
///
/// With both times present the title reads `HH:MM, name - N minutes`; an end
/// time earlier than the begin time is taken to cross midnight. Otherwise the
/// title is just the activity name.
pub fn activity_item(activity: &ActivityListItem) -> DisplayItem {
    let times = NaiveTime::parse_from_str(&activity.begin_time, TIME_OF_DAY_FORMAT)
        .ok()
        .zip(NaiveTime::parse_from_str(&activity.end_time, TIME_OF_DAY_FORMAT).ok());

    let title = match times {
        Some((begin, end)) => Message::ActivityTitle {
            time: begin.format("%H:%M").to_string(),
            name: activity.activity_name.clone(),
            minutes: (end - begin).num_minutes().rem_euclid(MINUTES_PER_DAY),
        }
        .to_string(),
        None => activity.activity_name.clone(),
    };

    DisplayItem::new(title, activity.memo.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(begin: &str, end: &str) -> ActivityListItem {
        ActivityListItem {
            activity_name: "reading".to_string(),
            begin_time: begin.to_string(),
            end_time: end.to_string(),
            memo: "Finished chapter 3".to_string(),
        }
    }

    #[test]
    fn test_title_with_duration() {
        let item = activity_item(&activity("09:15:00", "10:45:30"));
        assert_eq!(item.title, "09:15, reading - 90 minutes");
        assert_eq!(item.description, "Finished chapter 3");
    }

    #[test]
    fn test_title_across_midnight() {
        let item = activity_item(&activity("23:30:00", "00:15:00"));
        assert_eq!(item.title, "23:30, reading - 45 minutes");
    }

    #[test]
    fn test_title_without_times() {
        assert_eq!(activity_item(&activity("", "")).title, "reading");
        assert_eq!(activity_item(&activity("9am", "10:00:00")).title, "reading");
    }
}
