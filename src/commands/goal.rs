use super::Context;
use crate::{
    api::{ritual::Goal, Transport},
    libs::layout::DisplayItem,
};
use anyhow::Result;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum GoalCommand {
    #[command(about = "Set a goal")]
    Set {
        #[arg(help = "Name of the goal")]
        name: String,
        #[arg(help = "Description of the goal")]
        description: String,
    },
    #[command(about = "Delete a goal")]
    Delete {
        #[arg(help = "Name of the goal")]
        name: String,
    },
    #[command(about = "List all goals")]
    List,
}

pub async fn cmd<T: Transport>(command: GoalCommand, context: &Context<T>) -> Result<String> {
    match command {
        GoalCommand::Set { name, description } => Ok(context.api.add_goal(&Goal { name, description }).await?),
        GoalCommand::Delete { name } => Ok(context.api.delete_goal(&name).await?),
        GoalCommand::List => {
            let goals = context.api.goals().await?;
            Ok(context.layout.item_list(None, &goal_items(&goals)).to_string())
        }
    }
}

pub fn goal_items(goals: &[Goal]) -> Vec<DisplayItem> {
    goals
        .iter()
        .map(|goal| DisplayItem::new(goal.name.clone(), goal.description.clone()))
        .collect()
}
