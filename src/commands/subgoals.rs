use super::{goal::goal_items, Context};
use crate::api::Transport;
use anyhow::Result;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum SubgoalsCommand {
    #[command(about = "Generate subgoals for a goal")]
    Set {
        #[arg(help = "Name of the goal")]
        name: String,
    },
    #[command(about = "List the subgoals of a goal")]
    List {
        #[arg(help = "Name of the goal")]
        name: String,
    },
}

pub async fn cmd<T: Transport>(command: SubgoalsCommand, context: &Context<T>) -> Result<String> {
    match command {
        SubgoalsCommand::Set { name } => {
            let reply = context.api.set_subgoals(&name).await?;
            Ok(context.layout.text_block(None, &reply).to_string())
        }
        SubgoalsCommand::List { name } => {
            let subgoals = context.api.subgoals(&name).await?;
            Ok(context.layout.item_list(Some(&name), &goal_items(&subgoals)).to_string())
        }
    }
}
