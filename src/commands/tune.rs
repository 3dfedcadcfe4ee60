use super::Context;
use crate::api::{ritual::TuneRequest, Transport};
use anyhow::Result;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum TuneCommand {
    #[command(about = "Adjust the coach's core personality")]
    Core {
        #[arg(help = "Your tuning message")]
        message: String,
    },
    #[command(about = "Adjust how summaries are written")]
    Summary {
        #[arg(help = "Your tuning message")]
        message: String,
    },
    #[command(about = "Adjust the feedback given on logged activities")]
    Feedback {
        #[arg(help = "Your tuning message")]
        message: String,
    },
    #[command(about = "Reset all tuning to the defaults")]
    Reset,
}

impl TuneCommand {
    /// Request body for the personality update, `None` for a reset.
    fn request(self) -> Option<TuneRequest> {
        let mut request = TuneRequest::default();
        match self {
            TuneCommand::Core { message } => request.core = message,
            TuneCommand::Summary { message } => request.summary = message,
            TuneCommand::Feedback { message } => request.feedback = message,
            TuneCommand::Reset => return None,
        }
        Some(request)
    }
}

pub async fn cmd<T: Transport>(command: TuneCommand, context: &Context<T>) -> Result<String> {
    match command.request() {
        Some(request) => Ok(context.api.tune(&request).await?),
        None => {
            let reply = context.api.reset_tune().await?;
            Ok(context.layout.text_block(None, &reply).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_selected_field_is_set() {
        let request = TuneCommand::Summary {
            message: "be brief".to_string(),
        }
        .request()
        .unwrap();
        assert_eq!(
            request,
            TuneRequest {
                core: String::new(),
                summary: "be brief".to_string(),
                feedback: String::new(),
            }
        );
        assert!(TuneCommand::Reset.request().is_none());
    }
}
