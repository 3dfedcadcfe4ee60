use ritual::{commands::Cli, libs::logging, msg_error};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            msg_error!(error);
            ExitCode::FAILURE
        }
    }
}
