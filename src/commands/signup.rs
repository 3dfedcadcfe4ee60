use super::Context;
use crate::{
    api::{ritual::SignupRequest, Transport},
    libs::messages::Message,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(help = "Email address used as the username", value_parser = parse_email)]
    email: String,
    #[arg(help = "Password for the new account")]
    password: String,
}

/// Creates an account. Runs without credentials.
pub async fn cmd<T: Transport>(args: SignupArgs, context: &Context<T>) -> Result<String> {
    let signup = SignupRequest {
        username: args.email,
        password: args.password,
    };
    Ok(context.api.create_account(&signup).await?)
}

fn parse_email(value: &str) -> Result<String, String> {
    if is_valid_email(value) {
        Ok(value.to_string())
    } else {
        Err(Message::InvalidEmail(value.to_string()).to_string())
    }
}

/// Checks the basic `local@domain.tld` shape of an address.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("me@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("me"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("me@localhost"));
        assert!(!is_valid_email("me@example..com"));
        assert!(!is_valid_email("me@@example.com"));
        assert!(!is_valid_email("me @example.com"));
    }

    #[test]
    fn test_parse_email_message() {
        assert_eq!(parse_email("nope").unwrap_err(), "Invalid email address: 'nope'");
    }
}
