use crate::{
    api::{ApiClient, ReqwestTransport, Ritual, Transport},
    libs::{
        config::Config,
        interval::{IntervalToken, INTERVAL_HELP},
        layout::Layout,
    },
    msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{
    builder::TypedValueParser,
    error::{Error as ClapError, ErrorKind},
    Arg, Command, Parser, Subcommand,
};
use std::ffi::OsStr;

pub mod goal;
pub mod list;
pub mod log;
pub mod signup;
pub mod subgoals;
pub mod summary;
pub mod tune;

const AFTER_HELP: &str = "\
Interval Format:
  The <interval> argument should be in the format #y#m#w#d, where:
    #y represents the number of years (365 days)
    #m represents the number of months (30 days)
    #w represents the number of weeks
    #d represents the number of days
  Each # can be any number of digits; units are optional but keep this order.

Credentials:
  Set $RITUAL_USERNAME and $RITUAL_PASSWORD before running any command except signup.

Examples:
  ritual log coding 120 \"Worked on the CLI tool\"
  ritual summary 1m2w
  ritual list 2w3d";

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Log an activity")]
    Log(log::LogArgs),
    #[command(about = "Get a summary of activities for a given interval")]
    Summary(summary::SummaryArgs),
    #[command(about = "List activities for a given interval")]
    List(list::ListArgs),
    #[command(about = "Adjust the tone of the coach's responses", subcommand)]
    Tune(tune::TuneCommand),
    #[command(about = "Set goals to guide the coach's responses", subcommand)]
    Goal(goal::GoalCommand),
    #[command(about = "Generate and set specific objectives for a given goal", subcommand)]
    Subgoals(subgoals::SubgoalsCommand),
    #[command(about = "Create an account")]
    Signup(signup::SignupArgs),
}

#[derive(Debug, Parser)]
#[command(name = "ritual", author, version, about, long_about = None)]
#[command(arg_required_else_help(true), after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Parses `<interval>` arguments.
///
/// A rejected token reports the parser's reason followed by the interval
/// format and the command usage.
#[derive(Debug, Clone, Copy)]
pub struct IntervalParser;

impl TypedValueParser for IntervalParser {
    type Value = IntervalToken;

    fn parse_ref(&self, cmd: &Command, _arg: Option<&Arg>, value: &OsStr) -> Result<Self::Value, ClapError> {
        let token = value.to_str().ok_or_else(|| ClapError::new(ErrorKind::InvalidUtf8).with_cmd(cmd))?;
        token.parse::<IntervalToken>().map_err(|error| {
            let message = format!("invalid interval '{}': {}\n\n{}", token, error, INTERVAL_HELP);
            // Formatting against the command appends its usage line
            ClapError::raw(ErrorKind::ValueValidation, message).format(&mut cmd.clone())
        })
    }
}

/// Everything a command needs for one invocation.
pub struct Context<T: Transport = ReqwestTransport> {
    pub api: Ritual<T>,
    pub layout: Layout,
    /// Local wall-clock time the invocation started at.
    pub now: NaiveDateTime,
}

impl Context<ReqwestTransport> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let api = Ritual::new(ApiClient::from_config(config)?);
        Ok(Self::new(api, Layout::new(config.style), Local::now().naive_local()))
    }
}

impl<T: Transport> Context<T> {
    pub fn new(api: Ritual<T>, layout: Layout, now: NaiveDateTime) -> Self {
        Self { api, layout, now }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::from_env()?;
        let context = Context::from_config(&config)?;

        // Nothing is printed until the command has fully succeeded
        let output = cli.execute(&context).await?;
        msg_print!(output);
        Ok(())
    }

    /// Runs the parsed command and returns the text to print.
    pub async fn execute<T: Transport>(self, context: &Context<T>) -> Result<String> {
        match self.command {
            Commands::Log(args) => log::cmd(args, context).await,
            Commands::Summary(args) => summary::cmd(args, context).await,
            Commands::List(args) => list::cmd(args, context).await,
            Commands::Tune(command) => tune::cmd(command, context).await,
            Commands::Goal(command) => goal::cmd(command, context).await,
            Commands::Subgoals(command) => subgoals::cmd(command, context).await,
            Commands::Signup(args) => signup::cmd(args, context).await,
        }
    }
}
