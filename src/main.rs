//! roster: a terminal client for an activities signup service
//! Fetches the activity catalog, renders it, and mediates participant
//! signups and removals against the server.

use anyhow::Result;
use clap::{Arg, ArgAction, Command as ClapCommand};
use std::path::PathBuf;

use activity_roster::commands::{
    handle_remove_command, handle_show_command, handle_signup_command, handle_watch_command,
    CommandOptions,
};

fn cli() -> ClapCommand {
    ClapCommand::new("roster")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal client for an activities signup service")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("server")
                .long("server")
                .global(true)
                .value_name("URL")
                .help("Base URL of the activities service"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .global(true)
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the rendered HTML document to this path"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64))
                .help("HTTP request timeout in seconds"),
        )
        .subcommand(ClapCommand::new("show").about("Fetch and display the activity list"))
        .subcommand(
            ClapCommand::new("signup")
                .about("Sign a participant up for an activity")
                .arg(Arg::new("email").required(true).help("Participant email"))
                .arg(
                    Arg::new("activity")
                        .required(true)
                        .help("Activity name (quote names containing spaces)"),
                ),
        )
        .subcommand(
            ClapCommand::new("remove")
                .about("Remove a participant from an activity")
                .arg(Arg::new("email").required(true).help("Participant email"))
                .arg(
                    Arg::new("activity")
                        .required(true)
                        .help("Activity name (quote names containing spaces)"),
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .action(ArgAction::SetTrue)
                        .help("Skip the confirmation prompt"),
                ),
        )
        .subcommand(ClapCommand::new("watch").about("Interactive session against the service"))
}

fn options_from(matches: &clap::ArgMatches) -> CommandOptions {
    CommandOptions {
        server: matches.get_one::<String>("server").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        timeout: matches.get_one::<u64>("timeout").copied(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("show", sub)) => handle_show_command(&options_from(sub)).await,
        Some(("signup", sub)) => {
            let email = sub.get_one::<String>("email").expect("required arg");
            let activity = sub.get_one::<String>("activity").expect("required arg");
            handle_signup_command(&options_from(sub), email, activity).await
        }
        Some(("remove", sub)) => {
            let email = sub.get_one::<String>("email").expect("required arg");
            let activity = sub.get_one::<String>("activity").expect("required arg");
            handle_remove_command(&options_from(sub), email, activity, sub.get_flag("yes")).await
        }
        Some(("watch", sub)) => handle_watch_command(&options_from(sub)).await,
        _ => unreachable!("subcommand required"),
    }
}
