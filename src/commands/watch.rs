//! Interactive session command
//!
//! A prompt loop over one synchronizer: the catalog is redrawn after every
//! operation, the message slot is shown until its deadline passes, and a
//! session summary prints on exit. Failures never end the session — any
//! operation can simply be re-issued.

use anyhow::Result;
use std::io::{self, Write};

use crate::commands::remove::terminal_confirm;
use crate::commands::{
    build_view, create_fetch_spinner, print_message, write_document, CommandOptions,
    FETCHING_MESSAGE,
};
use crate::render;
use crate::utils::{clean_detail, set_terminal_title, set_terminal_title_and_flush};
use crate::view::{MessageSlot, RemovalOutcome, SessionStats, ViewSync};

/// One parsed line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Empty,
    Help,
    Quit,
    Refresh,
    Signup { email: String, activity: String },
    Remove { email: String, activity: String },
    Unknown(String),
}

/// Handles the interactive session command
pub async fn handle_watch_command(options: &CommandOptions) -> Result<()> {
    set_terminal_title("🚀 roster watch");

    let view = build_view(options)?;
    let start_time = std::time::Instant::now();
    let mut stats = SessionStats::new();

    let spinner = create_fetch_spinner(FETCHING_MESSAGE);
    let refreshed = view.refresh().await;
    spinner.finish_and_clear();
    record(&mut stats, "refresh", &view, refreshed);
    print_view(&view);
    print_help();

    loop {
        view.expire_due_message();
        print_message(&view);
        print!("roster> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF ends the session
        }

        match parse_command(line.trim()) {
            SessionCommand::Empty => continue,
            SessionCommand::Help => print_help(),
            SessionCommand::Quit => break,
            SessionCommand::Refresh => {
                let result = view.refresh().await;
                record(&mut stats, "refresh", &view, result);
                print_view(&view);
            }
            SessionCommand::Signup { email, activity } => {
                if !has_activity(&view, &activity) {
                    println!("❌ Unknown activity: {activity}");
                    continue;
                }
                let result = view.sign_up(&activity, &email).await;
                record(&mut stats, "signup", &view, result.map(|_| ()));
                print_view(&view);
            }
            SessionCommand::Remove { email, activity } => {
                if !has_activity(&view, &activity) {
                    println!("❌ Unknown activity: {activity}");
                    continue;
                }
                match view
                    .remove_participant(&activity, &email, &terminal_confirm(false))
                    .await
                {
                    Ok(RemovalOutcome::Removed(_)) => {
                        stats.record_removal();
                        print_view(&view);
                    }
                    Ok(RemovalOutcome::Declined) => {
                        stats.record_declined();
                        println!("Removal cancelled");
                    }
                    Err(_) => stats.record_failure("remove", &failure_text(&view)),
                }
            }
            SessionCommand::Unknown(word) => {
                println!("❓ Unknown command: {word} (try 'help')");
            }
        }
        write_document(&view, options.output.as_deref())?;
    }

    println!();
    println!("{}", stats.generate_summary(start_time.elapsed()));
    let detailed = stats.generate_detailed_summary();
    if !detailed.is_empty() {
        println!("{}", "━".repeat(70));
        println!("{detailed}");
        println!("{}", "━".repeat(70));
    }
    set_terminal_title_and_flush("✅ roster");
    Ok(())
}

fn parse_command(input: &str) -> SessionCommand {
    let mut parts = input.split_whitespace();
    match parts.next() {
        None => SessionCommand::Empty,
        Some("help") | Some("h") => SessionCommand::Help,
        Some("quit") | Some("q") | Some("exit") => SessionCommand::Quit,
        Some("refresh") | Some("r") => SessionCommand::Refresh,
        Some(verb @ ("signup" | "remove")) => {
            let Some(email) = parts.next() else {
                return SessionCommand::Unknown(verb.to_string());
            };
            let activity = parts.collect::<Vec<_>>().join(" ");
            if activity.is_empty() {
                return SessionCommand::Unknown(verb.to_string());
            }
            let email = email.to_string();
            if verb == "signup" {
                SessionCommand::Signup { email, activity }
            } else {
                SessionCommand::Remove { email, activity }
            }
        }
        Some(word) => SessionCommand::Unknown(word.to_string()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  refresh                      re-fetch the activity list");
    println!("  signup EMAIL ACTIVITY        register a participant");
    println!("  remove EMAIL ACTIVITY        remove a participant (asks first)");
    println!("  help                         show this help");
    println!("  quit                         end the session");
}

fn print_view(view: &ViewSync) {
    println!();
    match view.snapshot() {
        Some(catalog) => println!("{}", render::terminal::render_catalog(&catalog)),
        None => println!("{}", crate::config::ACTIVITIES_LOAD_FAILED),
    }
    println!();
}

fn has_activity(view: &ViewSync, activity: &str) -> bool {
    view.snapshot()
        .map(|catalog| catalog.contains_key(activity))
        .unwrap_or(false)
}

fn failure_text(view: &ViewSync) -> String {
    match view.message() {
        MessageSlot::Showing { text, .. } => text,
        MessageSlot::Hidden => "error".to_string(),
    }
}

fn record(stats: &mut SessionStats, operation: &str, view: &ViewSync, result: Result<(), crate::api::ApiError>) {
    match result {
        Ok(()) => match operation {
            "refresh" => stats.record_refresh(),
            "signup" => stats.record_signup(),
            _ => {}
        },
        Err(e) => {
            let text = match view.message() {
                MessageSlot::Showing { text, .. } => text,
                MessageSlot::Hidden => clean_detail(&e.to_string()),
            };
            stats.record_failure(operation, &text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command(""), SessionCommand::Empty);
        assert_eq!(parse_command("help"), SessionCommand::Help);
        assert_eq!(parse_command("q"), SessionCommand::Quit);
        assert_eq!(parse_command("refresh"), SessionCommand::Refresh);
    }

    #[test]
    fn test_parse_signup_with_multiword_activity() {
        assert_eq!(
            parse_command("signup jane@x.com Chess Club"),
            SessionCommand::Signup {
                email: "jane@x.com".to_string(),
                activity: "Chess Club".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            parse_command("remove a@x.com Gym Class"),
            SessionCommand::Remove {
                email: "a@x.com".to_string(),
                activity: "Gym Class".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_incomplete_mutation_is_unknown() {
        assert_eq!(
            parse_command("signup jane@x.com"),
            SessionCommand::Unknown("signup".to_string())
        );
        assert_eq!(
            parse_command("remove"),
            SessionCommand::Unknown("remove".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_word() {
        assert_eq!(
            parse_command("frobnicate"),
            SessionCommand::Unknown("frobnicate".to_string())
        );
    }
}
