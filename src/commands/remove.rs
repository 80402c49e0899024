//! Participant removal command

use anyhow::{bail, Result};

use crate::commands::{
    build_view, create_fetch_spinner, print_message, write_document, CommandOptions,
    FETCHING_MESSAGE,
};
use crate::utils::{clean_detail, confirm, set_terminal_title, set_terminal_title_and_flush};
use crate::view::{ConfirmFn, RemovalOutcome};

/// Handles the removal command
///
/// Removal is destructive, so it is gated on an interactive confirmation
/// unless `--yes` was given. Declining sends nothing to the server.
pub async fn handle_remove_command(
    options: &CommandOptions,
    email: &str,
    activity: &str,
    assume_yes: bool,
) -> Result<()> {
    set_terminal_title("🚀 roster");

    let view = build_view(options)?;
    let spinner = create_fetch_spinner(FETCHING_MESSAGE);
    let refreshed = view.refresh().await;
    spinner.finish_and_clear();

    if let Err(e) = refreshed {
        eprintln!("❌ {}", clean_detail(&e.to_string()));
        set_terminal_title_and_flush("✅ roster");
        bail!("could not fetch activities");
    }

    let catalog = view.snapshot().unwrap_or_default();
    if !catalog.contains_key(activity) {
        println!("❌ Unknown activity: {activity}");
        set_terminal_title_and_flush("✅ roster");
        bail!("unknown activity");
    }

    let result = view
        .remove_participant(activity, email, &terminal_confirm(assume_yes))
        .await;

    let exit = match result {
        Ok(RemovalOutcome::Removed(_)) => {
            print_message(&view);
            write_document(&view, options.output.as_deref())?;
            Ok(())
        }
        Ok(RemovalOutcome::Declined) => {
            println!("Removal cancelled");
            Ok(())
        }
        Err(_) => {
            print_message(&view);
            write_document(&view, options.output.as_deref())?;
            Err(anyhow::anyhow!("removal failed"))
        }
    };
    set_terminal_title_and_flush("✅ roster");
    exit
}

/// Builds the removal confirmation: always-yes for `--yes`, otherwise an
/// interactive prompt where a read failure counts as a decline
pub fn terminal_confirm(assume_yes: bool) -> ConfirmFn {
    if assume_yes {
        Box::new(|_, _| Box::pin(async { true }))
    } else {
        Box::new(|activity: &str, email: &str| {
            let question = format!("Remove {} from {}?", email, activity);
            Box::pin(async move { confirm(&question).unwrap_or(false) })
        })
    }
}
