//! Participant signup command

use anyhow::{bail, Result};

use crate::commands::{
    build_view, create_fetch_spinner, print_message, write_document, CommandOptions,
    FETCHING_MESSAGE,
};
use crate::utils::{clean_detail, set_terminal_title, set_terminal_title_and_flush};

/// Handles the signup command
///
/// Refreshes first and only offers activities the catalog currently lists,
/// the same way the signup form's select control is populated.
pub async fn handle_signup_command(
    options: &CommandOptions,
    email: &str,
    activity: &str,
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
        let names: Vec<&str> = catalog.keys().map(|n| n.as_str()).collect();
        println!("   Available: {}", names.join(", "));
        set_terminal_title_and_flush("✅ roster");
        bail!("unknown activity");
    }

    let result = view.sign_up(activity, email).await;
    print_message(&view);
    write_document(&view, options.output.as_deref())?;
    set_terminal_title_and_flush("✅ roster");

    if result.is_err() {
        bail!("signup failed");
    }
    Ok(())
}
