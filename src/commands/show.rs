//! Activity listing command

use anyhow::{bail, Result};

use crate::commands::{
    build_view, create_fetch_spinner, write_document, CommandOptions, FETCHING_MESSAGE,
};
use crate::model::total_participants;
use crate::render;
use crate::utils::{clean_detail, set_terminal_title, set_terminal_title_and_flush};

/// Handles the listing command: one refresh, one render
pub async fn handle_show_command(options: &CommandOptions) -> Result<()> {
    set_terminal_title("🚀 roster");

    let view = build_view(options)?;
    let start_time = std::time::Instant::now();
    let spinner = create_fetch_spinner(FETCHING_MESSAGE);
    let result = view.refresh().await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            let catalog = view.snapshot().unwrap_or_default();
            println!();
            println!("{}", render::terminal::render_catalog(&catalog));
            println!();
            println!(
                "✅ Synced {} activities • {} participants • {:.1}s",
                catalog.len(),
                total_participants(&catalog),
                start_time.elapsed().as_secs_f64()
            );
            write_document(&view, options.output.as_deref())?;
            set_terminal_title_and_flush("✅ roster");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", clean_detail(&e.to_string()));
            // The kiosk page gets the failure placeholder
            write_document(&view, options.output.as_deref())?;
            set_terminal_title_and_flush("✅ roster");
            bail!("could not fetch activities");
        }
    }
}
