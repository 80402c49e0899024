//! CLI command handlers
//!
//! This module provides:
//! - `show` — one refresh plus the terminal listing
//! - `signup` / `remove` — the two roster mutations
//! - `watch` — the interactive session loop
//!
//! Handlers print their own status lines; the error they return is terse
//! and only drives the process exit code.

pub mod remove;
pub mod show;
pub mod signup;
pub mod watch;

pub use remove::handle_remove_command;
pub use show::handle_show_command;
pub use signup::handle_signup_command;
pub use watch::handle_watch_command;

use crate::api::HttpApi;
use crate::config::{get_server_url, get_timeout_secs};
use crate::view::ViewSync;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub const FETCHING_MESSAGE: &str = "🔍 Fetching activities...";

/// Options shared by every subcommand
#[derive(Debug, Default, Clone)]
pub struct CommandOptions {
    /// Base URL override for the activities service
    pub server: Option<String>,
    /// Where to write the rendered HTML document, if anywhere
    pub output: Option<PathBuf>,
    /// Request timeout override in seconds
    pub timeout: Option<u64>,
}

/// Builds a synchronizer against the configured server
pub fn build_view(options: &CommandOptions) -> Result<ViewSync> {
    let server_url = get_server_url(options.server.as_deref());
    let timeout = Duration::from_secs(get_timeout_secs(options.timeout));
    let api = HttpApi::new(server_url.clone(), timeout)
        .with_context(|| format!("failed to build HTTP client for {server_url}"))?;
    Ok(ViewSync::new(Arc::new(api)))
}

/// Creates the spinner shown while a fetch is in flight
pub fn create_fetch_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Writes the rendered HTML document when an output path was given
pub fn write_document(view: &ViewSync, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, view.document())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("📄 Wrote {}", path.display());
    }
    Ok(())
}

/// Prints the message slot as a status line, if a message is showing
pub fn print_message(view: &ViewSync) {
    if let Some(line) = crate::render::terminal::render_message(&view.message()) {
        println!("{line}");
    }
}
