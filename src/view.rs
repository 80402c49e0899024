//! View synchronization
//!
//! This module provides:
//! - The explicit in-memory view state and message slot (`state`)
//! - The async coordinator driving refresh/signup/remove (`coordinator`)
//! - Session statistics for the interactive mode

pub mod coordinator;
pub mod state;
mod state_tests;

pub use coordinator::{ConfirmFn, RemovalOutcome, ViewSync};
pub use state::{MessageKind, MessageSlot, ViewState};

use std::time::Duration;

/// Statistics for tracking the outcome of one interactive session
#[derive(Clone, Default)]
pub struct SessionStats {
    pub refreshes: u32,
    pub signups: u32,
    pub removals: u32,
    pub declined: u32,
    pub failures: Vec<(String, String)>, // (operation, error_message)
}

impl SessionStats {
    /// Creates a new statistics tracker with all counters initialized to zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_refresh(&mut self) {
        self.refreshes += 1;
    }

    pub fn record_signup(&mut self) {
        self.signups += 1;
    }

    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    pub fn record_declined(&mut self) {
        self.declined += 1;
    }

    pub fn record_failure(&mut self, operation: &str, error: &str) {
        self.failures.push((operation.to_string(), error.to_string()));
    }

    /// Generates the one-line summary printed when a session ends
    pub fn generate_summary(&self, duration: Duration) -> String {
        let duration_secs = duration.as_secs_f64();
        let mut summary = format!(
            "✅ Session ended after {:.1}s • {} refreshes • {} signed up • {} removed",
            duration_secs, self.refreshes, self.signups, self.removals
        );
        if !self.failures.is_empty() {
            summary.push_str(&format!(" • {} failed", self.failures.len()));
        }
        summary
    }

    /// Generates detailed failure lines for operations needing attention
    pub fn generate_detailed_summary(&self) -> String {
        let mut lines = Vec::new();
        if !self.failures.is_empty() {
            lines.push(format!("🔴 FAILED OPERATIONS ({})", self.failures.len()));
            for (i, (operation, error)) in self.failures.iter().enumerate() {
                let tree_char = if i == self.failures.len() - 1 {
                    "└─"
                } else {
                    "├─"
                };
                lines.push(format!("   {} {:10} # {}", tree_char, operation, error));
            }
        }
        lines.join("\n")
    }
}
