//! Cleans error text for single-line terminal display

use crate::config::{ERROR_MESSAGE_MAX_LENGTH, ERROR_MESSAGE_TRUNCATE_LENGTH};

/// Cleans and formats error messages for display
pub fn clean_detail(error: &str) -> String {
    // Replace newlines/tabs with spaces and collapse whitespace
    let cleaned = error.replace('\n', " ").replace('\r', "").replace('\t', " ");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    // Extract key error patterns
    if cleaned.contains("timed out") {
        "request timeout".to_string()
    } else if cleaned.contains("Connection refused") || cleaned.contains("dns error") {
        "server unreachable".to_string()
    } else if cleaned.contains("connection") || cleaned.contains("network") {
        "network error".to_string()
    } else if cleaned.chars().count() > ERROR_MESSAGE_MAX_LENGTH {
        let truncated: String = cleaned.chars().take(ERROR_MESSAGE_TRUNCATE_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        cleaned
    }
}
