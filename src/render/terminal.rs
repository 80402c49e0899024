//! Terminal projection of the catalog
//!
//! Compact listing used by the CLI commands and the interactive session.
//! Same model, same badge derivation as the HTML projection — no escaping,
//! since nothing here is interpreted as markup.

use crate::model::ActivityCatalog;
use crate::render::badge_from_email;
use crate::view::state::MessageSlot;

/// Renders the catalog as an indented terminal listing
pub fn render_catalog(catalog: &ActivityCatalog) -> String {
    let mut lines = Vec::new();
    for (name, activity) in catalog {
        lines.push(format!("📋 {} — {}", name, activity.schedule));
        lines.push(format!("   {}", activity.description));
        lines.push(format!("   {} spots left", activity.spots_left()));
        if activity.participants.is_empty() {
            lines.push("   (no participants yet)".to_string());
        } else {
            for (i, email) in activity.participants.iter().enumerate() {
                let tree_char = if i == activity.participants.len() - 1 {
                    "└─"
                } else {
                    "├─"
                };
                lines.push(format!(
                    "   {} [{}] {}",
                    tree_char,
                    badge_from_email(email),
                    email
                ));
            }
        }
        lines.push(String::new());
    }

    // Remove trailing blank line if it exists
    if lines.last() == Some(&String::new()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Renders the message slot as a single status line, if visible
pub fn render_message(message: &MessageSlot) -> Option<String> {
    match message {
        MessageSlot::Hidden => None,
        MessageSlot::Showing { kind, text, .. } => {
            Some(format!("{} {}", kind.symbol(), text))
        }
    }
}
