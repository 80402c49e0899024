//! Pure projections of the catalog model
//!
//! This module provides:
//! - Identity badge derivation from participant emails
//! - HTML escaping for untrusted text
//! - The HTML document projection (`html`)
//! - The compact terminal projection (`terminal`)
//!
//! Everything here is a pure function of its inputs so the render path can
//! be tested without a live display.

pub mod html;
pub mod terminal;

/// Escapes text for insertion into markup
///
/// Every piece of untrusted text (activity names, descriptions, schedules,
/// emails, server messages) goes through here before it is spliced into the
/// document.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Derives a short identity badge from an email address
///
/// Splits the local part (before `@`) on runs of non-alphanumeric
/// characters and takes the initials of the first two tokens, uppercased.
/// Falls back to the first character of the local part, then to `"?"` for
/// an empty local part. Deterministic for any input.
pub fn badge_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    let tokens: Vec<&str> = local
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.first() {
        Some(first) => {
            let mut badge: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
            if let Some(second) = tokens.get(1) {
                badge.extend(second.chars().take(1).flat_map(char::to_uppercase));
            }
            badge
        }
        None => match local.chars().next() {
            Some(c) => c.to_uppercase().collect(),
            None => "?".to_string(),
        },
    }
}
