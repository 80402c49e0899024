//! View state and the status message slot
//!
//! The catalog snapshot lives here as an explicit model object; every
//! rendered representation is a pure projection of this state. The message
//! slot is a two-state machine — hidden, or showing one message with a
//! hide deadline — whose transitions are driven by explicit show/expire
//! events.

use crate::model::ActivityCatalog;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// The two mutually exclusive visual states of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class carried by the message area in the HTML projection
    pub fn css_class(&self) -> &str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }

    /// Symbol used by the terminal projection
    pub fn symbol(&self) -> &str {
        match self {
            MessageKind::Success => "✅",
            MessageKind::Error => "❌",
        }
    }
}

/// The status message area
///
/// Each shown message carries the generation it was armed with; an expire
/// event only takes effect when its generation matches, so a timer armed
/// for an earlier message can never hide a later one.
#[derive(Debug, Clone)]
pub enum MessageSlot {
    Hidden,
    Showing {
        kind: MessageKind,
        text: String,
        deadline: Instant,
        generation: u64,
    },
}

impl MessageSlot {
    /// Builds a visible slot whose deadline is already due; real deadlines
    /// are armed through [`ViewState::show_message`]
    pub fn showing(kind: MessageKind, text: impl Into<String>, generation: u64) -> Self {
        MessageSlot::Showing {
            kind,
            text: text.into(),
            deadline: Instant::now(),
            generation,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, MessageSlot::Showing { .. })
    }
}

/// In-memory model owned by the view synchronizer
pub struct ViewState {
    catalog: Option<ActivityCatalog>,
    message: MessageSlot,
    refreshed_at: Option<DateTime<Utc>>,
    next_generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            catalog: None,
            message: MessageSlot::Hidden,
            refreshed_at: None,
            next_generation: 0,
        }
    }

    pub fn catalog(&self) -> Option<&ActivityCatalog> {
        self.catalog.as_ref()
    }

    pub fn message(&self) -> &MessageSlot {
        &self.message
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Replaces the snapshot wholesale — the catalog is never patched in
    /// place
    pub fn replace_catalog(&mut self, catalog: ActivityCatalog) {
        self.catalog = Some(catalog);
        self.refreshed_at = Some(Utc::now());
    }

    /// Shows a message and returns the generation its hide timer must carry
    pub fn show_message(&mut self, kind: MessageKind, text: String, hide_after: Duration) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.message = MessageSlot::Showing {
            kind,
            text,
            deadline: Instant::now() + hide_after,
            generation,
        };
        generation
    }

    /// Hides the message, but only if `generation` matches the one showing
    ///
    /// Returns whether the slot transitioned to hidden.
    pub fn expire_message(&mut self, generation: u64) -> bool {
        match &self.message {
            MessageSlot::Showing {
                generation: current,
                ..
            } if *current == generation => {
                self.message = MessageSlot::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Hides the message if its deadline has passed (poll-style expiry used
    /// by the interactive redraw loop)
    pub fn expire_due_message(&mut self) -> bool {
        match &self.message {
            MessageSlot::Showing { deadline, .. } if *deadline <= Instant::now() => {
                self.message = MessageSlot::Hidden;
                true
            }
            _ => false,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
