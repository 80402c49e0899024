//! Data model for the activities catalog
//!
//! The catalog is a transient, in-memory snapshot of server state. It is
//! always fetched fresh and replaced wholesale, never patched in place —
//! the server stays authoritative for every invariant (capacity, duplicate
//! participants).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single activity as served by the activities endpoint
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, signed — an over-subscribed activity reports a
    /// negative count rather than clamping to zero
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Full snapshot of activities keyed by name
///
/// A `BTreeMap` keeps render order deterministic regardless of the order the
/// server emits entries in.
pub type ActivityCatalog = BTreeMap<String, Activity>;

/// Total participant count across a catalog, for summary lines
pub fn total_participants(catalog: &ActivityCatalog) -> usize {
    catalog.values().map(|a| a.participants.len()).sum()
}
