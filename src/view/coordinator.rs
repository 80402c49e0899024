//! Coordinator driving the fetch → project → re-fetch cycle
//!
//! `ViewSync` owns the view state and mediates every server interaction.
//! Mutations that succeed trigger a full refresh; mutations that fail only
//! touch the message slot. A failed refresh keeps the last good snapshot —
//! the view is replaced on confirmed new data only.
//!
//! Mutations are not serialized against each other: two in-flight requests
//! race and the last response to resolve triggers the final refresh.

use crate::api::{ActivitiesApi, ApiError};
use crate::config::{
    ACTIVITIES_LOAD_FAILED, MESSAGE_HIDE_SECS, REMOVE_FAILED, REMOVE_REJECTED_FALLBACK,
    SIGNUP_FAILED, SIGNUP_REJECTED_FALLBACK,
};
use crate::model::ActivityCatalog;
use crate::render;
use crate::view::state::{MessageKind, MessageSlot, ViewState};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Type alias for the interactive removal confirmation
/// Takes (activity, email) and resolves to whether the removal may proceed
pub type ConfirmFn =
    Box<dyn Fn(&str, &str) -> Pin<Box<dyn Future<Output = bool> + Send>> + Send + Sync>;

/// Outcome of a removal request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The server removed the participant; carries its message
    Removed(String),
    /// The user declined the confirmation — no request was sent
    Declined,
}

/// The activity view synchronizer
pub struct ViewSync {
    api: Arc<dyn ActivitiesApi>,
    state: Arc<Mutex<ViewState>>,
    hide_after: Duration,
    hide_timer: Mutex<Option<JoinHandle<()>>>,
}

impl ViewSync {
    pub fn new(api: Arc<dyn ActivitiesApi>) -> Self {
        Self::with_hide_after(api, Duration::from_secs(MESSAGE_HIDE_SECS))
    }

    /// Creates a synchronizer with a custom message hide delay
    pub fn with_hide_after(api: Arc<dyn ActivitiesApi>, hide_after: Duration) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(ViewState::new())),
            hide_after,
            hide_timer: Mutex::new(None),
        }
    }

    /// Fetches the full catalog and replaces the snapshot wholesale
    ///
    /// On failure the previous snapshot is kept and the failure is reported
    /// through the message slot and the diagnostic channel.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        match self.api.list_activities().await {
            Ok(catalog) => {
                tracing::debug!(activities = catalog.len(), "catalog refreshed");
                self.lock_state().replace_catalog(catalog);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to refresh activities");
                self.show_message(MessageKind::Error, ACTIVITIES_LOAD_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Registers `email` for `activity`
    ///
    /// Success re-synchronizes the view before showing the server's message;
    /// failure shows the server's detail (or the generic fallback) without
    /// refreshing.
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        match self.api.sign_up(activity, email).await {
            Ok(message) => {
                tracing::debug!(activity, email, "signup accepted");
                let _ = self.refresh().await;
                self.show_message(MessageKind::Success, message.clone());
                Ok(message)
            }
            Err(e) => {
                tracing::warn!(activity, email, error = %e, "signup failed");
                self.show_message(
                    MessageKind::Error,
                    rejection_text(&e, SIGNUP_REJECTED_FALLBACK, SIGNUP_FAILED),
                );
                Err(e)
            }
        }
    }

    /// Removes `email` from `activity`, gated on `confirm`
    ///
    /// A declined confirmation aborts with zero network calls and no state
    /// change.
    pub async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
        confirm: &ConfirmFn,
    ) -> Result<RemovalOutcome, ApiError> {
        if !confirm(activity, email).await {
            tracing::debug!(activity, email, "removal declined");
            return Ok(RemovalOutcome::Declined);
        }
        match self.api.remove_participant(activity, email).await {
            Ok(message) => {
                tracing::debug!(activity, email, "participant removed");
                let _ = self.refresh().await;
                self.show_message(MessageKind::Success, message.clone());
                Ok(RemovalOutcome::Removed(message))
            }
            Err(e) => {
                tracing::warn!(activity, email, error = %e, "removal failed");
                self.show_message(
                    MessageKind::Error,
                    rejection_text(&e, REMOVE_REJECTED_FALLBACK, REMOVE_FAILED),
                );
                Err(e)
            }
        }
    }

    /// Shows a message and arms its hide timer
    ///
    /// The slot owns at most one timer: arming a new one aborts the previous
    /// handle, and the generation check makes a late stale timer a no-op.
    /// Must be called from within a tokio runtime.
    pub fn show_message(&self, kind: MessageKind, text: String) {
        let generation = self.lock_state().show_message(kind, text, self.hide_after);

        let state = Arc::clone(&self.state);
        let hide_after = self.hide_after;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(hide_after).await;
            if let Ok(mut state) = state.lock() {
                state.expire_message(generation);
            }
        });

        let mut slot = self
            .hide_timer
            .lock()
            .expect("hide timer mutex poisoned");
        if let Some(previous) = slot.replace(timer) {
            previous.abort();
        }
    }

    /// Renders the HTML document projection of the current state
    pub fn document(&self) -> String {
        let state = self.lock_state();
        render::html::document(state.catalog(), state.message(), state.refreshed_at())
    }

    /// Clone of the current catalog snapshot, if any refresh has succeeded
    pub fn snapshot(&self) -> Option<ActivityCatalog> {
        self.lock_state().catalog().cloned()
    }

    /// Clone of the current message slot
    pub fn message(&self) -> MessageSlot {
        self.lock_state().message().clone()
    }

    /// Hides the message if its deadline has passed; used by redraw loops
    pub fn expire_due_message(&self) -> bool {
        self.lock_state().expire_due_message()
    }

    fn lock_state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().expect("view state mutex poisoned")
    }
}

/// Maps an [`ApiError`] to the user-visible message text: the server's
/// detail when present, otherwise the operation's fallback
fn rejection_text(error: &ApiError, rejected_fallback: &str, transport_fallback: &str) -> String {
    match error {
        ApiError::Rejected {
            detail: Some(detail),
            ..
        } => detail.clone(),
        ApiError::Rejected { detail: None, .. } => rejected_fallback.to_string(),
        ApiError::Transport(_) | ApiError::Decode(_) => transport_fallback.to_string(),
    }
}
