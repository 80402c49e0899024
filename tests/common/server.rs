//! In-process stub of the activities service
//!
//! Serves the three endpoints on a free port with an in-memory catalog and
//! a request counter. Semantics mirror the real service: 404 for an unknown
//! activity or participant, 400 for a duplicate signup, `{message}` on
//! success and `{detail}` on failure.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

use activity_roster::model::ActivityCatalog;

#[derive(Clone)]
struct ServiceState {
    catalog: Arc<Mutex<ActivityCatalog>>,
    requests: Arc<AtomicUsize>,
}

/// A running stub service with automatic cleanup on drop
pub struct StubService {
    pub base_url: String,
    catalog: Arc<Mutex<ActivityCatalog>>,
    requests: Arc<AtomicUsize>,
    server: JoinHandle<()>,
}

impl StubService {
    /// Starts the stub on a free port with the default seeded catalog
    pub async fn start() -> Self {
        Self::with_catalog(super::seed_catalog()).await
    }

    pub async fn with_catalog(catalog: ActivityCatalog) -> Self {
        let state = ServiceState {
            catalog: Arc::new(Mutex::new(catalog)),
            requests: Arc::new(AtomicUsize::new(0)),
        };
        let app = Router::new()
            .route("/activities", get(list_activities))
            .route("/activities/{name}/signup", post(sign_up))
            .route(
                "/activities/{name}/participants",
                delete(remove_participant),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            catalog: state.catalog,
            requests: state.requests,
            server,
        }
    }

    /// Number of requests the stub has served so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Participants currently recorded server-side for `activity`
    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.catalog.lock().unwrap()[activity].participants.clone()
    }

    /// Stops the server; subsequent requests fail at the transport level
    pub async fn shut_down(&self) {
        self.server.abort();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
}

impl Drop for StubService {
    fn drop(&mut self) {
        self.server.abort();
    }
}

#[derive(Deserialize)]
struct EmailParam {
    email: String,
}

async fn list_activities(State(state): State<ServiceState>) -> Json<ActivityCatalog> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    Json(state.catalog.lock().unwrap().clone())
}

async fn sign_up(
    State(state): State<ServiceState>,
    Path(name): Path<String>,
    Query(param): Query<EmailParam>,
) -> (StatusCode, Json<Value>) {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let mut catalog = state.catalog.lock().unwrap();
    let Some(activity) = catalog.get_mut(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Activity not found"})),
        );
    };
    if activity.participants.contains(&param.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Already signed up for this activity"})),
        );
    }
    activity.participants.push(param.email.clone());
    (
        StatusCode::OK,
        Json(json!({"message": format!("Signed up {} for {}", param.email, name)})),
    )
}

async fn remove_participant(
    State(state): State<ServiceState>,
    Path(name): Path<String>,
    Query(param): Query<EmailParam>,
) -> (StatusCode, Json<Value>) {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let mut catalog = state.catalog.lock().unwrap();
    let Some(activity) = catalog.get_mut(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Activity not found"})),
        );
    };
    let Some(position) = activity
        .participants
        .iter()
        .position(|p| p == &param.email)
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Participant not found"})),
        );
    };
    activity.participants.remove(position);
    (
        StatusCode::OK,
        Json(json!({"message": format!("Removed {} from {}", param.email, name)})),
    )
}
