//! # activity-roster
//!
//! `activity-roster` is a client library for keeping a rendered view of an
//! activities signup service in sync with server state. It powers the
//! `roster` CLI tool.
//!
//! ## Core Features
//!
//! - **View Synchronization**: fetch → project → re-fetch on every mutation;
//!   the snapshot is replaced wholesale, never patched.
//! - **Pure Projections**: the HTML document and the terminal listing are
//!   both rendered from an explicit in-memory model.
//! - **Status Messages**: one message slot with a single owned auto-hide
//!   timer; a stale timer can never hide a newer message.
//! - **Typed Client**: a trait seam over the HTTP service separating
//!   transport failures from server rejections.
//!
//! ## Example
//!
//! ```rust,no_run
//! use activity_roster::api::HttpApi;
//! use activity_roster::view::ViewSync;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = HttpApi::new("http://localhost:8000", Duration::from_secs(10)).unwrap();
//!     let view = ViewSync::new(Arc::new(api));
//!     if view.refresh().await.is_ok() {
//!         println!("{}", view.document());
//!     }
//! }
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod model;
pub mod render;
pub mod utils;
pub mod view;
