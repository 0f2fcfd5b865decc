use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use spm_contact::Relay;
use tower_http::catch_panic::CatchPanicLayer;

use crate::site::SiteContent;

mod health;
mod index;
mod send;

pub use send::SENT_MESSAGE;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
    pub site: Arc<SiteContent>,
}

impl AppState {
    pub fn new(relay: Relay, site: SiteContent) -> Self {
        Self {
            relay: Arc::new(relay),
            site: Arc::new(site),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/api/send", post(send::action))
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(crate::error::handle_panic))
}
