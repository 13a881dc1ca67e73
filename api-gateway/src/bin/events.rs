//! Events Lambda - CRUD over the events table.
//!
//! Endpoints:
//! - GET /events - List all events
//! - GET /events/{eventId} - Get an event by its external key
//! - POST /events - Create an event
//! - PUT /events/{eventId} - Replace an event's notes/event/timestamp
//! - DELETE /events/{eventId} - Delete an event

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{into_response, to_envelope};
use shared::{db, dispatch, Config, EventRepository};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    repo: EventRepository,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;
        let pool = db::create_pool(&config).await?;
        Ok(Self {
            repo: EventRepository::new(pool),
        })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let request = to_envelope(&event);
    let reply = dispatch(&state.repo, request).await;
    into_response(reply)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
