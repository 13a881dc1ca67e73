//! Persistent HTTP listener for the events service.
//!
//! Runs the same routing core as the Lambda transport: every request is
//! reduced to the generic envelope and dispatched, so the two deployments
//! answer identically for identical (method, path, body) triples. Intended
//! for local development and as the long-running deployment flavor.

use anyhow::{Context, Result};
use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::header;
use axum::response::Response;
use axum::Router;
use shared::{db, dispatch, Config, EnvelopeRequest, EnvelopeResponse, EventRepository};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Request bodies are small JSON documents; anything larger is rejected.
const BODY_LIMIT: usize = 1024 * 1024;

/// App state shared across requests
struct AppState {
    repo: EventRepository,
}

/// Catch-all adapter: native HTTP request in, envelope out, dispatch.
async fn handle(State(state): State<Arc<AppState>>, req: Request) -> Response {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    // Browsers probe this on every visit; answer before routing.
    if path == "/favicon.ico" {
        return into_http(EnvelopeResponse {
            status: 204,
            body: None,
        });
    }

    let body = match to_bytes(req.into_body(), BODY_LIMIT).await {
        Ok(bytes) => bytes.to_vec(),
        Err(_) => {
            return into_http(EnvelopeResponse {
                status: 400,
                body: Some(serde_json::json!({ "error": "Invalid request body" })),
            });
        }
    };

    let reply = dispatch(&state.repo, EnvelopeRequest::new(method, path, body)).await;
    into_http(reply)
}

fn into_http(reply: EnvelopeResponse) -> Response {
    let builder = Response::builder().status(reply.status);
    match reply.body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build response")
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "local_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = db::create_pool(&config)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let state = Arc::new(AppState {
        repo: EventRepository::new(pool),
    });

    let app = Router::new()
        .fallback(handle)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    tracing::info!("Server is running on port {}", config.port);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
