//! Transport-agnostic request routing.
//!
//! Both transports reduce their native request shape to an [`EnvelopeRequest`]
//! and hand it to [`dispatch`], so routing decisions and status codes cannot
//! drift between the Lambda handler and the local server.

use serde_json::json;
use tracing::{error, info};

use crate::models::{CreateEventRequest, UpdateEventRequest};
use crate::repository::EventStore;
use crate::{Error, Result};

/// The generic request envelope: method, path, raw JSON body.
#[derive(Debug, Clone)]
pub struct EnvelopeRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl EnvelopeRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body,
        }
    }
}

/// The generic response envelope. `body` is `None` for 204 responses.
#[derive(Debug, Clone)]
pub struct EnvelopeResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl EnvelopeResponse {
    fn new(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// A resolved route. Key-carrying variants borrow the path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Route<'a> {
    List,
    Get(&'a str),
    Create,
    Update(&'a str),
    Delete(&'a str),
}

/// Resolve (method, path) against the routing table. `None` means 405.
fn resolve<'a>(method: &str, path: &'a str) -> Option<Route<'a>> {
    let key = path
        .strip_prefix("/events/")
        .filter(|rest| !rest.is_empty() && !rest.contains('/'));

    match (method, path, key) {
        ("GET", "/events", _) => Some(Route::List),
        ("GET", _, Some(id)) => Some(Route::Get(id)),
        ("POST", "/events", _) => Some(Route::Create),
        ("PUT", _, Some(id)) => Some(Route::Update(id)),
        ("DELETE", _, Some(id)) => Some(Route::Delete(id)),
        _ => None,
    }
}

/// Run one request through sanitize -> validate -> store -> status mapping.
///
/// Never returns an error: every failure folds into a response. Storage
/// failures are logged internally and reach the caller as a generic 500.
pub async fn dispatch<S: EventStore + ?Sized>(
    store: &S,
    request: EnvelopeRequest,
) -> EnvelopeResponse {
    info!(method = %request.method, path = %request.path, "Handling request");

    match handle(store, &request).await {
        Ok(response) => response,
        Err(err) => {
            error!(method = %request.method, path = %request.path, error = %err, "Request failed");
            error_envelope(&err)
        }
    }
}

async fn handle<S: EventStore + ?Sized>(
    store: &S,
    request: &EnvelopeRequest,
) -> Result<EnvelopeResponse> {
    let route = resolve(&request.method, &request.path).ok_or(Error::MethodNotAllowed)?;

    match route {
        Route::List => {
            let events = store.list().await?;
            Ok(EnvelopeResponse::new(200, json!(events)))
        }
        Route::Get(event_id) => match store.get_by_key(event_id).await? {
            Some(event) => Ok(EnvelopeResponse::new(200, json!(event))),
            None => Err(Error::NotFound(event_id.to_string())),
        },
        Route::Create => {
            let mut body: CreateEventRequest = parse_body(&request.body)?;
            body.sanitize();
            let new = body.validate().map_err(Error::Validation)?;
            let created = store.create(new).await?;
            Ok(EnvelopeResponse::new(201, json!(created)))
        }
        Route::Update(event_id) => {
            let mut body: UpdateEventRequest = parse_body(&request.body)?;
            body.sanitize();
            let patch = body.validate().map_err(Error::Validation)?;
            match store.update(event_id, patch).await? {
                Some(_) => Ok(EnvelopeResponse::empty(204)),
                None => Err(Error::NotFound(event_id.to_string())),
            }
        }
        Route::Delete(event_id) => match store.delete(event_id).await? {
            Some(_) => Ok(EnvelopeResponse::empty(204)),
            None => Err(Error::NotFound(event_id.to_string())),
        },
    }
}

/// Parse a JSON body. An empty body reads as `{}` so that missing fields
/// surface as field-level validation errors, matching body-parser behavior.
fn parse_body<T: Default + serde::de::DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(Error::Serialization)
}

fn error_envelope(err: &Error) -> EnvelopeResponse {
    let body = match err {
        Error::Validation(errors) => json!({ "errors": errors }),
        Error::NotFound(_) => json!({ "error": "Event not found" }),
        Error::MethodNotAllowed => json!({ "error": "Method not allowed" }),
        Error::Serialization(_) => json!({ "error": "Invalid request body" }),
        // Never leak driver or config diagnostics to the caller.
        _ => json!({ "error": "Server error" }),
    };
    EnvelopeResponse {
        status: err.status_code(),
        body: Some(body),
    }
}
