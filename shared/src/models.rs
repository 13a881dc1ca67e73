//! Data models for the events table and its request payloads.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `events` table.
///
/// `event_id` maps to the `eventid` column (Postgres folds the unquoted
/// identifier to lowercase) and is the external lookup key; `id` is the
/// server-assigned surrogate key and never changes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    pub id: i32,
    #[serde(rename = "eventId")]
    #[sqlx(rename = "eventid")]
    pub event_id: String,
    pub notes: Option<String>,
    pub event: String,
    /// Caller-supplied, stored as-is; no format validation.
    pub timestamp: String,
}

/// Body of `POST /events`.
///
/// Every field is optional at the deserialization layer so that missing
/// fields surface as per-field validation errors instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateEventRequest {
    #[serde(rename = "eventId")]
    pub event_id: Option<String>,
    pub notes: Option<String>,
    pub event: Option<String>,
    pub timestamp: Option<String>,
}

/// Body of `PUT /events/{eventId}`. The key comes from the path, not the body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateEventRequest {
    pub notes: Option<String>,
    pub event: Option<String>,
    pub timestamp: Option<String>,
}

/// A validated create payload.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_id: String,
    pub notes: Option<String>,
    pub event: String,
    pub timestamp: String,
}

/// A validated update payload. Replaces notes/timestamp/event wholesale;
/// an absent `notes` writes NULL.
#[derive(Debug, Clone)]
pub struct EventPatch {
    pub notes: Option<String>,
    pub event: String,
    pub timestamp: String,
}
