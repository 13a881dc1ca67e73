//! Required-field validation for write operations.
//!
//! Runs after sanitization. All missing/empty fields are reported together;
//! any error fails the whole request before storage is touched.

use serde::Serialize;

use crate::models::{CreateEventRequest, EventPatch, NewEvent, UpdateEventRequest};

/// A single validation failure, surfaced to the caller in a 400 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn mandatory(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn present(value: &Option<String>) -> bool {
    matches!(value, Some(v) if !v.is_empty())
}

impl CreateEventRequest {
    /// Check required fields and produce the validated payload.
    ///
    /// Required: `eventId`, `event`, `timestamp`. `notes` is optional.
    pub fn validate(self) -> Result<NewEvent, Vec<FieldError>> {
        let mut errors = Vec::new();
        if !present(&self.event_id) {
            errors.push(FieldError::mandatory("eventId", "Event ID is mandatory"));
        }
        if !present(&self.event) {
            errors.push(FieldError::mandatory("event", "Event object is mandatory"));
        }
        if !present(&self.timestamp) {
            errors.push(FieldError::mandatory("timestamp", "Timestamp is mandatory"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEvent {
            event_id: self.event_id.unwrap_or_default(),
            notes: self.notes,
            event: self.event.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
        })
    }
}

impl UpdateEventRequest {
    /// Check required fields and produce the validated payload.
    ///
    /// Required: `event`, `timestamp`. The lookup key comes from the path.
    pub fn validate(self) -> Result<EventPatch, Vec<FieldError>> {
        let mut errors = Vec::new();
        if !present(&self.event) {
            errors.push(FieldError::mandatory("event", "Event object is mandatory"));
        }
        if !present(&self.timestamp) {
            errors.push(FieldError::mandatory("timestamp", "Timestamp is mandatory"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EventPatch {
            notes: self.notes,
            event: self.event.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_create() -> CreateEventRequest {
        CreateEventRequest {
            event_id: Some("e1".to_string()),
            notes: Some("first".to_string()),
            event: Some("click".to_string()),
            timestamp: Some("20240101T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_create_valid() {
        let new = full_create().validate().unwrap();
        assert_eq!(new.event_id, "e1");
        assert_eq!(new.notes.as_deref(), Some("first"));
        assert_eq!(new.event, "click");
    }

    #[test]
    fn test_create_notes_optional() {
        let mut req = full_create();
        req.notes = None;
        let new = req.validate().unwrap();
        assert!(new.notes.is_none());
    }

    #[test]
    fn test_create_missing_event_id() {
        let mut req = full_create();
        req.event_id = None;
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "eventId");
        assert_eq!(errors[0].message, "Event ID is mandatory");
    }

    #[test]
    fn test_create_empty_counts_as_missing() {
        let mut req = full_create();
        req.timestamp = Some(String::new());
        let errors = req.validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::mandatory("timestamp", "Timestamp is mandatory")]);
    }

    #[test]
    fn test_create_reports_all_errors_at_once() {
        let errors = CreateEventRequest::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["eventId", "event", "timestamp"]);
    }

    #[test]
    fn test_update_required_fields() {
        let errors = UpdateEventRequest::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["event", "timestamp"]);
    }

    #[test]
    fn test_update_valid_without_notes() {
        let patch = UpdateEventRequest {
            notes: None,
            event: Some("click2".to_string()),
            timestamp: Some("20240102T00:00:00Z".to_string()),
        }
        .validate()
        .unwrap();
        assert!(patch.notes.is_none());
        assert_eq!(patch.event, "click2");
    }
}
