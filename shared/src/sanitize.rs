//! Input sanitization applied to request bodies before validation.
//!
//! Blunt denylist, not a parser-aware escape: the characters are removed
//! outright, so hyphenated values (ISO timestamps, UUIDs) lose their hyphens
//! too. That lossiness is long-standing observable behavior and is kept.

use crate::models::{CreateEventRequest, UpdateEventRequest};

const STRIPPED: [char; 4] = ['\'', '"', ';', '-'];

/// Remove every occurrence of `'`, `"`, `;` and `-` from the input.
pub fn sanitize_input(input: &str) -> String {
    input.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

fn sanitize_field(field: &mut Option<String>) {
    if let Some(value) = field {
        *value = sanitize_input(value);
    }
}

impl CreateEventRequest {
    /// Sanitize every string field of the body in place.
    pub fn sanitize(&mut self) {
        sanitize_field(&mut self.event_id);
        sanitize_field(&mut self.notes);
        sanitize_field(&mut self.event);
        sanitize_field(&mut self.timestamp);
    }
}

impl UpdateEventRequest {
    /// Sanitize every string field of the body in place.
    pub fn sanitize(&mut self) {
        sanitize_field(&mut self.notes);
        sanitize_field(&mut self.event);
        sanitize_field(&mut self.timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_denylisted_characters() {
        assert_eq!(sanitize_input("a'b\"c;d-e"), "abcde");
        assert_eq!(sanitize_input("'; DROP TABLE events; --"), " DROP TABLE events ");
    }

    #[test]
    fn test_leaves_other_text_untouched() {
        assert_eq!(sanitize_input("click_42 /path?x=1"), "click_42 /path?x=1");
        assert_eq!(sanitize_input(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize_input("it's a te;st-value");
        assert_eq!(sanitize_input(&once), once);
    }

    #[test]
    fn test_hyphenated_timestamp_is_corrupted() {
        // Documented lossiness: the denylist does not spare date separators.
        assert_eq!(
            sanitize_input("2024-01-01T00:00:00Z"),
            "20240101T00:00:00Z"
        );
    }

    #[test]
    fn test_request_sanitize_touches_all_string_fields() {
        let mut req = CreateEventRequest {
            event_id: Some("e-1".to_string()),
            notes: Some("it's fine".to_string()),
            event: Some("click;".to_string()),
            timestamp: Some("2024-01-01".to_string()),
        };
        req.sanitize();
        assert_eq!(req.event_id.as_deref(), Some("e1"));
        assert_eq!(req.notes.as_deref(), Some("its fine"));
        assert_eq!(req.event.as_deref(), Some("click"));
        assert_eq!(req.timestamp.as_deref(), Some("20240101"));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let mut req = UpdateEventRequest::default();
        req.sanitize();
        assert!(req.notes.is_none());
        assert!(req.event.is_none());
        assert!(req.timestamp.is_none());
    }
}
