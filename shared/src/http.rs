//! HTTP helpers for the Lambda transport.

use lambda_http::{Body, Request, Response};

use crate::router::{EnvelopeRequest, EnvelopeResponse};

/// Reduce a Lambda request to the generic envelope.
///
/// API Gateway REST APIs include the stage in the path; a leading `/api`
/// prefix is stripped so routing sees the logical path.
pub fn to_envelope(event: &Request) -> EnvelopeRequest {
    let raw_path = event.uri().path();
    let path = raw_path.strip_prefix("/api").unwrap_or(raw_path);
    EnvelopeRequest::new(
        event.method().as_str(),
        path,
        event.body().as_ref().to_vec(),
    )
}

/// Build a Lambda response from the envelope reply. 204 replies carry an
/// empty body and no content type.
pub fn into_response(reply: EnvelopeResponse) -> Result<Response<Body>, lambda_http::Error> {
    let builder = Response::builder().status(reply.status);
    let response = match reply.body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body)?)),
        None => builder.body(Body::Empty),
    };
    Ok(response.expect("Failed to build response"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_reply_has_content_type() {
        let reply = EnvelopeResponse {
            status: 200,
            body: Some(json!({"ok": true})),
        };
        let response = into_response(reply).unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_no_content_reply_is_empty() {
        let reply = EnvelopeResponse {
            status: 204,
            body: None,
        };
        let response = into_response(reply).unwrap();
        assert_eq!(response.status(), 204);
        assert!(matches!(response.body(), Body::Empty));
    }
}
