//! Message extraction from the HTTP request.
//!
//! Three client conventions feed the same protocol endpoint:
//!
//! - GET with the payload in the `message` query parameter (JSONP
//!   clients and cross-domain polling)
//! - POST with `Content-Type: application/json` and the payload as the
//!   whole body
//! - POST with any other content type (including none) and a
//!   form-encoded body carrying a `message` field
//!
//! Only an explicit JSON content type licenses reading the whole body
//! as the payload; every other convention falls back to the named
//! field.

use axum::http::{HeaderMap, header};

/// Field name carrying the payload in query strings and form bodies.
pub const MESSAGE_FIELD: &str = "message";

/// Query parameter naming the JSONP callback on GET exchanges.
pub const JSONP_FIELD: &str = "jsonp";

/// How the request carries its message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// `application/json`: the body is the payload, verbatim.
    Json,
    /// Everything else: form-encoded key/value pairs.
    Form,
}

/// Classify the request content type.
///
/// Comparison is case-insensitive and ignores parameters such as
/// `; charset=utf-8`. An absent or unreadable header classifies as
/// [`BodyFormat::Form`].
pub fn body_format(headers: &HeaderMap) -> BodyFormat {
    let essence = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim);

    match essence {
        Some(t) if t.eq_ignore_ascii_case("application/json") => BodyFormat::Json,
        _ => BodyFormat::Form,
    }
}

/// Pull a named field out of a query string or form-encoded body.
pub fn encoded_field(encoded: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(encoded.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Extract the raw payload from a GET query string.
pub fn message_from_query(query: Option<&str>) -> Option<String> {
    query.and_then(|q| encoded_field(q, MESSAGE_FIELD))
}

/// Extract the raw payload from a request body.
pub fn message_from_body(format: BodyFormat, body: &str) -> Option<String> {
    match format {
        BodyFormat::Json => Some(body.to_owned()),
        BodyFormat::Form => encoded_field(body, MESSAGE_FIELD),
    }
}
