//! Response formatting — JSON, JSONP, the client script, and errors.
//!
//! Every response built here carries `Content-Type` and a
//! `Content-Length` equal to the exact byte length of the body.

use axum::body::Body;
use axum::http::{HeaderValue, Response, StatusCode, header};
use bytes::Bytes;
use comet_protocol::encode_replies;
use serde_json::Value;

use crate::error::AdapterError;
use crate::extract::BodyFormat;

const TYPE_JSON: &str = "application/json";
const TYPE_SCRIPT: &str = "text/javascript";
const TYPE_TEXT: &str = "text/plain";

/// GET responses back a polling transport and must never be cached by
/// the browser or intermediaries.
const NO_CACHE: &str = "no-cache, no-store";

/// Successful POST exchange: the reply sequence as compact JSON.
pub fn json(replies: &[Value]) -> Response<Body> {
    respond(StatusCode::OK, TYPE_JSON, encode_replies(replies).into())
}

/// Successful GET exchange: the reply sequence wrapped in a JSONP
/// callback invocation.
pub fn jsonp(callback: &str, replies: &[Value]) -> Response<Body> {
    let body = format!("{callback}({});", encode_replies(replies));
    let mut response = respond(StatusCode::OK, TYPE_SCRIPT, body.into());
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
    response
}

/// The bundled client script, served at `<mount>.js` for any method.
pub fn script(asset: Bytes) -> Response<Body> {
    respond(StatusCode::OK, TYPE_SCRIPT, asset)
}

/// Terminal failure, as plain text with a minimal body.
pub fn error(err: &AdapterError) -> Response<Body> {
    respond(err.status(), TYPE_TEXT, err.to_string().into())
}

/// Echo the request origin for simple cross-site requests.
///
/// JSON-typed requests come from same-origin XHR and are never
/// decorated; everything else (form posts, JSONP GETs) is, whenever the
/// request named an origin.
pub fn apply_cors(
    response: &mut Response<Body>,
    origin: Option<&HeaderValue>,
    format: BodyFormat,
) {
    if format == BodyFormat::Form {
        if let Some(origin) = origin {
            response
                .headers_mut()
                .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        }
    }
}

fn respond(status: StatusCode, content_type: &'static str, body: Bytes) -> Response<Body> {
    let length = HeaderValue::from(body.len());
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response.headers_mut().insert(header::CONTENT_LENGTH, length);
    response
}
