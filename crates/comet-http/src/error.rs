//! Request failure taxonomy and HTTP status mapping.

use axum::http::StatusCode;
use comet_protocol::ParseError;
use thiserror::Error;

/// Everything that can terminate a request before the engine is
/// consulted.
///
/// Absence and malformedness are distinct variants so that an absent
/// payload never attempts a parse, but both map to the same 400 on the
/// wire.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Path matched neither the mount nor the script endpoint.
    #[error("no endpoint at this path")]
    PathUnmatched,
    /// The request supplied no `message` parameter or body field.
    #[error("no message supplied")]
    MessageAbsent,
    /// A payload was supplied but is not valid JSON.
    #[error(transparent)]
    MessageMalformed(#[from] ParseError),
}

impl AdapterError {
    /// HTTP status this failure maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::PathUnmatched => StatusCode::NOT_FOUND,
            Self::MessageAbsent | Self::MessageMalformed(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comet_protocol::Message;

    #[test]
    fn unmatched_path_is_404() {
        assert_eq!(AdapterError::PathUnmatched.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn absent_and_malformed_are_both_400() {
        assert_eq!(AdapterError::MessageAbsent.status(), StatusCode::BAD_REQUEST);

        let parse_err = Message::from_json("{nope").unwrap_err();
        assert_eq!(
            AdapterError::MessageMalformed(parse_err).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
