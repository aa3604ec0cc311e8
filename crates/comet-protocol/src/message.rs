//! Message payloads — a single envelope or an ordered batch.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A payload failed strict JSON parsing.
#[derive(Debug, Error)]
#[error("malformed message payload: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// A parsed protocol payload — one envelope object or a batch of them.
///
/// Holding a `Message` means the raw payload parsed as valid JSON.
/// Nothing beyond syntax is validated; envelope fields belong to the
/// engine, not the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Value);

impl Message {
    /// Parse a raw payload string as strict JSON.
    ///
    /// Any syntax violation — unterminated brace, trailing token,
    /// empty input — is a [`ParseError`].
    pub fn from_json(raw: &str) -> Result<Self, ParseError> {
        Ok(Self(serde_json::from_str(raw)?))
    }

    /// The `channel` field of a single envelope, for log lines.
    ///
    /// Batches carry one channel per envelope, so this returns `None`
    /// for them (and for any payload without a string `channel`).
    pub fn channel(&self) -> Option<&str> {
        self.0.get("channel").and_then(Value::as_str)
    }

    /// Number of envelopes carried (1 for a single-object payload).
    pub fn len(&self) -> usize {
        match &self.0 {
            Value::Array(items) => items.len(),
            _ => 1,
        }
    }

    /// True for an empty batch payload (`[]`).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume into the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Serialize an engine reply sequence as compact JSON.
pub fn encode_replies(replies: &[Value]) -> String {
    serde_json::to_string(replies).unwrap()
}
