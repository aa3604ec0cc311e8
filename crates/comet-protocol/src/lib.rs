//! Comet protocol payload model.
//!
//! The transport layers exchange JSON payloads with clients: a single
//! message envelope or an ordered batch of envelopes. This crate owns
//! the payload type and its parsing rules. Payload contents stay opaque
//! to the transports — only syntactic well-formedness is checked here,
//! never message schema.

pub mod message;

pub use message::{Message, ParseError, encode_replies};
