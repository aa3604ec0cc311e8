//! Comet HTTP Transport
//!
//! HTTP long-polling binding for the Comet publish/subscribe protocol.
//! The adapter reconciles the three wire conventions clients use into
//! one canonical engine call, and formats the engine's replies back
//! into HTTP:
//!
//! - `POST <mount>` — protocol exchange; the payload is the raw body
//!   (`Content-Type: application/json`) or the `message` field of a
//!   form-encoded body (any other content type)
//! - `GET <mount>` — JSONP protocol exchange; the payload travels in
//!   the `message` query parameter, the callback name in `jsonp`
//! - `GET <mount>.js` — the bundled client script
//!
//! Any other path is a 404. Malformed payloads never reach the engine.
//!
//! The transport is decoupled from the protocol engine via the
//! [`Engine`] trait: the engine owns subscriptions, client state, and
//! long-poll delivery; the adapter owns the wire.

pub mod config;
pub mod error;
pub mod extract;
pub mod response;
pub mod route;
pub mod server;

pub use config::AdapterConfig;
pub use error::AdapterError;
pub use server::{Adapter, AdapterServer, Engine};

/// Callback name used for JSONP responses when the request does not
/// name one in the `jsonp` query parameter.
pub const DEFAULT_JSONP_CALLBACK: &str = "jsonpcallback";
