//! The HTTP adapter and its serve wrapper.
//!
//! One [`Adapter`] owns an immutable [`AdapterConfig`] and a shared
//! engine handle. Each request flows through the same pipeline:
//!
//! 1. route the path (protocol endpoint, script endpoint, or 404)
//! 2. extract and parse the message payload
//! 3. bridge to the engine (`flush_connection` first on GET, then
//!    `process` with `local = false`)
//! 4. format the reply sequence (JSON for POST, JSONP for GET)
//!
//! Failures short-circuit to plain-text error responses; the engine is
//! never consulted for unmatched paths or invalid payloads.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{Method, header};
use axum::response::Response;
use comet_protocol::Message;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::AdapterConfig;
use crate::error::AdapterError;
use crate::extract::{self, JSONP_FIELD};
use crate::response;
use crate::route::{self, Endpoint};

/// Trait implemented by the protocol engine.
///
/// The adapter invokes this for every validated message. The engine
/// answers each `process` call exactly once with a (possibly empty)
/// reply sequence; timeouts and retries for a stalled engine are the
/// engine's concern, not the transport's.
pub trait Engine: Send + Sync + 'static {
    /// Process a message payload from a client and return the replies
    /// to deliver on this HTTP response.
    ///
    /// `local` is `false` for every call made by this adapter; it
    /// exists so in-process callers can be told apart from the wire.
    fn process(
        &self,
        message: Message,
        local: bool,
    ) -> impl Future<Output = Vec<Value>> + Send;

    /// Release any held long-poll connection for the client named by
    /// this message.
    ///
    /// Called before `process` on GET exchanges: a GET response is
    /// one-shot and cannot stay open for later delivery.
    fn flush_connection(&self, message: &Message) -> impl Future<Output = ()> + Send;
}

/// One configured adapter instance bound to an engine.
pub struct Adapter<E: Engine> {
    config: AdapterConfig,
    engine: Arc<E>,
}

impl<E: Engine> Adapter<E> {
    pub fn new(config: AdapterConfig, engine: E) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
        }
    }

    /// Build an axum router that hands every request to this adapter.
    ///
    /// The adapter does its own exact-path matching, so the router uses
    /// a single fallback route rather than per-path routes.
    pub fn into_router(self) -> Router {
        Router::new()
            .fallback(dispatch::<E>)
            .with_state(Arc::new(self))
    }

    /// Run one protocol exchange: extract, parse, bridge, format.
    async fn exchange(&self, req: Request) -> Result<Response, AdapterError> {
        let method = req.method().clone();
        let format = extract::body_format(req.headers());
        let query = req.uri().query().map(str::to_owned);

        let raw = if method == Method::GET {
            extract::message_from_query(query.as_deref())
        } else {
            let body = read_body(req).await?;
            extract::message_from_body(format, &body)
        };

        let message = Message::from_json(&raw.ok_or(AdapterError::MessageAbsent)?)?;

        debug!(
            channel = message.channel().unwrap_or("<batch>"),
            envelopes = message.len(),
            "{method} exchange"
        );

        if method == Method::GET {
            // A GET response cannot stay open for later delivery, so any
            // long-held connection for this client is released first.
            self.engine.flush_connection(&message).await;
            let replies = self.engine.process(message, false).await;
            let callback = query
                .as_deref()
                .and_then(|q| extract::encoded_field(q, JSONP_FIELD))
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| self.config.jsonp_callback.clone());
            Ok(response::jsonp(&callback, &replies))
        } else {
            let replies = self.engine.process(message, false).await;
            Ok(response::json(&replies))
        }
    }
}

/// Route an incoming request and produce its response.
async fn dispatch<E: Engine>(
    State(adapter): State<Arc<Adapter<E>>>,
    req: Request,
) -> Response {
    let path = req.uri().path().to_owned();
    debug!("{} {path}", req.method());

    // Captured before the request body is consumed; both feed the CORS
    // decision applied to every outcome below.
    let format = extract::body_format(req.headers());
    let origin = req.headers().get(header::ORIGIN).cloned();

    let mut response = match route::endpoint(&path, &adapter.config.mount) {
        Endpoint::Protocol => adapter
            .exchange(req)
            .await
            .unwrap_or_else(|err| response::error(&err)),
        Endpoint::Script => response::script(adapter.config.client_script.clone()),
        Endpoint::Unmatched => response::error(&AdapterError::PathUnmatched),
    };

    response::apply_cors(&mut response, origin.as_ref(), format);
    response
}

/// Collect the request body as text.
///
/// A body the HTTP layer fails to deliver yields no payload at all,
/// which surfaces as `MessageAbsent`.
async fn read_body(req: Request) -> Result<String, AdapterError> {
    let bytes = axum::body::to_bytes(req.into_body(), usize::MAX)
        .await
        .map_err(|_| AdapterError::MessageAbsent)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Running HTTP server hosting one adapter.
pub struct AdapterServer {
    /// Shutdown signal
    shutdown_tx: Option<mpsc::Sender<()>>,
    /// Server task handle
    handle: Option<tokio::task::JoinHandle<()>>,
    /// Actual bound port
    port: u16,
}

impl AdapterServer {
    /// Bind and serve an adapter for the given engine.
    pub async fn start<E: Engine>(
        config: AdapterConfig,
        engine: E,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", config.hostname, config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        info!(
            "comet adapter listening on http://{}:{}{}",
            config.hostname, port, config.mount
        );

        let app = Adapter::new(config, engine).into_router();
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.recv().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
            port,
        })
    }

    /// Get the actual bound port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Gracefully stop the server.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(()).await;
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        info!("comet adapter server stopped");
    }
}
