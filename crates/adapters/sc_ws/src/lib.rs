//! # sc-bridge-adapter-sc-ws
//!
//! sc-server adapter — a JSON-over-WebSocket client for the knowledge-base
//! server.
//!
//! ## Responsibilities
//! - Open one long-lived WebSocket session to the sc-server
//! - Correlate request/response frames by id so callers can share the session
//! - Fan out server-pushed event frames to subscribers
//! - Implement the `ScConnection` port from `sc-bridge-app`
//!
//! ## Concurrency
//! A writer task owns the sink and a reader task owns the stream. Callers
//! enqueue frames through a channel and wait on a oneshot that the reader
//! completes when the matching response arrives. No retry and no timeout:
//! a request the server never answers waits until the session closes.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `sc-bridge-app` and `sc-bridge-domain`.

pub mod config;
pub mod error;
mod frame;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{Mutex as AsyncMutex, broadcast, mpsc, oneshot};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use sc_bridge_app::ports::{ScConnection, ScRequest, ScResponse};
use sc_bridge_domain::error::BridgeError;

pub use config::ScClientConfig;
pub use error::ScError;
pub use frame::ScEvent;

use frame::{RequestFrame, ResponseFrame};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Waiters keyed by request id. `None` once the session has ended.
type Pending = Arc<Mutex<Option<HashMap<u64, oneshot::Sender<ResponseFrame>>>>>;

const EVENT_CAPACITY: usize = 64;

struct Session {
    outbound: mpsc::UnboundedSender<Message>,
    pending: Pending,
}

/// Client for the sc-server JSON WebSocket API.
///
/// Construct once per process, call [`connect`](Self::connect) once, then
/// share it (usually behind an `Arc`).
pub struct ScClient {
    config: ScClientConfig,
    session: OnceLock<Session>,
    /// Held across the handshake so concurrent callers open one socket.
    connecting: AsyncMutex<()>,
    next_id: AtomicU64,
    events: broadcast::Sender<ScEvent>,
}

impl ScClient {
    /// Create a disconnected client.
    #[must_use]
    pub fn new(config: ScClientConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            config,
            session: OnceLock::new(),
            connecting: AsyncMutex::new(()),
            next_id: AtomicU64::new(1),
            events,
        }
    }

    /// Whether [`connect`](Self::connect) has completed.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.session.get().is_some()
    }

    /// Open the WebSocket session and start the reader/writer tasks.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ScError::AlreadyConnected`] once a session exists, including
    /// for a call that raced a successful one, or [`ScError::Transport`] if
    /// the handshake fails.
    pub async fn connect(&self) -> Result<(), ScError> {
        let _guard = self.connecting.lock().await;
        if self.is_connected() {
            return Err(ScError::AlreadyConnected);
        }

        let (stream, _) = tokio_tungstenite::connect_async(self.config.url.as_str())
            .await
            .map_err(ScError::Transport)?;
        let (sink, stream) = stream.split();

        let (outbound, outbound_rx) = mpsc::unbounded_channel();
        let pending: Pending = Arc::new(Mutex::new(Some(HashMap::new())));

        tokio::spawn(write_loop(sink, outbound_rx));
        tokio::spawn(read_loop(stream, Arc::clone(&pending), self.events.clone()));

        self.session
            .set(Session { outbound, pending })
            .map_err(|_| ScError::AlreadyConnected)?;

        tracing::info!(url = %self.config.url, "connected to sc-server");
        Ok(())
    }

    /// Send a request and wait for the response carrying the same id.
    ///
    /// # Errors
    ///
    /// - [`ScError::NotConnected`] before [`connect`](Self::connect)
    /// - [`ScError::ConnectionClosed`] if the session ends first
    /// - [`ScError::Rejected`] if the server answers with `status: false`
    pub async fn execute(&self, request: ScRequest) -> Result<ScResponse, ScError> {
        let session = self.session.get().ok_or(ScError::NotConnected)?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let text = serde_json::to_string(&RequestFrame {
            id,
            kind: &request.kind,
            payload: &request.payload,
        })
        .map_err(ScError::Codec)?;

        let (tx, rx) = oneshot::channel();
        lock(&session.pending)
            .as_mut()
            .ok_or(ScError::ConnectionClosed)?
            .insert(id, tx);

        if session.outbound.send(Message::text(text)).is_err() {
            if let Some(waiters) = lock(&session.pending).as_mut() {
                waiters.remove(&id);
            }
            return Err(ScError::ConnectionClosed);
        }

        tracing::debug!(id, kind = %request.kind, "sc request sent");
        let frame = rx.await.map_err(|_| ScError::ConnectionClosed)?;
        if frame.status {
            Ok(ScResponse {
                payload: frame.payload,
            })
        } else {
            Err(ScError::Rejected(frame.payload))
        }
    }

    /// Receive event frames pushed by the server from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ScEvent> {
        self.events.subscribe()
    }
}

impl ScConnection for ScClient {
    async fn execute(&self, request: ScRequest) -> Result<ScResponse, BridgeError> {
        ScClient::execute(self, request)
            .await
            .map_err(BridgeError::from)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn write_loop(
    mut sink: SplitSink<WsStream, Message>,
    mut outbound: mpsc::UnboundedReceiver<Message>,
) {
    while let Some(message) = outbound.recv().await {
        if let Err(err) = sink.send(message).await {
            tracing::warn!(error = %err, "failed to write to sc-server");
            return;
        }
    }
    let _ = sink.close().await;
}

async fn read_loop(
    mut stream: SplitStream<WsStream>,
    pending: Pending,
    events: broadcast::Sender<ScEvent>,
) {
    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => dispatch(text.as_str(), &pending, &events),
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "sc-server read failed");
                break;
            }
        }
    }

    tracing::warn!("sc-server connection closed");
    // Dropping the senders wakes every waiter with `ConnectionClosed`.
    lock(&pending).take();
}

fn dispatch(text: &str, pending: &Pending, events: &broadcast::Sender<ScEvent>) {
    let frame: ResponseFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed sc-server frame");
            return;
        }
    };

    if frame.event {
        let _ = events.send(ScEvent {
            id: frame.id,
            payload: frame.payload,
        });
        return;
    }

    let waiter = lock(pending)
        .as_mut()
        .and_then(|waiters| waiters.remove(&frame.id));
    match waiter {
        Some(tx) => {
            let _ = tx.send(frame);
        }
        None => tracing::debug!(id = frame.id, "response for unknown request"),
    }
}
