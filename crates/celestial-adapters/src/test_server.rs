//! In-process HTTP server standing in for the remote services in tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::Json;
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::any;
use serde_json::Value;
use tokio::net::TcpListener;

/// What the server saw of the last request.
pub(crate) struct Captured {
    pub headers: HeaderMap,
    pub body: Value,
}

pub(crate) struct TestServer {
    addr: SocketAddr,
    captured: Arc<Mutex<Option<Captured>>>,
}

impl TestServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Takes the last captured request.
    pub fn captured(&self) -> Option<Captured> {
        self.captured.lock().unwrap().take()
    }
}

/// Serves `reply` with `status` on `path` for any method.
pub(crate) async fn spawn(path: &str, status: StatusCode, reply: Value) -> TestServer {
    let captured = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&captured);

    let handler = move |headers: HeaderMap, body: Bytes| {
        let sink = Arc::clone(&sink);
        let reply = reply.clone();
        async move {
            let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
            *sink.lock().unwrap() = Some(Captured { headers, body });
            (status, Json(reply))
        }
    };

    let app = Router::new().route(path, any(handler));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer { addr, captured }
}
