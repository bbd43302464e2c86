// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for serving manifests over a local HTTP listener.

use bytes::Bytes;
use futures::StreamExt;
use http_body_util::{combinators::UnsyncBoxBody, BodyExt, Full, StreamBody};
use hyper::body::{Frame, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
type ResponseBody = UnsyncBoxBody<Bytes, BoxError>;

#[derive(Clone)]
enum Reply {
    /// Send the whole body
    Complete(String),
    /// Send the body, then drop the connection before the response is finished
    Truncated(String),
}

/// A mock HTTP server that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockServer {
    responses: Arc<Mutex<HashMap<(String, String), (u16, Reply)>>>,
}

impl MockServer {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.insert(path, status, Reply::Complete(body.to_string()))
    }

    /// Add a GET response that sends `partial_body` and then aborts the connection
    pub fn on_get_truncated(self, path: &str, status: u16, partial_body: &str) -> Self {
        self.insert(path, status, Reply::Truncated(partial_body.to_string()))
    }

    fn insert(self, path: &str, status: u16, reply: Reply) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, reply));
        self
    }

    /// Start serving on an ephemeral local port and return the base URL
    pub async fn start(self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let server = self.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let response = server.respond(req.method().as_str(), req.uri().path());
                        async move { Ok::<_, Infallible>(response) }
                    });
                    // Truncated replies end the connection with an error; that is expected
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        format!("http://{}", addr)
    }

    fn respond(&self, method: &str, path: &str) -> Response<ResponseBody> {
        let (status, reply) = self
            .responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
            .unwrap_or_else(|| (404, Reply::Complete("404 page not found\n".to_string())));

        let body = match reply {
            Reply::Complete(body) => Full::new(Bytes::from(body))
                .map_err(|never: Infallible| -> BoxError { match never {} })
                .boxed_unsync(),
            Reply::Truncated(body) => {
                // Pause before failing so the head and partial body are flushed first
                let frames = futures::stream::once(async move {
                    Ok::<_, BoxError>(Frame::data(Bytes::from(body)))
                })
                .chain(futures::stream::once(async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Err::<Frame<Bytes>, BoxError>("connection dropped mid-body".into())
                }));
                StreamBody::new(frames).boxed_unsync()
            }
        };

        Response::builder()
            .status(status)
            .header("content-type", "application/yaml")
            .body(body)
            .unwrap()
    }
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client that never routes local test traffic through an environment proxy
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// A URL on a local port nothing listens on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/headlamp.yaml", addr)
}
