//! Integration test harness for the social rules relay.
//!
//! Each [`TestContext`] starts a mock incoming webhook and builds the full
//! relay router pointed at it. Requests are driven through the router with
//! `tower::ServiceExt::oneshot`, so no listening socket is needed unless a
//! test asks for one with [`TestContext::serve`].
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p socialrules-integration-tests
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use httpmock::MockServer;
use secrecy::SecretString;
use socialrules_core::RuleCatalog;
use socialrules_relay::routes;
use socialrules_relay::slack::WebhookClient;
use socialrules_relay::state::AppState;
use tower::ServiceExt as _;

/// Path the mock webhook listens on.
pub const WEBHOOK_PATH: &str = "/services/T000/B000/XXXXXXXX";

/// Channel the slash command is invoked from.
pub const INVOKING_CHANNEL: &str = "C024BE91L";

/// A relay router wired to a mock webhook.
pub struct TestContext {
    /// The mock incoming webhook.
    pub webhook: MockServer,
    /// The relay application under test.
    pub app: Router,
}

/// A reply to an inbound request.
#[derive(Debug)]
pub struct Reply {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: axum::http::HeaderMap,
    /// Response body as text.
    pub body: String,
}

impl TestContext {
    /// Start a mock webhook and build the relay with the shipped catalog.
    ///
    /// # Panics
    ///
    /// Panics if the shipped catalog is invalid.
    pub async fn new() -> Self {
        let catalog = RuleCatalog::recurse_social_rules().expect("shipped catalog is valid");
        Self::with_catalog(catalog).await
    }

    /// Start a mock webhook and build the relay with `catalog`.
    pub async fn with_catalog(catalog: RuleCatalog) -> Self {
        let webhook = MockServer::start_async().await;
        let client = WebhookClient::new(SecretString::from(webhook.url(WEBHOOK_PATH)));
        let app = routes::app(AppState::from_parts(Arc::new(catalog), client));
        Self { webhook, app }
    }

    /// Build the relay pointed at a port nothing listens on.
    ///
    /// # Panics
    ///
    /// Panics if the shipped catalog is invalid.
    pub async fn unreachable() -> Self {
        let webhook = MockServer::start_async().await;
        let catalog = RuleCatalog::recurse_social_rules().expect("shipped catalog is valid");
        let client = WebhookClient::new(SecretString::from("http://127.0.0.1:1/hook"));
        let app = routes::app(AppState::from_parts(Arc::new(catalog), client));
        Self { webhook, app }
    }

    /// Build a form-encoded slash command request with the given `text`,
    /// invoked from [`INVOKING_CHANNEL`].
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    #[must_use]
    pub fn slash_request(text: &str) -> Request<Body> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("token", "gIkuvaNzQIHg97ATvDxqgjtO")
            .append_pair("team_id", "T0001")
            .append_pair("channel_id", INVOKING_CHANNEL)
            .append_pair("user_name", "steve")
            .append_pair("command", "/socialrules")
            .append_pair("text", text)
            .finish();

        Request::builder()
            .method("POST")
            .uri("/slack_hook")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("valid request")
    }

    /// Send a slash command with the given `text` from [`INVOKING_CHANNEL`].
    pub async fn slash(&self, text: &str) -> Reply {
        self.send(Self::slash_request(text)).await
    }

    /// Drive one request through the router.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body is not UTF-8.
    pub async fn send(&self, request: Request<Body>) -> Reply {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = String::from_utf8(bytes.to_vec()).expect("UTF-8 body");

        Reply {
            status,
            headers,
            body,
        }
    }

    /// Serve the relay on an ephemeral loopback port.
    ///
    /// # Panics
    ///
    /// Panics if the port cannot be bound.
    pub async fn serve(&self) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let app = self.app.clone();

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("relay server error");
        });

        addr
    }
}
