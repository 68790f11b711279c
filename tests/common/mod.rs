#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use http_body_util::BodyExt;
use meditrace::{
    Config,
    config::{Environment, ObservabilityConfig, ServerConfig},
};
use meditrace_contact::ContactConfig;
use serde_json::Value;
use tower::ServiceExt;

pub const API_KEY: &str = "re_test_key";

/// Stand-in for the Resend API that records each request body.
#[derive(Clone)]
pub struct FakeProvider {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct ProviderState {
    requests: Arc<Mutex<Vec<Value>>>,
    status: StatusCode,
    body: String,
}

impl FakeProvider {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(vec![]));
        let state = ProviderState {
            requests: requests.clone(),
            status,
            body: body.into(),
        };

        let app = Router::new()
            .route("/emails", post(emails))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            endpoint: format!("http://{addr}/emails"),
            requests,
        }
    }

    pub async fn accepting() -> Self {
        Self::start(StatusCode::OK, r#"{"id":"4ef9a417-02e9-4d39-ad75-9611e0fcc33c"}"#).await
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn emails(State(state): State<ProviderState>, body: String) -> impl IntoResponse {
    state
        .requests
        .lock()
        .unwrap()
        .push(serde_json::from_str(&body).unwrap_or(Value::Null));

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

pub fn test_config(
    endpoint: impl Into<String>,
    api_key: Option<&str>,
    environment: Environment,
) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
        },
        environment,
        contact: ContactConfig {
            api_key: api_key.map(str::to_owned),
            endpoint: endpoint.into(),
            verbosity: environment.error_verbosity(),
            ..Default::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub provider: FakeProvider,
}

impl TestApp {
    pub async fn new(provider: FakeProvider, api_key: Option<&str>, environment: Environment) -> Self {
        let config = test_config(provider.endpoint.to_owned(), api_key, environment);
        let state = meditrace::server::state(config).unwrap();

        Self {
            router: meditrace::server::app(state),
            provider,
        }
    }

    pub async fn production(provider: FakeProvider) -> Self {
        Self::new(provider, Some(API_KEY), Environment::Production).await
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)], htmx: bool) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

        if htmx {
            request = request.header("HX-Request", "true");
        }

        let body = serde_urlencoded::to_string(fields).unwrap();

        self.router
            .clone()
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, json: Value) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
