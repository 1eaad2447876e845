//! Test helpers: a stub chat-completions server and an API test server
//! wired to in-memory dependencies

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode as AxumStatus},
    response::IntoResponse,
    routing::post,
    Router,
};
use chatter_api::{create_app, create_app_state};
use chatter_common::{
    try_init_tracing, AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment,
    OpenAiConfig, ServerConfig, WorkerConfig,
};
use chatter_core::entities::{SpamCheck, SubjectType};
use chatter_core::traits::SpamCheckRepository;
use chatter_service::{ChatCompletions, ServiceContext, ServiceContextBuilder, SpamCheckWorker};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{InMemoryForumContent, InMemorySpamCheckRepository, RecordingReporter};

/// API key the stub endpoint expects
pub const TEST_API_KEY: &str = "sk-test-key";

// ============================================================================
// Stub chat-completions endpoint
// ============================================================================

/// Request as the stub endpoint saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: AxumStatus,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn stub_chat_completions(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    (state.status, state.body.clone())
}

/// OpenAI-compatible `POST /v1/chat/completions` answering with a fixed body
pub struct StubOpenAi {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: JoinHandle<()>,
}

impl StubOpenAi {
    /// Answer every request with `200 OK` and `body`
    pub async fn json(body: &Value) -> Result<Self> {
        Self::start(StatusCode::OK.as_u16(), body.to_string()).await
    }

    /// Answer every request with the given status and raw body
    pub async fn start(status: u16, body: impl Into<String>) -> Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: AxumStatus::from_u16(status)?,
            body: body.into(),
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(stub_chat_completions))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            requests,
            _handle: handle,
        })
    }

    /// Base URL to configure the client with
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Client configuration pointing at this stub
    pub fn config(&self) -> OpenAiConfig {
        let mut config = OpenAiConfig::with_api_key(TEST_API_KEY);
        config.base_url = self.base_url();
        config
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

// ============================================================================
// Service wiring
// ============================================================================

/// In-memory dependencies of one test, kept for assertions
#[derive(Clone)]
pub struct TestDeps {
    pub checks: Arc<InMemorySpamCheckRepository>,
    pub content: Arc<InMemoryForumContent>,
    pub reporter: Arc<RecordingReporter>,
}

impl TestDeps {
    pub fn new() -> Self {
        Self {
            checks: Arc::new(InMemorySpamCheckRepository::new()),
            content: Arc::new(InMemoryForumContent::new()),
            reporter: Arc::new(RecordingReporter::new()),
        }
    }

    /// Service context over these dependencies and the given classifier
    pub fn context(&self, completions: Arc<dyn ChatCompletions>) -> ServiceContext {
        ServiceContextBuilder::new()
            .spam_check_repo(self.checks.clone())
            .content_repo(self.content.clone())
            .completions(completions)
            .reporter(self.reporter.clone())
            .build()
            .expect("all dependencies provided")
    }

    /// Poll until the subject has a terminal check
    pub async fn wait_for_terminal(
        &self,
        subject_type: SubjectType,
        subject_id: i64,
    ) -> Result<SpamCheck> {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            let checks = self.checks.find_by_subject(subject_type, subject_id).await?;
            if let Some(check) = checks.into_iter().find(SpamCheck::is_terminal) {
                return Ok(check);
            }
            if tokio::time::Instant::now() > deadline {
                anyhow::bail!("no terminal check for {subject_type}:{subject_id}");
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}

impl Default for TestDeps {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration that never touches the environment
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "chatter-spam-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
        },
        openai: OpenAiConfig::with_api_key(TEST_API_KEY),
        worker: WorkerConfig {
            concurrency: 2,
            queue_capacity: 16,
        },
        cors: CorsConfig::default(),
    }
}

// ============================================================================
// API test server
// ============================================================================

/// API server plus worker pool running on in-memory dependencies
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub deps: TestDeps,
    _server: JoinHandle<()>,
    _worker: JoinHandle<()>,
}

impl TestServer {
    /// Start a server whose classifier is `completions`
    pub async fn start(completions: Arc<dyn ChatCompletions>) -> Result<Self> {
        Self::start_with_config(completions, test_config()).await
    }

    pub async fn start_with_config(
        completions: Arc<dyn ChatCompletions>,
        config: AppConfig,
    ) -> Result<Self> {
        // Honours RUST_LOG; later servers in the same binary reuse the subscriber
        let _ = try_init_tracing();

        let deps = TestDeps::new();
        let concurrency = config.worker.concurrency;
        let ctx = Arc::new(deps.context(completions));

        let (state, receiver) = create_app_state(ctx.clone(), config);
        let worker = tokio::spawn(SpamCheckWorker::new(ctx, concurrency).run(receiver));
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            deps,
            _server: server,
            _worker: worker,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
