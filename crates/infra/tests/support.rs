#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use opsdesk_core::{Navigator, Notifier, ToastId};
use opsdesk_domain::{ApiConfig, ClientConfig};
use opsdesk_infra::OpsDeskClient;
use wiremock::MockServer;

/// One UI side effect, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Loading(u64, String),
    Dismiss(u64),
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    next_id: AtomicU64,
    events: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<Toast> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Toast::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Toast) {
        self.events.lock().unwrap().push(event);
    }
}

impl Notifier for RecordingNotifier {
    fn loading(&self, message: &str) -> ToastId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.push(Toast::Loading(id, message.to_string()));
        ToastId(id)
    }

    fn dismiss(&self, id: ToastId) {
        self.push(Toast::Dismiss(id.0));
    }

    fn success(&self, message: &str) {
        self.push(Toast::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Toast::Error(message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_string());
    }
}

/// Client wired to a mock server plus handles to inspect its UI effects.
pub struct TestClient {
    pub client: OpsDeskClient,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestClient {
    pub fn new(server: &MockServer) -> Self {
        let config = ClientConfig {
            api: ApiConfig { base_url: server.uri(), ..ApiConfig::default() },
            ..ClientConfig::default()
        };
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let client = OpsDeskClient::new(&config, notifier.clone(), navigator.clone())
            .expect("client should build against mock server");
        Self { client, notifier, navigator }
    }
}

/// Base URL nothing listens on.
pub fn unreachable_client() -> TestClient {
    let config = ClientConfig {
        api: ApiConfig { base_url: "http://127.0.0.1:9".into(), ..ApiConfig::default() },
        ..ClientConfig::default()
    };
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = OpsDeskClient::new(&config, notifier.clone(), navigator.clone())
        .expect("client should build");
    TestClient { client, notifier, navigator }
}
