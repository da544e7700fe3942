//! JSON API client
//!
//! Every call goes through [`ApiClient::handle_response`], which unwraps the
//! response envelope, maps failures to [`ApiError`] and performs the global
//! 401 handling: clear the session and send the navigator to the login page.

use std::sync::Arc;

use opsdesk_core::{extract_message, normalize_envelope, Navigator, Notifier};
use opsdesk_domain::{ApiConfig, Envelope, OpsDeskError};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::errors::ApiError;
use crate::errors::InfraError;
use crate::http::HttpClient;
use crate::observability::{TracingNavigator, TracingNotifier};
use crate::session::SessionStore;

const JSON: &str = "application/json";

/// API client shared by every resource module.
///
/// Cloning is cheap; clones share the HTTP connection pool, cookie jar,
/// notifier, navigator and session.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    login_path: String,
    pub(super) notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    session: SessionStore,
}

impl ApiClient {
    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Execute a GET request and decode the envelope's `data`.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let envelope = self.execute(Method::GET, path, None).await?;
        info!(path = %path, "GET request successful");
        decode(envelope.data)
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let envelope = self.execute(Method::POST, path, Some(encode(body)?)).await?;
        info!(path = %path, "POST request successful");
        decode(envelope.data)
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let envelope = self.execute(Method::PUT, path, Some(encode(body)?)).await?;
        info!(path = %path, "PUT request successful");
        decode(envelope.data)
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let envelope = self.execute(Method::PATCH, path, Some(encode(body)?)).await?;
        info!(path = %path, "PATCH request successful");
        decode(envelope.data)
    }

    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let envelope = self.execute(Method::DELETE, path, None).await?;
        info!(path = %path, "DELETE request successful");
        decode(envelope.data)
    }

    /// POST a multipart form. Sent exactly once; streaming bodies cannot be
    /// replayed.
    #[instrument(skip(self, form), fields(path = %path))]
    pub async fn upload<R: DeserializeOwned>(&self, path: &str, form: Form) -> Result<R, ApiError> {
        let request = self.http.request(Method::POST, self.url(path)).multipart(form);
        let response = self.http.send_once(request).await?;
        let envelope = self.handle_response(response).await?;
        info!(path = %path, "upload successful");
        decode(envelope.data)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Envelope, ApiError> {
        let url = self.url(path);
        debug!(%method, url = %url, "API request");

        let mut request =
            self.http.request(method, &url).header(ACCEPT, JSON).header(CONTENT_TYPE, JSON);
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = self.http.send(request).await?;
        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> Result<Envelope, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::from(OpsDeskError::from(InfraError::from(err))))?;

        if !status.is_success() {
            let message = error_message(&text);
            let err = ApiError::from_status(status, message);
            if err.is_unauthorized() {
                self.handle_unauthorized();
            }
            return Err(err);
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))?
        };

        let envelope = normalize_envelope(body);
        if !envelope.success {
            return Err(ApiError::Rejected { message: envelope.message });
        }
        Ok(envelope)
    }

    fn handle_unauthorized(&self) {
        let had_session = self.session.clear();
        warn!(had_session, login_path = %self.login_path, "API rejected credentials; redirecting to login");
        self.navigator.redirect(&self.login_path);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::Config(format!("Failed to serialize body: {err}")))
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Server message of an error body: JSON `message`, or short plain text.
fn error_message(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(body) => extract_message(&body),
        Err(_) if !trimmed.starts_with('<') => Some(trimmed.to_string()),
        Err(_) => None,
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiConfig>,
    http: Option<HttpClient>,
    notifier: Option<Arc<dyn Notifier>>,
    navigator: Option<Arc<dyn Navigator>>,
    session: Option<SessionStore>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a preconfigured HTTP client instead of one built from the config
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the API client
    ///
    /// Notifier and navigator default to the tracing-backed implementations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is not absolute or the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        url::Url::parse(&config.base_url).map_err(|err| {
            ApiError::Config(format!("Invalid API base URL '{}': {err}", config.base_url))
        })?;

        let http = match self.http {
            Some(http) => http,
            None => HttpClient::from_config(&config)
                .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?,
        };

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            login_path: config.login_path,
            notifier: self.notifier.unwrap_or_else(|| Arc::new(TracingNotifier)),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(TracingNavigator)),
            session: self.session.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use opsdesk_core::ToastId;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Default)]
    struct MockNavigator {
        redirects: Mutex<Vec<String>>,
    }

    impl Navigator for MockNavigator {
        fn redirect(&self, path: &str) {
            self.redirects.lock().unwrap().push(path.to_string());
        }
    }

    struct SilentNotifier;

    impl Notifier for SilentNotifier {
        fn loading(&self, _message: &str) -> ToastId {
            ToastId(0)
        }
        fn dismiss(&self, _id: ToastId) {}
        fn success(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
    }

    fn client(server: &MockServer, navigator: Arc<MockNavigator>) -> ApiClient {
        let config = ApiConfig { base_url: server.uri(), ..Default::default() };
        ApiClient::builder()
            .config(config)
            .notifier(Arc::new(SilentNotifier))
            .navigator(navigator)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn get_unwraps_top_level_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": true, "data": { "message": "hi" } })),
            )
            .mount(&server)
            .await;

        let client = client(&server, Arc::default());
        let result: TestResponse = client.get("/test").await.unwrap();
        assert_eq!(result.message, "hi");
    }

    #[tokio::test]
    async fn get_accepts_bare_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bare"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "raw" })))
            .mount(&server)
            .await;

        let client = client(&server, Arc::default());
        let result: TestResponse = client.get("/bare").await.unwrap();
        assert_eq!(result.message, "raw");
    }

    #[tokio::test]
    async fn no_content_decodes_as_unit() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/things/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client(&server, Arc::default());
        let result: Result<(), ApiError> = client.delete("/things/1").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create"))
            .and(body_json(json!({ "data": "test" })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "success": true, "data": { "message": "created" } })),
            )
            .mount(&server)
            .await;

        let client = client(&server, Arc::default());
        let result: TestResponse = client.post("/create", &json!({ "data": "test" })).await.unwrap();
        assert_eq!(result.message, "created");
    }

    #[tokio::test]
    async fn envelope_with_success_false_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/things/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": false, "message": "Duplicate name" })),
            )
            .mount(&server)
            .await;

        let client = client(&server, Arc::default());
        let err = client.put::<_, Value>("/things/1", &json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
        assert_eq!(err.user_message("fallback"), "Duplicate name");
    }

    #[tokio::test]
    async fn unauthorized_redirects_to_login_and_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/protected"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Expired" })))
            .mount(&server)
            .await;

        let navigator = Arc::new(MockNavigator::default());
        let client = client(&server, navigator.clone());
        client.session().establish(opsdesk_domain::User {
            id: "u-1".into(),
            email: "a@b.c".into(),
            name: None,
            role: opsdesk_domain::UserRole::Staff,
            business_id: None,
        });

        let err = client.get::<Value>("/protected").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.server_message(), Some("Expired"));
        assert_eq!(*navigator.redirects.lock().unwrap(), vec!["/login".to_string()]);
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn forbidden_keeps_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Access Denied"))
            .mount(&server)
            .await;

        let navigator = Arc::new(MockNavigator::default());
        let client = client(&server, navigator.clone());
        let err = client.get::<Value>("/admin").await.unwrap_err();
        assert!(err.is_soft_deny());
        assert!(navigator.redirects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn server_error_maps_to_server_variant() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/error"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client(&server, Arc::default());
        let err = client.get::<Value>("/error").await.unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, message: None }));
    }

    #[tokio::test]
    async fn undecodable_payload_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shape"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [1, 2] })))
            .mount(&server)
            .await;

        let client = client(&server, Arc::default());
        let err = client.get::<TestResponse>("/shape").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn builder_rejects_relative_base_url() {
        let config = ApiConfig { base_url: "/api".into(), ..Default::default() };
        let result = ApiClient::builder().config(config).build();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let config = ApiConfig { base_url: "http://localhost:9000/api/".into(), ..Default::default() };
        let client = ApiClient::builder().config(config).build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/api");
    }

    #[test]
    fn error_message_reads_json_and_plain_text() {
        assert_eq!(error_message(r#"{"message":"Nope"}"#).as_deref(), Some("Nope"));
        assert_eq!(error_message("Forbidden: staff only").as_deref(), Some("Forbidden: staff only"));
        assert_eq!(error_message("<!doctype html>"), None);
        assert_eq!(error_message("  "), None);
    }
}
