use reqwest::{
    Method as HttpMethod,
    header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use shared::{
    errors::ApiError,
    model::{SESSION_COOKIE, SessionToken},
    utils::{Method, Metrics, Status},
};
use std::{sync::Arc, time::Instant};
use tracing::{debug, error, warn};

/// Method, extra headers and JSON body of a single API call.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Decode(format!("failed to encode request body: {e}")))?;

        Ok(Self {
            method: HttpMethod::POST,
            headers: Vec::new(),
            body: Some(body),
        })
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Successful response: headers plus the decoded JSON body (`null` when empty).
#[derive(Debug, Clone)]
pub struct ResponseParts {
    pub headers: HeaderMap,
    pub body: Value,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    session: Option<SessionToken>,
    metrics: Metrics,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, metrics: Metrics) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_http(http, base_url, metrics))
    }

    pub fn with_http(http: reqwest::Client, base_url: &str, metrics: Metrics) -> Self {
        Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            session: None,
            metrics,
        }
    }

    /// A client sharing this one's connection pool that sends `Cookie: session=<token>`.
    pub fn with_session(&self, session: SessionToken) -> Self {
        Self {
            session: Some(session),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        self.execute(path, options).await.map(|parts| parts.body)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.request(path, RequestOptions::get()).await?;
        decode(path, value)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let value = self.request(path, RequestOptions::post(body)?).await?;
        decode(path, value)
    }

    pub async fn execute(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ResponseParts, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let method = metric_method(&options.method);
        let start = Instant::now();

        let headers = self.build_headers(&options.headers)?;
        let mut builder = self
            .http
            .request(options.method.clone(), &url)
            .headers(headers);

        if let Some(body) = &options.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ApiError::Decode(format!("failed to encode request body: {e}")))?;
            builder = builder.body(bytes);
        }

        debug!("➡️ {} {}", options.method, url);

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("❌ {} {} failed: {}", options.method, url, e);
                self.record(method, Status::Error, start);
                return Err(ApiError::Network(e.to_string()));
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("❌ Failed to read body of {} {}: {}", options.method, url, e);
                self.record(method, Status::Error, start);
                return Err(ApiError::Network(e.to_string()));
            }
        };

        if !status.is_success() {
            warn!("{} {} returned {}", options.method, url, status);
            self.record(method, Status::Error, start);
            return Err(ApiError::from_response(
                status.as_u16(),
                status.canonical_reason(),
                &text,
            ));
        }

        self.record(method, Status::Success, start);
        debug!("✅ {} {} -> {}", options.method, url, status);

        Ok(ResponseParts {
            headers,
            body: parse_body(text),
        })
    }

    fn build_headers(&self, extra: &[(String, String)]) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(session) = &self.session {
            let cookie = HeaderValue::from_str(&format!("{SESSION_COOKIE}={}", session.as_str()))
                .map_err(|e| ApiError::Decode(format!("invalid session cookie: {e}")))?;
            headers.insert(COOKIE, cookie);
        }

        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::Decode(format!("invalid header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::Decode(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    fn record(&self, method: Method, status: Status, start: Instant) {
        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }
}

fn metric_method(method: &HttpMethod) -> Method {
    if *method == HttpMethod::POST {
        Method::Post
    } else if *method == HttpMethod::PUT || *method == HttpMethod::PATCH {
        Method::Put
    } else if *method == HttpMethod::DELETE {
        Method::Delete
    } else {
        Method::Get
    }
}

fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::Decode(format!("unexpected payload from {path}: {e}")))
}
