use crate::{
    abstract_trait::AuthApiTrait,
    service::api_client::{ApiClient, RequestOptions},
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, SET_COOKIE};
use shared::{
    domain::requests::{GoogleLoginRequest, LoginRequest},
    errors::ApiError,
    model::{SESSION_COOKIE, SessionToken},
};
use tracing::{info, warn};

const USERNAME_TAKEN: &str = "Username already exists";

#[derive(Debug, Clone)]
pub struct AuthApiService {
    client: ApiClient,
}

impl AuthApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn open_session<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<SessionToken, ApiError> {
        let parts = self.client.execute(path, RequestOptions::post(body)?).await?;

        session_from_headers(&parts.headers).ok_or_else(|| {
            warn!("{path} succeeded without issuing a session cookie");
            ApiError::Decode("missing session cookie".to_string())
        })
    }
}

#[async_trait]
impl AuthApiTrait for AuthApiService {
    async fn login(&self, req: &LoginRequest) -> Result<SessionToken, ApiError> {
        let session = self.open_session("/api/auth/login", req).await?;
        info!("User {} signed in", req.username);
        Ok(session)
    }

    async fn register(&self, req: &LoginRequest) -> Result<SessionToken, ApiError> {
        let session = self
            .open_session("/api/auth/register", req)
            .await
            .map_err(|err| match err {
                ApiError::Http {
                    status: 409, body, ..
                } => ApiError::Http {
                    status: 409,
                    message: USERNAME_TAKEN.to_string(),
                    body,
                },
                other => other,
            })?;

        info!("User {} registered", req.username);
        Ok(session)
    }

    async fn google(&self, req: &GoogleLoginRequest) -> Result<SessionToken, ApiError> {
        let session = self.open_session("/api/auth/google", req).await?;
        info!("Federated sign-in completed");
        Ok(session)
    }
}

/// Value of the first non-empty `session` cookie among the `Set-Cookie` headers.
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| name.trim() == SESSION_COOKIE && !value.trim().is_empty())
        .map(|(_, value)| SessionToken::new(value.trim()))
}
