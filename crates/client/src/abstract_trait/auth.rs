use async_trait::async_trait;
use shared::{
    domain::requests::{GoogleLoginRequest, LoginRequest},
    errors::ApiError,
    model::SessionToken,
};
use std::sync::Arc;

pub type DynAuthApi = Arc<dyn AuthApiTrait + Send + Sync>;

#[async_trait]
pub trait AuthApiTrait {
    async fn login(&self, req: &LoginRequest) -> Result<SessionToken, ApiError>;
    async fn register(&self, req: &LoginRequest) -> Result<SessionToken, ApiError>;
    async fn google(&self, req: &GoogleLoginRequest) -> Result<SessionToken, ApiError>;
}
