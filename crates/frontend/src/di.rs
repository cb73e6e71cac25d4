use client::{
    abstract_trait::{DynAuthApi, DynStockApi},
    service::{ApiClient, AuthApiService, StockApiService},
};
use shared::model::SessionToken;
use std::sync::Arc;

/// Builds API services. Stock calls are per visitor, so those services are made on
/// demand around the caller's session; auth calls never carry a session.
#[derive(Clone)]
pub struct DependenciesInject {
    api: ApiClient,
    pub auth_clients: DynAuthApi,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("api", &self.api)
            .field("auth_service", &"DynAuthApi")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(api: ApiClient) -> Self {
        let auth_clients: DynAuthApi = Arc::new(AuthApiService::new(api.clone()));

        Self { api, auth_clients }
    }

    pub fn stock_clients(&self, session: Option<SessionToken>) -> DynStockApi {
        let client = match session {
            Some(session) => self.api.with_session(session),
            None => self.api.clone(),
        };

        Arc::new(StockApiService::new(client))
    }
}
