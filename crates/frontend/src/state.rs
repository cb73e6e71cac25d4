use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use client::service::ApiClient;
use prometheus_client::registry::Registry;
use shared::{config::Config, utils::Metrics};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry, "laundry_api_client");

        info!("Using laundry API at {}", config.api_base);

        let api = ApiClient::new(&config.api_base, metrics.clone())
            .context("Failed to build laundry API client")?;

        let di_container = DependenciesInject::new(api);

        Ok(Self {
            config: Arc::new(config),
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            metrics,
        })
    }
}
