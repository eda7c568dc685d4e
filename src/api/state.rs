use std::sync::Arc;

use crate::config::Config;
use crate::handlers::{ExtensionRegistry, HandlerResolver};
use crate::observability::Metrics;

/// Shared, read-only request state. Built once at startup; no request
/// mutates it, so it is shared across concurrent requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ExtensionRegistry>,
    pub resolver: Arc<HandlerResolver>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, registry: ExtensionRegistry, resolver: HandlerResolver) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            resolver: Arc::new(resolver),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
