//! Liveness and readiness probes.

use async_trait::async_trait;
use mv_infra::database::DatabasePool;

/// Readiness check for the backing store
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn is_healthy(&self) -> bool;
}

#[async_trait]
impl HealthProbe for DatabasePool {
    async fn is_healthy(&self) -> bool {
        matches!(self.health_check().await, Ok(true))
    }
}

/// Probe with a fixed answer, for wiring without a database
pub struct StaticHealth(pub bool);

#[async_trait]
impl HealthProbe for StaticHealth {
    async fn is_healthy(&self) -> bool {
        self.0
    }
}
