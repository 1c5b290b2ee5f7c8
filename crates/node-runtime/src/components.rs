//! Built-in component implementations.
//!
//! Only two components ship in-tree today: the operations staging pools and
//! the metrics heartbeat. Networking, RPC, and sync components are expected
//! to arrive through plugin registration until they land here.

use async_trait::async_trait;
use operation_pool::OperationPool;
use parking_lot::Mutex;
use shared_types::{
    Attestation, Component, ComponentError, ComponentId, ComponentStatus, Deposit,
    ProposerSlashing, SignedVoluntaryExit,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Owns one staging pool per beacon operation type.
///
/// The pools are created empty when the component is constructed and
/// discarded with it; nothing is persisted across restarts. Producers and
/// consumers obtain shared pool handles through the accessors.
pub struct OperationsComponent {
    attestations: Arc<OperationPool<Attestation>>,
    proposer_slashings: Arc<OperationPool<ProposerSlashing>>,
    voluntary_exits: Arc<OperationPool<SignedVoluntaryExit>>,
    deposits: Arc<OperationPool<Deposit>>,
}

impl OperationsComponent {
    /// Create the component with empty pools.
    pub fn new() -> Self {
        Self {
            attestations: Arc::new(OperationPool::new()),
            proposer_slashings: Arc::new(OperationPool::new()),
            voluntary_exits: Arc::new(OperationPool::new()),
            deposits: Arc::new(OperationPool::new()),
        }
    }

    /// Shared handle to the attestation pool.
    pub fn attestations(&self) -> Arc<OperationPool<Attestation>> {
        Arc::clone(&self.attestations)
    }

    /// Shared handle to the proposer slashing pool.
    pub fn proposer_slashings(&self) -> Arc<OperationPool<ProposerSlashing>> {
        Arc::clone(&self.proposer_slashings)
    }

    /// Shared handle to the voluntary exit pool.
    pub fn voluntary_exits(&self) -> Arc<OperationPool<SignedVoluntaryExit>> {
        Arc::clone(&self.voluntary_exits)
    }

    /// Shared handle to the deposit pool.
    pub fn deposits(&self) -> Arc<OperationPool<Deposit>> {
        Arc::clone(&self.deposits)
    }
}

impl Default for OperationsComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Component for OperationsComponent {
    fn id(&self) -> ComponentId {
        ComponentId::OperationPool
    }

    async fn start(&self) -> Result<(), ComponentError> {
        info!("operation staging pools ready");
        Ok(())
    }

    async fn stop(&self) -> Result<(), ComponentError> {
        info!(
            attestations = self.attestations.len(),
            proposer_slashings = self.proposer_slashings.len(),
            voluntary_exits = self.voluntary_exits.len(),
            deposits = self.deposits.len(),
            "discarding staged operations"
        );
        Ok(())
    }

    async fn health_check(&self) -> ComponentStatus {
        ComponentStatus::Running
    }

    fn metrics(&self) -> serde_json::Value {
        serde_json::json!({
            "attestations": self.attestations.len(),
            "proposer_slashings": self.proposer_slashings.len(),
            "voluntary_exits": self.voluntary_exits.len(),
            "deposits": self.deposits.len(),
        })
    }
}

/// Periodic heartbeat logging that the node is alive.
///
/// Part of the base set so every client mode reports liveness.
pub struct MetricsComponent {
    interval: Duration,
    heartbeat: Mutex<Option<tokio::task::JoinHandle<()>>>,
}

impl MetricsComponent {
    /// Create the component with the given heartbeat interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            heartbeat: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Component for MetricsComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Metrics
    }

    async fn start(&self) -> Result<(), ComponentError> {
        let interval = self.interval;
        let handle = tokio::spawn(async move {
            let started = std::time::Instant::now();
            let mut ticker = tokio::time::interval(interval);
            // First tick fires immediately; skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                debug!(uptime_secs = started.elapsed().as_secs(), "node heartbeat");
            }
        });
        *self.heartbeat.lock() = Some(handle);
        info!(interval_secs = self.interval.as_secs(), "metrics heartbeat started");
        Ok(())
    }

    async fn stop(&self) -> Result<(), ComponentError> {
        if let Some(handle) = self.heartbeat.lock().take() {
            handle.abort();
        }
        Ok(())
    }

    async fn health_check(&self) -> ComponentStatus {
        if self.heartbeat.lock().is_some() {
            ComponentStatus::Running
        } else {
            ComponentStatus::Stopped
        }
    }

    fn metrics(&self) -> serde_json::Value {
        serde_json::json!({ "heartbeat_interval_secs": self.interval.as_secs() })
    }
}
