//! # Arclight Node Runtime
//!
//! The bootstrapper for an Arclight node process.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Construct the built-in components and the component registry
//! 3. Let optional subsystems register plugin components
//! 4. Merge base set + mode extras + plugins via the registry
//! 5. Start the merged sequence in order; stop it in reverse on shutdown
//!
//! ## Client Modes
//!
//! | Mode | Components |
//! |------|-----------|
//! | `FullNode` | base set + operation pools (and future sync/request serving) |
//! | `BeamSync` | base set only |

pub mod components;
pub mod config;

use components::{MetricsComponent, OperationsComponent};
use config::{ClientMode, NodeConfig};
use parking_lot::RwLock;
use shared_types::{ComponentRegistry, DynComponent};
use std::sync::Arc;
use tracing::info;

/// The node runtime orchestrating component lifecycle.
pub struct NodeRuntime {
    config: NodeConfig,
    registry: Arc<ComponentRegistry>,
    operations: Arc<OperationsComponent>,
    /// Components started by [`start`](Self::start), in activation order.
    active: RwLock<Vec<DynComponent>>,
}

impl NodeRuntime {
    /// Create a runtime with the built-in component set.
    pub fn new(config: NodeConfig) -> Self {
        info!(mode = ?config.mode, "creating Arclight node runtime");

        let operations = Arc::new(OperationsComponent::new());
        let metrics: DynComponent = Arc::new(MetricsComponent::new(config.metrics_interval));
        let registry = Arc::new(ComponentRegistry::new(vec![metrics]));

        Self {
            config,
            registry,
            operations,
            active: RwLock::new(Vec::new()),
        }
    }

    /// The component registry, for plugin registration before [`start`](Self::start).
    pub fn registry(&self) -> Arc<ComponentRegistry> {
        Arc::clone(&self.registry)
    }

    /// The operations component owning the staging pools.
    pub fn operations(&self) -> Arc<OperationsComponent> {
        Arc::clone(&self.operations)
    }

    /// Assemble and start the component set for the configured mode.
    pub async fn start(&self) -> anyhow::Result<()> {
        info!("===========================================");
        info!("  Arclight Node Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("  Mode: {:?}", self.config.mode);
        info!("===========================================");

        let ordered = self.registry.get_all_components(self.mode_extras());
        self.registry.start_components(&ordered).await?;
        *self.active.write() = ordered;

        info!("node started");
        Ok(())
    }

    /// Stop active components in reverse activation order.
    pub async fn shutdown(&self) {
        let active = std::mem::take(&mut *self.active.write());
        self.registry.stop_components(&active).await;
        info!("node stopped");
    }

    /// Aggregate metrics of the currently active components.
    pub fn metrics(&self) -> serde_json::Value {
        self.registry.metrics(&self.active.read())
    }

    /// Extra components activated on top of the base set for the configured
    /// client mode.
    fn mode_extras(&self) -> Vec<DynComponent> {
        match self.config.mode {
            ClientMode::FullNode => {
                let operations: DynComponent = self.operations.clone();
                vec![operations]
            }
            ClientMode::BeamSync => Vec::new(),
        }
    }
}
