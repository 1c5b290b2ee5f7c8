//! # Component Registry
//!
//! Assembles the ordered set of components a node process activates.
//!
//! Three sources are merged, in precedence order:
//!
//! 1. the fixed **built-in base set** supplied at construction,
//! 2. **extras** supplied by the caller for the selected client mode,
//! 3. **plugins** registered at startup by optional subsystems.
//!
//! Duplicate ids keep the earliest entry, so a plugin can never shadow a
//! built-in. There is no dynamic discovery: anything optional must call
//! [`ComponentRegistry::register_plugin`] before the runtime consumes the
//! merged sequence.

use crate::component::{ComponentError, ComponentId, ComponentStatus, DynComponent};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use tracing::{error, info, warn};

/// Central registry merging built-in, extra, and plugin components.
pub struct ComponentRegistry {
    /// Built-in base components, highest precedence.
    base: Vec<DynComponent>,
    /// Plugin components registered at startup, lowest precedence.
    plugins: RwLock<Vec<DynComponent>>,
    /// Lifecycle status per component id.
    status: RwLock<HashMap<ComponentId, ComponentStatus>>,
}

impl ComponentRegistry {
    /// Create a registry with the given built-in base set.
    pub fn new(base: Vec<DynComponent>) -> Self {
        let status = base
            .iter()
            .map(|c| (c.id(), ComponentStatus::Registered))
            .collect();
        Self {
            base,
            plugins: RwLock::new(Vec::new()),
            status: RwLock::new(status),
        }
    }

    /// Register an optional component provided by a plugin.
    ///
    /// Plugins rank below built-ins and mode extras in the merged order.
    pub fn register_plugin(&self, component: DynComponent) {
        let id = component.id();
        info!(component = %id, "registering plugin component");
        self.status
            .write()
            .entry(id)
            .or_insert(ComponentStatus::Registered);
        self.plugins.write().push(component);
    }

    /// The merged, ordered component sequence: base, then `extras`, then
    /// plugins. Later entries with an already-seen id are dropped.
    pub fn get_all_components(&self, extras: Vec<DynComponent>) -> Vec<DynComponent> {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();

        let plugins = self.plugins.read();
        let candidates = self
            .base
            .iter()
            .cloned()
            .chain(extras)
            .chain(plugins.iter().cloned());

        for component in candidates {
            let id = component.id();
            if seen.insert(id) {
                merged.push(component);
            } else {
                warn!(component = %id, "duplicate component registration ignored");
            }
        }

        merged
    }

    /// Start `components` in order.
    ///
    /// A base component that fails to start aborts the boot; optional
    /// components log a warning and are skipped.
    pub async fn start_components(
        &self,
        components: &[DynComponent],
    ) -> Result<(), ComponentError> {
        info!(count = components.len(), "starting components");

        for component in components {
            let id = component.id();
            self.set_status(id, ComponentStatus::Starting);
            info!(component = %id, "starting");

            match component.start().await {
                Ok(()) => {
                    self.set_status(id, ComponentStatus::Running);
                    info!(component = %id, "started");
                }
                Err(e) if id.is_base() => {
                    self.set_status(id, ComponentStatus::Failed);
                    error!(component = %id, error = %e, "base component failed to start");
                    return Err(e);
                }
                Err(e) => {
                    self.set_status(id, ComponentStatus::Failed);
                    warn!(component = %id, error = %e, "optional component failed to start");
                }
            }
        }

        Ok(())
    }

    /// Stop `components` in reverse activation order.
    ///
    /// A failing stop is logged and does not prevent the remaining
    /// components from stopping.
    pub async fn stop_components(&self, components: &[DynComponent]) {
        info!(count = components.len(), "stopping components");

        for component in components.iter().rev() {
            let id = component.id();
            if self.status_of(id) != ComponentStatus::Running {
                continue;
            }

            match component.stop().await {
                Ok(()) => {
                    self.set_status(id, ComponentStatus::Stopped);
                    info!(component = %id, "stopped");
                }
                Err(e) => {
                    self.set_status(id, ComponentStatus::Failed);
                    error!(component = %id, error = %e, "failed to stop cleanly");
                }
            }
        }
    }

    /// Current status of a component, `Registered` if never touched.
    pub fn status_of(&self, id: ComponentId) -> ComponentStatus {
        self.status
            .read()
            .get(&id)
            .copied()
            .unwrap_or(ComponentStatus::Registered)
    }

    /// Snapshot of all known component statuses.
    pub fn statuses(&self) -> HashMap<ComponentId, ComponentStatus> {
        self.status.read().clone()
    }

    /// Aggregate metrics from `components` keyed by component name.
    pub fn metrics(&self, components: &[DynComponent]) -> serde_json::Value {
        let mut out = serde_json::Map::new();
        for component in components {
            out.insert(component.id().name().to_string(), component.metrics());
        }
        serde_json::Value::Object(out)
    }

    fn set_status(&self, id: ComponentId, status: ComponentStatus) {
        self.status.write().insert(id, status);
    }
}
