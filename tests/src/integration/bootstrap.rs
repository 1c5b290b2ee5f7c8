//! # Bootstrap Integration
//!
//! Verifies the component assembly a node performs at startup: merge
//! precedence (built-ins, then mode extras, then plugins), duplicate
//! suppression, and the full-node vs. beam-sync activation split.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use node_runtime::config::{ClientMode, NodeConfig};
    use node_runtime::NodeRuntime;
    use shared_types::{Component, ComponentError, ComponentId, ComponentStatus};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Stand-in for an out-of-tree subsystem registered as a plugin.
    struct PluginComponent {
        id: ComponentId,
        started: AtomicBool,
    }

    impl PluginComponent {
        fn new(id: ComponentId) -> Arc<Self> {
            Arc::new(Self {
                id,
                started: AtomicBool::new(false),
            })
        }
    }

    #[async_trait]
    impl Component for PluginComponent {
        fn id(&self) -> ComponentId {
            self.id
        }

        async fn start(&self) -> Result<(), ComponentError> {
            self.started.store(true, Ordering::Release);
            Ok(())
        }

        async fn stop(&self) -> Result<(), ComponentError> {
            self.started.store(false, Ordering::Release);
            Ok(())
        }

        async fn health_check(&self) -> ComponentStatus {
            if self.started.load(Ordering::Acquire) {
                ComponentStatus::Running
            } else {
                ComponentStatus::Stopped
            }
        }
    }

    #[tokio::test]
    async fn test_plugin_components_start_with_the_node() {
        let runtime = NodeRuntime::new(NodeConfig::default());
        let plugin = PluginComponent::new(ComponentId::Syncer);
        runtime.registry().register_plugin(plugin.clone());

        runtime.start().await.unwrap();
        assert!(plugin.started.load(Ordering::Acquire));

        runtime.shutdown().await;
        assert!(!plugin.started.load(Ordering::Acquire));
    }

    #[tokio::test]
    async fn test_plugin_cannot_shadow_builtin() {
        let runtime = NodeRuntime::new(NodeConfig::default());
        let impostor = PluginComponent::new(ComponentId::OperationPool);
        runtime.registry().register_plugin(impostor.clone());

        runtime.start().await.unwrap();

        // The built-in operations component wins the merge; the plugin with
        // the same id is never started.
        assert!(!impostor.started.load(Ordering::Acquire));
        assert_eq!(
            runtime.registry().status_of(ComponentId::OperationPool),
            ComponentStatus::Running
        );

        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_beam_sync_still_runs_plugins() {
        let config = NodeConfig {
            mode: ClientMode::BeamSync,
            ..NodeConfig::default()
        };
        let runtime = NodeRuntime::new(config);
        let plugin = PluginComponent::new(ComponentId::RequestServer);
        runtime.registry().register_plugin(plugin.clone());

        runtime.start().await.unwrap();

        assert!(plugin.started.load(Ordering::Acquire));
        assert_eq!(
            runtime.registry().status_of(ComponentId::OperationPool),
            ComponentStatus::Registered
        );

        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_pools_usable_while_node_runs() {
        let runtime = NodeRuntime::new(NodeConfig::default());
        runtime.start().await.unwrap();

        let exits = runtime.operations().voluntary_exits();
        exits.add(crate::integration::fixtures::exit(9));
        assert_eq!(exits.len(), 1);

        let metrics = runtime.metrics();
        assert_eq!(metrics["operation-pool"]["voluntary_exits"], 1);

        runtime.shutdown().await;
    }
}
