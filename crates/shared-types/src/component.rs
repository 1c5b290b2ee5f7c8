//! # Component Contract
//!
//! Defines the contract every pluggable subsystem implements to participate
//! in node assembly. The bootstrapper decides at startup which components to
//! activate for a given client mode; components it skips are simply never
//! started.
//!
//! ## Example Implementation
//!
//! ```rust,ignore
//! use shared_types::{Component, ComponentError, ComponentId, ComponentStatus};
//! use async_trait::async_trait;
//!
//! pub struct MyComponent { /* ... */ }
//!
//! #[async_trait]
//! impl Component for MyComponent {
//!     fn id(&self) -> ComponentId { ComponentId::Syncer }
//!     async fn start(&self) -> Result<(), ComponentError> { Ok(()) }
//!     async fn stop(&self) -> Result<(), ComponentError> { Ok(()) }
//!     async fn health_check(&self) -> ComponentStatus { ComponentStatus::Running }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Identifier of a pluggable subsystem.
///
/// The enum names the full component universe the client knows about; a
/// given build or mode typically activates only a subset. Components without
/// an in-tree implementation yet (e.g. `Upnp`) can still be provided by
/// plugin registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// Staging pools for pending consensus operations.
    OperationPool,
    /// JSON-RPC API server.
    JsonRpcServer,
    /// Peer discovery over the local network.
    PeerDiscovery,
    /// Persistent network reputation/routing database.
    NetworkDb,
    /// NAT traversal via UPnP.
    Upnp,
    /// Chain synchronization driver.
    Syncer,
    /// Serves chain data requests from peers.
    RequestServer,
    /// Node metrics reporting.
    Metrics,
}

impl ComponentId {
    /// Human-readable component name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::OperationPool => "operation-pool",
            Self::JsonRpcServer => "json-rpc-server",
            Self::PeerDiscovery => "peer-discovery",
            Self::NetworkDb => "network-db",
            Self::Upnp => "upnp",
            Self::Syncer => "syncer",
            Self::RequestServer => "request-server",
            Self::Metrics => "metrics",
        }
    }

    /// Whether this component belongs to the base set that every client
    /// mode activates. Base components fail the boot hard when they cannot
    /// start; everything else degrades gracefully.
    #[must_use]
    pub fn is_base(&self) -> bool {
        matches!(
            self,
            Self::JsonRpcServer | Self::PeerDiscovery | Self::NetworkDb | Self::Upnp | Self::Metrics
        )
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error raised by component lifecycle operations.
#[derive(Debug, Clone, Error)]
#[error("[{component}] {kind}: {message}")]
pub struct ComponentError {
    /// The component that encountered the error.
    pub component: ComponentId,
    /// Error category.
    pub kind: ComponentErrorKind,
    /// Human-readable detail.
    pub message: String,
}

impl ComponentError {
    /// Shorthand for a startup failure.
    pub fn startup(component: ComponentId, message: impl Into<String>) -> Self {
        Self {
            component,
            kind: ComponentErrorKind::StartupFailed,
            message: message.into(),
        }
    }
}

/// Categories of component errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComponentErrorKind {
    #[error("StartupFailed")]
    StartupFailed,
    #[error("ShutdownFailed")]
    ShutdownFailed,
    #[error("RuntimeError")]
    RuntimeError,
    #[error("ConfigurationError")]
    ConfigurationError,
}

/// Lifecycle status of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentStatus {
    /// Known to the registry but not started.
    Registered,
    /// Startup in progress.
    Starting,
    /// Running normally.
    Running,
    /// Running with reduced function.
    Degraded,
    /// Stopped gracefully.
    Stopped,
    /// Failed to start or crashed.
    Failed,
}

/// The contract every pluggable subsystem implements.
///
/// Components own their internal state and expose only lifecycle and
/// observability hooks to the runtime.
#[async_trait]
pub trait Component: Send + Sync {
    /// Unique identifier of this component.
    fn id(&self) -> ComponentId;

    /// Human-readable name, defaults to the id's name.
    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Start the component. Called once by the runtime during boot.
    async fn start(&self) -> Result<(), ComponentError>;

    /// Stop the component gracefully. Called during shutdown in reverse
    /// activation order.
    async fn stop(&self) -> Result<(), ComponentError>;

    /// Report current health. Polled by the runtime.
    async fn health_check(&self) -> ComponentStatus;

    /// Component-specific metrics as a JSON object.
    fn metrics(&self) -> serde_json::Value {
        serde_json::json!({ "component": self.id().name() })
    }
}

/// Shared handle to a type-erased component.
pub type DynComponent = Arc<dyn Component>;
