//! Node configuration loaded from the environment.

use std::time::Duration;
use tracing::warn;

/// Which component set the node activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientMode {
    /// Full consensus node: base components plus the full-node set
    /// (operation pools, sync, request serving).
    #[default]
    FullNode,
    /// Beam sync: base components only, chain data fetched on demand.
    BeamSync,
}

impl ClientMode {
    /// Parse a mode string; unknown values fall back to full node.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "full" | "full-node" => Self::FullNode,
            "beam" | "beam-sync" => Self::BeamSync,
            other => {
                warn!(mode = other, "unknown client mode, defaulting to full");
                Self::FullNode
            }
        }
    }
}

/// Runtime configuration for the node process.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Client mode, `ARCLIGHT_MODE` (full | beam).
    pub mode: ClientMode,
    /// Metrics heartbeat interval, `ARCLIGHT_METRICS_INTERVAL_SECS`.
    pub metrics_interval: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            mode: ClientMode::FullNode,
            metrics_interval: Duration::from_secs(30),
        }
    }
}

impl NodeConfig {
    /// Load configuration from `ARCLIGHT_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(mode) = std::env::var("ARCLIGHT_MODE") {
            config.mode = ClientMode::parse(&mode);
        }

        if let Ok(secs) = std::env::var("ARCLIGHT_METRICS_INTERVAL_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.metrics_interval = Duration::from_secs(secs),
                _ => warn!(value = %secs, "invalid metrics interval, keeping default"),
            }
        }

        config
    }
}
