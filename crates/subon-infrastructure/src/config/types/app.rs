//! Main application configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::scheduler::{MarkerConfig, RewriterConfig, SchedulerConfig};

/// Application configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [schedulers.ioScheduler]
/// worker_threads = 8
///
/// [markers."InvoiceService::invoices"]
/// key = "ioScheduler"
/// shape = "multi"
///
/// [rewriter]
/// channel_capacity = 32
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Schedulers registered at bootstrap, by registry key
    pub schedulers: BTreeMap<String, SchedulerConfig>,
    /// Markers attached from configuration, by method identity
    pub markers: BTreeMap<String, MarkerConfig>,
    /// Invocation rewriter tuning
    pub rewriter: RewriterConfig,
}
