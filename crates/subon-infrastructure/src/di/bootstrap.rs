//! Scheduling bootstrap
//!
//! Composition root for the scheduling engine. Configured schedulers are
//! created and registered, the marker catalog is assembled from the
//! link-time registrations plus configured markers, and the rewriter is
//! wired to both.
//!
//! ```text
//! AppConfig ─┬─► SchedulerFactory ──► ComponentRegistry ──► SchedulerResolver ─┐
//!            └─► markers ─┐                                                    ├─► InvocationRewriter
//! SCHEDULING_MARKERS ─────┴──────────► MarkerCatalog ──────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = SchedulingContext::from_config(config)?;
//! context.validate()?;
//!
//! let invoices = context
//!     .rewriter()
//!     .multi("InvoiceService::invoices", || service.invoices());
//! ```

use std::sync::Arc;

use subon_application::domain_services::catalog::MarkerCatalog;
use subon_application::use_cases::resolver::SchedulerResolver;
use subon_application::use_cases::rewriter::{InvocationRewriter, MarkerViolation};
use subon_domain::error::{Error, Result};
use subon_domain::ports::ComponentLookup;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::config::loader::validate_app_config;
use crate::di::registry::ComponentRegistry;
use crate::schedulers::SchedulerFactory;

/// Wired scheduling engine
pub struct SchedulingContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    registry: Arc<ComponentRegistry>,
    rewriter: InvocationRewriter,
}

impl SchedulingContext {
    /// Build the engine over a fresh registry
    pub fn from_config(config: AppConfig) -> Result<Self> {
        Self::with_registry(config, Arc::new(ComponentRegistry::new()))
    }

    /// Build the engine over a registry the integrator has already populated
    ///
    /// Configured schedulers are added to `registry`; a configured name that
    /// is already taken fails with [`Error::DuplicateComponent`].
    pub fn with_registry(config: AppConfig, registry: Arc<ComponentRegistry>) -> Result<Self> {
        validate_app_config(&config)?;

        for (name, scheduler_config) in &config.schedulers {
            let scheduler = SchedulerFactory::create(name, scheduler_config)?;
            registry.register_scheduler(name, scheduler)?;
        }

        let catalog = config
            .markers
            .iter()
            .try_fold(MarkerCatalog::builder().with_registered()?, |builder, (method, marker)| {
                builder.mark(method.as_str(), marker.key.as_str(), marker.shape)
            })?
            .build();

        let lookup: Arc<dyn ComponentLookup> = Arc::clone(&registry) as Arc<dyn ComponentLookup>;
        let rewriter = InvocationRewriter::new(SchedulerResolver::new(lookup), Arc::new(catalog))
            .with_channel_capacity(config.rewriter.channel_capacity);

        info!(
            schedulers = config.schedulers.len(),
            markers = rewriter.catalog().len(),
            channel_capacity = rewriter.channel_capacity(),
            "Scheduling context initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            registry,
            rewriter,
        })
    }

    /// The component registry
    pub fn registry(&self) -> &Arc<ComponentRegistry> {
        &self.registry
    }

    /// The invocation rewriter
    pub fn rewriter(&self) -> &InvocationRewriter {
        &self.rewriter
    }

    /// The marker catalog
    pub fn catalog(&self) -> &MarkerCatalog {
        self.rewriter.catalog()
    }

    /// Markers whose key does not resolve to a scheduler
    pub fn violations(&self) -> Vec<MarkerViolation> {
        self.rewriter.validate()
    }

    /// Fail if any marker does not resolve to a scheduler
    ///
    /// Every violation is logged; the error lists them all.
    pub fn validate(&self) -> Result<()> {
        let violations = self.violations();
        if violations.is_empty() {
            return Ok(());
        }
        for violation in &violations {
            warn!(
                method = %violation.method,
                key = %violation.key,
                error = %violation.error,
                "Unresolvable scheduling marker"
            );
        }
        let listed: Vec<String> = violations.iter().map(ToString::to_string).collect();
        Err(Error::configuration(format!(
            "{} scheduling marker(s) do not resolve: {}",
            violations.len(),
            listed.join("; ")
        )))
    }
}
