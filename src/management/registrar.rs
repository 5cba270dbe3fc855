//! Monitoring registrar
//!
//! Single entry point for making objects observable. Call sites register and
//! unregister unconditionally: when management is disabled every call is a
//! no-op, and malformed names or exporter failures end up in the log instead
//! of the caller.

use std::sync::Arc;

use tracing::{trace, warn};

use super::exporter::{Exporter, Managed, ServerExporter};
use super::object_name::ObjectName;
use super::server::ManagementServer;
use crate::config::ManagementConfig;

/// Fixed at construction
enum Mode {
    Enabled(Arc<dyn Exporter>),
    Disabled,
}

/// Best-effort façade over an [`Exporter`].
///
/// Immutable after construction, so one instance can be shared across
/// threads without locking.
pub struct MonitoringRegistrar {
    mode: Mode,
}

impl MonitoringRegistrar {
    /// Build from configuration.
    ///
    /// When the management flag is set the registrar exports into
    /// [`ManagementServer::platform`]. Otherwise it is disabled and the
    /// platform server is never touched.
    pub fn new(config: &ManagementConfig) -> Self {
        if config.is_enabled() {
            let exporter = ServerExporter::new(ManagementServer::platform());
            Self::with_exporter(Arc::new(exporter))
        } else {
            Self::disabled()
        }
    }

    pub fn with_exporter(exporter: Arc<dyn Exporter>) -> Self {
        Self {
            mode: Mode::Enabled(exporter),
        }
    }

    pub fn disabled() -> Self {
        Self {
            mode: Mode::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.mode, Mode::Enabled(_))
    }

    /// Parse `name` and export `object` under it.
    ///
    /// A malformed name is logged and dropped.
    pub fn register(&self, name: &str, object: Arc<dyn Managed>) {
        if let Some(parsed) = parse_or_warn(name, "register") {
            self.register_name(&parsed, object);
        }
    }

    /// Export `object` under an already parsed name.
    pub fn register_name(&self, name: &ObjectName, object: Arc<dyn Managed>) {
        if let Mode::Enabled(exporter) = &self.mode
            && let Err(e) = exporter.export(name, object)
        {
            warn!("Failed to register {} for monitoring: {}", name, e);
        }
    }

    /// Parse `name` and withdraw whatever is exported under it.
    ///
    /// A malformed name is logged and dropped.
    pub fn unregister(&self, name: &str) {
        if let Some(parsed) = parse_or_warn(name, "unregister") {
            self.unregister_name(&parsed);
        }
    }

    /// Withdraw whatever is exported under an already parsed name.
    pub fn unregister_name(&self, name: &ObjectName) {
        if let Mode::Enabled(exporter) = &self.mode
            && let Err(e) = exporter.unexport(name)
        {
            warn!("Failed to unregister {} from monitoring: {}", name, e);
        }
    }
}

impl Default for MonitoringRegistrar {
    fn default() -> Self {
        Self::disabled()
    }
}

fn parse_or_warn(raw: &str, action: &str) -> Option<ObjectName> {
    match raw.parse::<ObjectName>() {
        Ok(name) => Some(name),
        Err(e) => {
            warn!("Failing to {} malformed ObjectName: {}", action, raw);
            trace!(error = %e, "ObjectName parse failure");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        assert!(!MonitoringRegistrar::default().is_enabled());
    }

    #[test]
    fn test_new_follows_config() {
        let enabled = MonitoringRegistrar::new(&ManagementConfig::enabled());
        let disabled = MonitoringRegistrar::new(&ManagementConfig::default());
        assert!(enabled.is_enabled());
        assert!(!disabled.is_enabled());
    }

    #[test]
    fn test_parse_or_warn() {
        assert!(parse_or_warn("a:b=c", "register").is_some());
        assert!(parse_or_warn("a", "register").is_none());
    }

    #[test]
    fn test_registrar_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MonitoringRegistrar>();
    }
}
