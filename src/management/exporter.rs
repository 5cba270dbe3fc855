//! Exporter capability
//!
//! An [`Exporter`] publishes objects under an [`ObjectName`] so a monitoring
//! agent can read them. [`ServerExporter`] is the implementation bound to a
//! [`ManagementServer`]; tests and embedders can supply their own.
//!
//! [`MonitoringRegistrar`](super::MonitoringRegistrar) only sees the
//! [`Exporter`] trait. Embedders that want [`ServerExporter::exported_names`]
//! or [`ServerExporter::unexport_all`] keep their own handle to the
//! exporter, as the binary does for shutdown.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::object_name::ObjectName;
use super::server::ManagementServer;
use crate::errors::Result;

/// A value that can be exported for monitoring.
///
/// `attributes` describes the object's current state. The default reports
/// nothing, so opaque objects only need an empty `impl`.
pub trait Managed: Send + Sync {
    fn attributes(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}

/// Trait for publishing objects to a management namespace.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait Exporter: Send + Sync {
    /// Publish `object` under `name`
    fn export(&self, name: &ObjectName, object: Arc<dyn Managed>) -> Result<()>;

    /// Withdraw whatever is published under `name`
    fn unexport(&self, name: &ObjectName) -> Result<()>;
}

/// Exporter backed by a [`ManagementServer`].
///
/// Remembers which names it exported so they can be withdrawn in one go.
pub struct ServerExporter {
    server: Arc<ManagementServer>,
    exported: Mutex<BTreeSet<ObjectName>>,
}

impl ServerExporter {
    pub fn new(server: Arc<ManagementServer>) -> Self {
        Self {
            server,
            exported: Mutex::new(BTreeSet::new()),
        }
    }

    pub fn server(&self) -> &Arc<ManagementServer> {
        &self.server
    }

    /// Names currently exported through this exporter, sorted.
    pub fn exported_names(&self) -> Vec<ObjectName> {
        self.exported.lock().iter().cloned().collect()
    }

    /// Unexport every name this exporter published.
    ///
    /// Returns the names that were no longer present in the server.
    pub fn unexport_all(&self) -> Vec<ObjectName> {
        let mut exported = self.exported.lock();
        let mut missing = Vec::new();
        for name in std::mem::take(&mut *exported) {
            if self.server.unregister(&name).is_err() {
                missing.push(name);
            }
        }
        debug!(missing = missing.len(), "Unexported all managed objects");
        missing
    }
}

impl Exporter for ServerExporter {
    fn export(&self, name: &ObjectName, object: Arc<dyn Managed>) -> Result<()> {
        // Held across the server call so tracking never lags behind the server
        let mut exported = self.exported.lock();
        self.server.register(name.clone(), object)?;
        exported.insert(name.clone());
        Ok(())
    }

    fn unexport(&self, name: &ObjectName) -> Result<()> {
        let mut exported = self.exported.lock();
        exported.remove(name);
        self.server.unregister(name)
    }
}
