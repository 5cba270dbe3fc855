//! Process-wide management server
//!
//! Holds every exported object keyed by its [`ObjectName`]. Monitoring
//! agents read from here; nothing in this crate interprets the objects.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use tracing::debug;

use super::exporter::Managed;
use super::object_name::ObjectName;
use crate::errors::{RegistrarError, Result};

/// Shared platform instance
static PLATFORM: Lazy<Arc<ManagementServer>> = Lazy::new(|| Arc::new(ManagementServer::new()));

/// Concurrent registry of exported objects.
pub struct ManagementServer {
    objects: DashMap<ObjectName, Arc<dyn Managed>>,
}

impl ManagementServer {
    pub fn new() -> Self {
        Self {
            objects: DashMap::new(),
        }
    }

    /// The process-wide server, created on first use.
    pub fn platform() -> Arc<ManagementServer> {
        PLATFORM.clone()
    }

    pub fn register(&self, name: ObjectName, object: Arc<dyn Managed>) -> Result<()> {
        match self.objects.entry(name) {
            Entry::Occupied(entry) => Err(RegistrarError::duplicate_registration(format!(
                "{} is already registered",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                debug!("Registered managed object: {}", entry.key());
                entry.insert(object);
                Ok(())
            }
        }
    }

    pub fn unregister(&self, name: &ObjectName) -> Result<()> {
        match self.objects.remove(name) {
            Some(_) => {
                debug!("Unregistered managed object: {}", name);
                Ok(())
            }
            None => Err(RegistrarError::not_registered(format!(
                "{} is not registered",
                name
            ))),
        }
    }

    pub fn is_registered(&self, name: &ObjectName) -> bool {
        self.objects.contains_key(name)
    }

    pub fn get(&self, name: &ObjectName) -> Option<Arc<dyn Managed>> {
        self.objects.get(name).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// All registered names, sorted by canonical name.
    pub fn names(&self) -> Vec<ObjectName> {
        let mut names: Vec<ObjectName> = self.objects.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Registered names within `domain`, sorted.
    pub fn query_domain(&self, domain: &str) -> Vec<ObjectName> {
        let mut names: Vec<ObjectName> = self
            .objects
            .iter()
            .filter(|e| e.key().domain() == domain)
            .map(|e| e.key().clone())
            .collect();
        names.sort();
        names
    }

    /// JSON object mapping each canonical name to the object's attributes.
    pub fn snapshot(&self) -> Value {
        let mut entries: Vec<(String, Arc<dyn Managed>)> = self
            .objects
            .iter()
            .map(|e| (e.key().canonical_name().to_string(), e.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        // Attributes are read after the shard locks are released
        let map: Map<String, Value> = entries
            .into_iter()
            .map(|(name, object)| (name, object.attributes()))
            .collect();
        Value::Object(map)
    }
}

impl Default for ManagementServer {
    fn default() -> Self {
        Self::new()
    }
}
