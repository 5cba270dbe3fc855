//! Built-in managed object describing the running process

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::management::Managed;

/// Name the binary exports [`ProcessInfo`] under
pub const PROCESS_OBJECT_NAME: &str = "mgmt.registrar:type=Runtime,name=process";

#[derive(Debug, Clone, Serialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
}

impl ProcessInfo {
    pub fn capture() -> Self {
        Self {
            pid: std::process::id(),
            version: env!("CARGO_PKG_VERSION"),
            started_at: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

impl Managed for ProcessInfo {
    fn attributes(&self) -> Value {
        serde_json::json!({
            "pid": self.pid,
            "version": self.version,
            "started_at": self.started_at.to_rfc3339(),
            "uptime_seconds": self.uptime_seconds(),
        })
    }
}
