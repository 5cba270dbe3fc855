//! mgmt-registrar - best-effort monitoring registration
//!
//! Lets any component publish runtime objects to a process-local management
//! server without checking whether monitoring is enabled or handling name
//! errors itself.
//!
//! # Architecture
//! - `management`: object names, exporters, the management server and the
//!   `MonitoringRegistrar` façade
//! - `config`: static configuration (TOML + environment)
//! - `errors`: error type shared by the crate
//! - `system`: logging setup and built-in managed objects

pub mod config;
pub mod errors;
pub mod management;
pub mod system;

pub use management::{Exporter, Managed, ManagementServer, MonitoringRegistrar, ObjectName};
