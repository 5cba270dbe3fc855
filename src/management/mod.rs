//! Management module
//!
//! Exposes runtime objects to a monitoring agent.
//!
//! # Architecture
//! - `object_name`: structured names objects are exported under
//! - `exporter`: the `Exporter` capability and its server-backed implementation
//! - `server`: the process-wide management server
//! - `registrar`: best-effort façade used by the rest of the application

mod exporter;
mod object_name;
mod registrar;
mod server;

pub use exporter::{Exporter, Managed, ServerExporter};
pub use object_name::ObjectName;
pub use registrar::MonitoringRegistrar;
pub use server::ManagementServer;
