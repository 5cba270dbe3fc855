//! System-level modules
//!
//! - Logging initialization
//! - Built-in managed objects for the running process

pub mod logging;
pub mod process;

pub use logging::init_logging;
pub use process::{PROCESS_OBJECT_NAME, ProcessInfo};
