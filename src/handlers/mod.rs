//! Handler implementations

pub mod console;
pub mod file;
pub mod socket;
pub mod syslog;

pub use console::ConsoleHandler;
pub use file::FileHandler;
pub use socket::SocketHandler;
pub use syslog::SyslogHandler;

// Re-export the trait so `use logpipe::handlers::*` is self-contained
pub use crate::core::{Delivery, Handler};
