// Host-side helpers: settings, capabilities and page setup around the
// RUT processor from the `shared` crate.

pub mod config;
pub mod error;
pub mod page;
pub mod services;
pub mod toolkit;

pub use config::HostSettings;
pub use error::HostError;
pub use toolkit::Toolkit;
