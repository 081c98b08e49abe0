// Pure helpers shared by every host of the application.
// Nothing in this crate touches I/O, configuration or logging.

pub mod models;
pub mod rut;
pub mod utils;

pub use models::{Rut, RutError};
pub use rut::RawText;
