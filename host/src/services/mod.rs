// Capabilities the host application provides to the helpers, and the
// small amount of state the helpers keep around them.
pub mod confirmation;
pub mod currency;
pub mod notifications;
pub mod rut_input;
