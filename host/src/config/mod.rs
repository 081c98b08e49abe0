// Host configuration: locale, currency, notification and confirmation defaults.
pub mod settings;

pub use settings::{ConfirmationLabels, HostSettings, NotificationSettings};
