// Transient notifications ("toasts").
//
// The center only tracks which notifications are on screen; drawing them
// is up to the `Notifier` the host plugs in.
use serde::{Deserialize, Serialize};

// Contextual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    #[default]
    Info,
    Light,
    Dark,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Primary => "primary",
            Severity::Secondary => "secondary",
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Light => "light",
            Severity::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

// Presents and hides notifications.
pub trait Notifier: Send {
    fn show(&mut self, notification: &Notification);
    fn hide(&mut self, id: u64);
}

// Emits notifications as log events. Useful for headless hosts.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show(&mut self, notification: &Notification) {
        let severity = notification.severity.as_str();
        match notification.severity {
            Severity::Danger => {
                tracing::error!(id = notification.id, severity, "{}", notification.message)
            }
            Severity::Warning => {
                tracing::warn!(id = notification.id, severity, "{}", notification.message)
            }
            _ => tracing::info!(id = notification.id, severity, "{}", notification.message),
        }
    }

    fn hide(&mut self, id: u64) {
        tracing::debug!(id, "Notification hidden");
    }
}

pub struct NotificationCenter {
    notifier: Box<dyn Notifier>,
    default_severity: Severity,
    next_id: u64,
    visible: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(notifier: Box<dyn Notifier>, default_severity: Severity) -> Self {
        Self {
            notifier,
            default_severity,
            next_id: 1,
            visible: Vec::new(),
        }
    }

    // Shows a message and returns the id of the new notification.
    // `None` uses the configured default severity.
    pub fn notify(&mut self, message: impl Into<String>, severity: Option<Severity>) -> u64 {
        let notification = Notification {
            id: self.next_id,
            message: message.into(),
            severity: severity.unwrap_or(self.default_severity),
        };
        self.next_id += 1;

        self.notifier.show(&notification);
        let id = notification.id;
        self.visible.push(notification);
        id
    }

    // Asks the presenter to hide a notification. Returns false if it is
    // not currently visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if !self.visible.iter().any(|n| n.id == id) {
            return false;
        }
        self.notifier.hide(id);
        self.on_hidden(id);
        true
    }

    // Forgets a notification once the presenter reports it gone, for
    // instance after it timed out on its own.
    pub fn on_hidden(&mut self, id: u64) {
        self.visible.retain(|n| n.id != id);
    }

    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("default_severity", &self.default_severity)
            .field("next_id", &self.next_id)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Event {
        Shown(Notification),
        Hidden(u64),
    }

    // Records what the center asked it to do.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingNotifier {
        pub(crate) events: Arc<Mutex<Vec<Event>>>,
    }

    impl Notifier for RecordingNotifier {
        fn show(&mut self, notification: &Notification) {
            self.events.lock().unwrap().push(Event::Shown(notification.clone()));
        }

        fn hide(&mut self, id: u64) {
            self.events.lock().unwrap().push(Event::Hidden(id));
        }
    }

    #[test]
    fn test_notify_uses_default_severity() {
        let recorder = RecordingNotifier::default();
        let mut center = NotificationCenter::new(Box::new(recorder.clone()), Severity::Info);

        let id = center.notify("Cliente guardado", None);

        assert_eq!(id, 1);
        assert_eq!(center.visible().len(), 1);
        assert_eq!(center.visible()[0].severity, Severity::Info);
        assert_eq!(
            recorder.events.lock().unwrap()[0],
            Event::Shown(Notification {
                id: 1,
                message: "Cliente guardado".to_string(),
                severity: Severity::Info,
            })
        );
    }

    #[test]
    fn test_notify_assigns_increasing_ids() {
        let recorder = RecordingNotifier::default();
        let mut center = NotificationCenter::new(Box::new(recorder), Severity::Info);
        let first = center.notify("uno", Some(Severity::Success));
        let second = center.notify("dos", Some(Severity::Danger));
        assert!(second > first);
        assert_eq!(center.visible()[1].severity, Severity::Danger);
    }

    #[test]
    fn test_dismiss_hides_and_forgets() {
        let recorder = RecordingNotifier::default();
        let mut center = NotificationCenter::new(Box::new(recorder.clone()), Severity::Info);
        let id = center.notify("Error al guardar", Some(Severity::Danger));

        assert!(center.dismiss(id));
        assert!(center.visible().is_empty());
        assert_eq!(recorder.events.lock().unwrap().last(), Some(&Event::Hidden(id)));

        // Already gone.
        assert!(!center.dismiss(id));
    }

    #[test]
    fn test_on_hidden_drops_without_calling_presenter() {
        let recorder = RecordingNotifier::default();
        let mut center = NotificationCenter::new(Box::new(recorder.clone()), Severity::Info);
        let keep = center.notify("a", None);
        let gone = center.notify("b", None);

        center.on_hidden(gone);

        assert_eq!(center.visible().len(), 1);
        assert_eq!(center.visible()[0].id, keep);
        assert_eq!(recorder.events.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Danger.as_str(), "danger");
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        let parsed: Severity = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(parsed, Severity::Success);
    }

    #[test]
    fn test_tracing_notifier_accepts_every_severity() {
        let mut center = NotificationCenter::new(Box::new(TracingNotifier), Severity::Info);
        for severity in [Severity::Danger, Severity::Warning, Severity::Dark] {
            let id = center.notify("mensaje", Some(severity));
            assert!(center.dismiss(id));
        }
    }
}
