// The helper operations the application pages call, gathered in one place.
use shared::rut;

use crate::config::HostSettings;
use crate::error::HostError;
use crate::services::confirmation::{
    request_confirmation, ConfirmationPresenter, PendingConfirmation,
};
use crate::services::currency::{ClpFormatter, CurrencyFormatter};
use crate::services::notifications::{Notification, NotificationCenter, Notifier, Severity};

pub struct Toolkit {
    settings: HostSettings,
    currency: Box<dyn CurrencyFormatter>,
    notifications: NotificationCenter,
    confirmations: Box<dyn ConfirmationPresenter>,
}

impl Toolkit {
    pub fn new(
        settings: HostSettings,
        currency: Box<dyn CurrencyFormatter>,
        notifier: Box<dyn Notifier>,
        confirmations: Box<dyn ConfirmationPresenter>,
    ) -> Self {
        let notifications =
            NotificationCenter::new(notifier, settings.notifications.default_severity);
        Self {
            settings,
            currency,
            notifications,
            confirmations,
        }
    }

    // Fails when the settings ask for a currency or locale the CLP
    // formatter does not render.
    pub fn with_clp(
        settings: HostSettings,
        notifier: Box<dyn Notifier>,
        confirmations: Box<dyn ConfirmationPresenter>,
    ) -> Result<Self, HostError> {
        let currency = ClpFormatter::from_settings(&settings)?;
        Ok(Self::new(settings, Box::new(currency), notifier, confirmations))
    }

    pub fn settings(&self) -> &HostSettings {
        &self.settings
    }

    pub fn format_currency(&self, amount: f64) -> String {
        self.currency.format(amount)
    }

    pub fn format_rut(&self, raw: &str) -> String {
        rut::format(raw)
    }

    pub fn validate_rut(&self, raw: &str) -> bool {
        rut::validate(raw)
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Option<Severity>) -> u64 {
        self.notifications.notify(message, severity)
    }

    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        self.notifications.dismiss(id)
    }

    // Called by the host when a notification went away on its own, for
    // instance after its display timeout.
    pub fn notification_hidden(&mut self, id: u64) {
        self.notifications.on_hidden(id);
    }

    pub fn visible_notifications(&self) -> &[Notification] {
        self.notifications.visible()
    }

    // Resolves to true only if the user explicitly confirms.
    pub fn confirm_deletion(&self, message: impl Into<String>) -> PendingConfirmation {
        let (request, pending) = request_confirmation(message, &self.settings.confirmation);
        self.confirmations.present(request);
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::confirmation::tests::QueuedPresenter;
    use crate::services::notifications::tests::RecordingNotifier;
    use std::sync::Arc;

    struct SharedPresenter(Arc<QueuedPresenter>);

    impl ConfirmationPresenter for SharedPresenter {
        fn present(&self, request: crate::services::confirmation::ConfirmationRequest) {
            self.0.present(request);
        }
    }

    fn toolkit() -> (Toolkit, Arc<QueuedPresenter>) {
        let presenter = Arc::new(QueuedPresenter::default());
        let toolkit = Toolkit::with_clp(
            HostSettings::default(),
            Box::new(RecordingNotifier::default()),
            Box::new(SharedPresenter(presenter.clone())),
        )
        .unwrap();
        (toolkit, presenter)
    }

    #[test]
    fn test_rut_operations() {
        let (toolkit, _) = toolkit();
        assert_eq!(toolkit.format_rut("123456785"), "12.345.678-5");
        assert!(toolkit.validate_rut("12.345.678-5"));
        assert!(!toolkit.validate_rut("7593203-K"));
    }

    #[test]
    fn test_format_currency() {
        let (toolkit, _) = toolkit();
        assert_eq!(toolkit.format_currency(15990.0), "$15.990");
    }

    #[test]
    fn test_notify_and_dismiss() {
        let (mut toolkit, _) = toolkit();
        let id = toolkit.notify("RUT inválido", Some(Severity::Danger));
        assert_eq!(toolkit.visible_notifications().len(), 1);
        assert!(toolkit.dismiss_notification(id));
        assert!(toolkit.visible_notifications().is_empty());
    }

    #[test]
    fn test_auto_hidden_notification_leaves_visible_list() {
        let recorder = RecordingNotifier::default();
        let mut toolkit = Toolkit::with_clp(
            HostSettings::default(),
            Box::new(recorder.clone()),
            Box::new(QueuedPresenter::default()),
        )
        .unwrap();
        let expired = toolkit.notify("Guardado", Some(Severity::Success));
        let shown = toolkit.notify("Sincronizando", None);

        toolkit.notification_hidden(expired);

        let visible: Vec<u64> = toolkit.visible_notifications().iter().map(|n| n.id).collect();
        assert_eq!(visible, vec![shown]);
        // The presenter hid it itself; it is not asked to hide it again.
        assert_eq!(recorder.events.lock().unwrap().len(), 2);
        assert!(!toolkit.dismiss_notification(expired));
    }

    #[tokio::test]
    async fn test_confirm_deletion_accepted() {
        let (toolkit, presenter) = toolkit();
        let pending = toolkit.confirm_deletion("¿Eliminar cliente 12.345.678-5?");

        let request = presenter.take().unwrap();
        assert_eq!(request.confirm_label, "Eliminar");
        request.accept();

        assert!(pending.await);
    }

    #[tokio::test]
    async fn test_confirm_deletion_dismissed() {
        let (toolkit, presenter) = toolkit();
        let pending = toolkit.confirm_deletion("¿Eliminar?");
        drop(presenter.take());
        assert!(!pending.await);
    }

    #[test]
    fn test_with_clp_rejects_other_currency() {
        let settings = HostSettings {
            currency: "USD".to_string(),
            ..HostSettings::default()
        };
        let result = Toolkit::with_clp(
            settings,
            Box::new(RecordingNotifier::default()),
            Box::new(QueuedPresenter::default()),
        );
        assert!(matches!(result, Err(HostError::UnsupportedCurrency(_))));
    }
}
