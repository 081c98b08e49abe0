// Currency rendering.
use shared::utils::group_thousands;

use crate::config::HostSettings;
use crate::error::HostError;

// Turns an amount into localized currency text.
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: f64) -> String;
}

// Chilean pesos as shown in the `es-CL` locale: `$1.234.567`, negatives as
// `$-1.234`. Amounts are rounded half away from zero to whole pesos.
// Non-finite amounts render as `$0` rather than `$NaN`/`$∞`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClpFormatter;

impl ClpFormatter {
    pub fn from_settings(settings: &HostSettings) -> Result<Self, HostError> {
        if !settings.currency.eq_ignore_ascii_case("CLP") {
            return Err(HostError::UnsupportedCurrency(settings.currency.clone()));
        }
        if !settings.locale.eq_ignore_ascii_case("es-CL") {
            return Err(HostError::UnsupportedLocale(settings.locale.clone()));
        }
        Ok(ClpFormatter)
    }
}

impl CurrencyFormatter for ClpFormatter {
    fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            tracing::warn!("Cannot format non-finite amount {} as CLP", amount);
            return "$0".to_string();
        }

        let rounded = amount.round();
        let digits = format!("{:.0}", rounded.abs());
        // Sign follows the currency symbol; -0.4 rounds to -0 and keeps it.
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        format!("${}{}", sign, group_thousands(&digits, '.'))
    }
}
