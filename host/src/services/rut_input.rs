// Text fields that hold a RUT and tidy it up when they lose focus.
use serde::{Deserialize, Serialize};
use shared::rut;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RutInput {
    pub name: String,
    pub value: String,
    // Set by page initialization on every field marked as a RUT field.
    #[serde(default)]
    pub auto_format: bool,
}

impl RutInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            auto_format: false,
        }
    }

    // Reformats the value when auto-formatting is on and the field is not
    // empty. Returns whether the value changed.
    pub fn on_blur(&mut self) -> bool {
        if !self.auto_format || self.value.is_empty() {
            return false;
        }
        let formatted = rut::format(self.value.as_str());
        if formatted == self.value {
            return false;
        }
        tracing::trace!(field = %self.name, "Reformatted RUT input");
        self.value = formatted;
        true
    }

    pub fn is_valid(&self) -> bool {
        rut::validate(self.value.as_str())
    }
}
