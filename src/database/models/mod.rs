pub mod motorista;
pub mod veiculo;

pub use motorista::{Motorista, MotoristaCreate};
pub use veiculo::{Veiculo, VeiculoCreate};

use std::collections::HashMap;

/// Field name -> message, as surfaced in `ApiError::ValidationError`
pub type FieldErrors = HashMap<String, String>;

/// Request payloads that check themselves before reaching a service
pub trait Validate: Sized {
    /// Return a normalized copy, or every field that failed
    fn validated(self) -> Result<Self, FieldErrors>;
}

/// Record a blank-text error for `field` when `value` is empty after trimming
pub(crate) fn require_text(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), "This field is required".to_string());
    }
}

/// Trim an optional text field, collapsing blank strings to `None`
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
