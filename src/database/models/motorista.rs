use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{normalize_optional, require_text, FieldErrors, Validate};

/// A registered driver. `cnh` is the driver's license number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Motorista {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnh: Option<String>,
}

/// Payload for POST /motoristas/ and the full replacement sent by PUT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotoristaCreate {
    pub name: String,
    #[serde(default)]
    pub cnh: Option<String>,
}

impl Validate for MotoristaCreate {
    /// Check required fields and return a trimmed copy ready for storage
    fn validated(self) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name: self.name.trim().to_string(),
            cnh: normalize_optional(self.cnh),
        })
    }
}

impl MotoristaCreate {
    /// Materialize the row this payload describes under `id`
    pub fn into_record(self, id: i32) -> Motorista {
        Motorista {
            id,
            name: self.name,
            cnh: self.cnh,
        }
    }
}
