use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{normalize_optional, require_text, FieldErrors, Validate};

/// A vehicle, owned by exactly one driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Veiculo {
    pub id: i32,
    pub motorista_id: i32,
    pub plate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Payload for POST /veiculos/ and the full replacement sent by PUT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VeiculoCreate {
    pub motorista_id: i32,
    pub plate: String,
    #[serde(default)]
    pub model: Option<String>,
}

impl Validate for VeiculoCreate {
    fn validated(self) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "plate", &self.plate);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            motorista_id: self.motorista_id,
            plate: self.plate.trim().to_string(),
            model: normalize_optional(self.model),
        })
    }
}

impl VeiculoCreate {
    pub fn into_record(self, id: i32) -> Veiculo {
        Veiculo {
            id,
            motorista_id: self.motorista_id,
            plate: self.plate,
            model: self.model,
        }
    }
}
