use serde::{Deserialize, Serialize};

use super::Identifier;

/// Représente un permis attaché au rôle de l'utilisateur
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(rename = "nombre")]
    pub name: String, // ex. "crear users"
    #[serde(rename = "modulo_id", default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<Identifier>,
    #[serde(rename = "modulo_nombre", default)]
    pub module_name: Option<String>,
}

impl Permission {
    pub fn new(name: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            module_id: None,
            module_name: Some(module_name.into()),
        }
    }

    /// Normalise une entrée brute de `permisos`; `None` si `nombre` manque
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = obj.get("nombre")?.as_str()?.to_string();

        Some(Self {
            id: obj.get("id").and_then(Identifier::from_value),
            name,
            module_id: obj.get("modulo_id").and_then(Identifier::from_value),
            module_name: obj
                .get("modulo_nombre")
                .and_then(|m| m.as_str())
                .map(|m| m.to_string()),
        })
    }

    /// Vrai si le permis appartient au module donné
    pub fn belongs_to(&self, module_name: &str) -> bool {
        self.module_name.as_deref() == Some(module_name)
    }
}
