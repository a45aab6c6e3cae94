pub mod permission;
pub mod role;
pub mod user;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiant tel que livré par le serveur (entier ou texte)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Identifier {
    /// Lit un identifiant depuis une valeur JSON quelconque
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(Identifier::Number),
            serde_json::Value::String(s) if !s.is_empty() => Some(Identifier::Text(s.clone())),
            _ => None,
        }
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Number(id)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identifier_accepts_numbers_and_text() {
        assert_eq!(Identifier::from_value(&json!(7)), Some(Identifier::Number(7)));
        assert_eq!(
            Identifier::from_value(&json!("a1")),
            Some(Identifier::Text("a1".to_string()))
        );
        assert_eq!(Identifier::from_value(&json!(null)), None);
        assert_eq!(Identifier::from_value(&json!(1.5)), None);
    }
}
