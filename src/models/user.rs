use serde::{Deserialize, Serialize};

use super::permission::Permission;
use super::role::Role;
use super::Identifier;

/// Utilisateur côté serveur, source de l'identité embarquée dans chaque page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Identifier,
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

/// Utilisateur tel qu'il est livré dans `auth.user` (lecture seule pour le client)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "rol_id", default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<Identifier>,
    #[serde(rename = "rol_nombre", default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(rename = "permisos", default)]
    pub permissions: Vec<Permission>,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        let role = user.role.as_ref();
        Self {
            id: Some(user.id.clone()),
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            role_id: role.and_then(|r| r.id.clone()),
            role_name: role.map(|r| r.name.clone()),
            permissions: role.map(|r| r.permissions.clone()).unwrap_or_default(),
        }
    }
}
