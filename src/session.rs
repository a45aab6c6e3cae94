//! Frontière entre la page envoyée par le serveur et le résolveur de permis.
//!
//! Le serveur embarque `auth.user` dans chaque page; ce module le construit
//! (côté serveur) et le normalise (côté client) sans jamais échouer.

use serde_json::{json, Map, Value};

use crate::models::permission::Permission;
use crate::models::user::{SessionUser, User};
use crate::models::Identifier;

impl SessionUser {
    /// Extrait l'utilisateur depuis les props de la page, la map `auth` ou
    /// l'objet utilisateur lui-même. Toute forme inattendue donne `None`.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let user = locate_user(payload)?;
        let obj = user.as_object()?;

        let permissions = match obj.get("permisos") {
            Some(Value::Array(items)) => normalize_permissions(items),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                tracing::debug!("`permisos` ignoré, tableau attendu: {}", other);
                Vec::new()
            }
        };

        Some(Self {
            id: obj.get("id").and_then(Identifier::from_value),
            name: string_field(obj, "name"),
            email: string_field(obj, "email"),
            role_id: obj.get("rol_id").and_then(Identifier::from_value),
            // Un rôle vide équivaut à aucun rôle
            role_name: string_field(obj, "rol_nombre").filter(|r| !r.is_empty()),
            permissions,
        })
    }
}

const USER_KEYS: [&str; 4] = ["id", "email", "rol_nombre", "permisos"];

// Trouve l'objet utilisateur quelle que soit l'enveloppe reçue
fn locate_user(payload: &Value) -> Option<&Value> {
    let obj = payload.as_object()?;

    if let Some(auth) = obj.get("auth") {
        return auth.as_object()?.get("user").filter(|u| u.is_object());
    }
    if let Some(props) = obj.get("props") {
        return locate_user(props);
    }
    if obj.contains_key("user") {
        return obj.get("user").filter(|u| u.is_object());
    }
    // Objet nu: accepté seulement s'il ressemble à un utilisateur
    if USER_KEYS.iter().any(|key| obj.contains_key(*key)) {
        return Some(payload);
    }
    None
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

fn normalize_permissions(items: &[Value]) -> Vec<Permission> {
    items
        .iter()
        .filter_map(|item| {
            let permission = Permission::from_value(item);
            if permission.is_none() {
                tracing::debug!("Entrée de permis ignorée: {}", item);
            }
            permission
        })
        .collect()
}

/// Construit la map `auth` partagée avec chaque page (`{"user": ...}`)
pub fn auth_props(user: Option<&User>) -> Value {
    let user = match user {
        Some(user) => user,
        None => return json!({ "user": null }),
    };

    let mut map = Map::new();
    map.insert("id".to_string(), json!(user.id));
    map.insert("name".to_string(), json!(user.name));
    map.insert("email".to_string(), json!(user.email));

    // Un utilisateur sans rôle ne porte ni `rol_*` ni `permisos`
    if let Some(role) = &user.role {
        map.insert("rol_id".to_string(), json!(role.id));
        map.insert("rol_nombre".to_string(), json!(role.name));
        map.insert("permisos".to_string(), json!(role.permissions));
    }

    json!({ "user": Value::Object(map) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::Role;

    #[test]
    fn reads_user_from_page_props() {
        let page = json!({
            "component": "Dashboard",
            "props": {
                "auth": {
                    "user": {
                        "id": 1,
                        "name": "Admin",
                        "email": "admin@tsf.com",
                        "rol_id": 1,
                        "rol_nombre": "admin",
                        "permisos": [
                            {
                                "id": 3,
                                "nombre": "crear users",
                                "modulo_id": 1,
                                "modulo_nombre": "Users"
                            }
                        ]
                    }
                }
            }
        });

        let user = SessionUser::from_payload(&page).expect("utilisateur attendu");
        assert_eq!(user.role_name.as_deref(), Some("admin"));
        assert_eq!(user.permissions.len(), 1);
        assert_eq!(user.permissions[0].id, Some(Identifier::Number(3)));
        assert_eq!(user.permissions[0].module_name.as_deref(), Some("Users"));
    }

    #[test]
    fn null_or_missing_user_is_anonymous() {
        assert!(SessionUser::from_payload(&json!({ "auth": { "user": null } })).is_none());
        assert!(SessionUser::from_payload(&json!({ "auth": {} })).is_none());
        assert!(SessionUser::from_payload(&json!({ "user": null })).is_none());
        assert!(SessionUser::from_payload(&json!(null)).is_none());
        assert!(SessionUser::from_payload(&json!("admin")).is_none());
        assert!(SessionUser::from_payload(&json!({ "auth": "oops" })).is_none());
    }

    #[test]
    fn page_without_auth_map_is_anonymous() {
        assert!(SessionUser::from_payload(&json!({})).is_none());
        let page = json!({ "component": "Dashboard", "props": { "errors": {} } });
        assert!(SessionUser::from_payload(&page).is_none());
        assert!(SessionUser::from_payload(&json!({ "errors": {}, "flash": null })).is_none());

        // Un objet utilisateur nu reste accepté
        let user = SessionUser::from_payload(&json!({ "email": "ana@tsf.com" }))
            .expect("utilisateur attendu");
        assert_eq!(user.email.as_deref(), Some("ana@tsf.com"));
    }

    #[test]
    fn empty_role_name_is_no_role() {
        let payload = json!({ "auth": { "user": { "id": 1, "rol_nombre": "" } } });
        let user = SessionUser::from_payload(&payload).expect("utilisateur attendu");
        assert_eq!(user.role_name, None);
    }

    #[test]
    fn malformed_fields_degrade_to_defaults() {
        let user = SessionUser::from_payload(&json!({
            "user": {
                "id": "u-1",
                "rol_nombre": 42,
                "permisos": [
                    "ver users",
                    { "modulo_nombre": "Users" },
                    { "nombre": "ver roles", "modulo_nombre": null },
                    { "nombre": "ver users", "modulo_nombre": "Users" }
                ]
            }
        }))
        .expect("utilisateur attendu");

        assert_eq!(user.id, Some(Identifier::Text("u-1".to_string())));
        assert_eq!(user.role_name, None);
        let names: Vec<&str> = user.permissions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ver roles", "ver users"]);
        assert_eq!(user.permissions[0].module_name, None);
    }

    #[test]
    fn non_array_permissions_become_empty() {
        let user = SessionUser::from_payload(&json!({ "user": { "permisos": "tous" } }))
            .expect("utilisateur attendu");
        assert!(user.permissions.is_empty());
    }

    #[test]
    fn auth_props_matches_shared_shape() {
        assert_eq!(auth_props(None), json!({ "user": null }));

        let role =
            Role::new(1, "admin").with_permissions(vec![Permission::new("ver users", "Users")]);
        let user = User {
            id: Identifier::Number(9),
            name: "Ana".to_string(),
            email: "ana@tsf.com".to_string(),
            role: Some(role),
        };
        let props = auth_props(Some(&user));
        assert_eq!(props["user"]["rol_nombre"], json!("admin"));
        assert_eq!(props["user"]["permisos"][0]["nombre"], json!("ver users"));
        assert_eq!(props["user"]["permisos"][0]["modulo_nombre"], json!("Users"));

        // Aller-retour vers le client
        let session = SessionUser::from_payload(&props).expect("utilisateur attendu");
        assert_eq!(session, SessionUser::from(&user));
    }

    #[test]
    fn user_without_role_has_no_role_keys() {
        let user = User {
            id: Identifier::Number(2),
            name: "Sin rol".to_string(),
            email: "x@tsf.com".to_string(),
            role: None,
        };
        let props = auth_props(Some(&user));
        let obj = props["user"].as_object().expect("objet attendu");
        assert!(!obj.contains_key("rol_nombre"));
        assert!(!obj.contains_key("permisos"));
    }
}
