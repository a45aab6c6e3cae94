//! Données de référence: modules, actions CRUD et rôle administrateur.

use crate::models::permission::Permission;
use crate::models::role::Role;
use crate::models::Identifier;

pub const DEFAULT_MODULES: [&str; 5] = ["Users", "Roles", "Configuracion", "Empresas", "Auditoria"];
pub const ACTIONS: [&str; 4] = ["ver", "crear", "editar", "eliminar"];
pub const ADMIN_ROLE: &str = "admin";

/// Nom d'un permis: action suivie du module en minuscules ("crear users")
pub fn permission_name(action: &str, module: &str) -> String {
    format!("{} {}", action, module.to_lowercase())
}

/// Catalogue des permis connus, numérotés dans l'ordre de création
#[derive(Debug, Clone)]
pub struct Catalog {
    permissions: Vec<Permission>,
}

impl Catalog {
    /// Construit le catalogue par défaut (modules × actions)
    pub fn seeded() -> Self {
        Self::with_modules(&DEFAULT_MODULES)
    }

    pub fn with_modules(modules: &[&str]) -> Self {
        let mut permissions = Vec::with_capacity(modules.len() * ACTIONS.len());

        for (module_index, module) in modules.iter().enumerate() {
            for action in ACTIONS {
                permissions.push(Permission {
                    id: Some(Identifier::Number(permissions.len() as i64 + 1)),
                    name: permission_name(action, module),
                    module_id: Some(Identifier::Number(module_index as i64 + 1)),
                    module_name: Some(module.to_string()),
                });
            }
        }

        tracing::debug!("Catalogue initialisé avec {} permis", permissions.len());
        Self { permissions }
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn find(&self, name: &str) -> Option<&Permission> {
        self.permissions.iter().find(|p| p.name == name)
    }

    /// Rôle administrateur: reçoit tous les permis du catalogue
    pub fn admin_role(&self) -> Role {
        Role::new(1, ADMIN_ROLE).with_permissions(self.permissions.clone())
    }

    /// Rôle restreint aux permis nommés (les noms inconnus sont ignorés)
    pub fn role_with(&self, id: i64, name: &str, permission_names: &[&str]) -> Role {
        let permissions = permission_names
            .iter()
            .filter_map(|n| self.find(n).cloned())
            .collect();
        Role::new(id, name).with_permissions(permissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Auth;
    use crate::models::user::SessionUser;

    #[test]
    fn seeded_catalog_covers_every_module_and_action() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.permissions().len(), 20);
        assert!(catalog.find("crear users").is_some());
        assert!(catalog.find("eliminar auditoria").is_some());
        assert_eq!(
            catalog.find("ver configuracion").and_then(|p| p.module_name.as_deref()),
            Some("Configuracion")
        );
    }

    #[test]
    fn admin_sees_all_modules() {
        let catalog = Catalog::seeded();
        let role = catalog.admin_role();
        let auth = Auth::from(SessionUser {
            role_name: Some(role.name.clone()),
            permissions: role.permissions,
            ..Default::default()
        });
        assert_eq!(auth.get_modules(), DEFAULT_MODULES.to_vec());
        assert!(auth.has_role(ADMIN_ROLE));
    }

    #[test]
    fn restricted_role_ignores_unknown_names() {
        let role = Catalog::seeded().role_with(2, "lector", &["ver users", "volar"]);
        assert_eq!(role.permissions.len(), 1);
        assert_eq!(role.permissions[0].name, "ver users");
    }
}
