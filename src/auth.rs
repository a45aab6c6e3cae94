//! Résolveur de permis: prédicats purs calculés à partir de l'utilisateur de session.
//!
//! Toutes les fonctions sont totales. Sans utilisateur, chaque prédicat renvoie
//! `false` et chaque collection est vide.

use serde_json::Value;

use crate::models::permission::Permission;
use crate::models::user::SessionUser;
use crate::models::Identifier;

/// État d'authentification d'une page, injecté explicitement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Auth {
    user: Option<SessionUser>,
}

impl Auth {
    pub fn new(user: Option<SessionUser>) -> Self {
        Self { user }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Construit le résolveur depuis les props brutes de la page
    pub fn from_payload(payload: &Value) -> Self {
        Self::new(SessionUser::from_payload(payload))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role_id(&self) -> Option<&Identifier> {
        self.user.as_ref().and_then(|u| u.role_id.as_ref())
    }

    pub fn role_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.role_name.as_deref())
            .filter(|r| !r.is_empty())
    }

    pub fn permissions(&self) -> &[Permission] {
        self.user
            .as_ref()
            .map(|u| u.permissions.as_slice())
            .unwrap_or(&[])
    }

    /// Comparaison exacte, sensible à la casse
    pub fn has_role(&self, name: &str) -> bool {
        self.role_name() == Some(name)
    }

    pub fn has_any_role<S: AsRef<str>>(&self, names: &[S]) -> bool {
        match self.role_name() {
            Some(role) => names.iter().any(|n| n.as_ref() == role),
            None => false,
        }
    }

    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions().iter().any(|p| p.name == name)
    }

    pub fn has_any_permission<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|n| self.has_permission(n.as_ref()))
    }

    /// Une liste vide ne donne jamais accès
    pub fn has_all_permissions<S: AsRef<str>>(&self, names: &[S]) -> bool {
        !names.is_empty() && names.iter().all(|n| self.has_permission(n.as_ref()))
    }

    pub fn has_module_access(&self, module_name: &str) -> bool {
        self.permissions().iter().any(|p| p.belongs_to(module_name))
    }

    pub fn get_permissions_by_module(&self, module_name: &str) -> Vec<&Permission> {
        self.permissions()
            .iter()
            .filter(|p| p.belongs_to(module_name))
            .collect()
    }

    /// Modules distincts, dans l'ordre de première apparition
    pub fn get_modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = Vec::new();
        for module in self.permissions().iter().filter_map(|p| p.module_name.as_deref()) {
            if !modules.contains(&module) {
                modules.push(module);
            }
        }
        modules
    }
}

impl From<SessionUser> for Auth {
    fn from(user: SessionUser) -> Self {
        Self::new(Some(user))
    }
}
