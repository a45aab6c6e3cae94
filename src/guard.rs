//! Garde déclarative: affiche le contenu, un remplacement, un avertissement ou rien.
//!
//! Un seul mode d'exigence est évalué, le premier fourni dans l'ordre:
//! permis → un des permis → tous les permis → module → rôle → un des rôles.

use serde::{Deserialize, Serialize};

use crate::auth::Auth;

/// Libellé du rôle quand l'utilisateur n'en a aucun
pub const NO_ROLE_LABEL: &str = "Non attribué";

/// Exigence effectivement retenue par la garde
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Requirement {
    Permission(String),
    AnyPermission(Vec<String>),
    AllPermissions(Vec<String>),
    Module(String),
    Role(String),
    AnyRole(Vec<String>),
}

impl Requirement {
    pub fn is_met(&self, auth: &Auth) -> bool {
        match self {
            Requirement::Permission(name) => auth.has_permission(name),
            Requirement::AnyPermission(names) => auth.has_any_permission(names.as_slice()),
            Requirement::AllPermissions(names) => auth.has_all_permissions(names.as_slice()),
            Requirement::Module(name) => auth.has_module_access(name),
            Requirement::Role(name) => auth.has_role(name),
            Requirement::AnyRole(names) => auth.has_any_role(names.as_slice()),
        }
    }

    /// Message affiché quand l'exigence n'est pas satisfaite
    pub fn describe(&self) -> String {
        match self {
            Requirement::Permission(name) => format!("Permission requise : {}", name),
            Requirement::AnyPermission(names) => {
                format!("Une des permissions requise : {}", names.join(", "))
            }
            Requirement::AllPermissions(names) => {
                format!("Toutes les permissions requises : {}", names.join(", "))
            }
            Requirement::Module(name) => format!("Accès au module requis : {}", name),
            Requirement::Role(name) => format!("Rôle requis : {}", name),
            Requirement::AnyRole(names) => format!("Un des rôles requis : {}", names.join(", ")),
        }
    }
}

/// Conditions déclarées sur la garde (toutes optionnelles)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardProps {
    pub permission: Option<String>,
    pub permissions: Vec<String>,
    pub all_permissions: Vec<String>,
    pub module: Option<String>,
    pub role: Option<String>,
    pub roles: Vec<String>,
}

type Extractor = fn(&GuardProps) -> Option<Requirement>;

// Ordre de priorité, à ne pas réordonner
const PRIORITY: [Extractor; 6] = [
    |p| non_empty(&p.permission).map(Requirement::Permission),
    |p| non_empty_list(&p.permissions).map(Requirement::AnyPermission),
    |p| non_empty_list(&p.all_permissions).map(Requirement::AllPermissions),
    |p| non_empty(&p.module).map(Requirement::Module),
    |p| non_empty(&p.role).map(Requirement::Role),
    |p| non_empty_list(&p.roles).map(Requirement::AnyRole),
];

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn non_empty_list(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

impl GuardProps {
    /// Premier mode fourni; `None` si aucune condition n'est déclarée
    pub fn requirement(&self) -> Option<Requirement> {
        PRIORITY.iter().find_map(|extract| extract(self))
    }

    pub fn check(&self, auth: &Auth) -> Decision {
        match self.requirement() {
            Some(requirement) => Decision {
                has_access: requirement.is_met(auth),
                message: requirement.describe(),
                requirement: Some(requirement),
            },
            // Sans condition, l'accès est refusé
            None => Decision {
                has_access: false,
                requirement: None,
                message: String::new(),
            },
        }
    }
}

/// Résultat de l'évaluation d'une garde
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub has_access: bool,
    pub requirement: Option<Requirement>,
    pub message: String,
}

/// Panneau d'avertissement standard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningPanel {
    pub message: String,
    pub role: String,
}

impl WarningPanel {
    pub fn new(decision: &Decision, auth: &Auth) -> Self {
        Self {
            message: decision.message.clone(),
            role: auth.role_name().unwrap_or(NO_ROLE_LABEL).to_string(),
        }
    }
}

/// Ce que la garde produit pour un rendu donné
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<T> {
    Children(T),
    Fallback(T),
    Warning(WarningPanel),
    Nothing,
}

/// Garde de permis, réévaluée à chaque rendu
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionGuard<T> {
    props: GuardProps,
    fallback: Option<T>,
    show_error: bool,
}

impl<T> Default for PermissionGuard<T> {
    fn default() -> Self {
        Self {
            props: GuardProps::default(),
            fallback: None,
            show_error: false,
        }
    }
}

impl<T> PermissionGuard<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_props(props: GuardProps) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    pub fn permission(mut self, name: impl Into<String>) -> Self {
        self.props.permission = Some(name.into());
        self
    }

    pub fn permissions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props.permissions = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn all_permissions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props.all_permissions = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn module(mut self, name: impl Into<String>) -> Self {
        self.props.module = Some(name.into());
        self
    }

    pub fn role(mut self, name: impl Into<String>) -> Self {
        self.props.role = Some(name.into());
        self
    }

    pub fn roles<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props.roles = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn fallback(mut self, fallback: T) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn show_error(mut self, show: bool) -> Self {
        self.show_error = show;
        self
    }

    pub fn props(&self) -> &GuardProps {
        &self.props
    }

    pub fn check(&self, auth: &Auth) -> Decision {
        self.props.check(auth)
    }

    /// Contenu si accès, sinon remplacement, sinon avertissement si demandé, sinon rien
    pub fn render(self, auth: &Auth, children: T) -> Rendered<T> {
        let decision = self.props.check(auth);

        if decision.has_access {
            return Rendered::Children(children);
        }

        tracing::trace!(exigence = %decision.message, "accès refusé par la garde");

        if let Some(fallback) = self.fallback {
            return Rendered::Fallback(fallback);
        }
        if self.show_error {
            return Rendered::Warning(WarningPanel::new(&decision, auth));
        }
        Rendered::Nothing
    }
}
