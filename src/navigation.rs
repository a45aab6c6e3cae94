//! Menu latéral filtré selon l'accès aux modules.

use serde::Serialize;

use crate::auth::Auth;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub route: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    #[serde(skip)]
    pub module: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: Vec<MenuItem>,
}

const fn item(
    route: &'static str,
    label: &'static str,
    icon: &'static str,
    module: &'static str,
) -> MenuItem {
    MenuItem {
        route,
        label,
        icon,
        module: Some(module),
    }
}

/// Menu complet, avant filtrage
pub fn full_menu() -> Vec<MenuSection> {
    vec![
        MenuSection {
            title: "Dashboard",
            icon: "fas fa-home",
            items: vec![MenuItem {
                route: "dashboard",
                label: "Dashboard",
                icon: "fas fa-home",
                module: None,
            }],
        },
        MenuSection {
            title: "Catálogos",
            icon: "fas fa-book",
            items: vec![item("users.index", "Usuarios", "bi bi-people", "Users")],
        },
        MenuSection {
            title: "Configuración",
            icon: "fas fa-cogs",
            items: vec![
                item("configuracions.index", "Configuración", "bi bi-gear", "Configuracion"),
                item("empresas.index", "Empresa", "bi bi-building", "Empresas"),
                item("auditoria.index", "Logs de Auditoría", "fas fa-file-alt", "Auditoria"),
                item("roles.index", "Roles", "bi bi-shield-lock", "Roles"),
            ],
        },
    ]
}

/// Garde les entrées accessibles et retire les sections vides
pub fn visible_menu(auth: &Auth) -> Vec<MenuSection> {
    full_menu()
        .into_iter()
        .filter_map(|mut section| {
            section.items.retain(|item| match item.module {
                Some(module) => auth.has_module_access(module),
                None => true,
            });
            if section.items.is_empty() {
                None
            } else {
                Some(section)
            }
        })
        .collect()
}
