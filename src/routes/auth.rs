use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

use crate::auth::Auth;
use crate::guard::{GuardProps, WarningPanel, NO_ROLE_LABEL};
use crate::navigation;

/// Corps de `POST /auth/check`: conditions de la garde plus `showError`
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    #[serde(flatten)]
    pub props: GuardProps,
    #[serde(default)]
    pub show_error: bool,
}

#[derive(Serialize)]
struct CheckResponse {
    has_access: bool,
    requirement: Option<crate::guard::Requirement>,
    message: String,
    warning: Option<WarningPanel>,
}

#[derive(Serialize)]
struct ModuleSummary<'a> {
    modulo_nombre: &'a str,
    total: usize,
}

// Route renvoyant la map `auth` telle que partagée avec chaque page
#[get("/me")]
async fn me(auth: Auth) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "auth": { "user": auth.user() },
        "modulos": auth.get_modules(),
    }))
}

// Route de diagnostic: résumé de l'identité, du rôle et des permis
#[get("/debug")]
async fn debug(auth: Auth) -> impl Responder {
    let user = match auth.user() {
        Some(user) => user,
        None => {
            return HttpResponse::Ok().json(json!({
                "authenticated": false,
                "message": "Utilisateur non authentifié",
            }))
        }
    };

    let modules: Vec<ModuleSummary> = auth
        .get_modules()
        .into_iter()
        .map(|module| ModuleSummary {
            modulo_nombre: module,
            total: auth.get_permissions_by_module(module).len(),
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "authenticated": true,
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "rol_id": auth.role_id(),
        "rol_nombre": auth.role_name().unwrap_or(NO_ROLE_LABEL),
        "total_permisos": auth.permissions().len(),
        "modulos": modules,
    }))
}

// Route listant les permis d'un module
#[get("/modules/{name}/permissions")]
async fn module_permissions(auth: Auth, path: web::Path<String>) -> impl Responder {
    let module = path.into_inner();
    HttpResponse::Ok().json(auth.get_permissions_by_module(&module))
}

// Route évaluant une garde pour l'utilisateur courant
#[post("/check")]
async fn check(auth: Auth, body: web::Json<CheckRequest>) -> impl Responder {
    let request = body.into_inner();
    let decision = request.props.check(&auth);

    // Pas de remplacement côté HTTP: refus + showError donne le panneau
    let warning = if !decision.has_access && request.show_error {
        Some(WarningPanel::new(&decision, &auth))
    } else {
        None
    };

    HttpResponse::Ok().json(CheckResponse {
        has_access: decision.has_access,
        requirement: decision.requirement,
        message: decision.message,
        warning,
    })
}

// Route renvoyant le menu visible pour l'utilisateur courant
#[get("/menu")]
async fn menu(auth: Auth) -> impl Responder {
    HttpResponse::Ok().json(navigation::visible_menu(&auth))
}

/// Configuration des routes d'authentification
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(me);
    cfg.service(debug);
    cfg.service(module_permissions);
    cfg.service(check);
    cfg.service(menu);
}
