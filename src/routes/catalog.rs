use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::catalog::{Catalog, ACTIONS, DEFAULT_MODULES};

// Route renvoyant le catalogue des permis connus
#[get("/permissions")]
async fn list_permissions(catalog: web::Data<Catalog>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "modulos": DEFAULT_MODULES,
        "acciones": ACTIONS,
        "permisos": catalog.permissions(),
    }))
}

/// Configuration des routes du catalogue
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_permissions);
}
