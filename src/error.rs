use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Erreurs de la couche HTTP (le résolveur lui-même n'échoue jamais)
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} n'est pas défini dans .env")]
    MissingVar(&'static str),

    #[error("Jeton JWT invalide ou expiré")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("En-tête Authorization mal formé")]
    MalformedHeader,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingVar(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidToken(_) | AppError::MalformedHeader => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
