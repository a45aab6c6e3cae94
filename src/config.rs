use dotenvy::dotenv;
use std::env;

use crate::error::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Structure pour stocker la configuration de l'application
#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub bind_addr: String,
    pub allowed_origin: String,
}

impl Config {
    /// Charge les variables d'environnement et initialise la configuration
    pub fn from_env() -> Result<Self, AppError> {
        // Charge le fichier `.env` s'il existe
        dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(AppError::MissingVar("JWT_SECRET"))?;

        Ok(Self {
            jwt_secret,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
        })
    }

    /// Configuration avec les valeurs par défaut, pour les tests
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}
