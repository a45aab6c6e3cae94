use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::SessionUser;

/// Durée de validité d'un jeton de session
pub const TOKEN_TTL_HOURS: i64 = 1;

/// Structure des claims d'un JWT: l'utilisateur de session y est embarqué
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Identifiant de l'utilisateur
    pub exp: usize,  // Date d'expiration en timestamp UNIX
    pub user: SessionUser,
}

/// Crée un JWT portant l'identité, le rôle et les permis de l'utilisateur
pub fn create_token(
    user: &SessionUser,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration =
        (chrono::Utc::now() + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;

    let claims = Claims {
        sub: user.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        exp: expiration,
        user: user.clone(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_ref()))
}

/// Valide un JWT et renvoie les claims s'ils sont valides
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}
