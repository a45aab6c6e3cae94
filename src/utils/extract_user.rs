use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ok, ready, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::auth::Auth;
use crate::config::Config;
use crate::error::AppError;
use crate::models::user::SessionUser;
use crate::utils::jwt;

// Lit le jeton Bearer et place l'utilisateur de session dans les extensions.
// Sans jeton, la requête continue en anonyme.
pub struct ExtractSession;

impl<S, B> Transform<S, ServiceRequest> for ExtractSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ExtractSessionMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ExtractSessionMiddleware {
            service: Rc::new(service),
        })
    }
}

pub struct ExtractSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ExtractSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if let Some(user) = session_from_request(&req)? {
                tracing::debug!(role = ?user.role_name, "session extraite du jeton");
                req.extensions_mut().insert(user);
            }

            service.call(req).await
        })
    }
}

fn session_from_request(req: &ServiceRequest) -> Result<Option<SessionUser>, AppError> {
    let auth_header = match req.headers().get("Authorization") {
        Some(header) => header,
        None => return Ok(None),
    };
    let auth_str = auth_header.to_str().map_err(|_| AppError::MalformedHeader)?;

    let token = match auth_str.strip_prefix("Bearer ") {
        Some(token) => token.trim(),
        None => return Ok(None),
    };

    let secret = match req.app_data::<web::Data<Config>>() {
        Some(config) => config.jwt_secret.clone(),
        None => {
            tracing::error!("Configuration absente, jeton ignoré");
            return Ok(None);
        }
    };

    match jwt::validate_token(token, &secret) {
        Ok(claims) => Ok(Some(claims.user)),
        Err(err) => {
            tracing::warn!("Jeton refusé: {}", err);
            Err(AppError::InvalidToken(err))
        }
    }
}

/// Le résolveur s'obtient directement comme argument de handler
impl FromRequest for Auth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<SessionUser>().cloned();
        ready(Ok(Auth::new(user)))
    }
}
