use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_guard::catalog::Catalog;
use session_guard::config::Config;
use session_guard::routes;
use session_guard::utils::extract_user::ExtractSession;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Charger la configuration depuis .env
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();
    let catalog = web::Data::new(Catalog::seeded());
    let config = web::Data::new(config);

    tracing::info!("Démarrage du serveur sur http://{}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .app_data(catalog.clone())
            .wrap(ExtractSession)
            .wrap(
                Cors::default()
                    .allowed_origin(&config.allowed_origin) // Frontend SPA
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(web::scope("/auth").configure(routes::auth::config))
            .service(web::scope("/catalog").configure(routes::catalog::config))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
