#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::gateway::Gateway;
#[cfg(feature = "server")]
use crate::gateway::http::HttpGateway;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod services;
pub mod storage;

#[cfg(feature = "server")]
pub mod gateway;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;

/// Cookie `Domain` attribute for the session: host-only for `localhost` and
/// bare IP addresses, otherwise shared with subdomains.
#[cfg(feature = "server")]
pub fn session_cookie_domain(domain: &str) -> Option<String> {
    let domain = domain.trim().trim_start_matches('.');
    if domain.is_empty() || domain == "localhost" || domain.parse::<std::net::IpAddr>().is_ok() {
        None
    } else {
        Some(format!(".{domain}"))
    }
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let gateway = HttpGateway::new(&server_config.gateway_url, &server_config.gateway_token)
        .map_err(|e| std::io::Error::other(format!("Failed to build backend gateway: {e}")))?;
    let gateway: Arc<dyn Gateway> = Arc::new(gateway);

    if server_config.seed_demo_data {
        let gateway = gateway.clone();
        actix_web::rt::spawn(async move {
            match gateway.initialize_demo_data().await {
                Ok(()) => log::info!("Demo data initialized"),
                Err(err) => log::warn!("Failed to initialize demo data: {err}"),
            }
        });
    }

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let gateway = web::Data::from(gateway);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(session_cookie_domain(&server_config.domain))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &server_config.assets_dir))
            .configure(routes::configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(gateway.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_get_host_only_cookies() {
        assert_eq!(session_cookie_domain("localhost"), None);
        assert_eq!(session_cookie_domain("127.0.0.1"), None);
        assert_eq!(session_cookie_domain(""), None);
    }

    #[test]
    fn real_domains_are_shared_with_subdomains() {
        assert_eq!(
            session_cookie_domain("cielo.marketing"),
            Some(".cielo.marketing".to_string())
        );
        assert_eq!(
            session_cookie_domain(".cielo.marketing"),
            Some(".cielo.marketing".to_string())
        );
    }
}
