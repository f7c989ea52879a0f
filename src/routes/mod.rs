//! HTTP surface of the portal.

use std::sync::Arc;

use actix_web::{HttpResponse, http::header, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::domain::activity::ActivityEvent;
use crate::gateway::Gateway;

pub mod archive;
pub mod auth;
pub mod menus;
pub mod service;
pub mod shell;

/// Registers every portal route. The catch-all shell routes come last.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::show_login)
        .service(auth::login)
        .service(auth::logout)
        .service(menus::toggle_menu_group)
        .service(archive::select_archive_item)
        .service(archive::clear_archive_item)
        .service(service::request_service)
        .service(shell::index)
        .service(shell::show_shell);
}

/// Maps flash levels onto Bootstrap alert classes.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every template: pending flash alerts.
pub fn base_context(flash_messages: &IncomingFlashMessages) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// `303 See Other` to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Reports `event` in the background; failures are only logged.
pub fn report_activity(gateway: Arc<dyn Gateway>, event: ActivityEvent) {
    actix_web::rt::spawn(async move {
        if let Err(err) = gateway.log_activity(&event).await {
            log::warn!("Failed to log {:?} activity: {err}", event.action);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_level_to_str_mappings() {
        assert_eq!(alert_level_to_str(&Level::Error), "danger");
        assert_eq!(alert_level_to_str(&Level::Warning), "warning");
        assert_eq!(alert_level_to_str(&Level::Success), "success");
        assert_eq!(alert_level_to_str(&Level::Info), "info");
        assert_eq!(alert_level_to_str(&Level::Debug), "info");
    }

    #[test]
    fn redirect_is_see_other_with_location() {
        let response = redirect("/client/hub");
        assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/client/hub"
        );
    }
}
