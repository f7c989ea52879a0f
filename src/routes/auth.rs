use actix_session::Session;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Utc;
use tera::Tera;
use validator::Validate;

use crate::forms::auth::LoginForm;
use crate::gateway::Gateway;
use crate::routes::{base_context, redirect, render_template, report_activity};
use crate::services::auth;
use crate::services::session::restore_session;
use crate::services::ServiceError;

#[get("/login")]
pub async fn show_login(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let state = restore_session(&session);
    if state.is_authenticated() {
        return redirect(&state.path());
    }

    let context = base_context(&flash_messages);
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    session: Session,
    gateway: web::Data<dyn Gateway>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        log::info!("Rejected malformed sign in form: {err}");
        FlashMessage::error("Invalid email or password.").send();
        return redirect("/login");
    }

    let state = restore_session(&session);
    match auth::login(state, &session, &form.email, &form.password, Utc::now()) {
        Ok((state, event)) => {
            report_activity(gateway.into_inner(), event);
            FlashMessage::success(format!("Welcome back, {}!", state.current_user().name)).send();
            redirect(&state.path())
        }
        Err(ServiceError::InvalidCredentials) => {
            FlashMessage::error("Invalid email or password.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            FlashMessage::error("Could not sign in. Please try again.").send();
            redirect("/login")
        }
    }
}

#[post("/logout")]
pub async fn logout(session: Session, gateway: web::Data<dyn Gateway>) -> impl Responder {
    let state = restore_session(&session);
    let (state, event) = auth::logout(state, &session, Utc::now());

    if let Some(event) = event {
        report_activity(gateway.into_inner(), event);
    }

    redirect(&state.path())
}
