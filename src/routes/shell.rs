use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, routes, web};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Utc;
use tera::Tera;

use crate::domain::page::Page;
use crate::domain::route::Route;
use crate::domain::state::{ShellAction, reduce};
use crate::dto::shell::ShellView;
use crate::gateway::Gateway;
use crate::routes::{base_context, redirect, render_template};
use crate::services::session::{remember_navigation, restore_session, save_ui_state};
use crate::services::shell::load_page_data;

#[get("/")]
pub async fn index(session: Session) -> impl Responder {
    let state = restore_session(&session);
    if state.is_authenticated() {
        redirect(&state.path())
    } else {
        redirect("/login")
    }
}

/// Renders the shell for any `/<view>[/<page>[/<sub>]]` address.
///
/// Signed-out visitors get the login form. Non-canonical addresses (legacy
/// `management` prefix, unknown ids, trailing slashes) redirect to the
/// canonical path of the resulting state.
#[routes]
#[get("/{view}")]
#[get("/{view}/")]
#[get("/{view}/{page}")]
#[get("/{view}/{page}/")]
#[get("/{view}/{page}/{sub}")]
#[get("/{view}/{page}/{sub}/")]
pub async fn show_shell(
    req: HttpRequest,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    gateway: web::Data<dyn Gateway>,
) -> impl Responder {
    let state = restore_session(&session);
    if !state.is_authenticated() {
        let context = base_context(&flash_messages);
        return render_template(&tera, "auth/login.html", &context);
    }

    let requested = req.path();
    let state = reduce(state, ShellAction::Navigate(Route::parse(requested)));

    if let Err(err) = remember_navigation(&session, &state, Utc::now()) {
        log::warn!("Failed to remember navigation: {err}");
    }
    if let Err(err) = save_ui_state(&session, &state) {
        log::warn!("Failed to save shell state: {err}");
    }

    let canonical = state.path();
    if canonical != requested {
        return redirect(&canonical);
    }

    let page = Page::resolve(&state);
    let page_data = load_page_data(gateway.get_ref(), &page, state.current_user()).await;

    let mut context = base_context(&flash_messages);
    context.insert("shell", &ShellView::from(&state));
    context.insert("data", &page_data);
    context.insert(
        "submenu",
        state.submenu.map(|submenu| submenu.id()).unwrap_or_default(),
    );
    if let Page::ArchiveDetail(item) = &page {
        context.insert("item", item);
    }

    render_template(&tera, page.template(), &context)
}
