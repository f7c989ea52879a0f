use actix_session::Session;
use actix_web::{Responder, post, web};

use crate::domain::nav::MenuGroup;
use crate::domain::state::{ShellAction, reduce};
use crate::forms::navigation::ReturnToForm;
use crate::routes::redirect;
use crate::services::session::{restore_session, save_ui_state};

#[post("/menus/{group}/toggle")]
pub async fn toggle_menu_group(
    session: Session,
    group: web::Path<String>,
    web::Form(form): web::Form<ReturnToForm>,
) -> impl Responder {
    let state = restore_session(&session);
    if !state.is_authenticated() {
        return redirect("/login");
    }

    let state = match MenuGroup::from_id(&group) {
        Some(group) => reduce(state, ShellAction::ToggleMenuGroup(group)),
        None => {
            log::warn!("Ignoring toggle of unknown menu group '{group}'");
            state
        }
    };

    if let Err(err) = save_ui_state(&session, &state) {
        log::error!("Failed to save expanded menus: {err}");
    }

    let location = form
        .route()
        .map(|route| route.to_path())
        .unwrap_or_else(|| state.path());
    redirect(&location)
}
