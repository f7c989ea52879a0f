use actix_session::Session;
use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;
use chrono::Utc;

use crate::domain::archive::ArchiveItem;
use crate::domain::nav::{ClientNav, Nav};
use crate::domain::state::{ShellAction, ShellState, reduce};
use crate::forms::archive::SelectArchiveItemForm;
use crate::routes::redirect;
use crate::services::session::{remember_navigation, restore_session, save_ui_state};

fn persist(session: &Session, state: &ShellState) {
    if let Err(err) = remember_navigation(session, state, Utc::now()) {
        log::error!("Failed to remember navigation: {err}");
    }
    if let Err(err) = save_ui_state(session, state) {
        log::error!("Failed to save archive selection: {err}");
    }
}

/// Opens the detail view of an archived project.
#[post("/archive/select")]
pub async fn select_archive_item(
    session: Session,
    web::Form(form): web::Form<SelectArchiveItemForm>,
) -> impl Responder {
    let state = restore_session(&session);
    if !state.is_authenticated() {
        return redirect("/login");
    }

    let state = reduce(state, ShellAction::SelectNav(Nav::Client(ClientNav::Archive)));
    let state = match ArchiveItem::try_from(form) {
        Ok(item) => reduce(state, ShellAction::SelectArchiveItem(item)),
        Err(err) => {
            log::warn!("Rejected archive selection: {err}");
            FlashMessage::error("That archive entry could not be opened.").send();
            state
        }
    };

    persist(&session, &state);
    redirect(&state.path())
}

/// Returns from the detail view to the archive list.
#[post("/archive/clear")]
pub async fn clear_archive_item(session: Session) -> impl Responder {
    let state = restore_session(&session);
    if !state.is_authenticated() {
        return redirect("/login");
    }

    let state = reduce(state, ShellAction::ClearArchiveItem);

    persist(&session, &state);
    redirect(&state.path())
}
