use actix_session::Session;
use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;
use chrono::Utc;

use crate::domain::nav::ActivePage;
use crate::domain::route::{Route, RouteTarget};
use crate::forms::service::{ServiceRequestForm, ServiceRequestPayload};
use crate::gateway::Gateway;
use crate::routes::redirect;
use crate::services::session::restore_session;
use crate::services::shell::submit_service_request;

#[post("/service/request")]
pub async fn request_service(
    session: Session,
    gateway: web::Data<dyn Gateway>,
    web::Form(form): web::Form<ServiceRequestForm>,
) -> impl Responder {
    let state = restore_session(&session);
    if !state.is_authenticated() {
        return redirect("/login");
    }

    let service_page = Route {
        view_mode: state.view_mode(),
        target: RouteTarget::Reserved(ActivePage::Service),
    }
    .to_path();

    let payload = match ServiceRequestPayload::try_from(form) {
        Ok(payload) => payload,
        Err(err) => {
            log::info!("Rejected service request form: {err}");
            FlashMessage::error("Please fill in both the subject and the details.").send();
            return redirect(&service_page);
        }
    };

    match submit_service_request(gateway.get_ref(), state.current_user(), payload, Utc::now()).await
    {
        Ok(id) => {
            log::info!("Service request {id} submitted by {}", state.current_user().email);
            FlashMessage::success("Your request has been sent to the CIELO team.").send();
        }
        Err(err) => {
            log::error!("Failed to submit service request: {err}");
            FlashMessage::error("Could not send your request. Please try again.").send();
        }
    }

    redirect(&service_page)
}
