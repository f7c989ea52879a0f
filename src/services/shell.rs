//! Gateway-backed data for the delegated pages.
//!
//! Each page fetches its own slice inside the request that renders it, so a
//! response never mixes data from different navigations.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::page::Page;
use crate::domain::user::CurrentUser;
use crate::dto::shell::PageData;
use crate::forms::service::ServiceRequestPayload;
use crate::gateway::Gateway;
use crate::services::ServiceResult;

/// Number of activity entries shown on the activity log page.
pub const ACTIVITY_PAGE_SIZE: usize = 50;

/// Loads whatever `page` lists.
///
/// Gateway failures are logged and surfaced as a notice on the page; the
/// shell itself always renders.
pub async fn load_page_data<G>(gateway: &G, page: &Page, user: &CurrentUser) -> PageData
where
    G: Gateway + ?Sized,
{
    let mut data = PageData::default();

    let result = match page {
        Page::Activity => gateway
            .list_activity(ACTIVITY_PAGE_SIZE)
            .await
            .map(|events| data.activity = events),
        Page::Settings => gateway
            .kv_get(&preferences_key(user))
            .await
            .map(|preferences| data.preferences = preferences),
        page => match page.resource() {
            Some(resource) => gateway
                .list(resource)
                .await
                .map(|records| data.records = records),
            None => Ok(()),
        },
    };

    if let Err(err) = result {
        log::error!("Failed to load data for {}: {err}", page.template());
        data.error = Some("Some content could not be loaded. Please try again later.".to_string());
    }

    data
}

/// Key-value entry holding a user's portal preferences.
pub fn preferences_key(user: &CurrentUser) -> String {
    format!("preferences:{}", user.email)
}

/// Stores a service request in the backend key-value store and returns its id.
pub async fn submit_service_request<G>(
    gateway: &G,
    user: &CurrentUser,
    payload: ServiceRequestPayload,
    now: DateTime<Utc>,
) -> ServiceResult<Uuid>
where
    G: Gateway + ?Sized,
{
    let id = Uuid::new_v4();
    let record: Value = json!({
        "id": id,
        "subject": payload.subject.as_str(),
        "details": payload.details.as_str(),
        "priority": payload.priority,
        "requestedBy": {
            "name": user.name,
            "email": user.email,
            "companyName": user.company_name,
        },
        "createdAt": now,
    });

    gateway
        .kv_set(&format!("service-request:{id}"), &record)
        .await
        .map_err(|err| {
            log::error!("Failed to store service request: {err}");
            err
        })?;

    Ok(id)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::nav::BillingSubmenu;
    use crate::domain::resource::Resource;
    use crate::domain::types::NonEmptyString;
    use crate::forms::service::ServicePriority;
    use crate::gateway::GatewayError;
    use crate::gateway::mock::MockGateway;

    fn user() -> CurrentUser {
        CurrentUser {
            name: "Sarah Johnson".to_string(),
            email: "sarah@client.com".to_string(),
            company_name: "Bloom Botanics".to_string(),
            role: "Marketing Director".to_string(),
            user_type: None,
        }
    }

    #[actix_web::test]
    async fn billing_page_lists_billing_plans() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .withf(|resource| *resource == Resource::BillingPlans)
            .times(1)
            .returning(|_| Ok(vec![json!({"name": "Growth"})]));

        let data = load_page_data(&gateway, &Page::Billing(BillingSubmenu::Plans), &user()).await;

        assert_eq!(data.records.len(), 1);
        assert_eq!(data.error, None);
    }

    #[actix_web::test]
    async fn pages_without_resource_do_not_call_gateway() {
        let mut gateway = MockGateway::new();
        gateway.expect_list().times(0);

        let data = load_page_data(&gateway, &Page::Design, &user()).await;

        assert!(data.records.is_empty());
    }

    #[actix_web::test]
    async fn gateway_failure_becomes_page_notice() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_activity()
            .times(1)
            .returning(|_| Err(GatewayError::Transport("offline".to_string())));

        let data = load_page_data(&gateway, &Page::Activity, &user()).await;

        assert!(data.activity.is_empty());
        assert!(data.error.is_some());
    }

    #[actix_web::test]
    async fn settings_page_reads_user_preferences() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_kv_get()
            .withf(|key| key == "preferences:sarah@client.com")
            .times(1)
            .returning(|_| Ok(Some(json!({"digest": "weekly"}))));

        let data = load_page_data(&gateway, &Page::Settings, &user()).await;

        assert_eq!(data.preferences, Some(json!({"digest": "weekly"})));
    }

    #[actix_web::test]
    async fn service_request_is_stored_under_its_id() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_kv_set()
            .withf(|key, value| {
                key.starts_with("service-request:")
                    && value["subject"] == json!("New landing page")
                    && value["requestedBy"]["email"] == json!("sarah@client.com")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let payload = ServiceRequestPayload {
            subject: NonEmptyString::new("New landing page").unwrap(),
            details: NonEmptyString::new("For the summer launch").unwrap(),
            priority: ServicePriority::High,
        };

        let id = submit_service_request(&gateway, &user(), payload, Utc::now())
            .await
            .unwrap();

        assert_eq!(id.get_version_num(), 4);
    }
}
