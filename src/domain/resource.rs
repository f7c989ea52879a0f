use crate::domain::types::id_enum;

id_enum! {
    /// Backend collections the pages read through the remote gateway.
    Resource {
        Clients => "clients",
        Tasks => "tasks",
        Files => "files",
        BillingPlans => "billing-plans",
        Comments => "comments",
        TeamTools => "team-tools",
        PortalSettings => "portal-settings",
        Archive => "archive",
    }
}
