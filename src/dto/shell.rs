//! Template-facing view of the shell chrome and page data.

use serde::Serialize;
use serde_json::Value;

use crate::domain::activity::ActivityEvent;
use crate::domain::nav::{MenuGroup, Nav, ViewMode};
use crate::domain::page::{breadcrumb, nav_label, page_title, submenu_label};
use crate::domain::route::{Route, RouteTarget};
use crate::domain::state::ShellState;
use crate::domain::user::CurrentUser;

/// Submenu link nested under a sidebar entry.
#[derive(Debug, Serialize)]
pub struct SidebarLink {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct SidebarEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
    /// Only populated for the active entry.
    pub submenu: Vec<SidebarLink>,
}

/// Collapsible header of a management sidebar section.
#[derive(Debug, Serialize)]
pub struct SidebarGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub expanded: bool,
}

#[derive(Debug, Serialize)]
pub struct SidebarSection {
    pub group: Option<SidebarGroup>,
    pub entries: Vec<SidebarEntry>,
}

#[derive(Debug, Serialize)]
pub struct ViewLink {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Everything the shell layout needs besides the page body.
#[derive(Debug, Serialize)]
pub struct ShellView {
    pub view_mode: ViewMode,
    pub path: String,
    pub page_title: String,
    pub breadcrumb: Vec<String>,
    pub user: CurrentUser,
    pub initials: String,
    pub sidebar: Vec<SidebarSection>,
    /// Management can preview the other portals.
    pub view_switcher: Vec<ViewLink>,
    pub profile_href: String,
    pub settings_href: String,
    pub service_href: String,
}

/// Data fetched by the delegated page.
#[derive(Debug, Default, Serialize)]
pub struct PageData {
    pub records: Vec<Value>,
    pub activity: Vec<ActivityEvent>,
    pub preferences: Option<Value>,
    pub error: Option<String>,
}

fn nav_href(nav: Nav) -> String {
    Route {
        view_mode: nav.view_mode(),
        target: RouteTarget::Nav { nav, submenu: None },
    }
    .to_path()
}

fn sidebar_entry(state: &ShellState, nav: Nav) -> SidebarEntry {
    let active = state.nav == nav;
    let submenu = match (active, nav.submenu_kind()) {
        (true, Some(kind)) => kind
            .entries()
            .into_iter()
            .map(|submenu| SidebarLink {
                id: submenu.id(),
                label: submenu_label(submenu),
                href: Route {
                    view_mode: nav.view_mode(),
                    target: RouteTarget::Nav {
                        nav,
                        submenu: Some(submenu),
                    },
                }
                .to_path(),
                active: state.submenu == Some(submenu),
            })
            .collect(),
        _ => Vec::new(),
    };

    SidebarEntry {
        id: nav.id(),
        label: nav_label(nav),
        href: nav_href(nav),
        active,
        submenu,
    }
}

fn sidebar(state: &ShellState) -> Vec<SidebarSection> {
    match state.view_mode() {
        ViewMode::Management => MenuGroup::ALL
            .iter()
            .map(|group| SidebarSection {
                group: Some(SidebarGroup {
                    id: group.as_str(),
                    label: group.label(),
                    expanded: state.is_menu_expanded(*group),
                }),
                entries: group
                    .entries()
                    .into_iter()
                    .map(|nav| sidebar_entry(state, Nav::Management(nav)))
                    .collect(),
            })
            .collect(),
        mode => vec![SidebarSection {
            group: None,
            entries: Nav::entries(mode)
                .into_iter()
                .map(|nav| sidebar_entry(state, nav))
                .collect(),
        }],
    }
}

fn view_switcher(state: &ShellState) -> Vec<ViewLink> {
    let is_management = state
        .user
        .as_ref()
        .and_then(|user| user.user_type)
        .is_some_and(|user_type| user_type.view_mode() == ViewMode::Management);
    if !is_management {
        return Vec::new();
    }

    ViewMode::ALL
        .iter()
        .map(|mode| ViewLink {
            id: mode.as_str(),
            label: mode.label(),
            href: nav_href(mode.default_nav()),
            active: state.view_mode() == *mode,
        })
        .collect()
}

impl From<&ShellState> for ShellView {
    fn from(state: &ShellState) -> Self {
        let prefix = state.view_mode().url_prefix();
        let user = state.current_user().clone();
        Self {
            view_mode: state.view_mode(),
            path: state.path(),
            page_title: page_title(state),
            breadcrumb: breadcrumb(state),
            initials: user.initials(),
            user,
            sidebar: sidebar(state),
            view_switcher: view_switcher(state),
            profile_href: format!("/{prefix}/profile"),
            settings_href: format!("/{prefix}/settings"),
            service_href: format!("/{prefix}/service"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nav::{BillingSubmenu, ClientNav, ManagementNav, Submenu};
    use crate::domain::user::UserType;

    #[test]
    fn client_sidebar_is_flat_with_active_entry() {
        let state = ShellState {
            nav: Nav::Client(ClientNav::Files),
            ..ShellState::default()
        };

        let view = ShellView::from(&state);

        assert_eq!(view.sidebar.len(), 1);
        let entries = &view.sidebar[0].entries;
        assert_eq!(entries.len(), ClientNav::ALL.len());
        let active: Vec<_> = entries.iter().filter(|e| e.active).map(|e| e.id).collect();
        assert_eq!(active, vec!["files"]);
        assert!(view.view_switcher.is_empty());
    }

    #[test]
    fn management_sidebar_is_grouped_and_shows_active_submenu() {
        let mut state = ShellState {
            nav: Nav::Management(ManagementNav::Billing),
            submenu: Some(Submenu::Billing(BillingSubmenu::Invoices)),
            ..ShellState::default()
        };
        state.expanded_menus.insert(MenuGroup::Finance);

        let view = ShellView::from(&state);

        assert_eq!(view.sidebar.len(), MenuGroup::ALL.len());
        let finance = view
            .sidebar
            .iter()
            .find(|section| section.group.as_ref().is_some_and(|g| g.id == "finance"))
            .unwrap();
        assert!(finance.group.as_ref().unwrap().expanded);
        let billing = &finance.entries[0];
        assert_eq!(billing.href, "/admin/billing");
        let invoices = billing.submenu.iter().find(|l| l.active).unwrap();
        assert_eq!(invoices.href, "/admin/billing/invoices");
        assert_eq!(view.path, "/admin/billing/invoices");
        assert_eq!(view.settings_href, "/admin/settings");
    }

    #[test]
    fn management_users_get_view_switcher() {
        let state = ShellState {
            user: Some(CurrentUser {
                name: "Ava Reyes".to_string(),
                user_type: Some(UserType::Management),
                ..CurrentUser::default()
            }),
            nav: Nav::Client(ClientNav::Hub),
            ..ShellState::default()
        };

        let view = ShellView::from(&state);

        let hrefs: Vec<_> = view.view_switcher.iter().map(|v| v.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/client/hub", "/team/tasks", "/admin/clients"]);
        assert_eq!(view.initials, "AR");
    }
}
