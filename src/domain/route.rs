//! Browser address contract: `/<client|team|admin>/<navId>[/<submenuId>]`.
//!
//! Reserved second segments (`profile`, `settings`, `service`) select an
//! [`ActivePage`] instead of a nav entry. Unknown ids never fail: they fall
//! back to the view default so every address maps onto some state.

use crate::domain::nav::{ActivePage, Nav, Submenu, ViewMode};
use crate::domain::state::ShellState;

/// What the second and third path segments select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    /// Only the view segment was given.
    Root,
    Reserved(ActivePage),
    Nav { nav: Nav, submenu: Option<Submenu> },
}

/// Parsed browser path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub view_mode: ViewMode,
    pub target: RouteTarget,
}

impl Route {
    /// Parses up to three path segments; extra segments are ignored.
    pub fn parse(path: &str) -> Self {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());

        let view_mode = ViewMode::from_url_prefix(segments.next().unwrap_or_default());

        let target = match segments.next() {
            None => RouteTarget::Root,
            Some(page) => match ActivePage::reserved(page) {
                Some(reserved) => RouteTarget::Reserved(reserved),
                None => {
                    let nav = Nav::parse_or_default(view_mode, page);
                    let submenu = segments
                        .next()
                        .and_then(|sub| nav.submenu_kind().and_then(|kind| kind.parse(sub)));
                    RouteTarget::Nav { nav, submenu }
                }
            },
        };

        Self { view_mode, target }
    }

    /// Serializes the route back into a browser path.
    pub fn to_path(&self) -> String {
        let prefix = self.view_mode.url_prefix();
        match self.target {
            RouteTarget::Root => format!("/{prefix}"),
            RouteTarget::Reserved(page) => format!("/{prefix}/{page}"),
            RouteTarget::Nav { nav, submenu: None } => format!("/{prefix}/{}", nav.id()),
            RouteTarget::Nav {
                nav,
                submenu: Some(submenu),
            } => format!("/{prefix}/{}/{}", nav.id(), submenu.id()),
        }
    }
}

impl From<&ShellState> for Route {
    fn from(state: &ShellState) -> Self {
        let target = match state.active_page {
            ActivePage::Main => RouteTarget::Nav {
                nav: state.nav,
                submenu: state.submenu,
            },
            page => RouteTarget::Reserved(page),
        };
        Self {
            view_mode: state.view_mode(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nav::{
        BillingSubmenu, ClientNav, ManagementNav, StrategySubmenu, SubmenuKind, TeamNav,
    };
    use crate::domain::state::{ShellAction, reduce};

    /// Every state reachable through navigation clicks.
    fn reachable_states() -> Vec<ShellState> {
        let mut states = Vec::new();
        for mode in ViewMode::ALL {
            for nav in Nav::entries(*mode) {
                let mut submenus = vec![None];
                if let Some(kind) = nav.submenu_kind() {
                    submenus.extend(kind.entries().into_iter().map(Some));
                }
                for submenu in submenus {
                    states.push(ShellState {
                        nav,
                        submenu,
                        ..ShellState::default()
                    });
                }
                for page in [ActivePage::Profile, ActivePage::Settings, ActivePage::Service] {
                    states.push(ShellState {
                        nav,
                        active_page: page,
                        ..ShellState::default()
                    });
                }
            }
        }
        states
    }

    #[test]
    fn every_reachable_state_round_trips_through_its_path() {
        for state in reachable_states() {
            let path = state.path();
            let restored = reduce(state.clone(), ShellAction::Navigate(Route::parse(&path)));
            assert_eq!(restored, state, "path {path} did not round trip");
        }
    }

    #[test]
    fn main_pages_round_trip_from_a_blank_state() {
        for state in reachable_states()
            .into_iter()
            .filter(|state| state.active_page == ActivePage::Main)
        {
            let restored = reduce(
                ShellState::default(),
                ShellAction::Navigate(Route::parse(&state.path())),
            );
            assert_eq!(
                (restored.view_mode(), restored.nav, restored.active_page, restored.submenu),
                (state.view_mode(), state.nav, state.active_page, state.submenu)
            );
        }
    }

    #[test]
    fn management_serializes_as_admin_and_parses_back() {
        let state = ShellState {
            nav: Nav::Management(ManagementNav::Billing),
            submenu: Some(Submenu::Billing(BillingSubmenu::Invoices)),
            ..ShellState::default()
        };

        assert_eq!(state.path(), "/admin/billing/invoices");
        assert_eq!(Route::parse("/admin/billing/invoices").view_mode, ViewMode::Management);
    }

    #[test]
    fn management_prefix_is_accepted_too() {
        let route = Route::parse("/management/strategy/roadmap");
        assert_eq!(
            route,
            Route {
                view_mode: ViewMode::Management,
                target: RouteTarget::Nav {
                    nav: Nav::Management(ManagementNav::Strategy),
                    submenu: Some(Submenu::Strategy(StrategySubmenu::Roadmap)),
                },
            }
        );
        assert_eq!(route.to_path(), "/admin/strategy/roadmap");
    }

    #[test]
    fn unknown_view_segment_means_client() {
        assert_eq!(Route::parse("/portal/hub").view_mode, ViewMode::Client);
        assert_eq!(Route::parse("/").target, RouteTarget::Root);
    }

    #[test]
    fn reserved_pages_short_circuit_nav() {
        assert_eq!(
            Route::parse("/team/service/extra").target,
            RouteTarget::Reserved(ActivePage::Service)
        );
    }

    #[test]
    fn unknown_ids_fall_back() {
        assert_eq!(
            Route::parse("/team/nowhere").target,
            RouteTarget::Nav {
                nav: Nav::Team(TeamNav::Tasks),
                submenu: None,
            }
        );
        assert_eq!(
            Route::parse("/client/billing/unknown").target,
            RouteTarget::Nav {
                nav: Nav::Client(ClientNav::Billing),
                submenu: None,
            }
        );
    }

    #[test]
    fn submenu_segment_ignored_for_navs_without_submenus() {
        let route = Route::parse("/client/files/invoices");
        assert_eq!(
            route.target,
            RouteTarget::Nav {
                nav: Nav::Client(ClientNav::Files),
                submenu: None,
            }
        );
        assert_eq!(Nav::Client(ClientNav::Files).submenu_kind(), None::<SubmenuKind>);
    }
}
