//! Shell view-state and the pure reducer that drives every transition.
//!
//! Handlers never mutate [`ShellState`] directly: they build a
//! [`ShellAction`] and run it through [`reduce`], so URL parsing, clicks and
//! sign in/out share one transition table.

use std::collections::BTreeSet;

use crate::domain::archive::ArchiveItem;
use crate::domain::nav::{
    ActivePage, BillingSubmenu, CompanySubmenu, MenuGroup, Nav, StrategySubmenu, Submenu,
    ViewMode,
};
use crate::domain::route::{Route, RouteTarget};
use crate::domain::user::CurrentUser;

static SIGNED_OUT_USER: CurrentUser = CurrentUser {
    name: String::new(),
    email: String::new(),
    company_name: String::new(),
    role: String::new(),
    user_type: None,
};

/// Everything that decides what is on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    /// `Some` exactly while signed in.
    pub user: Option<CurrentUser>,
    pub nav: Nav,
    pub active_page: ActivePage,
    /// Only ever holds a submenu owned by `nav`.
    pub submenu: Option<Submenu>,
    pub expanded_menus: BTreeSet<MenuGroup>,
    pub archive_detail: Option<ArchiveItem>,
}

/// Transitions accepted by [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    /// Credentials accepted or a stored session restored.
    SignedIn { user: CurrentUser, nav: Nav },
    SignedOut,
    SelectNav(Nav),
    SelectSubmenu(Submenu),
    ToggleMenuGroup(MenuGroup),
    SelectArchiveItem(ArchiveItem),
    ClearArchiveItem,
    /// Browser address parsed into a route.
    Navigate(Route),
}

impl ShellState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Signed-in identity, or a user with empty fields while signed out.
    pub fn current_user(&self) -> &CurrentUser {
        self.user.as_ref().unwrap_or(&SIGNED_OUT_USER)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.nav.view_mode()
    }

    pub fn billing_submenu(&self) -> Option<BillingSubmenu> {
        match self.submenu {
            Some(Submenu::Billing(sub)) => Some(sub),
            _ => None,
        }
    }

    pub fn company_submenu(&self) -> Option<CompanySubmenu> {
        match self.submenu {
            Some(Submenu::Company(sub)) => Some(sub),
            _ => None,
        }
    }

    pub fn strategy_submenu(&self) -> Option<StrategySubmenu> {
        match self.submenu {
            Some(Submenu::Strategy(sub)) => Some(sub),
            _ => None,
        }
    }

    pub fn is_menu_expanded(&self, group: MenuGroup) -> bool {
        self.expanded_menus.contains(&group)
    }

    /// Canonical browser path for this state.
    pub fn path(&self) -> String {
        Route::from(self).to_path()
    }

    /// Moves to `nav`, dropping selections that belonged to the previous entry.
    fn enter_nav(&mut self, nav: Nav) {
        if self.nav != nav {
            self.submenu = None;
            self.archive_detail = None;
        }
        self.nav = nav;
    }
}

/// Applies `action` to `state`, returning the next state.
pub fn reduce(mut state: ShellState, action: ShellAction) -> ShellState {
    match action {
        ShellAction::SignedIn { user, nav } => ShellState {
            user: Some(user),
            nav,
            ..ShellState::default()
        },
        ShellAction::SignedOut => ShellState::default(),
        ShellAction::SelectNav(nav) => {
            state.enter_nav(nav);
            state.active_page = ActivePage::Main;
            state
        }
        ShellAction::SelectSubmenu(submenu) => {
            let owner = if state.nav.submenu_kind() == Some(submenu.kind()) {
                Some(state.nav)
            } else {
                Nav::entries(state.view_mode())
                    .into_iter()
                    .find(|nav| nav.submenu_kind() == Some(submenu.kind()))
            };
            if let Some(owner) = owner {
                state.enter_nav(owner);
                state.submenu = Some(submenu);
                state.active_page = ActivePage::Main;
            }
            state
        }
        ShellAction::ToggleMenuGroup(group) => {
            if !state.expanded_menus.remove(&group) {
                state.expanded_menus.insert(group);
            }
            state
        }
        ShellAction::SelectArchiveItem(item) => {
            state.archive_detail = Some(item);
            state
        }
        ShellAction::ClearArchiveItem => {
            state.archive_detail = None;
            state
        }
        ShellAction::Navigate(route) => {
            let mode = route.view_mode;
            match route.target {
                RouteTarget::Reserved(page) => {
                    if state.view_mode() != mode {
                        state.enter_nav(mode.default_nav());
                    }
                    state.active_page = page;
                }
                RouteTarget::Root => {
                    if state.view_mode() != mode {
                        state.enter_nav(mode.default_nav());
                    }
                    state.active_page = ActivePage::Main;
                }
                RouteTarget::Nav { nav, submenu } => {
                    state.enter_nav(nav);
                    state.submenu = submenu;
                    state.active_page = ActivePage::Main;
                }
            }
            state
        }
    }
}
