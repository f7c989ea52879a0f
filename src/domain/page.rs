//! Main-content dispatch plus the title and breadcrumb lookups.
//!
//! Everything here is a pure function of [`ShellState`].

use crate::domain::archive::ArchiveItem;
use crate::domain::nav::{
    ActivePage, BillingSubmenu, ClientNav, CompanySubmenu, ManagementNav, Nav, StrategySubmenu,
    Submenu, TeamNav, ViewMode,
};
use crate::domain::resource::Resource;
use crate::domain::state::ShellState;

/// Page mounted in the main content area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Profile,
    Settings,
    Service,
    Hub,
    Strategy(StrategySubmenu),
    Design,
    Content,
    Analytics,
    Files,
    Billing(BillingSubmenu),
    Company(CompanySubmenu),
    Archive,
    /// Inline drill-down rendered by the shell itself.
    ArchiveDetail(ArchiveItem),
    Tasks,
    Clients,
    Crm,
    Tools,
    Activity,
    Team,
    Portal,
}

impl Page {
    /// Picks the page for the current state.
    pub fn resolve(state: &ShellState) -> Self {
        match state.active_page {
            ActivePage::Profile => return Page::Profile,
            ActivePage::Settings => return Page::Settings,
            ActivePage::Service => return Page::Service,
            ActivePage::Main => {}
        }

        let strategy = || Page::Strategy(state.strategy_submenu().unwrap_or_default());
        let billing = || Page::Billing(state.billing_submenu().unwrap_or_default());

        match state.nav {
            Nav::Client(nav) => match nav {
                ClientNav::Hub => Page::Hub,
                ClientNav::Strategy => strategy(),
                ClientNav::Design => Page::Design,
                ClientNav::Content => Page::Content,
                ClientNav::Analytics => Page::Analytics,
                ClientNav::Files => Page::Files,
                ClientNav::Billing => billing(),
                ClientNav::Company => Page::Company(state.company_submenu().unwrap_or_default()),
                ClientNav::Archive => match &state.archive_detail {
                    Some(item) => Page::ArchiveDetail(item.clone()),
                    None => Page::Archive,
                },
            },
            Nav::Team(nav) => match nav {
                TeamNav::Tasks => Page::Tasks,
                TeamNav::Clients => Page::Clients,
                TeamNav::Crm => Page::Crm,
                TeamNav::Files => Page::Files,
                TeamNav::Tools => Page::Tools,
                TeamNav::Activity => Page::Activity,
            },
            Nav::Management(nav) => match nav {
                ManagementNav::Clients => Page::Clients,
                ManagementNav::Crm => Page::Crm,
                ManagementNav::Strategy => strategy(),
                ManagementNav::Billing => billing(),
                ManagementNav::Analytics => Page::Analytics,
                ManagementNav::Files => Page::Files,
                ManagementNav::Team => Page::Team,
                ManagementNav::Tools => Page::Tools,
                ManagementNav::Activity => Page::Activity,
                ManagementNav::Portal => Page::Portal,
            },
        }
    }

    /// Template rendered for this page.
    pub fn template(&self) -> &'static str {
        match self {
            Page::Profile => "pages/profile.html",
            Page::Settings => "pages/settings.html",
            Page::Service => "pages/service.html",
            Page::Hub => "pages/hub.html",
            Page::Strategy(_) => "pages/strategy.html",
            Page::Design => "pages/design.html",
            Page::Content => "pages/content.html",
            Page::Analytics => "pages/analytics.html",
            Page::Files => "pages/files.html",
            Page::Billing(_) => "pages/billing.html",
            Page::Company(_) => "pages/company.html",
            Page::Archive => "pages/archive.html",
            Page::ArchiveDetail(_) => "pages/archive_detail.html",
            Page::Tasks => "pages/tasks.html",
            Page::Clients => "pages/clients.html",
            Page::Crm => "pages/crm.html",
            Page::Tools => "pages/tools.html",
            Page::Activity => "pages/activity.html",
            Page::Team => "pages/team.html",
            Page::Portal => "pages/portal.html",
        }
    }

    /// Backend collection the page lists, if it lists one.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Page::Hub | Page::Tasks => Some(Resource::Tasks),
            Page::Files => Some(Resource::Files),
            Page::Billing(_) => Some(Resource::BillingPlans),
            Page::Archive => Some(Resource::Archive),
            Page::Clients => Some(Resource::Clients),
            Page::Crm => Some(Resource::Comments),
            Page::Tools => Some(Resource::TeamTools),
            Page::Portal => Some(Resource::PortalSettings),
            Page::Profile
            | Page::Settings
            | Page::Service
            | Page::Strategy(_)
            | Page::Design
            | Page::Content
            | Page::Analytics
            | Page::Company(_)
            | Page::ArchiveDetail(_)
            | Page::Activity
            | Page::Team => None,
        }
    }
}

/// Sidebar label of a nav entry.
pub fn nav_label(nav: Nav) -> &'static str {
    match nav {
        Nav::Client(nav) => match nav {
            ClientNav::Hub => "Client Hub",
            ClientNav::Strategy => "Strategy",
            ClientNav::Design => "Design Studio",
            ClientNav::Content => "Content Calendar",
            ClientNav::Analytics => "Analytics",
            ClientNav::Files => "Files",
            ClientNav::Billing => "Billing",
            ClientNav::Company => "Company",
            ClientNav::Archive => "Archive",
        },
        Nav::Team(nav) => match nav {
            TeamNav::Tasks => "My Tasks",
            TeamNav::Clients => "Clients",
            TeamNav::Crm => "CRM",
            TeamNav::Files => "Files",
            TeamNav::Tools => "Team Tools",
            TeamNav::Activity => "Activity Log",
        },
        Nav::Management(nav) => match nav {
            ManagementNav::Clients => "Clients",
            ManagementNav::Crm => "CRM",
            ManagementNav::Strategy => "Strategy",
            ManagementNav::Billing => "Billing",
            ManagementNav::Analytics => "Analytics",
            ManagementNav::Files => "Files",
            ManagementNav::Team => "Team",
            ManagementNav::Tools => "Tools",
            ManagementNav::Activity => "Activity Log",
            ManagementNav::Portal => "Portal Settings",
        },
    }
}

pub fn submenu_label(submenu: Submenu) -> &'static str {
    match submenu {
        Submenu::Billing(sub) => match sub {
            BillingSubmenu::Overview => "Overview",
            BillingSubmenu::Invoices => "Invoices",
            BillingSubmenu::Plans => "Plans",
            BillingSubmenu::Payments => "Payment Methods",
        },
        Submenu::Company(sub) => match sub {
            CompanySubmenu::Overview => "Company Overview",
            CompanySubmenu::Team => "Team Members",
            CompanySubmenu::Brand => "Brand Assets",
        },
        Submenu::Strategy(sub) => match sub {
            StrategySubmenu::Overview => "Overview",
            StrategySubmenu::Roadmap => "Roadmap",
            StrategySubmenu::Campaigns => "Campaigns",
            StrategySubmenu::Reports => "Reports",
        },
    }
}

fn reserved_page_label(page: ActivePage) -> Option<&'static str> {
    match page {
        ActivePage::Main => None,
        ActivePage::Profile => Some("My Profile"),
        ActivePage::Settings => Some("Settings"),
        ActivePage::Service => Some("Service Requests"),
    }
}

/// Heading of the main content area.
pub fn page_title(state: &ShellState) -> String {
    if let Some(label) = reserved_page_label(state.active_page) {
        return label.to_string();
    }

    if let (Nav::Client(ClientNav::Archive), Some(item)) = (state.nav, &state.archive_detail) {
        return item.title.clone();
    }

    let title = match (state.nav, state.submenu) {
        (Nav::Client(ClientNav::Hub), _) => "Welcome to your Client Hub",
        (Nav::Client(ClientNav::Billing), Some(sub)) => submenu_label(sub),
        (Nav::Client(ClientNav::Billing), None) => "Billing Overview",
        (Nav::Client(ClientNav::Company), Some(sub)) => submenu_label(sub),
        (Nav::Client(ClientNav::Company), None) => "Company Overview",
        (Nav::Client(ClientNav::Strategy), Some(sub)) => submenu_label(sub),
        (Nav::Client(ClientNav::Strategy), None) => "Your Marketing Strategy",
        (Nav::Team(TeamNav::Tasks), _) => "My Tasks",
        (Nav::Team(TeamNav::Clients), _) => "Client Directory",
        (Nav::Management(ManagementNav::Clients), _) => "Client Management",
        (Nav::Management(ManagementNav::Billing), Some(sub)) => submenu_label(sub),
        (Nav::Management(ManagementNav::Billing), None) => "Billing Management",
        (Nav::Management(ManagementNav::Strategy), Some(sub)) => submenu_label(sub),
        (Nav::Management(ManagementNav::Strategy), None) => "Strategy Management",
        (nav, _) => nav_label(nav),
    };
    title.to_string()
}

/// Breadcrumb trail from the view root down to the current page.
pub fn breadcrumb(state: &ShellState) -> Vec<String> {
    let mut trail = vec![view_root_label(state.view_mode()).to_string()];

    if let Some(label) = reserved_page_label(state.active_page) {
        trail.push(label.to_string());
        return trail;
    }

    trail.push(nav_label(state.nav).to_string());
    if let Some(submenu) = state.submenu {
        trail.push(submenu_label(submenu).to_string());
    }
    if let (Nav::Client(ClientNav::Archive), Some(item)) = (state.nav, &state.archive_detail) {
        trail.push(item.title.clone());
    }
    trail
}

fn view_root_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Client => "Client Portal",
        ViewMode::Team => "Team",
        ViewMode::Management => "Management",
    }
}
