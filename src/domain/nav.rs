//! Closed navigation vocabulary: view modes, per-mode nav entries, submenus
//! and the collapsible management menu groups.

use crate::domain::types::id_enum;

id_enum! {
    /// Role-based presentation mode selecting the navigation set.
    ViewMode {
        Client => "client",
        Team => "team",
        Management => "management",
    }
}

impl ViewMode {
    /// First path segment used when serializing the mode into a URL.
    pub const fn url_prefix(self) -> &'static str {
        match self {
            ViewMode::Management => "admin",
            ViewMode::Client => "client",
            ViewMode::Team => "team",
        }
    }

    /// Maps the first URL segment onto a view mode.
    ///
    /// Anything that is not recognised as team or management is a client view.
    pub fn from_url_prefix(segment: &str) -> Self {
        match segment {
            "admin" | "management" => ViewMode::Management,
            "team" => ViewMode::Team,
            _ => ViewMode::Client,
        }
    }

    /// Default navigation entry shown right after entering this mode.
    pub fn default_nav(self) -> Nav {
        match self {
            ViewMode::Client => Nav::Client(ClientNav::default()),
            ViewMode::Team => Nav::Team(TeamNav::default()),
            ViewMode::Management => Nav::Management(ManagementNav::default()),
        }
    }

    /// Human-readable label used in the view switcher.
    pub const fn label(self) -> &'static str {
        match self {
            ViewMode::Client => "Client Portal",
            ViewMode::Team => "Team Workspace",
            ViewMode::Management => "Agency Management",
        }
    }
}

id_enum! {
    /// Page that overrides the nav-driven main content.
    ActivePage {
        Main => "main",
        Profile => "profile",
        Settings => "settings",
        Service => "service",
    }
}

impl ActivePage {
    /// Reserved second URL segments that short-circuit nav rendering.
    pub fn reserved(segment: &str) -> Option<Self> {
        match Self::from_id(segment) {
            Some(ActivePage::Main) | None => None,
            reserved => reserved,
        }
    }
}

id_enum! {
    /// Navigation entries of the client portal.
    ClientNav {
        Hub => "hub",
        Strategy => "strategy",
        Design => "design",
        Content => "content",
        Analytics => "analytics",
        Files => "files",
        Billing => "billing",
        Company => "company",
        Archive => "archive",
    }
}

id_enum! {
    /// Navigation entries of the team workspace.
    TeamNav {
        Tasks => "tasks",
        Clients => "clients",
        Crm => "crm",
        Files => "files",
        Tools => "tools",
        Activity => "activity",
    }
}

id_enum! {
    /// Navigation entries of the management console.
    ManagementNav {
        Clients => "clients",
        Crm => "crm",
        Strategy => "strategy",
        Billing => "billing",
        Analytics => "analytics",
        Files => "files",
        Team => "team",
        Tools => "tools",
        Activity => "activity",
        Portal => "portal",
    }
}

impl ManagementNav {
    /// Collapsible sidebar group that holds this entry.
    pub const fn group(self) -> MenuGroup {
        match self {
            ManagementNav::Clients | ManagementNav::Crm | ManagementNav::Strategy => {
                MenuGroup::ClientManagement
            }
            ManagementNav::Billing => MenuGroup::Finance,
            ManagementNav::Files | ManagementNav::Team | ManagementNav::Tools => {
                MenuGroup::Operations
            }
            ManagementNav::Analytics | ManagementNav::Activity | ManagementNav::Portal => {
                MenuGroup::Insights
            }
        }
    }
}

id_enum! {
    /// Collapsible groups of the management sidebar.
    MenuGroup {
        ClientManagement => "client-management",
        Finance => "finance",
        Operations => "operations",
        Insights => "insights",
    }
}

impl MenuGroup {
    pub const fn label(self) -> &'static str {
        match self {
            MenuGroup::ClientManagement => "Client Management",
            MenuGroup::Finance => "Finance",
            MenuGroup::Operations => "Operations",
            MenuGroup::Insights => "Insights",
        }
    }

    /// Management entries in this group, in menu order.
    pub fn entries(self) -> Vec<ManagementNav> {
        ManagementNav::ALL
            .iter()
            .copied()
            .filter(|nav| nav.group() == self)
            .collect()
    }
}

/// Active navigation entry; the variant carries the view mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nav {
    Client(ClientNav),
    Team(TeamNav),
    Management(ManagementNav),
}

impl Default for Nav {
    fn default() -> Self {
        ViewMode::default().default_nav()
    }
}

impl Nav {
    pub const fn view_mode(self) -> ViewMode {
        match self {
            Nav::Client(_) => ViewMode::Client,
            Nav::Team(_) => ViewMode::Team,
            Nav::Management(_) => ViewMode::Management,
        }
    }

    /// URL id of the entry within its view mode.
    pub const fn id(self) -> &'static str {
        match self {
            Nav::Client(nav) => nav.as_str(),
            Nav::Team(nav) => nav.as_str(),
            Nav::Management(nav) => nav.as_str(),
        }
    }

    /// Resolves `id` within `mode`, returning `None` for ids the mode lacks.
    pub fn parse(mode: ViewMode, id: &str) -> Option<Self> {
        match mode {
            ViewMode::Client => ClientNav::from_id(id).map(Nav::Client),
            ViewMode::Team => TeamNav::from_id(id).map(Nav::Team),
            ViewMode::Management => ManagementNav::from_id(id).map(Nav::Management),
        }
    }

    /// Like [`Nav::parse`] but falls back to the default entry of `mode`.
    pub fn parse_or_default(mode: ViewMode, id: &str) -> Self {
        Self::parse(mode, id).unwrap_or_else(|| mode.default_nav())
    }

    /// All entries of `mode` in menu order.
    pub fn entries(mode: ViewMode) -> Vec<Nav> {
        match mode {
            ViewMode::Client => ClientNav::ALL.iter().copied().map(Nav::Client).collect(),
            ViewMode::Team => TeamNav::ALL.iter().copied().map(Nav::Team).collect(),
            ViewMode::Management => ManagementNav::ALL
                .iter()
                .copied()
                .map(Nav::Management)
                .collect(),
        }
    }

    /// The kind of submenu nested under this entry, if any.
    pub const fn submenu_kind(self) -> Option<SubmenuKind> {
        match self {
            Nav::Client(ClientNav::Billing) | Nav::Management(ManagementNav::Billing) => {
                Some(SubmenuKind::Billing)
            }
            Nav::Client(ClientNav::Company) => Some(SubmenuKind::Company),
            Nav::Client(ClientNav::Strategy) | Nav::Management(ManagementNav::Strategy) => {
                Some(SubmenuKind::Strategy)
            }
            _ => None,
        }
    }
}

id_enum! {
    /// Second-level entries under billing.
    BillingSubmenu {
        Overview => "overview",
        Invoices => "invoices",
        Plans => "plans",
        Payments => "payments",
    }
}

id_enum! {
    /// Second-level entries under company.
    CompanySubmenu {
        Overview => "overview",
        Team => "team",
        Brand => "brand",
    }
}

id_enum! {
    /// Second-level entries under strategy.
    StrategySubmenu {
        Overview => "overview",
        Roadmap => "roadmap",
        Campaigns => "campaigns",
        Reports => "reports",
    }
}

/// Which submenu family a nav entry owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmenuKind {
    Billing,
    Company,
    Strategy,
}

impl SubmenuKind {
    /// Parses a submenu id belonging to this family.
    pub fn parse(self, id: &str) -> Option<Submenu> {
        match self {
            SubmenuKind::Billing => BillingSubmenu::from_id(id).map(Submenu::Billing),
            SubmenuKind::Company => CompanySubmenu::from_id(id).map(Submenu::Company),
            SubmenuKind::Strategy => StrategySubmenu::from_id(id).map(Submenu::Strategy),
        }
    }

    /// All submenu entries of this family in menu order.
    pub fn entries(self) -> Vec<Submenu> {
        match self {
            SubmenuKind::Billing => BillingSubmenu::ALL
                .iter()
                .copied()
                .map(Submenu::Billing)
                .collect(),
            SubmenuKind::Company => CompanySubmenu::ALL
                .iter()
                .copied()
                .map(Submenu::Company)
                .collect(),
            SubmenuKind::Strategy => StrategySubmenu::ALL
                .iter()
                .copied()
                .map(Submenu::Strategy)
                .collect(),
        }
    }
}

/// Selected second-level entry. Only one family can be active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Submenu {
    Billing(BillingSubmenu),
    Company(CompanySubmenu),
    Strategy(StrategySubmenu),
}

impl Submenu {
    pub const fn kind(self) -> SubmenuKind {
        match self {
            Submenu::Billing(_) => SubmenuKind::Billing,
            Submenu::Company(_) => SubmenuKind::Company,
            Submenu::Strategy(_) => SubmenuKind::Strategy,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            Submenu::Billing(sub) => sub.as_str(),
            Submenu::Company(sub) => sub.as_str(),
            Submenu::Strategy(sub) => sub.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_prefix_maps_admin_and_management_to_management() {
        assert_eq!(ViewMode::from_url_prefix("admin"), ViewMode::Management);
        assert_eq!(ViewMode::from_url_prefix("management"), ViewMode::Management);
        assert_eq!(ViewMode::from_url_prefix("team"), ViewMode::Team);
        assert_eq!(ViewMode::from_url_prefix("client"), ViewMode::Client);
        assert_eq!(ViewMode::from_url_prefix("whatever"), ViewMode::Client);
        assert_eq!(ViewMode::Management.url_prefix(), "admin");
    }

    #[test]
    fn default_navs_per_mode() {
        assert_eq!(ViewMode::Client.default_nav().id(), "hub");
        assert_eq!(ViewMode::Team.default_nav().id(), "tasks");
        assert_eq!(ViewMode::Management.default_nav().id(), "clients");
    }

    #[test]
    fn unknown_nav_falls_back_to_mode_default() {
        assert_eq!(Nav::parse(ViewMode::Management, "hub"), None);
        assert_eq!(
            Nav::parse_or_default(ViewMode::Management, "hub"),
            Nav::Management(ManagementNav::Clients)
        );
    }

    #[test]
    fn reserved_pages_exclude_main() {
        assert_eq!(ActivePage::reserved("profile"), Some(ActivePage::Profile));
        assert_eq!(ActivePage::reserved("service"), Some(ActivePage::Service));
        assert_eq!(ActivePage::reserved("main"), None);
        assert_eq!(ActivePage::reserved("billing"), None);
    }

    #[test]
    fn submenus_only_belong_to_their_nav() {
        assert_eq!(
            Nav::Client(ClientNav::Company).submenu_kind(),
            Some(SubmenuKind::Company)
        );
        assert_eq!(Nav::Team(TeamNav::Files).submenu_kind(), None);
        assert_eq!(
            SubmenuKind::Billing.parse("invoices"),
            Some(Submenu::Billing(BillingSubmenu::Invoices))
        );
        assert_eq!(SubmenuKind::Company.parse("invoices"), None);
    }

    #[test]
    fn every_management_entry_has_exactly_one_group() {
        let grouped: usize = MenuGroup::ALL.iter().map(|g| g.entries().len()).sum();
        assert_eq!(grouped, ManagementNav::ALL.len());
    }
}
