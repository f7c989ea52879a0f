//! Persisted session blob describing the signed-in identity and the last
//! navigation position.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::nav::{Nav, ViewMode};
use crate::domain::user::CurrentUser;

/// Storage key holding the serialized [`SessionBlob`].
pub const SESSION_KEY: &str = "cielo_session";
/// Storage key holding the expanded management menu groups.
pub const MENUS_KEY: &str = "cielo_menus";
/// Storage key holding the archive item opened in the drill-down view.
pub const ARCHIVE_DETAIL_KEY: &str = "cielo_archive_detail";

/// JSON layout: `{ user, viewMode, activeNav, timestamp }`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionBlob {
    pub user: CurrentUser,
    pub view_mode: ViewMode,
    pub active_nav: String,
    pub timestamp: DateTime<Utc>,
}

impl SessionBlob {
    pub fn new(user: CurrentUser, nav: Nav, timestamp: DateTime<Utc>) -> Self {
        Self {
            user,
            view_mode: nav.view_mode(),
            active_nav: nav.id().to_string(),
            timestamp,
        }
    }

    /// Stored navigation entry, falling back to the view default for ids the
    /// view mode does not know.
    pub fn nav(&self) -> Nav {
        Nav::parse_or_default(self.view_mode, &self.active_nav)
    }
}
