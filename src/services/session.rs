//! Restoring and persisting the shell state in client-side storage.
//!
//! Nothing here fails loudly: unreadable or corrupt entries are logged,
//! discarded, and the shell carries on as if they were never stored.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::archive::ArchiveItem;
use crate::domain::nav::{ClientNav, MenuGroup, Nav};
use crate::domain::session::{ARCHIVE_DETAIL_KEY, MENUS_KEY, SESSION_KEY, SessionBlob};
use crate::domain::state::{ShellAction, ShellState, reduce};
use crate::domain::user::CurrentUser;
use crate::services::{ServiceError, ServiceResult};
use crate::storage::SessionStorage;

/// Reads and decodes `key`, dropping entries that fail to parse.
fn read_json<T, S>(storage: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: SessionStorage + ?Sized,
{
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("Failed to read stored `{key}`: {err}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Discarding corrupt `{key}` entry: {err}");
            storage.remove_item(key);
            None
        }
    }
}

fn write_json<T, S>(storage: &S, key: &str, value: &T) -> ServiceResult<()>
where
    T: Serialize + ?Sized,
    S: SessionStorage + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|err| ServiceError::Storage(err.to_string()))?;
    storage.set_item(key, &raw)?;
    Ok(())
}

/// Rebuilds the shell state from storage.
///
/// A valid session blob signs the user in at the stored navigation entry;
/// anything else yields the signed-out default. Expanded menu groups are
/// restored on top, the archive selection only while the archive is open.
pub fn restore_session<S>(storage: &S) -> ShellState
where
    S: SessionStorage + ?Sized,
{
    let mut state = match read_json::<SessionBlob, _>(storage, SESSION_KEY) {
        Some(blob) => {
            let nav = blob.nav();
            reduce(
                ShellState::default(),
                ShellAction::SignedIn {
                    user: blob.user,
                    nav,
                },
            )
        }
        None => ShellState::default(),
    };

    if let Some(groups) = read_json::<BTreeSet<MenuGroup>, _>(storage, MENUS_KEY) {
        state.expanded_menus = groups;
    }
    if let Some(item) = read_json::<ArchiveItem, _>(storage, ARCHIVE_DETAIL_KEY)
        && state.nav == Nav::Client(ClientNav::Archive)
    {
        state = reduce(state, ShellAction::SelectArchiveItem(item));
    }

    state
}

/// Writes a fresh session blob for `user` positioned at `nav`.
pub fn write_session<S>(
    storage: &S,
    user: &CurrentUser,
    nav: Nav,
    timestamp: DateTime<Utc>,
) -> ServiceResult<()>
where
    S: SessionStorage + ?Sized,
{
    let blob = SessionBlob::new(user.clone(), nav, timestamp);
    write_json(storage, SESSION_KEY, &blob)
}

/// Records the current navigation position in the stored session blob,
/// keeping the original sign-in timestamp.
pub fn remember_navigation<S>(
    storage: &S,
    state: &ShellState,
    now: DateTime<Utc>,
) -> ServiceResult<()>
where
    S: SessionStorage + ?Sized,
{
    let Some(user) = &state.user else {
        return Ok(());
    };

    let timestamp = read_json::<SessionBlob, _>(storage, SESSION_KEY)
        .map(|blob| blob.timestamp)
        .unwrap_or(now);

    write_session(storage, user, state.nav, timestamp)
}

/// Persists the selections that live outside the URL.
pub fn save_ui_state<S>(storage: &S, state: &ShellState) -> ServiceResult<()>
where
    S: SessionStorage + ?Sized,
{
    write_json(storage, MENUS_KEY, &state.expanded_menus)?;
    match &state.archive_detail {
        Some(item) => write_json(storage, ARCHIVE_DETAIL_KEY, item)?,
        None => storage.remove_item(ARCHIVE_DETAIL_KEY),
    }
    Ok(())
}

/// Removes every stored shell entry.
pub fn clear_session<S>(storage: &S)
where
    S: SessionStorage + ?Sized,
{
    storage.remove_item(SESSION_KEY);
    storage.remove_item(MENUS_KEY);
    storage.remove_item(ARCHIVE_DETAIL_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nav::{ManagementNav, ViewMode};
    use crate::domain::user::UserType;
    use crate::storage::memory::MemoryStorage;

    fn client_user() -> CurrentUser {
        CurrentUser {
            name: "Sarah Johnson".to_string(),
            email: "sarah@client.com".to_string(),
            company_name: "Bloom Botanics".to_string(),
            role: "Marketing Director".to_string(),
            user_type: Some(UserType::Client),
        }
    }

    #[test]
    fn restores_stored_session() {
        let storage = MemoryStorage::new();
        write_session(
            &storage,
            &client_user(),
            Nav::Client(ClientNav::Files),
            Utc::now(),
        )
        .unwrap();

        let state = restore_session(&storage);

        assert!(state.is_authenticated());
        assert_eq!(state.view_mode(), ViewMode::Client);
        assert_eq!(state.nav, Nav::Client(ClientNav::Files));
        assert_eq!(state.current_user().company_name, "Bloom Botanics");
    }

    #[test]
    fn corrupt_session_is_removed_and_stays_signed_out() {
        let storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "not json").unwrap();

        let state = restore_session(&storage);

        assert!(!state.is_authenticated());
        assert!(!storage.contains(SESSION_KEY));
    }

    #[test]
    fn missing_session_yields_default_state() {
        let storage = MemoryStorage::new();
        assert_eq!(restore_session(&storage), ShellState::default());
    }

    #[test]
    fn remember_navigation_keeps_sign_in_timestamp() {
        let storage = MemoryStorage::new();
        let signed_in_at = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        write_session(
            &storage,
            &client_user(),
            Nav::Client(ClientNav::Hub),
            signed_in_at,
        )
        .unwrap();
        let state = ShellState {
            user: Some(client_user()),
            nav: Nav::Client(ClientNav::Billing),
            ..ShellState::default()
        };

        remember_navigation(&storage, &state, Utc::now()).unwrap();

        let raw = storage.get_item(SESSION_KEY).unwrap().unwrap();
        let blob: SessionBlob = serde_json::from_str(&raw).unwrap();
        assert_eq!(blob.active_nav, "billing");
        assert_eq!(blob.timestamp, signed_in_at);
    }

    #[test]
    fn remember_navigation_is_noop_when_signed_out() {
        let storage = MemoryStorage::new();
        remember_navigation(&storage, &ShellState::default(), Utc::now()).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn ui_state_round_trips_and_corrupt_menus_are_dropped() {
        let storage = MemoryStorage::new();
        write_session(
            &storage,
            &client_user(),
            Nav::Management(ManagementNav::Billing),
            Utc::now(),
        )
        .unwrap();
        let mut state = restore_session(&storage);
        state.expanded_menus.insert(MenuGroup::Finance);
        save_ui_state(&storage, &state).unwrap();

        assert!(restore_session(&storage).is_menu_expanded(MenuGroup::Finance));

        storage.set_item(MENUS_KEY, "[\"nope\"]").unwrap();
        let restored = restore_session(&storage);

        assert!(restored.expanded_menus.is_empty());
        assert!(!storage.contains(MENUS_KEY));
        assert!(restored.is_authenticated());
    }

    #[test]
    fn archive_selection_is_restored_only_inside_archive() {
        let storage = MemoryStorage::new();
        let item = ArchiveItem {
            id: "a-1".to_string(),
            title: "Spring Launch".to_string(),
            category: "Campaign".to_string(),
            date: "2024-03-01".to_string(),
            summary: String::new(),
        };
        storage
            .set_item(ARCHIVE_DETAIL_KEY, &serde_json::to_string(&item).unwrap())
            .unwrap();

        write_session(&storage, &client_user(), Nav::Client(ClientNav::Archive), Utc::now())
            .unwrap();
        assert_eq!(restore_session(&storage).archive_detail, Some(item));

        write_session(&storage, &client_user(), Nav::Client(ClientNav::Hub), Utc::now()).unwrap();
        assert_eq!(restore_session(&storage).archive_detail, None);
    }

    #[test]
    fn clear_session_removes_every_key() {
        let storage = MemoryStorage::new();
        write_session(&storage, &client_user(), Nav::default(), Utc::now()).unwrap();
        save_ui_state(&storage, &ShellState::default()).unwrap();

        clear_session(&storage);

        assert!(storage.is_empty());
    }
}
