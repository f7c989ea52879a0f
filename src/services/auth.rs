//! Hard-coded login gate.
//!
//! The three demo accounts (one per view mode) are the only identities the
//! portal knows. This is a convenience gate, not an authentication boundary.

use chrono::{DateTime, Utc};

use crate::domain::activity::{ActivityAction, ActivityEvent};
use crate::domain::state::{ShellAction, ShellState, reduce};
use crate::domain::types::{NonEmptyString, UserEmail};
use crate::domain::user::{CurrentUser, UserType};
use crate::services::session::{clear_session, write_session};
use crate::services::{ServiceError, ServiceResult};
use crate::storage::SessionStorage;

struct Account {
    email: &'static str,
    password: &'static str,
    name: &'static str,
    company_name: &'static str,
    role: &'static str,
    user_type: UserType,
}

const ACCOUNTS: [Account; 3] = [
    Account {
        email: "admin@cielo.marketing",
        password: "admincielo765598",
        name: "Ava Reyes",
        company_name: "CIELO Marketing",
        role: "Agency Director",
        user_type: UserType::Management,
    },
    Account {
        email: "team@cielo.marketing",
        password: "teamcielo2024",
        name: "Marcus Lee",
        company_name: "CIELO Marketing",
        role: "Account Manager",
        user_type: UserType::Team,
    },
    Account {
        email: "sarah@client.com",
        password: "client123",
        name: "Sarah Johnson",
        company_name: "Bloom Botanics",
        role: "Marketing Director",
        user_type: UserType::Client,
    },
];

impl Account {
    fn to_user(&self) -> ServiceResult<CurrentUser> {
        Ok(CurrentUser::new(
            NonEmptyString::new(self.name)?,
            UserEmail::new(self.email)?,
            NonEmptyString::new(self.company_name)?,
            NonEmptyString::new(self.role)?,
            self.user_type,
        ))
    }
}

/// Checks the credentials against the account table.
pub fn authenticate(email: &str, password: &str) -> ServiceResult<CurrentUser> {
    let email = UserEmail::new(email).map_err(|_| ServiceError::InvalidCredentials)?;

    ACCOUNTS
        .iter()
        .find(|account| account.email == email.as_str() && account.password == password)
        .ok_or(ServiceError::InvalidCredentials)?
        .to_user()
}

/// Signs in, persisting the session blob.
///
/// Returns the signed-in state together with the `sign_in` activity event the
/// caller should report on a best-effort basis. Entries left by a previous
/// session are dropped. Rejected credentials leave storage untouched.
pub fn login<S>(
    state: ShellState,
    storage: &S,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> ServiceResult<(ShellState, ActivityEvent)>
where
    S: SessionStorage + ?Sized,
{
    let user = authenticate(email, password).map_err(|err| {
        log::info!("Rejected sign in attempt for {email}");
        err
    })?;

    let nav = user
        .user_type
        .map(|user_type| user_type.view_mode().default_nav())
        .unwrap_or_default();

    clear_session(storage);
    write_session(storage, &user, nav, now).map_err(|err| {
        log::error!("Failed to persist session: {err}");
        err
    })?;

    let event = ActivityEvent::for_user(ActivityAction::SignIn, &user, now);
    let state = reduce(state, ShellAction::SignedIn { user, nav });
    log::info!("{} signed in to the {} view", state.current_user().email, state.view_mode());

    Ok((state, event))
}

/// Signs out and clears storage.
///
/// Returns the reset state and, when someone was signed in, the `sign_out`
/// activity event.
pub fn logout<S>(
    state: ShellState,
    storage: &S,
    now: DateTime<Utc>,
) -> (ShellState, Option<ActivityEvent>)
where
    S: SessionStorage + ?Sized,
{
    let event = state
        .user
        .as_ref()
        .map(|user| ActivityEvent::for_user(ActivityAction::SignOut, user, now));

    clear_session(storage);

    (reduce(state, ShellAction::SignedOut), event)
}
