use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{
    auth_expiration_hours, official_password, remember_expiration_days, AUTH_COOKIE_SLOT,
    CURRENT_USER_SLOT, OFFICIAL_USERNAME,
};
use crate::core::errors::AppError;
use crate::models::models::{create_user, User};
use crate::session::Session;
use crate::store::{save_users, Storage, Store};

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthCookie {
    pub id: String,
    pub username: String,
    pub expires: DateTime<Utc>,
}

// Demo-mode policy: only the official account's password is checked; any
// other known user gets in with any non-empty password. Failures are returned
// structured but the UI shows nothing for them.
pub fn login(
    session: &mut Session,
    username: &str,
    password: &str,
    remember: bool,
) -> Result<User, AppError> {
    let user = session
        .users
        .iter()
        .find(|u| u.username == username)
        .cloned()
        .ok_or(AppError::UnknownUsername)?;

    if user.username == OFFICIAL_USERNAME {
        if password != official_password() {
            return Err(AppError::WrongPassword);
        }
    } else if password.is_empty() {
        return Err(AppError::EmptyPassword);
    }

    write_remember_marker(&mut session.storage, username, remember)?;
    set_auth_cookie(&mut session.storage, &user, remember)?;
    session.set_current(Some(user.clone()));

    Ok(user)
}

pub fn signup(
    session: &mut Session,
    username: &str,
    email: &str,
    password: &str,
    avatar: Option<&str>,
) -> Result<User, AppError> {
    if session.users.iter().any(|u| u.username == username) {
        return Err(AppError::UsernameTaken);
    }

    let user = create_user(username, email, password, avatar);
    session.users.push(user.clone());
    save_users(&mut session.storage, &session.users)?;

    // Signup always writes the long-lived marker, unlike login.
    write_remember_marker(&mut session.storage, username, true)?;
    set_auth_cookie(&mut session.storage, &user, true)?;
    session.set_current(Some(user.clone()));

    Ok(user)
}

pub fn logout(session: &mut Session) -> Result<(), AppError> {
    session.set_current(None);
    session.storage.local.delete(CURRENT_USER_SLOT)?;
    session.storage.session.delete(CURRENT_USER_SLOT)?;
    delete_auth_cookie(&mut session.storage)?;

    Ok(())
}

// Only the long-lived marker is consulted on restore; the session-scoped
// marker is written on non-remembered logins but never read back.
pub(crate) fn restore_session(storage: &mut Storage, users: &[User]) -> Option<User> {
    let remembered: Option<String> = storage.local.get_json(CURRENT_USER_SLOT).ok().flatten();

    let username = remembered.or_else(|| get_auth_cookie(storage).map(|cookie| cookie.username));

    username.and_then(|name| users.iter().find(|u| u.username == name).cloned())
}

fn write_remember_marker(
    storage: &mut Storage,
    username: &str,
    remember: bool,
) -> anyhow::Result<()> {
    if remember {
        storage.local.set_json(CURRENT_USER_SLOT, username)
    } else {
        storage.session.set_json(CURRENT_USER_SLOT, username)
    }
}

// === Auth cookie ===
// Scoped like the remember marker: a remembered login gets a year-long cookie
// in the durable store, anything else a 24-hour cookie that dies with the
// process.

pub fn set_auth_cookie(storage: &mut Storage, user: &User, remember: bool) -> anyhow::Result<()> {
    let ttl = if remember {
        Duration::days(remember_expiration_days())
    } else {
        Duration::hours(auth_expiration_hours())
    };

    let cookie = AuthCookie {
        id: user.id.clone(),
        username: user.username.clone(),
        expires: Utc::now() + ttl,
    };

    if remember {
        storage.local.set_json(AUTH_COOKIE_SLOT, &cookie)
    } else {
        storage.session.set_json(AUTH_COOKIE_SLOT, &cookie)
    }
}

pub fn get_auth_cookie(storage: &mut Storage) -> Option<AuthCookie> {
    read_cookie(&mut storage.session).or_else(|| read_cookie(&mut storage.local))
}

// Expired cookies are dropped on read.
fn read_cookie(store: &mut Store) -> Option<AuthCookie> {
    let cookie: AuthCookie = store.get_json(AUTH_COOKIE_SLOT).ok().flatten()?;

    if Utc::now() > cookie.expires {
        let _ = store.delete(AUTH_COOKIE_SLOT);
        return None;
    }

    Some(cookie)
}

pub fn delete_auth_cookie(storage: &mut Storage) -> anyhow::Result<()> {
    storage.session.delete(AUTH_COOKIE_SLOT)?;
    storage.local.delete(AUTH_COOKIE_SLOT)
}

pub fn is_authenticated(storage: &mut Storage) -> bool {
    get_auth_cookie(storage).is_some()
}
