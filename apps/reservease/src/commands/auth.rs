//! # Auth Commands
//!
//! Demo sign-in, sign-out and path navigation.
//!
//! ## Login Page
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Welcome Back                                                           │
//! │  Sign in to your account                                                │
//! │                                                                         │
//! │  Role: ( ) Admin  ( ) Staff  (•) Customer                               │
//! │  [ Sign In ] ──► login({ role: 'customer' }) ──► navigate('/')         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use reservease_core::{Role, User};
use reservease_store::{AuthStore, LoginRequest};

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::routes::{self, NavLink, Navigation};
use crate::state::AppState;

/// Who is signed in, and what the header shows for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub nav_links: Vec<NavLink>,
}

impl SessionView {
    fn from_auth(auth: &AuthStore) -> Self {
        SessionView {
            user: auth.current_user().cloned(),
            is_authenticated: auth.is_authenticated(),
            is_admin: auth.is_admin(),
            nav_links: routes::nav_links(auth),
        }
    }
}

pub fn get_session(state: &AppState) -> SessionView {
    state.auth.with_auth(SessionView::from_auth)
}

/// Signs in through the session's authenticator.
///
/// A request that matches nobody leaves the session signed out and returns
/// `UNAUTHORIZED`.
pub fn login(state: &AppState, request: LoginRequest) -> ApiResult<SessionView> {
    debug!(role = %request.role, "login command");

    state.auth.with_auth_mut(|auth| {
        if auth.login_with(&request).is_none() {
            return Err(ApiError::new(
                ErrorCode::Unauthorized,
                format!("No account found for role {}", request.role),
            ));
        }
        Ok(SessionView::from_auth(auth))
    })
}

pub fn login_as(state: &AppState, role: Role) -> ApiResult<SessionView> {
    login(state, LoginRequest::for_role(role))
}

pub fn logout(state: &AppState) -> SessionView {
    debug!("logout command");
    state.auth.with_auth_mut(|auth| {
        auth.logout();
        SessionView::from_auth(auth)
    })
}

/// Resolves a path against the current session.
pub fn navigate(state: &AppState, path: &str) -> Navigation {
    state.auth.with_auth(|auth| routes::navigate(path, auth))
}
