//! # Auth Store
//!
//! Tracks who is signed in to the session.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Login page                                                             │
//! │   email: ________   password: ________   role: (•) customer            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AuthStore::login_with(LoginRequest)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Authenticator::authenticate ──► Some(user) → Identity { user, .. }    │
//! │                              └─► None       → signed out               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`DemoRoleSelector`] is the only authenticator shipped. It ignores the
//! credentials and picks the first known user with the requested role.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use reservease_core::{seed, Role, User};

// =============================================================================
// Authenticator
// =============================================================================

/// What the login form submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub role: Role,
}

impl LoginRequest {
    /// A request that only carries a role.
    pub fn for_role(role: Role) -> Self {
        LoginRequest {
            email: String::new(),
            password: String::new(),
            role,
        }
    }
}

/// Resolves a login request to a user.
pub trait Authenticator: Send + Sync + fmt::Debug {
    fn authenticate(&self, request: &LoginRequest) -> Option<User>;
}

/// Selects a user by role. Credentials are not checked.
#[derive(Debug, Clone)]
pub struct DemoRoleSelector {
    users: Vec<User>,
}

impl DemoRoleSelector {
    pub fn new(users: Vec<User>) -> Self {
        DemoRoleSelector { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl Default for DemoRoleSelector {
    fn default() -> Self {
        Self::new(seed::users())
    }
}

impl Authenticator for DemoRoleSelector {
    fn authenticate(&self, request: &LoginRequest) -> Option<User> {
        self.users.iter().find(|u| u.role == request.role).cloned()
    }
}

// =============================================================================
// Identity
// =============================================================================

/// The signed-in user of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub session_id: String,
    pub user: User,
    #[ts(as = "String")]
    pub signed_in_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(user: User) -> Self {
        Identity {
            session_id: Uuid::new_v4().to_string(),
            user,
            signed_in_at: Utc::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

// =============================================================================
// Auth Store
// =============================================================================

#[derive(Debug)]
pub struct AuthStore {
    authenticator: Box<dyn Authenticator>,
    current: Option<Identity>,
}

impl AuthStore {
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        AuthStore {
            authenticator,
            current: None,
        }
    }

    /// Demo login over the seed users.
    pub fn demo() -> Self {
        Self::new(Box::new(DemoRoleSelector::default()))
    }

    /// Signs in through the authenticator.
    ///
    /// A request nobody matches leaves the session signed out, even if a
    /// user was signed in before.
    pub fn login_with(&mut self, request: &LoginRequest) -> Option<&Identity> {
        self.current = self.authenticator.authenticate(request).map(Identity::new);

        match &self.current {
            Some(identity) => info!(
                user_id = %identity.user.id,
                role = %identity.user.role,
                "Signed in"
            ),
            None => debug!(role = %request.role, "No user for login request"),
        }

        self.current.as_ref()
    }

    /// Signs in as the first user with `role`.
    pub fn login(&mut self, role: Role) -> Option<&Identity> {
        self.login_with(&LoginRequest::for_role(role))
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            info!(user_id = %identity.user.id, "Signed out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref().map(|i| &i.user)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.current.as_ref().is_some_and(|i| i.role() == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::demo()
    }
}
