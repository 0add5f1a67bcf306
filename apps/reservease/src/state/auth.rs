//! # Auth State
//!
//! Shared handle to the session's [`AuthStore`].

use std::sync::{Arc, Mutex};

use reservease_store::AuthStore;

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    auth: Arc<Mutex<AuthStore>>,
}

impl AuthState {
    pub fn new(auth: AuthStore) -> Self {
        AuthState {
            auth: Arc::new(Mutex::new(auth)),
        }
    }

    pub fn with_auth<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AuthStore) -> R,
    {
        let auth = self.auth.lock().expect("Auth mutex poisoned");
        f(&auth)
    }

    pub fn with_auth_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AuthStore) -> R,
    {
        let mut auth = self.auth.lock().expect("Auth mutex poisoned");
        f(&mut auth)
    }
}
