//! # Menu State
//!
//! Shared handle to the session's [`MenuStore`].

use std::sync::{Arc, Mutex};

use reservease_store::MenuStore;

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    menu: Arc<Mutex<MenuStore>>,
}

impl MenuState {
    pub fn new(menu: MenuStore) -> Self {
        MenuState {
            menu: Arc::new(Mutex::new(menu)),
        }
    }

    pub fn with_menu<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&MenuStore) -> R,
    {
        let menu = self.menu.lock().expect("Menu mutex poisoned");
        f(&menu)
    }

    pub fn with_menu_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut MenuStore) -> R,
    {
        let mut menu = self.menu.lock().expect("Menu mutex poisoned");
        f(&mut menu)
    }
}
