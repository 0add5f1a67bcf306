//! # Menu Commands
//!
//! The public menu page and the admin's menu editor.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Our Menu                                                               │
//! │  [search______] [category ▾] [ ] Vegetarian [ ] Vegan [ ] Gluten-free  │
//! │                                                                         │
//! │  Most Popular:  Sparkling Water · Beef Tenderloin · Mushroom Risotto   │
//! │                                                                         │
//! │  Appetizers                                                             │
//! │    Bruschetta al Pomodoro ............................... €7.50  (V)   │
//! │  Main Courses                                                           │
//! │    Wild Mushroom Risotto ................................ €18.50 (V GF)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Guests only ever see available items. The admin commands see and edit
//! the whole catalog.

use serde::Serialize;
use tracing::{debug, info};

use reservease_core::menu::{self, MenuSection};
use reservease_core::validation::validate_search_query;
use reservease_core::{MenuFilter, MenuItem, MenuItemDraft};

use crate::commands::require_admin;
use crate::error::ApiResult;
use crate::state::AppState;

/// Items in the "Most Popular" strip.
const POPULAR_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    pub restaurant_name: String,
    pub popular: Vec<MenuItem>,
    pub sections: Vec<MenuSection>,
    /// Set when nothing matches.
    pub empty_message: Option<String>,
}

fn sanitize_filter(filter: MenuFilter) -> ApiResult<MenuFilter> {
    let search = validate_search_query(&filter.search)?;
    Ok(MenuFilter { search, ..filter })
}

/// The full public menu.
pub fn get_menu(state: &AppState) -> MenuView {
    debug!("get_menu command");
    let (popular, sections) = state
        .menu
        .with_menu(|m| (m.popular_items(POPULAR_LIMIT), m.sections()));

    MenuView {
        restaurant_name: state.config.restaurant.name.clone(),
        empty_message: sections.is_empty().then(|| "The menu is being updated".to_string()),
        popular,
        sections,
    }
}

/// Public menu narrowed by the page filters. Unavailable items stay hidden.
pub fn search_menu(state: &AppState, filter: MenuFilter) -> ApiResult<MenuView> {
    let filter = MenuFilter {
        available_only: true,
        ..sanitize_filter(filter)?
    };
    debug!(?filter, "search_menu command");

    let (popular, items) = state
        .menu
        .with_menu(|m| (m.popular_items(POPULAR_LIMIT), m.list(&filter)));
    let sections = menu::sections(&items);

    Ok(MenuView {
        restaurant_name: state.config.restaurant.name.clone(),
        empty_message: sections.is_empty().then(|| "No dishes match your filters".to_string()),
        popular,
        sections,
    })
}

pub fn popular_items(state: &AppState, limit: Option<usize>) -> Vec<MenuItem> {
    let limit = limit.unwrap_or(POPULAR_LIMIT);
    state.menu.with_menu(|m| m.popular_items(limit))
}

// =============================================================================
// Admin
// =============================================================================

/// Every item matching `filter`, available or not.
pub fn list_menu_items(state: &AppState, filter: MenuFilter) -> ApiResult<Vec<MenuItem>> {
    require_admin(state)?;
    let filter = sanitize_filter(filter)?;
    Ok(state.menu.with_menu(|m| m.list(&filter)))
}

pub fn create_menu_item(state: &AppState, draft: MenuItemDraft) -> ApiResult<MenuItem> {
    let admin = require_admin(state)?;
    let item = state.menu.with_menu_mut(|m| m.create_item(draft))?;

    info!(id = %item.id, admin = %admin.id, "Menu item added");
    Ok(item)
}

pub fn update_menu_item(state: &AppState, id: &str, draft: MenuItemDraft) -> ApiResult<MenuItem> {
    require_admin(state)?;
    debug!(id, "update_menu_item command");
    Ok(state.menu.with_menu_mut(|m| m.update_item(id, draft))?)
}

pub fn toggle_menu_item(state: &AppState, id: &str) -> ApiResult<MenuItem> {
    require_admin(state)?;
    Ok(state.menu.with_menu_mut(|m| m.toggle_availability(id))?)
}

pub fn delete_menu_item(state: &AppState, id: &str) -> ApiResult<MenuItem> {
    let admin = require_admin(state)?;
    let removed = state.menu.with_menu_mut(|m| m.delete_item(id))?;

    info!(id, admin = %admin.id, "Menu item removed");
    Ok(removed)
}
