//! # Menu Store
//!
//! The session's menu catalog.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Public menu page            Admin menu page                           │
//! │  ────────────────            ───────────────                           │
//! │  sections()                  list(filter)                              │
//! │  list(filter)                create_item() / update_item()             │
//! │  popular_items()             toggle_availability() / delete_item()     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are sequential numbers as strings, continuing after the highest
//! numeric id the store starts with.

use tracing::{debug, info, warn};

use reservease_core::menu::{self, MenuSection};
use reservease_core::{seed, CoreError, CoreResult, MenuFilter, MenuItem, MenuItemDraft};

#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl MenuStore {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let next_id = items
            .iter()
            .filter_map(|i| i.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        MenuStore { items, next_id }
    }

    /// The demo restaurant's menu.
    pub fn seeded() -> Self {
        Self::new(seed::menu_items())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// All items in catalog order, available or not.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get_item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn list(&self, filter: &MenuFilter) -> Vec<MenuItem> {
        let items = filter.apply(&self.items);
        debug!(?filter, count = items.len(), "Menu items listed");
        items
    }

    /// The public menu grouped by category.
    pub fn sections(&self) -> Vec<MenuSection> {
        menu::sections(&self.list(&MenuFilter::public()))
    }

    /// Most-ordered available items.
    pub fn popular_items(&self, limit: usize) -> Vec<MenuItem> {
        menu::popular(&self.list(&MenuFilter::public()), limit)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn create_item(&mut self, draft: MenuItemDraft) -> CoreResult<MenuItem> {
        draft.validate()?;

        let item = draft.into_item(self.next_id.to_string(), 0);
        self.next_id += 1;

        info!(id = %item.id, name = %item.name, category = %item.category, "Menu item created");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replaces the item's fields. The order count is kept.
    pub fn update_item(&mut self, id: &str, draft: MenuItemDraft) -> CoreResult<MenuItem> {
        draft.validate()?;
        let item = self.find_mut(id)?;

        *item = draft.into_item(item.id.clone(), item.order_count);
        info!(id, name = %item.name, "Menu item updated");
        Ok(item.clone())
    }

    /// Flips whether the item shows on the public menu.
    pub fn toggle_availability(&mut self, id: &str) -> CoreResult<MenuItem> {
        let item = self.find_mut(id)?;
        item.available = !item.available;

        info!(id, available = item.available, "Menu item availability changed");
        Ok(item.clone())
    }

    pub fn delete_item(&mut self, id: &str) -> CoreResult<MenuItem> {
        let idx = self.items.iter().position(|i| i.id == id).ok_or_else(|| {
            warn!(id, "Menu item not found");
            CoreError::MenuItemNotFound(id.to_string())
        })?;

        let removed = self.items.remove(idx);
        info!(id, name = %removed.name, "Menu item deleted");
        Ok(removed)
    }

    fn find_mut(&mut self, id: &str) -> CoreResult<&mut MenuItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::MenuItemNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservease_core::{MenuCategory, Price};

    fn draft(name: &str) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            description: "Seasonal".to_string(),
            price: Price::from_cents(950),
            image_url: None,
            category: MenuCategory::Dessert,
            available: true,
            vegetarian: true,
            vegan: false,
            gluten_free: false,
        }
    }

    #[test]
    fn test_create_continues_ids() {
        let mut store = MenuStore::seeded();
        let item = store.create_item(draft("Plum Tart")).unwrap();
        assert_eq!(item.id, "13");
        assert_eq!(item.order_count, 0);
        assert_eq!(store.create_item(draft("Fig Tart")).unwrap().id, "14");

        let mut empty = MenuStore::empty();
        assert_eq!(empty.create_item(draft("Plum Tart")).unwrap().id, "1");

        assert!(matches!(
            store.create_item(draft("  ")),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_update_keeps_order_count() {
        let mut store = MenuStore::seeded();
        let before = store.get_item("5").unwrap().order_count;

        let mut changed = draft("Wild Mushroom Risotto");
        changed.category = MenuCategory::MainCourse;
        let item = store.update_item("5", changed).unwrap();
        assert_eq!(item.name, "Wild Mushroom Risotto");
        assert_eq!(item.order_count, before);

        assert!(matches!(
            store.update_item("99", draft("Ghost")),
            Err(CoreError::MenuItemNotFound(_))
        ));

        let mut negative = draft("Refund");
        negative.price = Price::from_cents(-100);
        assert!(store.update_item("5", negative).is_err());
    }

    #[test]
    fn test_toggle_hides_from_public_menu() {
        let mut store = MenuStore::seeded();
        let public = |s: &MenuStore| s.sections().iter().map(|sec| sec.items.len()).sum::<usize>();
        let before = public(&store);

        let item = store.toggle_availability("10").unwrap();
        assert!(!item.available);
        assert_eq!(public(&store), before - 1);
        assert!(store.popular_items(3).iter().all(|i| i.id != "10"));
        assert_eq!(store.items().len(), 12);

        assert!(store.toggle_availability("10").unwrap().available);
    }

    #[test]
    fn test_popular_and_delete() {
        let mut store = MenuStore::seeded();
        let top: Vec<String> = store.popular_items(3).into_iter().map(|i| i.id).collect();
        assert_eq!(top, vec!["10", "7", "5"]);

        store.delete_item("10").unwrap();
        assert_eq!(store.popular_items(1)[0].id, "7");
        assert!(matches!(
            store.delete_item("10"),
            Err(CoreError::MenuItemNotFound(_))
        ));
    }

    #[test]
    fn test_search_covers_descriptions() {
        let store = MenuStore::seeded();
        let filter = MenuFilter {
            search: "truffle".to_string(),
            ..MenuFilter::public()
        };
        let ids: Vec<String> = store.list(&filter).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["5", "7"]);
    }
}
