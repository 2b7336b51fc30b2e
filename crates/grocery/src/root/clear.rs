use cartwise_shared::{Storage, keys};

use crate::GroceryItem;

impl super::GroceryList {
    /// Drops every active item. Cart and history are kept.
    pub fn clear_active(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.is_active());

        before - self.items.len()
    }

    /// Forgets purchase history while keeping the items and everything
    /// learned about them.
    pub fn refresh_history(&mut self) -> usize {
        let mut refreshed = 0;
        for item in self.items.iter_mut().filter(|i| i.is_history) {
            item.purchase_count = 0;
            item.purchase_dates.clear();
            refreshed += 1;
        }

        refreshed
    }

    pub fn delete_item(&mut self, id: &str) -> cartwise_shared::Result<GroceryItem> {
        let Some(idx) = self.items.iter().position(|i| i.id == id) else {
            cartwise_shared::not_found!("item {id}");
        };

        Ok(self.items.remove(idx))
    }
}

impl<S: Storage> super::Command<S> {
    #[tracing::instrument(skip(self))]
    pub async fn clear_active(&mut self) -> usize {
        let removed = self.list.clear_active();
        if removed > 0 {
            self.persist(&[keys::ITEMS]).await;
        }

        removed
    }

    #[tracing::instrument(skip(self))]
    pub async fn refresh_history(&mut self) -> usize {
        let refreshed = self.list.refresh_history();
        if refreshed > 0 {
            self.persist(&[keys::ITEMS]).await;
        }

        refreshed
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&mut self, id: &str) -> cartwise_shared::Result<GroceryItem> {
        let item = self.list.delete_item(id)?;
        self.persist(&[keys::ITEMS]).await;

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use crate::{AddInput, GroceryList, ItemState};

    fn list() -> GroceryList {
        let mut list = GroceryList::default();
        for name in ["Milk", "Bread", "Eggs"] {
            list.upsert_by_normalized_key(AddInput::new(name), Utc::now());
        }

        let ids = list.items.iter().map(|i| i.id.to_owned()).collect::<Vec<_>>();
        let week_ago = Utc::now() - Duration::days(7);
        list.checkout(&ids[0], week_ago).unwrap();
        list.checkout(&ids[0], Utc::now()).unwrap();
        list.complete_trip();
        list.checkout(&ids[1], Utc::now()).unwrap();

        list
    }

    #[test]
    fn test_clear_active_keeps_cart_and_history() {
        let mut list = list();

        assert_eq!(list.clear_active(), 1);
        assert_eq!(list.items.len(), 2);
        assert!(list.items.iter().all(|i| !i.is_active()));
    }

    #[test]
    fn test_refresh_history_keeps_items_and_preferences() {
        let mut list = list();
        let preferences = list.preferences.clone();

        assert_eq!(list.refresh_history(), 1);

        let history = list.history().collect::<Vec<_>>();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].purchase_count, 0);
        assert!(history[0].purchase_dates.is_empty());
        assert_eq!(list.cart().next().map(|i| i.purchase_count), Some(1));
        assert_eq!(list.preferences, preferences);
    }

    #[test]
    fn test_delete_item() {
        let mut list = list();
        let id = list.items[2].id.to_owned();

        let removed = list.delete_item(&id).unwrap();
        assert_eq!(removed.state(), ItemState::Active);
        assert!(list.find(&id).is_none());

        assert!(matches!(
            list.delete_item(&id),
            Err(cartwise_shared::Error::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_keeps_learned_preferences() {
        let mut list = GroceryList::default();
        let input = AddInput::new("Oat milk 🌾")
            .category("Beverages & Coffee")
            .store("No Frills");
        let id = list
            .upsert_by_normalized_key(input, Utc::now())
            .id()
            .unwrap()
            .to_owned();

        list.delete_item(&id).unwrap();
        assert!(list.items.is_empty());

        let id = list
            .upsert_by_normalized_key(AddInput::new("oat milk"), Utc::now())
            .id()
            .unwrap()
            .to_owned();
        let item = list.find(&id).unwrap();

        assert_eq!(item.category, "Beverages & Coffee");
        assert_eq!(item.store, "No Frills");
        assert_eq!(item.name, "oat milk 🌾");
    }
}
