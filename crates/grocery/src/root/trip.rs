use cartwise_shared::{Storage, keys};

use crate::Category;

impl super::GroceryList {
    /// Finishes the trip: every cart item becomes history and its category
    /// and store are remembered for next time.
    ///
    /// Returns the number of items moved to history.
    pub fn complete_trip(&mut self) -> usize {
        let other = Category::Other.to_string();
        let mut completed = 0;

        for item in self.items.iter_mut().filter(|i| i.in_cart()) {
            let key = item.key();
            if item.category != other {
                self.preferences.remember_category(&key, &item.category);
            }

            self.preferences.remember_store(&key, &item.store);

            item.checked_out = false;
            item.is_history = true;
            completed += 1;
        }

        completed
    }
}

impl<S: Storage> super::Command<S> {
    #[tracing::instrument(skip(self))]
    pub async fn complete_trip(&mut self) -> usize {
        let completed = self.list.complete_trip();
        if completed > 0 {
            self.persist(&[keys::ITEMS, keys::CATEGORY_PREFS, keys::STORE_PREFS])
                .await;
        }

        tracing::info!(completed, "trip completed");

        completed
    }
}
