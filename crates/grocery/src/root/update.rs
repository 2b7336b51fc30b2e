use cartwise_shared::{Storage, keys};

impl super::GroceryList {
    /// Recategorizes an item and remembers the choice for its name.
    pub fn update_category(&mut self, id: &str, category: &str) -> cartwise_shared::Result<()> {
        let category = category.trim();
        if category.is_empty() {
            cartwise_shared::user!("category must not be empty");
        }

        let item = self.find_mut(id)?;
        item.category = category.to_owned();
        let key = item.key();

        self.preferences.remember_category(&key, category);

        Ok(())
    }

    /// Assigns a store. An empty store unassigns the item and is not
    /// remembered.
    pub fn update_store(&mut self, id: &str, store: &str) -> cartwise_shared::Result<()> {
        let store = store.trim();

        let item = self.find_mut(id)?;
        item.store = store.to_owned();
        let key = item.key();

        self.preferences.remember_store(&key, store);

        Ok(())
    }
}

impl<S: Storage> super::Command<S> {
    #[tracing::instrument(skip(self))]
    pub async fn update_category(
        &mut self,
        id: &str,
        category: &str,
    ) -> cartwise_shared::Result<()> {
        self.list.update_category(id, category)?;
        self.persist(&[keys::ITEMS, keys::CATEGORY_PREFS]).await;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_store(&mut self, id: &str, store: &str) -> cartwise_shared::Result<()> {
        self.list.update_store(id, store)?;
        self.persist(&[keys::ITEMS, keys::STORE_PREFS]).await;

        Ok(())
    }
}
