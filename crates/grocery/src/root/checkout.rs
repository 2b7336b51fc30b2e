use cartwise_shared::{Storage, keys};
use chrono::{DateTime, Utc};

use crate::GroceryItem;

impl super::GroceryList {
    /// Moves an item into the cart and records the purchase.
    ///
    /// Does not guard against a second call on a cart item; each call is
    /// one more purchase. History items have to be added again first.
    pub fn checkout(
        &mut self,
        id: &str,
        now: DateTime<Utc>,
    ) -> cartwise_shared::Result<&GroceryItem> {
        let item = self.find_mut(id)?;
        if item.is_history {
            cartwise_shared::user!("{} is not on the list, add it first", item.name);
        }

        item.checked_out = true;
        item.purchase_count += 1;
        item.purchase_dates.push(now);

        Ok(item)
    }

    /// Takes an item back out of the cart, undoing its last checkout.
    pub fn return_to_list(&mut self, id: &str) -> cartwise_shared::Result<&GroceryItem> {
        let item = self.find_mut(id)?;
        if !item.in_cart() {
            cartwise_shared::user!("{} is not in the cart", item.name);
        }

        item.checked_out = false;
        item.purchase_count = item.purchase_count.saturating_sub(1);
        item.purchase_dates.pop();

        Ok(item)
    }
}

impl<S: Storage> super::Command<S> {
    #[tracing::instrument(skip(self))]
    pub async fn checkout(&mut self, id: &str) -> cartwise_shared::Result<()> {
        self.list.checkout(id, Utc::now())?;
        self.persist(&[keys::ITEMS]).await;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn return_to_list(&mut self, id: &str) -> cartwise_shared::Result<()> {
        self.list.return_to_list(id)?;
        self.persist(&[keys::ITEMS]).await;

        Ok(())
    }
}
