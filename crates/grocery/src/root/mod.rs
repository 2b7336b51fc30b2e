use std::ops::Deref;

use cartwise_shared::{Storage, keys};
use chrono::{DateTime, Utc};

use crate::{
    CategoryOrder, GroceryItem, Preferences, Theme,
    predict::{self, Reminder, Suggestion},
    snapshot,
};

mod add;
mod checkout;
mod clear;
mod trip;
mod update;

pub use add::{AddInput, AddOutcome, DuplicateConflict};

/// Whole application state: the item collection plus everything learned
/// about it.
///
/// Operations here are synchronous and never touch storage; [`Command`]
/// pairs them with persistence.
#[derive(Debug, Clone, Default)]
pub struct GroceryList {
    pub items: Vec<GroceryItem>,
    pub preferences: Preferences,
    pub category_order: CategoryOrder,
    pub theme: Theme,
}

impl GroceryList {
    pub fn active(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.iter().filter(|i| i.is_active())
    }

    pub fn cart(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.iter().filter(|i| i.in_cart())
    }

    pub fn history(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.iter().filter(|i| i.is_history)
    }

    pub fn find(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    fn find_mut(&mut self, id: &str) -> cartwise_shared::Result<&mut GroceryItem> {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => Ok(item),
            None => cartwise_shared::not_found!("item {id}"),
        }
    }

    pub fn grouped_active(&self) -> Vec<(String, Vec<&GroceryItem>)> {
        self.category_order.group_active(&self.items)
    }

    pub fn suggestions(&self, now: DateTime<Utc>, limit: usize) -> Vec<Suggestion<'_>> {
        predict::suggested_reorders(&self.items, now, limit)
    }

    pub fn reminders(&self, now: DateTime<Utc>, due_soon_ratio: f64) -> Vec<Reminder<'_>> {
        predict::reminders(&self.items, now, due_soon_ratio)
    }
}

/// The grocery list bound to its durable storage.
///
/// Every mutating call saves the entries it touched. Save failures are logged
/// and otherwise ignored; the in-memory state stays authoritative.
pub struct Command<S: Storage> {
    storage: S,
    list: GroceryList,
}

impl<S: Storage> Deref for Command<S> {
    type Target = GroceryList;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl<S: Storage> Command<S> {
    pub async fn load(storage: S) -> Self {
        let list = snapshot::load(&storage).await;

        Self { storage, list }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    async fn persist(&self, entries: &[&str]) {
        if let Err(err) = snapshot::save(&self.storage, &self.list, entries).await {
            tracing::warn!(err = %err, ?entries, "failed to save grocery list");
        }
    }

    pub async fn move_category_up(&mut self, label: &str) -> bool {
        let moved = self.list.category_order.move_up(label);
        if moved {
            self.persist(&[keys::CATEGORY_ORDER]).await;
        }

        moved
    }

    pub async fn move_category_down(&mut self, label: &str) -> bool {
        let moved = self.list.category_order.move_down(label);
        if moved {
            self.persist(&[keys::CATEGORY_ORDER]).await;
        }

        moved
    }

    pub async fn set_theme(&mut self, theme: Theme) {
        self.list.theme = theme;
        self.persist(&[keys::THEME]).await;
    }
}
