use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Category, normalize::normalize};

/// Where an item sits in the list → cart → history flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Active,
    Cart,
    History,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub purchase_count: u32,
    #[serde(default)]
    pub purchase_dates: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub checked_out: bool,
    #[serde(default)]
    pub is_history: bool,
    #[serde(default)]
    pub added_at: DateTime<Utc>,
}

fn default_category() -> String {
    Category::Other.to_string()
}

impl GroceryItem {
    pub fn new(name: String, category: String, store: String, added_at: DateTime<Utc>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name,
            category,
            store,
            purchase_count: 0,
            purchase_dates: vec![],
            checked_out: false,
            is_history: false,
            added_at,
        }
    }

    pub fn state(&self) -> ItemState {
        if self.is_history {
            ItemState::History
        } else if self.checked_out {
            ItemState::Cart
        } else {
            ItemState::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == ItemState::Active
    }

    pub fn in_cart(&self) -> bool {
        self.state() == ItemState::Cart
    }

    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    pub fn last_purchase(&self) -> Option<DateTime<Utc>> {
        self.purchase_dates.iter().max().copied()
    }

    /// Purchases counted for statistics: recorded dates when there are any,
    /// the bare counter otherwise.
    pub fn purchase_total(&self) -> u32 {
        if self.purchase_dates.is_empty() {
            self.purchase_count
        } else {
            u32::try_from(self.purchase_dates.len()).unwrap_or(u32::MAX)
        }
    }
}
