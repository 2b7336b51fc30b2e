use std::collections::BTreeMap;

use crate::ANY_STORE;

/// Choices remembered per normalized name.
///
/// Entries never expire, the last write wins. Empty keys are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub category: BTreeMap<String, String>,
    pub store: BTreeMap<String, String>,
    pub emoji: BTreeMap<String, String>,
}

impl Preferences {
    pub fn category_for(&self, key: &str) -> Option<&str> {
        self.category.get(key).map(String::as_str)
    }

    pub fn store_for(&self, key: &str) -> Option<&str> {
        self.store.get(key).map(String::as_str)
    }

    pub fn emoji_for(&self, key: &str) -> Option<&str> {
        self.emoji.get(key).map(String::as_str)
    }

    pub fn remember_category(&mut self, key: &str, category: &str) -> bool {
        remember(&mut self.category, key, category)
    }

    /// Empty values and the "Any Store" sentinel are not preferences.
    pub fn remember_store(&mut self, key: &str, store: &str) -> bool {
        if store == ANY_STORE {
            return false;
        }

        remember(&mut self.store, key, store)
    }

    pub fn remember_emoji(&mut self, key: &str, emoji: &str) -> bool {
        remember(&mut self.emoji, key, emoji)
    }
}

fn remember(map: &mut BTreeMap<String, String>, key: &str, value: &str) -> bool {
    if key.is_empty() || value.trim().is_empty() {
        return false;
    }

    map.insert(key.to_owned(), value.to_owned());

    true
}
