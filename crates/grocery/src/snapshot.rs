use std::collections::BTreeMap;

use cartwise_shared::{Storage, keys};
use serde::{Serialize, de::DeserializeOwned};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{CategoryOrder, GroceryItem, GroceryList, Preferences};

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, VariantArray, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Accepts the bare word as well as a JSON string.
    fn decode(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let word = serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_owned());

        word.parse().ok()
    }
}

async fn read<S: Storage>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(key, err = %err, "failed to read stored entry, using default");
            None
        }
    }
}

fn decode<T: DeserializeOwned + Default>(key: &str, raw: Option<String>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };

    serde_json::from_str(&raw).unwrap_or_else(|err| {
        tracing::warn!(key, err = %err, "stored entry is corrupt, using default");
        T::default()
    })
}

pub(crate) async fn load<S: Storage>(storage: &S) -> GroceryList {
    let items: Vec<GroceryItem> = decode(keys::ITEMS, read(storage, keys::ITEMS).await);
    let category: BTreeMap<String, String> =
        decode(keys::CATEGORY_PREFS, read(storage, keys::CATEGORY_PREFS).await);
    let store: BTreeMap<String, String> =
        decode(keys::STORE_PREFS, read(storage, keys::STORE_PREFS).await);
    let emoji: BTreeMap<String, String> =
        decode(keys::EMOJI_PREFS, read(storage, keys::EMOJI_PREFS).await);

    let category_order = match read(storage, keys::CATEGORY_ORDER).await {
        Some(raw) => CategoryOrder::merge_defaults(decode(keys::CATEGORY_ORDER, Some(raw))),
        None => CategoryOrder::default(),
    };

    let theme = match read(storage, keys::THEME).await {
        Some(raw) => Theme::decode(&raw).unwrap_or_else(|| {
            tracing::warn!(key = keys::THEME, raw = %raw, "unknown theme, using default");
            Theme::default()
        }),
        None => Theme::default(),
    };

    tracing::debug!(items = items.len(), "grocery list loaded");

    GroceryList {
        items,
        preferences: Preferences {
            category,
            store,
            emoji,
        },
        category_order,
        theme,
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> cartwise_shared::Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Writes the given entries. Stops at the first failure.
pub(crate) async fn save<S: Storage>(
    storage: &S,
    list: &GroceryList,
    entries: &[&str],
) -> cartwise_shared::Result<()> {
    for key in entries {
        let value = match *key {
            keys::ITEMS => encode(&list.items)?,
            keys::CATEGORY_PREFS => encode(&list.preferences.category)?,
            keys::STORE_PREFS => encode(&list.preferences.store)?,
            keys::EMOJI_PREFS => encode(&list.preferences.emoji)?,
            keys::CATEGORY_ORDER => encode(&list.category_order)?,
            keys::THEME => list.theme.to_string(),
            other => cartwise_shared::bail!("unknown storage entry {other}"),
        };

        storage.set(key, &value).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use cartwise_shared::MemoryStorage;

    use super::*;

    #[tokio::test]
    async fn test_load_empty_storage_uses_defaults() {
        let list = load(&MemoryStorage::default()).await;

        assert!(list.items.is_empty());
        assert_eq!(list.preferences, Preferences::default());
        assert_eq!(list.category_order, CategoryOrder::default());
        assert_eq!(list.theme, Theme::Light);
    }

    #[tokio::test]
    async fn test_corrupt_entries_fall_back_independently() {
        let storage = MemoryStorage::default()
            .with(keys::ITEMS, "{not json")
            .with(keys::CATEGORY_PREFS, "[1,2]")
            .with(keys::STORE_PREFS, r#"{"milk":"Costco"}"#)
            .with(keys::THEME, "purple");

        let list = load(&storage).await;

        assert!(list.items.is_empty());
        assert!(list.preferences.category.is_empty());
        assert_eq!(list.preferences.store_for("milk"), Some("Costco"));
        assert_eq!(list.theme, Theme::Light);
    }

    #[tokio::test]
    async fn test_category_order_merged_with_defaults() {
        let storage = MemoryStorage::default()
            .with(keys::CATEGORY_ORDER, r#"["Bakery","Produce"]"#);

        let list = load(&storage).await;

        assert_eq!(list.category_order.position("Bakery"), Some(0));
        assert_eq!(list.category_order.labels().len(), 13);
    }

    #[tokio::test]
    async fn test_theme_accepts_bare_and_json_words() {
        for raw in ["dark", "\"dark\"", " Dark "] {
            let list = load(&MemoryStorage::default().with(keys::THEME, raw)).await;
            assert_eq!(list.theme, Theme::Dark, "{raw}");
        }
    }

    #[tokio::test]
    async fn test_save_writes_requested_entries_only() {
        let storage = MemoryStorage::default();
        let mut list = GroceryList::default();
        list.theme = Theme::Dark;
        list.preferences.remember_category("milk", "Dairy & Eggs");

        save(&storage, &list, &[keys::THEME, keys::CATEGORY_PREFS])
            .await
            .unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get(keys::THEME).await.unwrap().as_deref(), Some("dark"));
        assert_eq!(
            storage.get(keys::CATEGORY_PREFS).await.unwrap().as_deref(),
            Some(r#"{"milk":"Dairy & Eggs"}"#)
        );
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let storage = MemoryStorage::default();
        let mut list = GroceryList::default();
        list.items.push(GroceryItem::new(
            "Milk 🥛".to_owned(),
            "Dairy & Eggs".to_owned(),
            "Costco".to_owned(),
            chrono::Utc::now(),
        ));
        list.category_order.move_up("Bakery");

        save(&storage, &list, &keys::ALL).await.unwrap();
        let loaded = load(&storage).await;

        assert_eq!(loaded.items, list.items);
        assert_eq!(loaded.category_order, list.category_order);
    }
}
