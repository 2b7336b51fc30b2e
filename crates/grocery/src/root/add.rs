use cartwise_shared::{Storage, keys};
use chrono::{DateTime, Utc};

use crate::{GroceryItem, classify::Classifier, normalize::ParsedName};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddInput {
    pub name: String,
    pub category: Option<String>,
    pub store: Option<String>,
    pub force: bool,
}

impl AddInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }
}

/// An active item already uses the name being added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateConflict {
    pub input: AddInput,
    pub existing_id: String,
    pub name: String,
}

impl DuplicateConflict {
    /// The same request with the duplicate check overridden.
    pub fn force(self) -> AddInput {
        AddInput {
            force: true,
            ..self.input
        }
    }

    pub fn message(&self) -> String {
        format!("\"{}\" is already here!", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    Reactivated(String),
    Duplicate(DuplicateConflict),
    /// Nothing left of the name once emoji and punctuation are removed.
    Rejected,
}

impl AddOutcome {
    pub fn id(&self) -> Option<&str> {
        match self {
            AddOutcome::Added(id) | AddOutcome::Reactivated(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

impl super::GroceryList {
    /// Single path behind adding a name: reject, report a duplicate,
    /// reactivate a history item or create a new one.
    ///
    /// Manual category, store and typed emoji are remembered for the name
    /// whenever the item lands on the list.
    pub fn upsert_by_normalized_key(
        &mut self,
        input: AddInput,
        now: DateTime<Utc>,
    ) -> AddOutcome {
        let parsed = ParsedName::parse(&input.name);
        let key = parsed.key();
        if parsed.clean.is_empty() || key.is_empty() {
            return AddOutcome::Rejected;
        }

        if !input.force
            && let Some(existing) = self.active().find(|i| i.key() == key)
        {
            return AddOutcome::Duplicate(DuplicateConflict {
                existing_id: existing.id.to_owned(),
                name: parsed.clean,
                input,
            });
        }

        let manual_category = input.category.as_deref().map(str::trim);
        let manual_store = input.store.as_deref().map(str::trim);

        let classification = Classifier::classify(
            &parsed,
            &key,
            manual_category,
            manual_store,
            &self.preferences,
        );
        let name = classification.display_name(&parsed.clean);

        if let Some(emoji) = &parsed.custom_emoji {
            self.preferences.remember_emoji(&key, emoji);
        }

        if let Some(category) = manual_category {
            self.preferences.remember_category(&key, category);
        }

        if let Some(store) = manual_store {
            self.preferences.remember_store(&key, store);
        }

        match self
            .items
            .iter_mut()
            .find(|i| i.is_history && i.key() == key)
        {
            Some(item) => {
                item.name = name;
                item.category = classification.category;
                item.store = classification.store;
                item.is_history = false;
                item.checked_out = false;

                AddOutcome::Reactivated(item.id.to_owned())
            }
            None => {
                let item =
                    GroceryItem::new(name, classification.category, classification.store, now);
                let id = item.id.to_owned();
                self.items.insert(0, item);

                AddOutcome::Added(id)
            }
        }
    }
}

impl<S: Storage> super::Command<S> {
    #[tracing::instrument(skip(self))]
    pub async fn add(&mut self, input: AddInput) -> AddOutcome {
        let outcome = self.list.upsert_by_normalized_key(input, Utc::now());

        if outcome.id().is_some() {
            self.persist(&[
                keys::ITEMS,
                keys::CATEGORY_PREFS,
                keys::STORE_PREFS,
                keys::EMOJI_PREFS,
            ])
            .await;
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use crate::{ANY_STORE, GroceryList, ItemState};

    use super::*;

    fn add(list: &mut GroceryList, input: AddInput) -> AddOutcome {
        list.upsert_by_normalized_key(input, Utc::now())
    }

    #[test]
    fn test_add_classifies_new_item() {
        let mut list = GroceryList::default();
        let outcome = add(&mut list, AddInput::new("Milk"));

        let item = list.find(outcome.id().unwrap()).unwrap();
        assert_eq!(item.name, "Milk 🥛");
        assert_eq!(item.category, "Dairy & Eggs");
        assert_eq!(item.store, "");
        assert_eq!(item.purchase_count, 0);
        assert!(item.purchase_dates.is_empty());
        assert_eq!(item.state(), ItemState::Active);
    }

    #[test]
    fn test_add_rejects_blank_names() {
        let mut list = GroceryList::default();

        for name in ["", "   ", "🍌", "?!"] {
            assert_eq!(add(&mut list, AddInput::new(name)), AddOutcome::Rejected);
        }
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_new_items_go_first() {
        let mut list = GroceryList::default();
        add(&mut list, AddInput::new("Milk"));
        add(&mut list, AddInput::new("Bread"));

        assert_eq!(list.items[0].name, "Bread 🍞");
    }

    #[test]
    fn test_duplicate_needs_force() {
        let mut list = GroceryList::default();
        add(&mut list, AddInput::new("Tomatoes"));
        let before = list.items.clone();

        let AddOutcome::Duplicate(conflict) = add(&mut list, AddInput::new("tomato")) else {
            panic!("expected a duplicate conflict");
        };
        assert_eq!(list.items, before);
        assert_eq!(conflict.message(), "\"tomato\" is already here!");
        assert_eq!(conflict.existing_id, before[0].id);

        let outcome = add(&mut list, conflict.force());
        assert!(matches!(outcome, AddOutcome::Added(_)));
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn test_add_reactivates_history_item() {
        let mut list = GroceryList::default();
        let id = add(&mut list, AddInput::new("Eggs")).id().unwrap().to_owned();
        {
            let eggs = list.find_mut(&id).unwrap();
            eggs.is_history = true;
            eggs.purchase_count = 1;
        }

        let outcome = add(&mut list, AddInput::new("egg").store("Costco"));

        assert_eq!(outcome, AddOutcome::Reactivated(id.to_owned()));
        assert_eq!(list.items.len(), 1);
        let eggs = list.find(&id).unwrap();
        assert_eq!(eggs.name, "egg 🥚");
        assert_eq!(eggs.store, "Costco");
        assert_eq!(eggs.purchase_count, 1);
        assert_eq!(eggs.state(), ItemState::Active);
    }

    #[test]
    fn test_add_learns_manual_choices() {
        let mut list = GroceryList::default();
        add(
            &mut list,
            AddInput::new("Oat milk 🌾").category("Beverages & Coffee").store(ANY_STORE),
        );

        assert_eq!(list.preferences.category_for("oat milk"), Some("Beverages & Coffee"));
        assert_eq!(list.preferences.emoji_for("oat milk"), Some("🌾"));
        assert_eq!(list.preferences.store_for("oat milk"), None);
        assert_eq!(list.items[0].store, ANY_STORE);
    }

    #[test]
    fn test_duplicate_does_not_learn() {
        let mut list = GroceryList::default();
        add(&mut list, AddInput::new("Milk"));
        add(&mut list, AddInput::new("Milk").category("Baby"));

        assert_eq!(list.preferences.category_for("milk"), None);
    }

    #[test]
    fn test_cart_item_is_not_a_duplicate() {
        let mut list = GroceryList::default();
        let id = add(&mut list, AddInput::new("Milk")).id().unwrap().to_owned();
        list.find_mut(&id).unwrap().checked_out = true;

        assert!(matches!(add(&mut list, AddInput::new("Milk")), AddOutcome::Added(_)));
    }
}
