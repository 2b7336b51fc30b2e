use serde::{Deserialize, Serialize};

use crate::{Category, GroceryItem};

/// User-arranged display order of categories.
///
/// Used only for grouping the list on screen; classification never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryOrder(Vec<String>);

impl Default for CategoryOrder {
    fn default() -> Self {
        Self(Category::labels())
    }
}

impl CategoryOrder {
    /// Saved order first, then every default category it is missing.
    pub fn merge_defaults(saved: Vec<String>) -> Self {
        let mut labels: Vec<String> = Vec::with_capacity(saved.len());
        for label in saved.into_iter().chain(Category::labels()) {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }

        Self(labels)
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|l| l == label)
    }

    pub fn move_up(&mut self, label: &str) -> bool {
        match self.position(label) {
            Some(idx) if idx > 0 => {
                self.0.swap(idx - 1, idx);
                true
            }
            _ => false,
        }
    }

    pub fn move_down(&mut self, label: &str) -> bool {
        match self.position(label) {
            Some(idx) if idx + 1 < self.0.len() => {
                self.0.swap(idx, idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Active items grouped by category, groups in display order.
    ///
    /// Labels missing from the order go last, in the order first seen.
    pub fn group_active<'a>(&self, items: &'a [GroceryItem]) -> Vec<(String, Vec<&'a GroceryItem>)> {
        let mut groups: Vec<(String, Vec<&GroceryItem>)> = vec![];

        for item in items.iter().filter(|i| i.is_active()) {
            match groups.iter_mut().find(|(label, _)| *label == item.category) {
                Some((_, members)) => members.push(item),
                None => groups.push((item.category.to_owned(), vec![item])),
            }
        }

        groups.sort_by_key(|(label, _)| self.position(label).unwrap_or(usize::MAX));

        groups
    }
}
