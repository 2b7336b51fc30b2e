use chrono::{DateTime, Utc};

use crate::{GroceryItem, predict::average_interval_days};

pub const UNASSIGNED: &str = "Unassigned";
pub const TOP_ITEMS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub label: String,
    pub count: u32,
}

fn tally_by<'a>(
    items: &'a [GroceryItem],
    label_of: impl Fn(&'a GroceryItem) -> &'a str,
) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = vec![];

    for item in items {
        let count = item.purchase_total();
        if count == 0 {
            continue;
        }

        let label = label_of(item);
        match tallies.iter_mut().find(|t| t.label == label) {
            Some(tally) => tally.count += count,
            None => tallies.push(Tally {
                label: label.to_owned(),
                count,
            }),
        }
    }

    tallies.sort_by(|a, b| b.count.cmp(&a.count));

    tallies
}

/// Purchases per category, largest first. Zero groups are left out.
pub fn by_category(items: &[GroceryItem]) -> Vec<Tally> {
    tally_by(items, |item| item.category.as_str())
}

/// Purchases per store, largest first. Items without a store count as
/// [`UNASSIGNED`].
pub fn by_store(items: &[GroceryItem]) -> Vec<Tally> {
    tally_by(items, |item| match item.store.trim() {
        "" => UNASSIGNED,
        store => store,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemStats {
    pub name: String,
    pub purchases: u32,
    pub average_days: Option<f64>,
    pub last_purchase: Option<DateTime<Utc>>,
}

pub fn item_stats(items: &[GroceryItem]) -> Vec<ItemStats> {
    items
        .iter()
        .filter(|item| item.purchase_count > 0)
        .map(|item| ItemStats {
            name: item.name.to_owned(),
            purchases: item.purchase_total(),
            average_days: average_interval_days(item),
            last_purchase: item.last_purchase(),
        })
        .collect()
}

pub fn top_items(items: &[GroceryItem], n: usize) -> Vec<ItemStats> {
    let mut stats = item_stats(items);
    stats.sort_by(|a, b| b.purchases.cmp(&a.purchases));
    stats.truncate(n);

    stats
}

pub fn time_ago(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(last) = last else {
        return "Never purchased".to_owned();
    };

    match (now - last).num_days() {
        ..=0 => "Purchased today".to_owned(),
        1 => "Purchased yesterday".to_owned(),
        days @ 2..7 => format!("Purchased {days} days ago"),
        days @ 7..30 => format!("Purchased {} weeks ago", days / 7),
        days @ 30..365 => format!("Purchased {} months ago", days / 30),
        days => format!("Purchased {} years ago", days / 365),
    }
}
