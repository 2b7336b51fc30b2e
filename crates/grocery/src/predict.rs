use chrono::{DateTime, Utc};

use crate::GroceryItem;

pub const SUGGESTION_LIMIT: usize = 5;
pub const DUE_SOON_RATIO: f64 = 0.8;

const SECONDS_PER_DAY: f64 = 86_400.0;

fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

fn sorted_dates(item: &GroceryItem) -> Vec<DateTime<Utc>> {
    let mut dates = item.purchase_dates.clone();
    dates.sort();
    dates
}

/// Mean gap between purchases, in days. `None` with fewer than two purchases.
pub fn average_interval_days(item: &GroceryItem) -> Option<f64> {
    let dates = sorted_dates(item);
    if dates.len() < 2 {
        return None;
    }

    let (first, last) = (dates.first()?, dates.last()?);

    Some(days_between(*first, *last) / (dates.len() - 1) as f64)
}

#[derive(Debug, Clone)]
pub struct Suggestion<'a> {
    pub item: &'a GroceryItem,
    pub average_interval_days: f64,
    pub days_since_last: f64,
}

impl Suggestion<'_> {
    /// How far past its usual interval the item is, in days.
    pub fn overdue_days(&self) -> f64 {
        self.days_since_last - self.average_interval_days
    }
}

/// History items whose usual repurchase interval has elapsed.
///
/// Most overdue first; equal items keep collection order. Pure in
/// `(items, now)`.
pub fn suggested_reorders(
    items: &[GroceryItem],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<Suggestion<'_>> {
    let mut suggestions = items
        .iter()
        .filter(|item| item.is_history && item.purchase_dates.len() >= 2)
        .filter_map(|item| {
            let average_interval_days = average_interval_days(item)?;
            let last = item.last_purchase()?;
            let days_since_last = days_between(last, now);

            (days_since_last >= average_interval_days).then_some(Suggestion {
                item,
                average_interval_days,
                days_since_last,
            })
        })
        .collect::<Vec<_>>();

    suggestions.sort_by(|a, b| b.overdue_days().total_cmp(&a.overdue_days()));
    suggestions.truncate(limit);

    suggestions
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReminderStatus {
    Overdue,
    DueSoon,
}

#[derive(Debug, Clone)]
pub struct Reminder<'a> {
    pub item: &'a GroceryItem,
    pub days_since_purchase: i64,
    pub average_days: f64,
    pub status: ReminderStatus,
}

/// Items coming due for another purchase, whatever their list state except
/// the cart.
pub fn reminders(
    items: &[GroceryItem],
    now: DateTime<Utc>,
    due_soon_ratio: f64,
) -> Vec<Reminder<'_>> {
    let mut reminders = items
        .iter()
        .filter(|item| !item.in_cart() && item.purchase_dates.len() >= 2)
        .filter_map(|item| {
            let average_days = average_interval_days(item)?;
            if average_days <= 0.0 {
                return None;
            }

            let last = item.last_purchase()?;
            let days_since_purchase = (now - last).num_days();
            let elapsed = days_since_purchase as f64;

            let status = if elapsed >= average_days {
                ReminderStatus::Overdue
            } else if elapsed >= average_days * due_soon_ratio {
                ReminderStatus::DueSoon
            } else {
                return None;
            };

            Some(Reminder {
                item,
                days_since_purchase,
                average_days,
                status,
            })
        })
        .collect::<Vec<_>>();

    reminders.sort_by(|a, b| {
        a.status
            .cmp(&b.status)
            .then(b.days_since_purchase.cmp(&a.days_since_purchase))
    });

    reminders
}
