use cartwise_grocery::{
    ANY_STORE, AddInput, Category, CategoryOrder, GroceryItem, GroceryList, PRESET_STORES,
    predict::{Reminder, ReminderStatus, Suggestion},
    stats::{self, ItemStats, Tally},
};
use chrono::{DateTime, Utc};

fn item_line(marker: &str, item: &GroceryItem) -> String {
    let store = if item.store.is_empty() || item.store == ANY_STORE {
        String::new()
    } else {
        format!("  @{}", item.store)
    };

    format!("  {marker} {}{store}  ({})\n", item.name, item.id)
}

/// Active items grouped in display order, then the cart.
pub fn list(list: &GroceryList) -> String {
    let mut out = String::new();

    let groups = list.grouped_active();
    if groups.is_empty() {
        out.push_str("Your list is empty.\n");
    }

    for (label, items) in groups {
        out.push_str(&format!("{} {label}\n", Category::icon_for(&label)));
        for item in items {
            out.push_str(&item_line("•", item));
        }
    }

    let cart = list.cart().collect::<Vec<_>>();
    if !cart.is_empty() {
        out.push_str(&format!("\n🛒 In cart ({})\n", cart.len()));
        for item in cart {
            out.push_str(&item_line("✓", item));
        }
    }

    out
}

/// Quotes a value for a POSIX shell.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// The command that adds `input` again with the duplicate check skipped.
pub fn duplicate_hint(input: &AddInput) -> String {
    let mut hint = format!("cartwise add {}", shell_quote(&input.name));
    if let Some(category) = &input.category {
        hint.push_str(&format!(" --category {}", shell_quote(category)));
    }
    if let Some(store) = &input.store {
        hint.push_str(&format!(" --store {}", shell_quote(store)));
    }
    hint.push_str(" --force");

    hint
}

/// Preset stores followed by any other store already in use.
pub fn stores(list: &GroceryList) -> String {
    let mut known = PRESET_STORES.map(str::to_owned).to_vec();
    for item in &list.items {
        if !item.store.is_empty() && item.store != ANY_STORE && !known.contains(&item.store) {
            known.push(item.store.to_owned());
        }
    }

    known.push(ANY_STORE.to_owned());

    known.iter().map(|store| format!("  {store}\n")).collect()
}

pub fn suggestions(suggestions: &[Suggestion<'_>]) -> String {
    if suggestions.is_empty() {
        return "Nothing to restock yet.\n".to_owned();
    }

    let lines = suggestions.iter().map(|suggestion| {
        format!(
            "  {}  every {:.1} days, last bought {:.0} days ago  ({})\n",
            suggestion.item.name,
            suggestion.average_interval_days,
            suggestion.days_since_last.floor(),
            suggestion.item.id
        )
    });

    std::iter::once("Time to restock:\n".to_owned())
        .chain(lines)
        .collect()
}

pub fn reminders(reminders: &[Reminder<'_>]) -> String {
    if reminders.is_empty() {
        return "No reminders.\n".to_owned();
    }

    reminders
        .iter()
        .map(|reminder| {
            let status = match reminder.status {
                ReminderStatus::Overdue => "overdue",
                ReminderStatus::DueSoon => "due soon",
            };

            format!(
                "[{status}] {}: {} days since last purchase, usually every {:.1} days\n",
                reminder.item.name, reminder.days_since_purchase, reminder.average_days
            )
        })
        .collect()
}

pub fn item_stats(items: &[ItemStats], now: DateTime<Utc>) -> String {
    if items.is_empty() {
        return "No purchases recorded yet.\n".to_owned();
    }

    items
        .iter()
        .map(|item| {
            let every = item
                .average_days
                .map(|days| format!(", every {days:.1} days"))
                .unwrap_or_default();

            format!(
                "  {}  {} purchases{every}, {}\n",
                item.name,
                item.purchases,
                stats::time_ago(item.last_purchase, now)
            )
        })
        .collect()
}

pub fn tallies(tallies: &[Tally]) -> String {
    if tallies.is_empty() {
        return "No purchases recorded yet.\n".to_owned();
    }

    let width = tallies
        .iter()
        .map(|t| t.label.chars().count())
        .max()
        .unwrap_or_default();

    tallies
        .iter()
        .map(|tally| format!("  {:<width$}  {}\n", tally.label, tally.count))
        .collect()
}

pub fn order(order: &CategoryOrder) -> String {
    order
        .labels()
        .iter()
        .enumerate()
        .map(|(idx, label)| format!("{:>2}. {} {label}\n", idx + 1, Category::icon_for(label)))
        .collect()
}
