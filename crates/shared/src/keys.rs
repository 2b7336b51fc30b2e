//! Names of the entries kept in durable storage.
//!
//! Each entry holds one JSON document and is read and written independently.

pub const ITEMS: &str = "groceryItems";
pub const CATEGORY_PREFS: &str = "groceryCategoryPrefs";
pub const STORE_PREFS: &str = "groceryStorePrefs";
pub const EMOJI_PREFS: &str = "groceryEmojiPrefs";
pub const CATEGORY_ORDER: &str = "groceryCategoryOrder";
pub const THEME: &str = "groceryTheme";

pub const ALL: [&str; 6] = [
    ITEMS,
    CATEGORY_PREFS,
    STORE_PREFS,
    EMOJI_PREFS,
    CATEGORY_ORDER,
    THEME,
];
