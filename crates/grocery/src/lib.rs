pub mod category;
pub mod classify;
pub mod item;
pub mod normalize;
pub mod order;
pub mod predict;
pub mod preference;
pub mod stats;

mod root;
mod snapshot;

pub use category::{ANY_STORE, Category, PRESET_STORES};
pub use item::{GroceryItem, ItemState};
pub use normalize::normalize;
pub use order::CategoryOrder;
pub use preference::Preferences;
pub use root::*;
pub use snapshot::Theme;
