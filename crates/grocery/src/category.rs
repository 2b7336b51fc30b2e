use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Store value meaning "no preference". Never remembered as a preference.
pub const ANY_STORE: &str = "Any Store";

/// Stores offered as quick picks. Any other label is accepted as well.
pub const PRESET_STORES: [&str; 6] = [
    "Costco",
    "FreshCo",
    "No Frills",
    "Walmart",
    "Loblaws",
    "Other",
];

/// Aisle category for grocery store organization
///
/// Variant order is the default display order, `Other` is always last.
#[derive(
    EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum Category {
    #[strum(serialize = "Produce")]
    Produce,
    #[strum(serialize = "Dairy & Eggs")]
    DairyEggs,
    #[strum(serialize = "Meat & Seafood")]
    MeatSeafood,
    #[strum(serialize = "Bakery")]
    Bakery,
    #[strum(serialize = "Nuts & Seeds")]
    NutsSeeds,
    #[strum(serialize = "Pantry")]
    Pantry,
    #[strum(serialize = "Frozen Foods")]
    FrozenFoods,
    #[strum(serialize = "Snacks & Candy")]
    SnacksCandy,
    #[strum(serialize = "Beverages & Coffee")]
    BeveragesCoffee,
    #[strum(serialize = "Household & Cleaning")]
    HouseholdCleaning,
    #[strum(serialize = "Personal & Pet Care")]
    PersonalPetCare,
    #[strum(serialize = "Baby")]
    Baby,
    #[strum(serialize = "Other")]
    Other,
}

impl Category {
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Produce => "🥬",
            Category::DairyEggs => "🥛",
            Category::MeatSeafood => "🥩",
            Category::Bakery => "🍞",
            Category::NutsSeeds => "🥜",
            Category::Pantry => "🥫",
            Category::FrozenFoods => "❄️",
            Category::SnacksCandy => "🍿",
            Category::BeveragesCoffee => "🥤",
            Category::HouseholdCleaning => "🧼",
            Category::PersonalPetCare => "🧴",
            Category::Baby => "👶",
            Category::Other => "📦",
        }
    }

    /// Labels in default display order.
    pub fn labels() -> Vec<String> {
        Category::VARIANTS.iter().map(|c| c.to_string()).collect()
    }

    /// Icon for an arbitrary label, falling back to the catch-all icon for
    /// labels outside the fixed set.
    pub fn icon_for(label: &str) -> &'static str {
        label
            .parse::<Category>()
            .unwrap_or(Category::Other)
            .icon()
    }
}
