use crate::{Category, normalize::ParsedName, preference::Preferences};

/// Category keyword table, scanned top to bottom.
///
/// Position is the only tie-break between overlapping keywords ("pepper" is
/// produce because produce comes before pantry), so entries must not be
/// reordered.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Produce,
        &[
            "onion", "tomato", "potato", "apple", "banana", "orange", "grape", "spinach",
            "lettuce", "broccoli", "carrot", "garlic", "ginger", "pepper", "mushroom", "berry",
            "lemon", "lime", "avocado", "cilantro", "coriander", "okra", "palak", "fruit", "veg",
            "salad", "watermelon", "strawberry", "blueberry", "melon", "cherry", "peach", "mango",
            "pineapple", "coconut", "kiwi", "eggplant", "corn", "cucumber", "beet",
        ],
    ),
    (
        Category::DairyEggs,
        &[
            "milk", "cheese", "egg", "butter", "yogurt", "yoghurt", "cream", "paneer", "dahi",
            "curd",
        ],
    ),
    (
        Category::MeatSeafood,
        &[
            "chicken", "beef", "pork", "fish", "salmon", "bacon", "sausage", "meat", "shrimp",
            "prawn", "turkey",
        ],
    ),
    (
        Category::Bakery,
        &[
            "bread", "bun", "roll", "bagel", "muffin", "cake", "croissant", "pastry", "pita",
            "tortilla", "baguette", "pretzel", "pancake", "waffle",
        ],
    ),
    (
        Category::NutsSeeds,
        &[
            "nut", "peanut", "almond", "cashew", "walnut", "pecan", "seed", "pistachio",
        ],
    ),
    (
        Category::Pantry,
        &[
            "rice", "pasta", "noodle", "dal", "lentil", "flour", "atta", "sugar", "salt", "spice",
            "oil", "ghee", "vinegar", "sauce", "soup", "cereal", "oat", "honey", "jam",
            "peanut butter", "chana", "basmati", "bean", "can",
        ],
    ),
    (
        Category::FrozenFoods,
        &["pizza", "ice cream", "frozen", "popsicle"],
    ),
    (
        Category::SnacksCandy,
        &[
            "chip", "cookie", "cracker", "candy", "chocolate", "popcorn", "snack", "gum",
        ],
    ),
    (
        Category::BeveragesCoffee,
        &[
            "water", "juice", "soda", "pop", "coffee", "tea", "beer", "wine", "liquor", "drink",
        ],
    ),
    (
        Category::HouseholdCleaning,
        &[
            "paper towel", "toilet paper", "trash", "soap", "detergent", "clean", "foil", "wrap",
            "sponge", "tissue", "bleach",
        ],
    ),
    (
        Category::PersonalPetCare,
        &[
            "shampoo", "toothpaste", "brush", "lotion", "deodorant", "dog", "cat", "pet", "pad",
            "tampon", "body wash",
        ],
    ),
    (
        Category::Baby,
        &[
            "diaper", "wipe", "formula", "baby food", "pacifier", "soother", "nappy", "bottle",
        ],
    ),
];

/// Name keyword to display emoji. Order breaks ties between equally long
/// matches.
const EMOJI_KEYWORDS: &[(&str, &str)] = &[
    ("apple", "🍎"),
    ("green apple", "🍏"),
    ("banana", "🍌"),
    ("orange", "🍊"),
    ("lemon", "🍋"),
    ("lime", "🍈"),
    ("watermelon", "🍉"),
    ("grape", "🍇"),
    ("strawberry", "🍓"),
    ("blueberry", "🫐"),
    ("melon", "🍈"),
    ("cherry", "🍒"),
    ("peach", "🍑"),
    ("mango", "🥭"),
    ("pineapple", "🍍"),
    ("coconut", "🥥"),
    ("kiwi", "🥝"),
    ("tomato", "🍅"),
    ("eggplant", "🍆"),
    ("potato", "🥔"),
    ("carrot", "🥕"),
    ("corn", "🌽"),
    ("pepper", "🌶️"),
    ("bell pepper", "🫑"),
    ("cucumber", "🥒"),
    ("lettuce", "🥬"),
    ("spinach", "🥬"),
    ("broccoli", "🥦"),
    ("garlic", "🧄"),
    ("onion", "🧅"),
    ("mushroom", "🍄"),
    ("ginger", "🫚"),
    ("okra", "🍋"),
    ("palak", "🥬"),
    ("cilantro", "🌿"),
    ("coriander", "🌿"),
    ("milk", "🥛"),
    ("cheese", "🧀"),
    ("egg", "🥚"),
    ("butter", "🧈"),
    ("yogurt", "🍦"),
    ("curd", "🥣"),
    ("dahi", "🥣"),
    ("paneer", "🧀"),
    ("chicken", "🍗"),
    ("meat", "🥩"),
    ("beef", "🥩"),
    ("pork", "🥩"),
    ("bacon", "🥓"),
    ("fish", "🐟"),
    ("salmon", "🍣"),
    ("shrimp", "🦐"),
    ("prawn", "🍤"),
    ("turkey", "🦃"),
    ("sausage", "🌭"),
    ("bread", "🍞"),
    ("croissant", "🥐"),
    ("baguette", "🥖"),
    ("pretzel", "🥨"),
    ("bagel", "🥯"),
    ("pancake", "🥞"),
    ("waffle", "🧇"),
    ("bun", "🥯"),
    ("roll", "🥐"),
    ("pastry", "🥐"),
    ("cake", "🍰"),
    ("peanut", "🥜"),
    ("nut", "🌰"),
    ("almond", "🌰"),
    ("cashew", "🌰"),
    ("walnut", "🌰"),
    ("rice", "🍚"),
    ("pasta", "🍝"),
    ("noodle", "🍜"),
    ("dal", "🥣"),
    ("lentil", "🥣"),
    ("flour", "🌾"),
    ("atta", "🌾"),
    ("salt", "🧂"),
    ("spice", "🌶️"),
    ("oil", "🛢️"),
    ("honey", "🍯"),
    ("jam", "🍯"),
    ("soup", "🍲"),
    ("cereal", "🥣"),
    ("can", "🥫"),
    ("bean", "🫘"),
    ("peanut butter", "🥜"),
    ("pizza", "🍕"),
    ("ice cream", "🍨"),
    ("frozen", "🧊"),
    ("popsicle", "🍧"),
    ("chip", "🍟"),
    ("cookie", "🍪"),
    ("cracker", "🍘"),
    ("candy", "🍬"),
    ("chocolate", "🍫"),
    ("popcorn", "🍿"),
    ("water", "💧"),
    ("juice", "🧃"),
    ("soda", "🥤"),
    ("pop", "🥤"),
    ("coffee", "☕"),
    ("tea", "🍵"),
    ("beer", "🍺"),
    ("wine", "🍷"),
    ("liquor", "🥃"),
    ("drink", "🍹"),
    ("paper towel", "🧻"),
    ("toilet paper", "🧻"),
    ("soap", "🧼"),
    ("sponge", "🧽"),
    ("diaper", "🧷"),
    ("formula", "🍼"),
    ("wipe", "🧻"),
    ("pet", "🐕"),
    ("dog", "🐕"),
    ("cat", "🐈"),
    ("toothpaste", "🪥"),
];

/// Category, store and emoji picked for an item being added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub store: String,
    pub emoji: Option<String>,
}

impl Classification {
    /// Name shown for the item, with the resolved emoji appended.
    pub fn display_name(&self, clean: &str) -> String {
        match &self.emoji {
            Some(emoji) => format!("{clean} {emoji}"),
            None => clean.to_owned(),
        }
    }
}

/// Stateless keyword classifier.
pub struct Classifier;

impl Classifier {
    /// First category whose keyword list has a substring match, if any.
    pub fn auto_category(name: &str) -> Option<Category> {
        let lower = name.to_lowercase();

        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(*k)))
            .map(|(category, _)| *category)
    }

    pub fn categorize(name: &str) -> Category {
        Self::auto_category(name).unwrap_or(Category::Other)
    }

    /// Default emoji for a normalized key.
    ///
    /// An exact keyword wins; otherwise the longest keyword contained in the
    /// key, earlier table entries first on equal length.
    pub fn default_emoji(key: &str) -> Option<&'static str> {
        if key.is_empty() {
            return None;
        }

        if let Some(&(_, emoji)) = EMOJI_KEYWORDS.iter().find(|(k, _)| *k == key) {
            return Some(emoji);
        }

        let mut best: Option<(&str, &'static str)> = None;
        for &(keyword, emoji) in EMOJI_KEYWORDS {
            if !key.contains(keyword) {
                continue;
            }

            if best.is_none_or(|(current, _)| keyword.len() > current.len()) {
                best = Some((keyword, emoji));
            }
        }

        best.map(|(_, emoji)| emoji)
    }

    /// Resolves category, store and emoji for a parsed name.
    ///
    /// Explicit choices win over remembered preferences, which win over the
    /// keyword tables. Empty manual values count as absent.
    pub fn classify(
        name: &ParsedName,
        key: &str,
        manual_category: Option<&str>,
        manual_store: Option<&str>,
        preferences: &Preferences,
    ) -> Classification {
        let emoji = name
            .custom_emoji
            .clone()
            .or_else(|| preferences.emoji_for(key).map(str::to_owned))
            .or_else(|| Self::default_emoji(key).map(str::to_owned));

        let category = non_empty(manual_category)
            .or_else(|| preferences.category_for(key))
            .map(str::to_owned)
            .unwrap_or_else(|| Self::categorize(&name.clean).to_string());

        let store = non_empty(manual_store)
            .or_else(|| preferences.store_for(key))
            .map(str::to_owned)
            .unwrap_or_default();

        Classification {
            category,
            store,
            emoji,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
