//! Category taxonomy
//!
//! Maps the free-text category labels assigned upstream to a small set of
//! groups. Lookups are exact (case-insensitive) against configured names,
//! so "Fast Food Stand" is not a food category unless someone lists it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Semantic group of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    Food,
    Shopping,
    Financial,
    Entertainment,
    Travel,
    Health,
    Other,
}

impl CategoryGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Shopping => "shopping",
            Self::Financial => "financial",
            Self::Entertainment => "entertainment",
            Self::Travel => "travel",
            Self::Health => "health",
            Self::Other => "other",
        }
    }

    /// Icon name for transaction lists
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "cutlery",
            Self::Shopping => "shopping-bag",
            Self::Financial => "bank",
            Self::Entertainment => "futbol-o",
            Self::Travel => "plane",
            Self::Health => "heartbeat",
            Self::Other => "question-circle",
        }
    }
}

impl std::fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CategoryGroup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "shopping" => Ok(Self::Shopping),
            "financial" => Ok(Self::Financial),
            "entertainment" => Ok(Self::Entertainment),
            "travel" => Ok(Self::Travel),
            "health" => Ok(Self::Health),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category group: {}", s)),
        }
    }
}

/// Built-in category assignments
const DEFAULT_ENTRIES: &[(&str, CategoryGroup)] = &[
    ("Food", CategoryGroup::Food),
    ("Dining", CategoryGroup::Food),
    ("Restaurant", CategoryGroup::Food),
    ("Restaurants", CategoryGroup::Food),
    ("Restaurants and bars", CategoryGroup::Food),
    ("Groceries", CategoryGroup::Food),
    ("Supermarkets", CategoryGroup::Food),
    ("Shopping", CategoryGroup::Shopping),
    ("Financial Services", CategoryGroup::Financial),
    ("Entertainment and Sport", CategoryGroup::Entertainment),
    ("Traveling and Vacation", CategoryGroup::Travel),
    ("Health and Beauty", CategoryGroup::Health),
];

/// Categories whose list icon differs from their group's icon
const DEFAULT_ICONS: &[(&str, &str)] = &[("Supermarkets", "shopping-cart")];

/// Category name to group lookup
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTaxonomy {
    groups: HashMap<String, CategoryGroup>,
    icons: HashMap<String, String>,
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        let mut taxonomy = Self::empty();
        for (name, group) in DEFAULT_ENTRIES {
            taxonomy.insert(name, *group);
        }
        for (name, icon) in DEFAULT_ICONS {
            taxonomy.set_icon(name, icon);
        }
        taxonomy
    }
}

fn key(category: &str) -> String {
    category.trim().to_lowercase()
}

impl CategoryTaxonomy {
    pub fn empty() -> Self {
        Self {
            groups: HashMap::new(),
            icons: HashMap::new(),
        }
    }

    /// Add or replace a category assignment
    pub fn insert(&mut self, category: &str, group: CategoryGroup) {
        self.groups.insert(key(category), group);
    }

    /// Use a specific list icon for one category instead of its group's
    pub fn set_icon(&mut self, category: &str, icon: &str) {
        self.icons.insert(key(category), icon.to_string());
    }

    pub fn group_of(&self, category: &str) -> CategoryGroup {
        self.groups
            .get(&key(category))
            .copied()
            .unwrap_or(CategoryGroup::Other)
    }

    pub fn is_food(&self, category: &str) -> bool {
        self.group_of(category) == CategoryGroup::Food
    }

    /// List icon: the category's own icon if set, else its group's
    pub fn icon_for(&self, category: &str) -> &str {
        match self.icons.get(&key(category)) {
            Some(icon) => icon.as_str(),
            None => self.group_of(category).icon(),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
