//! Raw and structured snapshots.

use crate::model::category::Category;
use crate::model::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Package name → value for one category
pub type CategoryMap = BTreeMap<String, Value>;

/// Verbatim captured text per category, before parsing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSnapshot {
    texts: BTreeMap<Category, String>,
}

impl RawSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, text: impl Into<String>) {
        self.texts.insert(category, text.into());
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        self.texts.get(&category).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.texts.iter().map(|(c, t)| (*c, t.as_str()))
    }
}

/// Structured package state: category → category map
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Snapshot {
    categories: BTreeMap<Category, CategoryMap>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, map: CategoryMap) {
        self.categories.insert(category, map);
    }

    pub fn get(&self, category: Category) -> Option<&CategoryMap> {
        self.categories.get(&category)
    }

    pub fn get_mut(&mut self, category: Category) -> Option<&mut CategoryMap> {
        self.categories.get_mut(&category)
    }

    pub fn remove(&mut self, category: Category) -> Option<CategoryMap> {
        self.categories.remove(&category)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }

    /// Categories present, in declaration order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Drop the version/detail categories (summary mode)
    pub fn prune_details(&mut self) {
        for category in Category::DETAIL {
            self.categories.remove(&category);
        }
    }

    /// Total number of entries across all categories
    pub fn entry_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Category name → category map, as one nested mapping
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.categories
            .iter()
            .map(|(category, map)| (category.as_str().to_string(), Value::Map(map.clone())))
            .collect()
    }

    pub fn to_value(&self) -> Value {
        Value::Map(self.to_map())
    }
}
