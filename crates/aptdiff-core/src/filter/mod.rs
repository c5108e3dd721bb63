//! Snapshot normalizer/filter
//!
//! Noise reduction applied to a loaded snapshot before diffing:
//!
//! 1. drop shared-library packages from the churn-heavy categories
//! 2. fold soname and Python version numbers in package names
//! 3. drop `install` selections, leaving only non-default states
//!
//! Exclusion must run before renaming; the folded names no longer match
//! the exception list.

pub mod patterns;

use crate::model::{Category, Snapshot};

pub use patterns::{is_noise_library, normalize_name};

/// Categories where shared-library packages are dropped
pub const EXCLUDE_CATEGORIES: [Category; 4] = [
    Category::Autos,
    Category::Selections,
    Category::Selversions,
    Category::Seldetails,
];

/// Categories whose package names are normalized
pub const NORMALIZE_CATEGORIES: [Category; 5] = [
    Category::Manuals,
    Category::Autos,
    Category::Selections,
    Category::Selversions,
    Category::Seldetails,
];

/// The default selection state, hidden by [`filter_selections`]
pub const DEFAULT_SELECTION: &str = "install";

/// Run all three passes over `snapshot` in place
pub fn filter_snapshot(snapshot: &mut Snapshot) {
    exclude_libraries(snapshot);
    normalize_names(snapshot);
    filter_selections(snapshot);
}

/// Drop library packages that are not on the exception list
pub fn exclude_libraries(snapshot: &mut Snapshot) {
    for category in EXCLUDE_CATEGORIES {
        if let Some(map) = snapshot.get_mut(category) {
            let before = map.len();
            map.retain(|name, _| !is_noise_library(name));
            tracing::debug!(
                category = %category,
                removed = before - map.len(),
                "excluded library packages"
            );
        }
    }
}

/// Rewrite package names to their version-folded form
///
/// When several names fold to the same key the one sorting last wins.
pub fn normalize_names(snapshot: &mut Snapshot) {
    for category in NORMALIZE_CATEGORIES {
        if let Some(map) = snapshot.get_mut(category) {
            let before = map.len();
            *map = std::mem::take(map)
                .into_iter()
                .map(|(name, value)| (normalize_name(&name), value))
                .collect();
            tracing::debug!(
                category = %category,
                merged = before - map.len(),
                "normalized package names"
            );
        }
    }
}

/// Drop selections that are exactly the default `install`
pub fn filter_selections(snapshot: &mut Snapshot) {
    if let Some(map) = snapshot.get_mut(Category::Selections) {
        map.retain(|_, value| value.as_scalar() != Some(DEFAULT_SELECTION));
    }
}
