//! Keyword classification of free-text maintenance descriptions.
//!
//! A simple rule engine: the decision is a pure function of the text and
//! the catalog's keyword sets, so category configuration is data, not
//! control flow. One description may belong to several categories.

use fleet_model::{PartCatalog, PartCategory};

/// Case-insensitive any-of substring test. An empty keyword set never
/// matches.
pub fn matches_keywords(description: &str, keywords: &[String]) -> bool {
    let lowered = description.to_lowercase();
    keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}

/// Convenience wrapper for a single category.
pub fn matches_category(description: &str, category: &PartCategory) -> bool {
    matches_keywords(description, &category.keywords)
}

/// All catalog categories the description belongs to, in catalog order.
pub fn matching_categories<'a>(
    description: &str,
    catalog: &'a PartCatalog,
) -> Vec<&'a PartCategory> {
    let lowered = description.to_lowercase();
    catalog
        .categories
        .iter()
        .filter(|category| {
            category
                .keywords
                .iter()
                .any(|keyword| lowered.contains(&keyword.to_lowercase()))
        })
        .collect()
}
