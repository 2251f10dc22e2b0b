// SPDX-License-Identifier: MPL-2.0
//! Category and subcategory index of a photo set.
//!
//! The index lists only categories and subcategories that at least one photo
//! references. Its order comes from the category metadata when present;
//! everything the metadata does not cover is ordered by the caller's preferred
//! lists and then by first appearance in the photo list.

use crate::domain::photo::{CategoryMetadata, Photo};
use crate::domain::selection::ALL;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statically configured preferred order for categories and subcategories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyOrder {
    /// Preferred category order.
    pub categories: Vec<String>,
    /// Preferred subcategory order, keyed by category.
    pub subcategories: BTreeMap<String, Vec<String>>,
}

/// A subcategory as listed in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcategoryEntry {
    pub name: String,
    pub description: Option<String>,
}

/// A category as listed in the index, with its subcategories in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub name: String,
    pub description: Option<String>,
    pub subcategories: Vec<SubcategoryEntry>,
}

impl CategoryEntry {
    /// Looks up a subcategory of this category by name.
    #[must_use]
    pub fn subcategory(&self, name: &str) -> Option<&SubcategoryEntry> {
        self.subcategories.iter().find(|s| s.name == name)
    }
}

/// Ordered category index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Taxonomy {
    categories: Vec<CategoryEntry>,
}

impl Taxonomy {
    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

/// Category and subcategory names in first-seen order.
struct Scan<'a> {
    categories: Vec<(&'a str, Vec<&'a str>)>,
}

impl<'a> Scan<'a> {
    fn new(photos: &'a [Photo]) -> Self {
        let mut categories: Vec<(&'a str, Vec<&'a str>)> = Vec::new();
        for photo in photos {
            let idx = match categories.iter().position(|(c, _)| *c == photo.category) {
                Some(idx) => idx,
                None => {
                    categories.push((photo.category.as_str(), Vec::new()));
                    categories.len() - 1
                }
            };
            if let Some(sub) = photo.subcategory.as_deref() {
                let subs = &mut categories[idx].1;
                if !subs.contains(&sub) {
                    subs.push(sub);
                }
            }
        }
        Self { categories }
    }
}

/// Orders `seen` by the preferred list first, then by first appearance.
fn apply_preferred<'a>(seen: &[&'a str], preferred: &[String]) -> Vec<&'a str> {
    let mut ordered: Vec<&'a str> = Vec::with_capacity(seen.len());
    let listed = preferred
        .iter()
        .filter(|name| name.as_str() != ALL)
        .filter_map(|name| seen.iter().copied().find(|s| *s == name.as_str()));
    for name in listed.chain(seen.iter().copied()) {
        if !ordered.contains(&name) {
            ordered.push(name);
        }
    }
    ordered
}

/// Builds the category index for `photos`.
///
/// Categories described by `metadata` come first, by ascending display order
/// with ties broken by name. Categories the metadata does not describe follow,
/// ordered by `order` and then by first appearance. Subcategories inside a
/// category follow the same rule against that category's metadata.
#[must_use]
pub fn build_taxonomy(
    photos: &[Photo],
    metadata: Option<&CategoryMetadata>,
    order: &TaxonomyOrder,
) -> Taxonomy {
    let scan = Scan::new(photos);
    let seen: Vec<&str> = scan.categories.iter().map(|(c, _)| *c).collect();

    let (mut described, undescribed): (Vec<&str>, Vec<&str>) = seen
        .iter()
        .copied()
        .partition(|name| metadata.is_some_and(|m| m.contains_key(*name)));

    if let Some(meta) = metadata {
        described.sort_by(|a, b| {
            let oa = meta.get(*a).map(|m| m.display_order);
            let ob = meta.get(*b).map(|m| m.display_order);
            oa.cmp(&ob).then_with(|| a.cmp(b))
        });
    }
    let undescribed = apply_preferred(&undescribed, &order.categories);

    let categories = described
        .into_iter()
        .chain(undescribed)
        .map(|name| {
            let subs_seen = scan
                .categories
                .iter()
                .find(|(c, _)| *c == name)
                .map(|(_, subs)| subs.as_slice())
                .unwrap_or_default();
            let meta = metadata.and_then(|m| m.get(name));
            let sub_meta = meta.map(|m| &m.subcategories);

            let (mut sub_described, sub_undescribed): (Vec<&str>, Vec<&str>) = subs_seen
                .iter()
                .copied()
                .partition(|sub| sub_meta.is_some_and(|m| m.contains_key(*sub)));
            if let Some(sm) = sub_meta {
                sub_described.sort_by(|a, b| {
                    let oa = sm.get(*a).map(|m| m.display_order);
                    let ob = sm.get(*b).map(|m| m.display_order);
                    oa.cmp(&ob).then_with(|| a.cmp(b))
                });
            }
            let preferred = order
                .subcategories
                .get(name)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let sub_undescribed = apply_preferred(&sub_undescribed, preferred);

            let subcategories = sub_described
                .into_iter()
                .chain(sub_undescribed)
                .map(|sub| SubcategoryEntry {
                    name: sub.to_string(),
                    description: sub_meta
                        .and_then(|m| m.get(sub))
                        .and_then(|m| m.description.clone()),
                })
                .collect();

            CategoryEntry {
                name: name.to_string(),
                description: meta.and_then(|m| m.description.clone()),
                subcategories,
            }
        })
        .collect();

    Taxonomy { categories }
}
