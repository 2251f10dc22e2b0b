// SPDX-License-Identifier: MPL-2.0
//! Filter selection.

use std::fmt;

/// Name of the sentinel selection that shows every category at once.
pub const ALL: &str = "all";

/// What the gallery is currently filtered on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every category's top-level photos, grouped under per-category headings.
    #[default]
    All,
    /// Every photo of one category.
    Category(String),
    /// Photos of one subcategory of a category.
    Subcategory {
        category: String,
        subcategory: String,
    },
}

impl Selection {
    /// Builds a selection from filter names, treating `"all"` as the sentinel.
    ///
    /// A subcategory is ignored when the category is the sentinel.
    #[must_use]
    pub fn from_names(category: &str, subcategory: Option<&str>) -> Self {
        if category == ALL {
            return Self::All;
        }
        match subcategory.filter(|s| !s.is_empty()) {
            Some(sub) => Self::Subcategory {
                category: category.to_string(),
                subcategory: sub.to_string(),
            },
            None => Self::Category(category.to_string()),
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected category, `None` for [`Selection::All`].
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Category(category) | Self::Subcategory { category, .. } => {
                Some(category.as_str())
            }
        }
    }

    #[must_use]
    pub fn subcategory(&self) -> Option<&str> {
        match self {
            Self::Subcategory { subcategory, .. } => Some(subcategory.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{ALL}"),
            Self::Category(category) => write!(f, "{category}"),
            Self::Subcategory {
                category,
                subcategory,
            } => write!(f, "{category}/{subcategory}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_ignores_subcategory() {
        assert_eq!(Selection::from_names("all", Some("irbis")), Selection::All);
    }

    #[test]
    fn empty_subcategory_selects_category() {
        assert_eq!(
            Selection::from_names("other", Some("")),
            Selection::Category("other".into())
        );
    }

    #[test]
    fn accessors_expose_names() {
        let selection = Selection::from_names("other", Some("irbis"));
        assert_eq!(selection.category(), Some("other"));
        assert_eq!(selection.subcategory(), Some("irbis"));
        assert_eq!(selection.to_string(), "other/irbis");
        assert!(!selection.is_all());
        assert!(Selection::default().is_all());
    }
}
