// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

use std::fmt;

/// Errors raised by lightbox navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The requested photo is not part of the list being browsed.
    NotFound {
        /// Full-resolution reference of the requested photo.
        full_path: String,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::NotFound { full_path } => {
                write!(f, "Photo not in the current list: {full_path}")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_photo() {
        let err = NavigationError::NotFound {
            full_path: "photos/a.jpg".into(),
        };
        assert_eq!(err.to_string(), "Photo not in the current list: photos/a.jpg");
    }
}
