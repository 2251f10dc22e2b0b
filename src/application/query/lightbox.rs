// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation over a display list.
//!
//! The lightbox browses the list it was opened with. Later selection changes
//! do not affect it until it is opened again.

use crate::application::query::gallery::DisplayList;
use crate::domain::error::NavigationError;
use crate::domain::photo::Photo;
use serde::Serialize;

/// Lightbox state.
#[derive(Debug, Clone, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    /// Showing `list[index]`; `index` is always in bounds.
    Open { list: DisplayList, index: usize },
}

/// Snapshot of the open lightbox for the viewer overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightboxView {
    /// Full-resolution reference to display.
    pub full: String,
    pub alt: String,
    /// Description text, empty when the photo has none.
    pub description: String,
    /// Capture date as written in the document, empty when absent.
    pub date: String,
    /// Position in the browsed list (0-indexed).
    pub index: usize,
    /// Length of the browsed list.
    pub total: usize,
}

/// Single-photo viewer with wrap-around next/previous navigation.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Index of the shown photo, `None` while closed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            LightboxState::Open { index, .. } => Some(*index),
            LightboxState::Closed => None,
        }
    }

    /// The photo being shown, `None` while closed.
    #[must_use]
    pub fn current(&self) -> Option<&Photo> {
        match &self.state {
            LightboxState::Open { list, index } => list.get(*index),
            LightboxState::Closed => None,
        }
    }

    /// The list being browsed, `None` while closed.
    #[must_use]
    pub fn list(&self) -> Option<&DisplayList> {
        match &self.state {
            LightboxState::Open { list, .. } => Some(list),
            LightboxState::Closed => None,
        }
    }

    /// Opens `photo` within `list`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NotFound`] if no photo of `list` has the same
    /// full-resolution reference; the state is left untouched.
    pub fn open(&mut self, list: DisplayList, photo: &Photo) -> Result<usize, NavigationError> {
        self.open_path(list, &photo.full_path)
    }

    /// Opens the photo whose full-resolution reference is `full_path`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NotFound`] if `list` has no such photo.
    pub fn open_path(&mut self, list: DisplayList, full_path: &str) -> Result<usize, NavigationError> {
        let index = list
            .iter()
            .position(|p| p.full_path == full_path)
            .ok_or_else(|| NavigationError::NotFound {
                full_path: full_path.to_string(),
            })?;
        self.state = LightboxState::Open { list, index };
        Ok(index)
    }

    /// Moves to the next photo, wrapping to the first after the last.
    pub fn next(&mut self) -> Option<&Photo> {
        self.step(1)
    }

    /// Moves to the previous photo, wrapping to the last before the first.
    pub fn previous(&mut self) -> Option<&Photo> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Option<&Photo> {
        let LightboxState::Open { list, index } = &mut self.state else {
            return None;
        };
        let len = list.len();
        if len == 0 {
            return None;
        }
        *index = if delta >= 0 {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
        list.get(*index)
    }

    /// Closes the lightbox from any state.
    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// Snapshot of the shown photo for rendering, `None` while closed.
    #[must_use]
    pub fn view(&self) -> Option<LightboxView> {
        let LightboxState::Open { list, index } = &self.state else {
            return None;
        };
        let photo = list.get(*index)?;
        Some(LightboxView {
            full: photo.full_path.clone(),
            alt: photo.alt_or_default(),
            description: photo.description.clone().unwrap_or_default(),
            date: photo
                .capture_date
                .as_ref()
                .map(|d| d.raw().to_string())
                .unwrap_or_default(),
            index: *index,
            total: list.len(),
        })
    }
}
