// SPDX-License-Identifier: MPL-2.0
//! Messages consumed by [`Gallery::update`](super::Gallery::update).

use crate::document::GalleryDocument;
use crate::domain::selection::Selection;
use crate::error::Error;

/// Everything the rendering surface (or the loader) can tell the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// The single document fetch finished.
    Loaded(Result<GalleryDocument, Error>),
    /// A filter button was clicked.
    Select(Selection),
    /// The "load more" trigger was activated.
    LoadMore,
    /// The stories view was requested.
    ShowStories,
    /// A tile was clicked.
    Open { full: String },
    Next,
    Previous,
    Close,
    /// A key was pressed, named like DOM `KeyboardEvent.key`.
    Key(String),
}

/// Lightbox keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Next,
    Previous,
}

impl KeyAction {
    /// Maps a key name to its action, `None` for unbound keys.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(KeyAction::Close),
            "ArrowRight" | "Right" => Some(KeyAction::Next),
            "ArrowLeft" | "Left" => Some(KeyAction::Previous),
            _ => None,
        }
    }
}

impl From<KeyAction> for Message {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::Close => Message::Close,
            KeyAction::Next => Message::Next,
            KeyAction::Previous => Message::Previous,
        }
    }
}
