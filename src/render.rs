// SPDX-License-Identifier: MPL-2.0
//! Rendering instructions.
//!
//! The gallery never draws anything itself. It emits a flat list of
//! [`RenderItem`]s which a surface (a web page, a terminal, a test) appends to
//! its grid in order.

use crate::application::query::{Page, SelectionResult};
use crate::domain::photo::Photo;
use crate::domain::story::Story;
use serde::Serialize;

/// One instruction for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderItem {
    /// Text shown above the grid.
    Description { text: String },
    /// Group label in the "all" view.
    Heading { label: String },
    /// A clickable thumbnail.
    Tile {
        thumb: String,
        alt: String,
        full: String,
    },
    /// The "load more" trigger; present only while photos remain hidden.
    LoadMore,
    /// A story card. `date` and `excerpt` are empty when the story has none.
    Story {
        title: String,
        date: String,
        excerpt: String,
        link: String,
    },
}

impl RenderItem {
    #[must_use]
    pub fn tile(photo: &Photo) -> Self {
        RenderItem::Tile {
            thumb: photo.thumbnail_path.clone(),
            alt: photo.alt_or_default(),
            full: photo.full_path.clone(),
        }
    }

    #[must_use]
    pub fn story(story: &Story) -> Self {
        RenderItem::Story {
            title: story.title.clone(),
            date: story.date.clone().unwrap_or_default(),
            excerpt: story.excerpt.clone().unwrap_or_default(),
            link: story.link.clone(),
        }
    }
}

/// Capitalizes the first character of a category name.
#[must_use]
pub fn heading_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Items emitted when a selection becomes active, before any page.
///
/// The "all" view is rendered completely here. Other selections only get
/// their description; tiles follow through [`render_page`].
#[must_use]
pub fn render_selection(result: &SelectionResult) -> Vec<RenderItem> {
    if !result.is_paginated() {
        let mut items = Vec::with_capacity(result.photos.len() + result.groups.len());
        for group in &result.groups {
            items.push(RenderItem::Heading {
                label: heading_label(&group.category),
            });
            items.extend(result.photos[group.range.clone()].iter().map(RenderItem::tile));
        }
        return items;
    }

    result
        .description
        .iter()
        .map(|text| RenderItem::Description { text: text.clone() })
        .collect()
}

/// Tiles of one page, followed by the "load more" trigger if needed.
#[must_use]
pub fn render_page(page: &Page<'_>) -> Vec<RenderItem> {
    let mut items: Vec<RenderItem> = page.items.iter().map(RenderItem::tile).collect();
    if page.has_more {
        items.push(RenderItem::LoadMore);
    }
    items
}

/// One card per story, in document order.
#[must_use]
pub fn render_stories(stories: &[Story]) -> Vec<RenderItem> {
    stories.iter().map(RenderItem::story).collect()
}
