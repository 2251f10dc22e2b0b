// SPDX-License-Identifier: MPL-2.0
//! Gallery query service: filtering, ordering and pagination.
//!
//! [`GalleryQuery`] owns the loaded photo set and the state of the current
//! selection. Every selection change recomputes the display list from scratch
//! and resets pagination to the first page.
//!
//! # Selections
//!
//! - [`Selection::All`]: each category's top-level photos, grouped per category
//!   in index order. Photos filed under a subcategory are left out. Never paginated.
//! - [`Selection::Category`]: the category's top-level photos, then each
//!   subcategory's photos in index order. Paginated.
//! - [`Selection::Subcategory`]: exactly that subcategory's photos. Paginated.

use crate::domain::ordering::order_photos;
use crate::domain::photo::{CategoryMetadata, Photo};
use crate::domain::selection::Selection;
use crate::domain::taxonomy::{build_taxonomy, Taxonomy, TaxonomyOrder};
use crate::domain::ui::PageSize;
use std::ops::Range;
use std::sync::Arc;

/// Ordered, filtered photos of a selection.
///
/// Shared with the lightbox so that browsing keeps using the list that was on
/// screen when a photo was opened.
pub type DisplayList = Arc<[Photo]>;

/// A labeled run of photos inside the display list of the "all" view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoGroup {
    /// Category the group belongs to.
    pub category: String,
    /// Position of the group's photos in [`SelectionResult::photos`].
    pub range: Range<usize>,
}

/// Outcome of a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub selection: Selection,
    /// Text shown above the grid, if any.
    pub description: Option<String>,
    /// Every photo of the selection, in display order.
    pub photos: DisplayList,
    /// Category groups; only the "all" view has any.
    pub groups: Vec<PhotoGroup>,
}

impl SelectionResult {
    /// Whether this selection is revealed page by page.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        !self.selection.is_all()
    }

    /// Pagination state right after the selection was made.
    #[must_use]
    pub fn first_page_state(&self) -> PageState {
        if self.is_paginated() {
            PageState::default()
        } else {
            PageState {
                revealed: self.photos.len(),
            }
        }
    }
}

/// How far the current display list has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    revealed: usize,
}

impl PageState {
    /// Number of photos already handed to the rendering surface.
    #[must_use]
    pub fn revealed(self) -> usize {
        self.revealed
    }
}

/// One "load more" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    /// Photos revealed by this step, never overlapping earlier steps.
    pub items: &'a [Photo],
    /// Whether another step would reveal more photos.
    pub has_more: bool,
    /// State to pass to the next call.
    pub state: PageState,
}

/// Filter and pagination controller for a loaded gallery.
#[derive(Debug, Clone)]
pub struct GalleryQuery {
    photos: Vec<Photo>,
    metadata: Option<CategoryMetadata>,
    taxonomy: Taxonomy,
    page_size: PageSize,
    current: SelectionResult,
    page: PageState,
}

impl GalleryQuery {
    /// Builds the controller and its category index; the initial selection is "all".
    #[must_use]
    pub fn new(
        photos: Vec<Photo>,
        metadata: Option<CategoryMetadata>,
        order: &TaxonomyOrder,
        page_size: PageSize,
    ) -> Self {
        let taxonomy = build_taxonomy(&photos, metadata.as_ref(), order);
        let mut query = Self {
            photos,
            metadata,
            taxonomy,
            page_size,
            current: SelectionResult {
                selection: Selection::All,
                description: None,
                photos: Arc::from(Vec::new()),
                groups: Vec::new(),
            },
            page: PageState::default(),
        };
        query.select(Selection::All);
        query
    }

    #[must_use]
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Total number of loaded photos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// The active selection and its display list.
    #[must_use]
    pub fn current(&self) -> &SelectionResult {
        &self.current
    }

    /// Pagination state of the active selection.
    #[must_use]
    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Whether the active selection has photos left to reveal.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page.revealed < self.current.photos.len()
    }

    /// Makes `selection` active and resets pagination to the first page.
    pub fn select(&mut self, selection: Selection) -> &SelectionResult {
        let result = self.resolve(&selection);
        log::debug!(
            "Selected {} ({} photos, {} groups)",
            result.selection,
            result.photos.len(),
            result.groups.len()
        );
        self.page = result.first_page_state();
        self.current = result;
        &self.current
    }

    /// Computes the page following `state` in the active selection.
    ///
    /// Pure: calling it twice with the same state yields the same page.
    #[must_use]
    pub fn next_page(&self, state: PageState) -> Page<'_> {
        let total = self.current.photos.len();
        let start = state.revealed.min(total);
        let end = if self.current.is_paginated() {
            start.saturating_add(self.page_size.value()).min(total)
        } else {
            total
        };
        let start = if self.current.is_paginated() { start } else { end };
        Page {
            items: &self.current.photos[start..end],
            has_more: end < total,
            state: PageState { revealed: end },
        }
    }

    /// Reveals the next page of the active selection.
    pub fn load_more(&mut self) -> Page<'_> {
        let next = self.next_page(self.page);
        let (state, has_more) = (next.state, next.has_more);
        let start = self.page.revealed.min(state.revealed);
        self.page = state;
        Page {
            items: &self.current.photos[start..state.revealed],
            has_more,
            state,
        }
    }

    /// Computes the display list of `selection` without changing any state.
    #[must_use]
    pub fn resolve(&self, selection: &Selection) -> SelectionResult {
        match selection {
            Selection::All => self.resolve_all(),
            Selection::Category(category) => {
                let mut photos = order_photos(
                    self.photos
                        .iter()
                        .filter(|p| p.category == *category && p.is_top_level()),
                );
                if let Some(entry) = self.taxonomy.category(category) {
                    for sub in &entry.subcategories {
                        photos.extend(order_photos(
                            self.photos
                                .iter()
                                .filter(|p| p.is_in(category, Some(sub.name.as_str()))),
                        ));
                    }
                }
                SelectionResult {
                    selection: selection.clone(),
                    description: self.description(selection),
                    photos: photos.into(),
                    groups: Vec::new(),
                }
            }
            Selection::Subcategory {
                category,
                subcategory,
            } => SelectionResult {
                selection: selection.clone(),
                description: self.description(selection),
                photos: order_photos(
                    self.photos
                        .iter()
                        .filter(|p| p.is_in(category, Some(subcategory.as_str()))),
                )
                .into(),
                groups: Vec::new(),
            },
        }
    }

    fn resolve_all(&self) -> SelectionResult {
        let mut photos = Vec::new();
        let mut groups = Vec::new();
        for entry in self.taxonomy.categories() {
            let top_level = order_photos(
                self.photos
                    .iter()
                    .filter(|p| p.category == entry.name && p.is_top_level()),
            );
            if top_level.is_empty() {
                continue;
            }
            let start = photos.len();
            photos.extend(top_level);
            groups.push(PhotoGroup {
                category: entry.name.clone(),
                range: start..photos.len(),
            });
        }
        SelectionResult {
            selection: Selection::All,
            description: None,
            photos: photos.into(),
            groups,
        }
    }

    /// Description shown above the grid for `selection`.
    ///
    /// The subcategory's own description wins; otherwise the category's
    /// description is used. The "all" view has none.
    #[must_use]
    pub fn description(&self, selection: &Selection) -> Option<String> {
        let category = selection.category()?;
        let meta = self.metadata.as_ref()?.get(category)?;
        selection
            .subcategory()
            .and_then(|sub| meta.subcategories.get(sub))
            .and_then(|sub| sub.description.clone())
            .or_else(|| meta.description.clone())
            .filter(|text| !text.is_empty())
    }
}
