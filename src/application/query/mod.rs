// SPDX-License-Identifier: MPL-2.0
//! Query services.
//!
//! This module contains the services that turn the loaded photo set into what
//! the rendering surface shows.
//!
//! # Available Services
//!
//! - [`gallery`]: Filtering, ordering and pagination (`GalleryQuery`)
//! - [`lightbox`]: Single-photo browsing (`Lightbox`)
//!
//! # Design Notes
//!
//! Both services keep their state in plain structs owned by the caller, so the
//! whole gallery can be driven and tested without any rendering surface.

pub mod gallery;
pub mod lightbox;

// Re-export main types
pub use gallery::{DisplayList, GalleryQuery, Page, PageState, PhotoGroup, SelectionResult};
pub use lightbox::{Lightbox, LightboxState, LightboxView};
