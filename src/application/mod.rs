// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Filtering, pagination and lightbox services
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The rendering surface uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use gallery_lens::application::query::{GalleryQuery, Lightbox};
//!
//! let mut query = GalleryQuery::new(photos, None, &order, page_size);
//! let list = query.current().photos.clone();
//! let mut lightbox = Lightbox::new();
//! lightbox.open(list.clone(), &list[0])?;
//! ```

pub mod port;
pub mod query;
