// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules without I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Nothing here touches the filesystem or the network, so every rule can be
//! tested on in-memory fixtures.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`NavigationError`](error::NavigationError))
//! - [`ordering`]: Display order of photos and natural name comparison
//! - [`photo`]: Photo and category metadata types ([`Photo`](photo::Photo),
//!   [`CategoryMeta`](photo::CategoryMeta))
//! - [`selection`]: Filter selection ([`Selection`](selection::Selection))
//! - [`story`]: Story cards ([`Story`](story::Story))
//! - [`taxonomy`]: Category index ([`Taxonomy`](taxonomy::Taxonomy))
//! - [`ui`]: Setting value objects ([`PageSize`](ui::newtypes::PageSize),
//!   [`FetchTimeout`](ui::newtypes::FetchTimeout))

pub mod error;
pub mod ordering;
pub mod photo;
pub mod selection;
pub mod story;
pub mod taxonomy;
pub mod ui;
