// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`document`]: Gallery document retrieval from files and HTTP
//!   (implements [`DocumentSource`])
//!
//! [`DocumentSource`]: crate::application::port::DocumentSource

pub mod document;

pub use document::{source_for, AnySource, FsDocumentSource, HttpDocumentSource};
