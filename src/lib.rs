// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is the core of a static photo gallery.
//!
//! It loads a JSON document describing photos and their categories, orders
//! and filters them, reveals them page by page and drives a lightbox. The
//! output is a list of rendering instructions, so any surface (web page,
//! terminal, test) can display the gallery.

#![doc(html_root_url = "https://docs.rs/gallery_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;
