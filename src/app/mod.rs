// SPDX-License-Identifier: MPL-2.0
//! Gallery state machine.
//!
//! [`Gallery`] owns the filter/pagination controller and the lightbox and
//! routes every [`Message`] to them. Each update returns an [`Output`] telling
//! the rendering surface what to draw.
//!
//! ```text
//! Loading --Loaded(Ok)--> Ready
//! Loading --Loaded(Err)-> Failed
//! ```
//!
//! Only `Ready` reacts to user messages; the other states ignore them.
//! Story cards from the document are kept alongside the photos and rendered
//! on [`Message::ShowStories`].

pub mod message;
pub mod paths;

pub use message::{KeyAction, Message};

use crate::application::port::DocumentSource;
use crate::application::query::{GalleryQuery, Lightbox, LightboxView};
use crate::config::Config;
use crate::document::{load_document, GalleryDocument};
use crate::domain::story::Story;
use crate::domain::taxonomy::TaxonomyOrder;
use crate::domain::ui::PageSize;
use crate::error::Error;
use crate::render::{render_page, render_selection, render_stories, RenderItem};
use serde::Serialize;

/// Lifecycle of the gallery.
#[derive(Debug, Clone)]
pub enum GalleryState {
    /// Waiting for the document.
    Loading,
    Ready(Box<GalleryQuery>),
    /// The document could not be loaded; terminal for this run.
    Failed(Error),
}

/// What the rendering surface must do after an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Output {
    /// Clear the grid before appending [`Output::items`].
    pub replace: bool,
    /// Instructions to append, in order.
    pub items: Vec<RenderItem>,
    /// The lightbox overlay, `None` while closed.
    pub lightbox: Option<LightboxView>,
}

/// The gallery: taxonomy, filters, pagination and lightbox.
#[derive(Debug, Clone)]
pub struct Gallery {
    state: GalleryState,
    lightbox: Lightbox,
    stories: Vec<Story>,
    order: TaxonomyOrder,
    page_size: PageSize,
}

impl Gallery {
    #[must_use]
    pub fn new(order: TaxonomyOrder, page_size: PageSize) -> Self {
        Self {
            state: GalleryState::Loading,
            lightbox: Lightbox::new(),
            stories: Vec::new(),
            order,
            page_size,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.to_taxonomy_order(), config.page_size())
    }

    #[must_use]
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// The controller, once the document is loaded.
    #[must_use]
    pub fn query(&self) -> Option<&GalleryQuery> {
        match &self.state {
            GalleryState::Ready(query) => Some(&**query),
            _ => None,
        }
    }

    /// Story cards of the loaded document.
    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Load error, if the gallery failed.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            GalleryState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Fetches the document from `source` and feeds the result to [`Gallery::update`].
    pub async fn load(&mut self, source: &impl DocumentSource) -> Output {
        let result = load_document(source).await;
        self.update(Message::Loaded(result))
    }

    /// Applies one message.
    pub fn update(&mut self, message: Message) -> Output {
        if let Message::Loaded(result) = message {
            return self.handle_loaded(result);
        }

        let GalleryState::Ready(query) = &mut self.state else {
            log::debug!("Ignoring {:?} before the gallery is ready", message);
            return Output::default();
        };

        let mut output = Output::default();
        match message {
            Message::Loaded(_) => {}
            Message::Select(selection) => {
                query.select(selection);
                output.replace = true;
                output.items = render_current(query);
            }
            Message::ShowStories => {
                output.replace = true;
                output.items = render_stories(&self.stories);
            }
            Message::LoadMore => {
                if query.has_more() {
                    output.items = render_page(&query.load_more());
                }
            }
            Message::Open { full } => {
                let list = query.current().photos.clone();
                if let Err(err) = self.lightbox.open_path(list, &full) {
                    log::warn!("{}", err);
                }
            }
            Message::Next => {
                self.lightbox.next();
            }
            Message::Previous => {
                self.lightbox.previous();
            }
            Message::Close => self.lightbox.close(),
            Message::Key(key) => {
                if let Some(action) = KeyAction::from_key(&key) {
                    if self.lightbox.is_open() {
                        return self.update(action.into());
                    }
                }
            }
        }
        output.lightbox = self.lightbox.view();
        output
    }

    fn handle_loaded(&mut self, result: Result<GalleryDocument, Error>) -> Output {
        if !matches!(self.state, GalleryState::Loading) {
            log::warn!("Gallery document already handled, ignoring another load");
            return Output::default();
        }
        match result {
            Ok(document) => {
                let mut query = GalleryQuery::new(
                    document.photos,
                    document.categories,
                    &self.order,
                    self.page_size,
                );
                log::info!(
                    "Gallery ready: {} photos in {} categories",
                    query.len(),
                    query.taxonomy().len()
                );
                let items = render_current(&mut query);
                self.stories = document.stories;
                self.state = GalleryState::Ready(Box::new(query));
                Output {
                    replace: true,
                    items,
                    lightbox: None,
                }
            }
            Err(err) => {
                log::error!("Failed to load gallery: {}", err);
                self.state = GalleryState::Failed(err);
                Output::default()
            }
        }
    }
}

/// Instructions for a freshly selected display list: description or group
/// headings, then the first page.
fn render_current(query: &mut GalleryQuery) -> Vec<RenderItem> {
    let mut items = render_selection(query.current());
    items.extend(render_page(&query.load_more()));
    items
}
