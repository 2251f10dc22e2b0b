// SPDX-License-Identifier: MPL-2.0
//! Story cards shown next to the photo gallery.

/// A short text teaser linking to a full story page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub title: String,
    /// Date as written by the author, shown verbatim.
    pub date: Option<String>,
    pub excerpt: Option<String>,
    /// Path or URL of the full story.
    pub link: String,
}

impl Story {
    #[must_use]
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: None,
            excerpt: None,
            link: link.into(),
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let story = Story::new("The Quiet River", "stories/river.html")
            .with_date("October 2025")
            .with_excerpt("The fog hung low");
        assert_eq!(story.date.as_deref(), Some("October 2025"));
        assert_eq!(story.excerpt.as_deref(), Some("The fog hung low"));
    }
}
