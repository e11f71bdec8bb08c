use crate::config::PageSelectors;
use crate::error::{ParseError, SnagError};
use crate::parsers::element_text;
use crate::results::GameInfo;
use scraper::{ElementRef, Html, Selector};

/// Extracts game information from store page HTML using compiled selectors
#[derive(Debug, Clone)]
pub struct StorePageParser {
    sources: PageSelectors,
    name: Selector,
    developer_rows: Selector,
    tags: Selector,
    link: Selector,
}

impl Default for StorePageParser {
    fn default() -> Self {
        Self::new(&PageSelectors::default()).expect("Default selectors should be valid")
    }
}

impl StorePageParser {
    /// Compile the configured selectors
    pub fn new(selectors: &PageSelectors) -> Result<Self, SnagError> {
        Ok(Self {
            sources: selectors.clone(),
            name: compile(&selectors.name)?,
            developer_rows: compile(&selectors.developer_rows)?,
            tags: compile(&selectors.tags)?,
            link: compile(&selectors.link)?,
        })
    }

    /// Parses a store page.
    ///
    /// The first developer/publisher row supplies the developers and the
    /// second the publishers; rows beyond the second are ignored. Any missing
    /// element fails the whole page, no partial record is produced.
    pub fn parse(&self, html: &str) -> Result<GameInfo, ParseError> {
        let doc = Html::parse_document(html);

        let name = doc
            .select(&self.name)
            .next()
            .map(element_text)
            .ok_or_else(|| ParseError::MissingName {
                selector: self.sources.name.clone(),
            })?;

        let rows = doc.select(&self.developer_rows).collect::<Vec<_>>();
        if rows.len() < 2 {
            return Err(ParseError::MissingDeveloperRows {
                selector: self.sources.developer_rows.clone(),
                found: rows.len(),
            });
        }
        let developers = self.link_texts(rows[0]);
        let publishers = self.link_texts(rows[1]);

        let tags_container = doc
            .select(&self.tags)
            .next()
            .ok_or_else(|| ParseError::MissingTags {
                selector: self.sources.tags.clone(),
            })?;
        let tags = self.link_texts(tags_container);

        ::log::debug!(
            "Parsed '{}': {} developers, {} publishers, {} tags",
            name,
            developers.len(),
            publishers.len(),
            tags.len()
        );

        Ok(GameInfo::new(name, developers, publishers, tags))
    }

    fn link_texts(&self, container: ElementRef<'_>) -> Vec<String> {
        container.select(&self.link).map(element_text).collect()
    }
}

fn compile(selector: &str) -> Result<Selector, SnagError> {
    Selector::parse(selector)
        .map_err(|e| SnagError::Config(format!("invalid selector `{}`: {}", selector, e)))
}
