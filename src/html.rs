//! HTML query layer used to find a cover on a search result page
//!
//! The fetcher only needs four capabilities: parse a page, select the first
//! element matching a selector, repeat that inside an element, and read the
//! first non-empty attribute out of a list. [`HtmlDocument`] and [`HtmlNode`]
//! expose exactly those on top of `scraper`, and [`CoverLocator`] chains them.

use crate::config::FetchConfig;
use crate::error::{Error, FetchError, Result};
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document. Parsing never fails; broken markup is repaired.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// First element in document order matching `selector`
    pub fn select_first(&self, selector: &Selector) -> Option<HtmlNode<'_>> {
        self.html.select(selector).next().map(HtmlNode)
    }
}

/// An element borrowed from an [`HtmlDocument`]
#[derive(Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> HtmlNode<'a> {
    /// First descendant matching `selector`
    pub fn select_first(&self, selector: &Selector) -> Option<HtmlNode<'a>> {
        self.0.select(selector).next().map(HtmlNode)
    }

    /// Value of the first attribute in `names` that is present and non-empty
    pub fn attr_with_fallback<S: AsRef<str>>(&self, names: &[S]) -> Option<&'a str> {
        names
            .iter()
            .filter_map(|name| self.0.value().attr(name.as_ref()))
            .find(|value| !value.is_empty())
    }
}

/// Compile a CSS selector from configuration
pub fn compile_selector(key: &str, selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Config {
        message: format!("invalid selector {selector:?}: {e}"),
        key: Some(key.to_string()),
    })
}

/// Finds the raw cover URL on a search result page
pub struct CoverLocator {
    container: Selector,
    image: Selector,
    attributes: Vec<String>,
}

impl CoverLocator {
    /// Build a locator from the selectors in `config`
    ///
    /// # Errors
    /// Returns [`Error::Config`] if either selector does not parse
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            container: compile_selector("container_selector", &config.container_selector)?,
            image: compile_selector("image_selector", &config.image_selector)?,
            attributes: config.image_attributes.clone(),
        })
    }

    /// Return the URL of the first image in the result container, as written in the page
    ///
    /// Errors are raised with an empty identifier; the caller attaches it.
    ///
    /// # Errors
    /// - [`FetchError::ResultNotFound`] if the container is missing
    /// - [`FetchError::CoverNotFound`] if it has no image or the image has no URL
    pub fn locate(&self, page: &str) -> std::result::Result<String, FetchError> {
        let document = HtmlDocument::parse(page);

        let container = document
            .select_first(&self.container)
            .ok_or_else(|| FetchError::ResultNotFound { id: String::new() })?;

        let image = container
            .select_first(&self.image)
            .ok_or_else(|| FetchError::CoverNotFound { id: String::new() })?;

        image
            .attr_with_fallback(&self.attributes)
            .map(str::to_string)
            .ok_or_else(|| FetchError::CoverNotFound { id: String::new() })
    }
}
