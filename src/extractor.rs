use anyhow::{anyhow, Context, Result};
use scraper::{ElementRef, Html, Selector};
use url::Url;

pub const BASE_URL: &str = "https://en.wikipedia.org";

/// Picks the link to follow out of a rendered article.
///
/// Only `<p>` elements sitting directly under the article body are looked at,
/// and within each of them only the first `<a>` that is itself a direct child.
/// Links wrapped in `<i>`, `<sup>`, `<span>` and the like are never followed.
pub struct LinkExtractor {
    base: Url,
    content_text: Selector,
    parser_output: Selector,
}

impl LinkExtractor {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("Invalid base URL: {}", base_url))?;
        let content_text = Selector::parse("#mw-content-text")
            .map_err(|e| anyhow!("Failed to parse content selector: {}", e))?;
        let parser_output = Selector::parse(".mw-parser-output")
            .map_err(|e| anyhow!("Failed to parse parser-output selector: {}", e))?;

        Ok(Self {
            base,
            content_text,
            parser_output,
        })
    }

    pub fn first_link(&self, document: &Html) -> Option<String> {
        let content = document
            .select(&self.content_text)
            .next()?
            .select(&self.parser_output)
            .next()?;

        for paragraph in child_elements(content, "p") {
            let Some(anchor) = child_elements(paragraph, "a").next() else {
                continue;
            };

            match anchor.value().attr("href").filter(|href| !href.is_empty()) {
                Some(href) => match self.base.join(href) {
                    Ok(url) => return Some(url.to_string()),
                    Err(e) => log::debug!("Skipping unresolvable href {:?}: {}", href, e),
                },
                None => log::trace!("First anchor in paragraph has no target"),
            }
        }

        None
    }
}

fn child_elements<'a>(parent: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == tag)
}
