//! Novel ToC engine: fetch, resolve and extract chapter lists and page content.
mod content;
mod decode;
mod document;
mod engine;
mod error;
mod fetch;
mod links;
mod resolver;
mod toc;
mod types;

pub use content::{extract_body, extract_titles};
pub use decode::{decode_html, decode_page, DecodedHtml};
pub use document::{HtmlParser, PageDocument, ScraperDocument, ScraperParser};
pub use engine::NovelScraper;
pub use error::ExtractionError;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use links::{anchor_for, anchor_link, resolve_href, AnchorLink};
pub use resolver::{LinkResolver, SiteRedirect, KNOWN_REDIRECTS};
pub use toc::extract_chapters;
pub use types::{
    ChapterRecord, ContentConfig, ExtractionConfig, FailureKind, FetchError, FetchMetadata,
    FetchOutput, PageContent, PageTitleExtraction, DEFAULT_CONTENT_CONTAINER_ID,
    DEFAULT_TITLE_CLASS, DEFAULT_TOC_ITEM_CLASS,
};
