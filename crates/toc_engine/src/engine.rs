use std::sync::Arc;

use toc_logging::toc_info;

use crate::content::{extract_body, extract_titles};
use crate::decode::decode_page;
use crate::document::{HtmlParser, ScraperParser};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::resolver::LinkResolver;
use crate::toc::extract_chapters;
use crate::{ChapterRecord, ContentConfig, ExtractionConfig, ExtractionError, FetchOutput, PageContent};

/// Fetch-then-extract pipeline for ToC pages and single content pages.
///
/// Holds no per-request state; concurrent calls do not affect each other.
pub struct NovelScraper<P: HtmlParser = ScraperParser> {
    fetcher: Arc<dyn Fetcher>,
    parser: P,
    resolver: LinkResolver,
}

impl NovelScraper<ScraperParser> {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self::with_parser(fetcher, ScraperParser)
    }

    pub fn with_settings(settings: FetchSettings) -> Self {
        Self::new(Arc::new(ReqwestFetcher::new(settings)))
    }
}

impl<P: HtmlParser> NovelScraper<P> {
    pub fn with_parser(fetcher: Arc<dyn Fetcher>, parser: P) -> Self {
        Self {
            fetcher,
            parser,
            resolver: LinkResolver::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: LinkResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Run the Link Resolver step alone.
    pub async fn resolve_toc_url(&self, url: &str) -> Result<String, ExtractionError> {
        self.resolver
            .resolve(url, self.fetcher.as_ref(), &self.parser)
            .await
    }

    pub async fn fetch_toc(
        &self,
        config: &ExtractionConfig,
    ) -> Result<Vec<ChapterRecord>, ExtractionError> {
        let class_name = config.effective_item_class();
        if class_name.is_empty() {
            return Err(ExtractionError::Configuration(
                "ToC item class name cannot be empty".into(),
            ));
        }
        let toc_url = require_url(&config.toc_url)?;

        let effective_url = self.resolve_toc_url(toc_url).await?;
        let output = self.fetch(&effective_url).await?;
        let page_url = output.metadata.final_url.clone();
        let decoded = decode_page(&output);
        let doc = self.parser.parse(&decoded.html);

        let chapters = extract_chapters(&doc, class_name, &page_url)?;
        toc_info!("extracted {} chapters from {}", chapters.len(), page_url);
        Ok(chapters)
    }

    pub async fn fetch_page_content(
        &self,
        config: &ContentConfig,
    ) -> Result<PageContent, ExtractionError> {
        let page_url = require_url(&config.page_url)?;
        let title_class = config.effective_title_class();
        let container_id = config.effective_container_id();

        let output = self.fetch(page_url).await?;
        let decoded = decode_page(&output);
        let doc = self.parser.parse(&decoded.html);

        let titles = extract_titles(&doc, title_class);
        let body = extract_body(&doc, container_id)?;
        toc_info!(
            "extracted {} characters of content from {}",
            body.chars().count(),
            output.metadata.final_url
        );
        Ok(PageContent { titles, body })
    }

    async fn fetch(&self, url: &str) -> Result<FetchOutput, ExtractionError> {
        self.fetcher
            .fetch(url)
            .await
            .map_err(|err| ExtractionError::from_fetch(err, url))
    }
}

fn require_url(url: &str) -> Result<&str, ExtractionError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ExtractionError::Configuration(
            "Please enter a valid URL.".into(),
        ));
    }
    Ok(url)
}
