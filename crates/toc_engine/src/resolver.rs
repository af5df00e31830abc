use toc_logging::{toc_debug, toc_info};
use url::Url;

use crate::decode::decode_page;
use crate::document::{HtmlParser, PageDocument};
use crate::fetch::Fetcher;
use crate::links::{anchor_link, resolve_href};
use crate::ExtractionError;

/// A site whose book pages link to the real chapter index one hop away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteRedirect {
    pub host: &'static str,
    pub path_prefix: &'static str,
    /// Class of the element whose anchor points at the chapter index.
    pub link_class: &'static str,
}

impl SiteRedirect {
    pub fn matches(&self, url: &Url) -> bool {
        url.host_str() == Some(self.host) && url.path().starts_with(self.path_prefix)
    }
}

/// Sites that need the extra hop. Add a row to support another one.
pub const KNOWN_REDIRECTS: &[SiteRedirect] = &[SiteRedirect {
    host: "truyenwikidich.net",
    path_prefix: "/truyen/",
    link_class: "btn-read",
}];

/// Rewrites ToC URLs that point at an intermediate book page.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    sites: Vec<SiteRedirect>,
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self::new(KNOWN_REDIRECTS.to_vec())
    }
}

impl LinkResolver {
    pub fn new(sites: Vec<SiteRedirect>) -> Self {
        Self { sites }
    }

    /// The redirect rule for `url`, if any. Unparseable URLs never match.
    pub fn strategy_for(&self, url: &str) -> Option<SiteRedirect> {
        let parsed = match Url::parse(url.trim()) {
            Ok(parsed) => parsed,
            Err(err) => {
                toc_debug!("not checking redirect rules for unparseable url '{}': {}", url, err);
                return None;
            }
        };
        self.sites.iter().copied().find(|site| site.matches(&parsed))
    }

    /// Returns the URL to extract the ToC from.
    ///
    /// URLs without a matching rule come back unchanged and cause no request.
    pub async fn resolve<P: HtmlParser>(
        &self,
        url: &str,
        fetcher: &dyn Fetcher,
        parser: &P,
    ) -> Result<String, ExtractionError> {
        let Some(site) = self.strategy_for(url) else {
            return Ok(url.to_string());
        };

        toc_info!("resolving chapter index link for {} via class '{}'", url, site.link_class);
        let resolved = extract_redirect_link(url, site, fetcher, parser)
            .await
            .map_err(|cause| ExtractionError::link_extraction(url, cause))?;
        toc_info!("{} resolved to {}", url, resolved);
        Ok(resolved)
    }
}

async fn extract_redirect_link<P: HtmlParser>(
    url: &str,
    site: SiteRedirect,
    fetcher: &dyn Fetcher,
    parser: &P,
) -> Result<String, ExtractionError> {
    let output = fetcher
        .fetch(url)
        .await
        .map_err(|err| ExtractionError::from_fetch(err, url))?;
    let page_url = output.metadata.final_url.clone();
    let decoded = decode_page(&output);
    let doc = parser.parse(&decoded.html);

    let node = doc
        .elements_by_class(site.link_class)
        .into_iter()
        .next()
        .ok_or_else(|| ExtractionError::NoMatchingElements {
            class_name: site.link_class.to_string(),
            url: page_url.clone(),
        })?;
    let no_link = || ExtractionError::NoValidLinks {
        class_name: site.link_class.to_string(),
    };
    let link = anchor_link(&doc, node).ok_or_else(no_link)?;
    let base = Url::parse(&page_url).map_err(|_| no_link())?;
    let target = resolve_href(&link.href, &base).map_err(|_| no_link())?;
    Ok(target.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_requires_host_and_path_prefix() {
        let resolver = LinkResolver::default();
        assert!(resolver
            .strategy_for("https://truyenwikidich.net/truyen/tien-nghich-abc")
            .is_some());
        assert!(resolver
            .strategy_for("https://truyenwikidich.net/the-loai/tien-hiep")
            .is_none());
        assert!(resolver
            .strategy_for("https://other.example/truyen/tien-nghich-abc")
            .is_none());
        assert!(resolver
            .strategy_for("https://www.truyenwikidich.net/truyen/x")
            .is_none());
    }

    #[test]
    fn malformed_urls_are_not_matched() {
        let resolver = LinkResolver::default();
        assert!(resolver.strategy_for("truyenwikidich.net/truyen/x").is_none());
        assert!(resolver.strategy_for("").is_none());
    }
}
