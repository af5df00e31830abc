use toc_logging::{toc_debug, toc_warn};
use url::Url;

use crate::document::PageDocument;
use crate::links::{anchor_link, resolve_href};
use crate::{ChapterRecord, ExtractionError};

/// Extract chapter records from a parsed ToC page.
///
/// `page_url` must be the URL the document was actually fetched from; every
/// href is resolved against it. The result is never an empty list.
pub fn extract_chapters<D: PageDocument>(
    doc: &D,
    class_name: &str,
    page_url: &str,
) -> Result<Vec<ChapterRecord>, ExtractionError> {
    let class_name = class_name.trim();
    if class_name.is_empty() {
        return Err(ExtractionError::Configuration(
            "ToC item class name cannot be empty".into(),
        ));
    }
    let base = Url::parse(page_url).map_err(|err| {
        ExtractionError::Configuration(format!("invalid page url {page_url}: {err}"))
    })?;

    let matched = doc.elements_by_class(class_name);
    if matched.is_empty() {
        return Err(ExtractionError::NoMatchingElements {
            class_name: class_name.to_string(),
            url: page_url.to_string(),
        });
    }
    toc_debug!("{} elements with class '{}' on {}", matched.len(), class_name, page_url);

    let mut chapters = Vec::with_capacity(matched.len());
    for (index, node) in matched.into_iter().enumerate() {
        let Some(link) = anchor_link(doc, node) else {
            toc_debug!("item {} has no anchor with href; skipped", index + 1);
            continue;
        };
        let url = match resolve_href(&link.href, &base) {
            Ok(url) => url,
            Err(err) => {
                toc_warn!(
                    "skipping item {}: cannot resolve href '{}' against {}: {}",
                    index + 1,
                    link.href,
                    base,
                    err
                );
                continue;
            }
        };
        let title = if link.text.is_empty() {
            format!("Chapter {}", index + 1)
        } else {
            link.text
        };
        chapters.push(ChapterRecord {
            title,
            url: url.into(),
        });
    }

    if chapters.is_empty() {
        return Err(ExtractionError::NoValidLinks {
            class_name: class_name.to_string(),
        });
    }
    Ok(chapters)
}
