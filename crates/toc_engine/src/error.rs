use thiserror::Error;

use crate::types::{FailureKind, FetchError};

const BLOCKED_REQUEST_HINT: &str =
    "(Note: Content might be protected by CORS policy or block automated requests.)";

/// Classified failure of a ToC or page-content extraction.
///
/// Every variant is terminal; callers render the structured fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to extract the real table-of-contents link from {url}: {source}")]
    LinkExtraction {
        url: String,
        #[source]
        source: Box<ExtractionError>,
    },

    #[error("HTTP error! status: {status} for {url}. Ensure the URL is correct and the resource is publicly accessible.")]
    Http { status: u16, url: String },

    #[error(
        "no elements found with class '{class_name}' at {url}. Possible causes: \
         1) the URL is not the table-of-contents page; \
         2) the chapter list is rendered by JavaScript, which is not supported; \
         3) the request was blocked (CORS or anti-bot protection); \
         4) the class name is wrong or misspelled"
    )]
    NoMatchingElements { class_name: String, url: String },

    #[error(
        "elements with class '{class_name}' were found, but none contained a link with an href. \
         Check that each item wraps an <a href=\"...\"> element"
    )]
    NoValidLinks { class_name: String },

    #[error("could not find the content body with ID '{id}' on the page")]
    ContentContainerNotFound { id: String },

    #[error("no paragraph text found within the element with ID '{id}'")]
    NoContent { id: String },

    #[error("failed to fetch content from URL. {message} {}", BLOCKED_REQUEST_HINT)]
    Network { message: String },
}

impl ExtractionError {
    pub(crate) fn from_fetch(err: FetchError, url: &str) -> Self {
        match err.kind {
            FailureKind::HttpStatus(status) => ExtractionError::Http {
                status,
                url: url.to_string(),
            },
            _ => ExtractionError::Network {
                message: err.to_string(),
            },
        }
    }

    pub(crate) fn link_extraction(url: &str, cause: ExtractionError) -> Self {
        ExtractionError::LinkExtraction {
            url: url.to_string(),
            source: Box::new(cause),
        }
    }
}
