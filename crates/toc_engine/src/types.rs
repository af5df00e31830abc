use std::fmt;

/// Class used for ToC items when the configured one is blank.
pub const DEFAULT_TOC_ITEM_CLASS: &str = "chapter-name";
/// Class used for page title elements when the configured one is blank.
pub const DEFAULT_TITLE_CLASS: &str = "book-title";
/// Id of the content container when the configured one is blank.
pub const DEFAULT_CONTENT_CONTAINER_ID: &str = "bookContentBody";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChapterRecord {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    pub toc_url: String,
    pub item_class_name: String,
}

impl ExtractionConfig {
    pub fn new(toc_url: impl Into<String>, item_class_name: impl Into<String>) -> Self {
        Self {
            toc_url: toc_url.into(),
            item_class_name: item_class_name.into(),
        }
    }

    /// Trimmed item class, or [`DEFAULT_TOC_ITEM_CLASS`] when blank.
    pub fn effective_item_class(&self) -> &str {
        or_default(&self.item_class_name, DEFAULT_TOC_ITEM_CLASS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    pub page_url: String,
    pub title_class_name: String,
    pub content_container_id: String,
}

impl ContentConfig {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            title_class_name: String::new(),
            content_container_id: String::new(),
        }
    }

    pub fn with_title_class(mut self, class_name: impl Into<String>) -> Self {
        self.title_class_name = class_name.into();
        self
    }

    pub fn with_content_container_id(mut self, id: impl Into<String>) -> Self {
        self.content_container_id = id.into();
        self
    }

    pub fn effective_title_class(&self) -> &str {
        or_default(&self.title_class_name, DEFAULT_TITLE_CLASS)
    }

    pub fn effective_container_id(&self) -> &str {
        or_default(&self.content_container_id, DEFAULT_CONTENT_CONTAINER_ID)
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageTitleExtraction {
    pub primary_title: Option<String>,
    pub secondary_title: Option<String>,
    pub status_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub titles: PageTitleExtraction,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
