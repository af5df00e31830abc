use crate::{ChapterRow, PageResult, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub toc_phase: Phase,
    pub chapters: Vec<ChapterRow>,
    pub chapter_count: usize,
    pub toc_error: Option<String>,
    pub page_phase: Phase,
    pub page: Option<PageView>,
    pub page_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub primary_title: Option<String>,
    pub secondary_title: Option<String>,
    pub status_message: String,
    pub body: String,
    pub char_count: usize,
    pub word_count: usize,
}

impl From<&PageResult> for PageView {
    fn from(page: &PageResult) -> Self {
        Self {
            primary_title: page.primary_title.clone(),
            secondary_title: page.secondary_title.clone(),
            status_message: page.status_message.clone(),
            body: page.body.clone(),
            char_count: page.body.chars().count(),
            word_count: page.body.split_whitespace().count(),
        }
    }
}
