use crate::view_model::{AppViewModel, PageView};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRow {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageResult {
    pub primary_title: Option<String>,
    pub secondary_title: Option<String>,
    pub status_message: String,
    pub body: String,
}

/// Results of one request flow. Only the latest request may write into it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot<T> {
    pending: Option<RequestId>,
    value: Option<T>,
    error: Option<String>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            pending: None,
            value: None,
            error: None,
        }
    }
}

impl<T> Slot<T> {
    fn start(&mut self, request_id: RequestId) {
        self.pending = Some(request_id);
        self.value = None;
        self.error = None;
    }

    fn reject(&mut self, message: impl Into<String>) {
        self.pending = None;
        self.value = None;
        self.error = Some(message.into());
    }

    /// No-op when `request_id` was superseded or never started.
    fn finish(&mut self, request_id: RequestId, result: Result<T, String>) {
        if self.pending != Some(request_id) {
            return;
        }
        self.pending = None;
        match result {
            Ok(value) => self.value = Some(value),
            Err(message) => self.error = Some(message),
        }
    }

    fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::Loading
        } else {
            Phase::Idle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    last_request_id: RequestId,
    toc: Slot<Vec<ChapterRow>>,
    page: Slot<PageResult>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let chapters = self.toc.value.clone().unwrap_or_default();
        AppViewModel {
            toc_phase: self.toc.phase(),
            chapter_count: chapters.len(),
            chapters,
            toc_error: self.toc.error.clone(),
            page_phase: self.page.phase(),
            page: self.page.value.as_ref().map(PageView::from),
            page_error: self.page.error.clone(),
        }
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    pub(crate) fn start_toc(&mut self, request_id: RequestId) {
        self.toc.start(request_id);
    }

    pub(crate) fn reject_toc(&mut self, message: &str) {
        self.toc.reject(message);
    }

    pub(crate) fn finish_toc(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<ChapterRow>, String>,
    ) {
        self.toc.finish(request_id, result);
    }

    pub(crate) fn start_page(&mut self, request_id: RequestId) {
        self.page.start(request_id);
    }

    pub(crate) fn reject_page(&mut self, message: &str) {
        self.page.reject(message);
    }

    pub(crate) fn finish_page(&mut self, request_id: RequestId, result: Result<PageResult, String>) {
        self.page.finish(request_id, result);
    }

    /// Drops shown results. In-flight requests are forgotten, so their
    /// completions are ignored.
    pub(crate) fn clear(&mut self) {
        self.toc = Slot::default();
        self.page = Slot::default();
    }
}
