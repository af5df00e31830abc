#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for the chapter list of a ToC page.
    TocRequested { url: String, item_class: String },
    /// Engine finished a ToC request.
    TocCompleted {
        request_id: crate::RequestId,
        result: Result<Vec<crate::ChapterRow>, String>,
    },
    /// User asked for the titles and body of a single content page.
    PageRequested {
        url: String,
        title_class: String,
        content_id: String,
    },
    /// Engine finished a page request.
    PageCompleted {
        request_id: crate::RequestId,
        result: Result<crate::PageResult, String>,
    },
    /// User dismissed the displayed results.
    Cleared,
    NoOp,
}
