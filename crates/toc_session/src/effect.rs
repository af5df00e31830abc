/// Work the caller must perform after an update; results come back as
/// [`crate::Msg::TocCompleted`] / [`crate::Msg::PageCompleted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchToc {
        request_id: crate::RequestId,
        url: String,
        item_class: String,
    },
    FetchPage {
        request_id: crate::RequestId,
        url: String,
        title_class: String,
        content_id: String,
    },
}
