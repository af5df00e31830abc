use crate::{AppState, Effect, Msg};

const EMPTY_URL_MESSAGE: &str = "Please enter a valid URL.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TocRequested { url, item_class } => {
            let url = url.trim();
            if url.is_empty() {
                state.reject_toc(EMPTY_URL_MESSAGE);
                return (state, Vec::new());
            }
            let request_id = state.next_request_id();
            state.start_toc(request_id);
            vec![Effect::FetchToc {
                request_id,
                url: url.to_string(),
                item_class: item_class.trim().to_string(),
            }]
        }
        Msg::TocCompleted { request_id, result } => {
            state.finish_toc(request_id, result);
            Vec::new()
        }
        Msg::PageRequested {
            url,
            title_class,
            content_id,
        } => {
            let url = url.trim();
            if url.is_empty() {
                state.reject_page(EMPTY_URL_MESSAGE);
                return (state, Vec::new());
            }
            let request_id = state.next_request_id();
            state.start_page(request_id);
            vec![Effect::FetchPage {
                request_id,
                url: url.to_string(),
                title_class: title_class.trim().to_string(),
                content_id: content_id.trim().to_string(),
            }]
        }
        Msg::PageCompleted { request_id, result } => {
            state.finish_page(request_id, result);
            Vec::new()
        }
        Msg::Cleared => {
            state.clear();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
