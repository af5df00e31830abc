use std::collections::VecDeque;

use toc_engine::{
    ChapterRecord, ContentConfig, ExtractionConfig, FetchSettings, NovelScraper, PageContent,
};
use toc_logging::{toc_info, toc_warn};
use toc_session::{update, AppState, AppViewModel, ChapterRow, Effect, Msg, PageResult};

/// Executes session effects against the extraction engine.
pub struct EffectRunner {
    scraper: NovelScraper,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_scraper(NovelScraper::with_settings(settings))
    }

    pub fn with_scraper(scraper: NovelScraper) -> Self {
        Self { scraper }
    }

    /// Run one effect and return the message that reports its outcome.
    pub async fn run(&self, effect: Effect) -> Msg {
        match effect {
            Effect::FetchToc {
                request_id,
                url,
                item_class,
            } => {
                toc_info!("FetchToc request_id={} url={}", request_id, url);
                let config = ExtractionConfig::new(url, item_class);
                let result = self
                    .scraper
                    .fetch_toc(&config)
                    .await
                    .map(|chapters| chapters.into_iter().map(chapter_row).collect())
                    .map_err(|err| {
                        toc_warn!("ToC request {} failed: {}", request_id, err);
                        err.to_string()
                    });
                Msg::TocCompleted { request_id, result }
            }
            Effect::FetchPage {
                request_id,
                url,
                title_class,
                content_id,
            } => {
                toc_info!("FetchPage request_id={} url={}", request_id, url);
                let config = ContentConfig::new(url)
                    .with_title_class(title_class)
                    .with_content_container_id(content_id);
                let result = self
                    .scraper
                    .fetch_page_content(&config)
                    .await
                    .map(page_result)
                    .map_err(|err| {
                        toc_warn!("page request {} failed: {}", request_id, err);
                        err.to_string()
                    });
                Msg::PageCompleted { request_id, result }
            }
        }
    }

    /// Feed `msg` through the state machine, running effects one at a time
    /// until no work is left.
    pub async fn drive(&self, mut state: AppState, msg: Msg) -> (AppState, AppViewModel) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let (next, effects) = update(state, msg);
            state = next;
            for effect in effects {
                inbox.push_back(self.run(effect).await);
            }
        }
        let view = state.view();
        (state, view)
    }
}

fn chapter_row(record: ChapterRecord) -> ChapterRow {
    ChapterRow {
        title: record.title,
        url: record.url,
    }
}

fn page_result(content: PageContent) -> PageResult {
    PageResult {
        primary_title: content.titles.primary_title,
        secondary_title: content.titles.secondary_title,
        status_message: content.titles.status_message,
        body: content.body,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use toc_engine::{FailureKind, FetchError, FetchMetadata, FetchOutput, Fetcher};
    use toc_session::Phase;

    use super::*;

    struct OnePageFetcher {
        url: &'static str,
        html: &'static str,
    }

    #[async_trait::async_trait]
    impl Fetcher for OnePageFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
            if url != self.url {
                return Err(FetchError::new(FailureKind::HttpStatus(404), "404 Not Found"));
            }
            Ok(FetchOutput {
                bytes: self.html.as_bytes().to_vec(),
                metadata: FetchMetadata {
                    original_url: url.to_string(),
                    final_url: url.to_string(),
                    redirect_count: 0,
                    content_type: Some("text/html; charset=utf-8".into()),
                    byte_len: self.html.len() as u64,
                },
            })
        }
    }

    fn runner(url: &'static str, html: &'static str) -> EffectRunner {
        EffectRunner::with_scraper(NovelScraper::new(Arc::new(OnePageFetcher { url, html })))
    }

    #[tokio::test]
    async fn toc_request_runs_to_a_chapter_list() {
        let runner = runner(
            "https://n.example/toc",
            r#"<div class="chapter-name"><a href="/c/1">Chương 1: Mở đầu</a></div>"#,
        );

        let (_, view) = runner
            .drive(
                AppState::new(),
                Msg::TocRequested {
                    url: "https://n.example/toc".into(),
                    item_class: "chapter-name".into(),
                },
            )
            .await;

        assert_eq!(view.toc_phase, Phase::Idle);
        assert_eq!(
            view.chapters,
            vec![ChapterRow {
                title: "Chương 1: Mở đầu".into(),
                url: "https://n.example/c/1".into(),
            }]
        );
    }

    #[tokio::test]
    async fn engine_errors_surface_as_messages() {
        let runner = runner("https://n.example/toc", "<p>empty</p>");

        let (_, view) = runner
            .drive(
                AppState::new(),
                Msg::PageRequested {
                    url: "https://n.example/other".into(),
                    title_class: String::new(),
                    content_id: String::new(),
                },
            )
            .await;

        let err = view.page_error.expect("page error");
        assert!(err.contains("status: 404"), "{err}");
        assert!(view.page.is_none());
    }
}
