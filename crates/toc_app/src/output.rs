use serde::Serialize;
use toc_session::{AppViewModel, PageView};

#[derive(Debug, Serialize)]
struct ChapterJson<'a> {
    index: usize,
    title: &'a str,
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct TocReport<'a> {
    fetched_at: &'a str,
    chapter_count: usize,
    chapters: Vec<ChapterJson<'a>>,
}

#[derive(Debug, Serialize)]
struct PageReport<'a> {
    fetched_at: &'a str,
    primary_title: Option<&'a str>,
    secondary_title: Option<&'a str>,
    status: &'a str,
    char_count: usize,
    word_count: usize,
    body: &'a str,
}

/// Pretty JSON for a finished ToC request, or the error it ended with.
pub fn render_toc(view: &AppViewModel, fetched_at: &str) -> anyhow::Result<String> {
    if let Some(err) = &view.toc_error {
        anyhow::bail!("{err}");
    }
    let report = TocReport {
        fetched_at,
        chapter_count: view.chapter_count,
        chapters: view
            .chapters
            .iter()
            .enumerate()
            .map(|(i, row)| ChapterJson {
                index: i + 1,
                title: &row.title,
                url: &row.url,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_page(view: &AppViewModel, fetched_at: &str) -> anyhow::Result<String> {
    if let Some(err) = &view.page_error {
        anyhow::bail!("{err}");
    }
    let Some(page) = &view.page else {
        anyhow::bail!("no page content was produced");
    };
    Ok(serde_json::to_string_pretty(&page_report(page, fetched_at))?)
}

fn page_report<'a>(page: &'a PageView, fetched_at: &'a str) -> PageReport<'a> {
    PageReport {
        fetched_at,
        primary_title: page.primary_title.as_deref(),
        secondary_title: page.secondary_title.as_deref(),
        status: &page.status_message,
        char_count: page.char_count,
        word_count: page.word_count,
        body: &page.body,
    }
}
