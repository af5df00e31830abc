use toc_session::{update, AppState, ChapterRow, Effect, Msg, PageResult, Phase};

fn init_logging() {
    toc_logging::initialize_for_tests();
}

fn request_toc(state: AppState, url: &str) -> (AppState, u64) {
    let (state, effects) = update(
        state,
        Msg::TocRequested {
            url: url.to_string(),
            item_class: " chapter-name ".to_string(),
        },
    );
    let request_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchToc { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("fetch toc effect");
    (state, request_id)
}

fn row(title: &str, url: &str) -> ChapterRow {
    ChapterRow {
        title: title.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn toc_request_emits_trimmed_fetch_effect() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::TocRequested {
            url: "  https://n.example/toc \n".to_string(),
            item_class: " chapter-name ".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::FetchToc {
            request_id: 1,
            url: "https://n.example/toc".to_string(),
            item_class: "chapter-name".to_string(),
        }]
    );
    assert_eq!(state.view().toc_phase, Phase::Loading);
}

#[test]
fn blank_url_is_rejected_without_effects() {
    let (state, effects) = update(
        AppState::new(),
        Msg::TocRequested {
            url: "   ".to_string(),
            item_class: String::new(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.toc_phase, Phase::Idle);
    assert_eq!(view.toc_error.as_deref(), Some("Please enter a valid URL."));
}

#[test]
fn completed_toc_is_shown_with_count() {
    let (state, request_id) = request_toc(AppState::new(), "https://n.example/toc");
    let (state, effects) = update(
        state,
        Msg::TocCompleted {
            request_id,
            result: Ok(vec![
                row("Chương 1", "https://n.example/c/1"),
                row("Chapter 2", "https://n.example/c/2"),
            ]),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.toc_phase, Phase::Idle);
    assert_eq!(view.chapter_count, 2);
    assert_eq!(view.chapters[1].title, "Chapter 2");
    assert_eq!(view.toc_error, None);
}

#[test]
fn stale_completion_does_not_overwrite_newer_request() {
    let (state, first) = request_toc(AppState::new(), "https://n.example/a");
    let (state, second) = request_toc(state, "https://n.example/b");
    assert!(second > first);

    let (state, _) = update(
        state,
        Msg::TocCompleted {
            request_id: second,
            result: Ok(vec![row("B", "https://n.example/b/1")]),
        },
    );
    let before = state.clone();
    let (state, effects) = update(
        state,
        Msg::TocCompleted {
            request_id: first,
            result: Err("late failure".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state, before);
    let view = state.view();
    assert_eq!(view.chapters, vec![row("B", "https://n.example/b/1")]);
    assert_eq!(view.toc_error, None);
}

#[test]
fn failed_request_replaces_previous_chapters() {
    let (state, first) = request_toc(AppState::new(), "https://n.example/a");
    let (state, _) = update(
        state,
        Msg::TocCompleted {
            request_id: first,
            result: Ok(vec![row("A", "https://n.example/a/1")]),
        },
    );
    let (state, second) = request_toc(state, "https://n.example/b");
    assert!(state.view().chapters.is_empty());

    let (state, _) = update(
        state,
        Msg::TocCompleted {
            request_id: second,
            result: Err("no elements found with class 'chapter-name'".to_string()),
        },
    );
    let view = state.view();
    assert!(view.chapters.is_empty());
    assert_eq!(
        view.toc_error.as_deref(),
        Some("no elements found with class 'chapter-name'")
    );
}

#[test]
fn page_flow_is_independent_and_cleared_on_request() {
    let (state, effects) = update(
        AppState::new(),
        Msg::PageRequested {
            url: "https://n.example/c/7".to_string(),
            title_class: "book-title".to_string(),
            content_id: "bookContentBody".to_string(),
        },
    );
    let request_id = match effects.as_slice() {
        [Effect::FetchPage { request_id, .. }] => *request_id,
        other => panic!("unexpected effects: {other:?}"),
    };
    assert_eq!(state.view().page_phase, Phase::Loading);
    assert_eq!(state.view().toc_phase, Phase::Idle);

    let (state, _) = update(
        state,
        Msg::PageCompleted {
            request_id,
            result: Ok(PageResult {
                primary_title: Some("Tiên Nghịch".to_string()),
                secondary_title: None,
                status_message: "Fetched primary title: \"Tiên Nghịch\".".to_string(),
                body: "Đoạn một.\n\nĐoạn hai.".to_string(),
            }),
        },
    );

    let page = state.view().page.expect("page view");
    assert_eq!(page.primary_title.as_deref(), Some("Tiên Nghịch"));
    assert_eq!(page.word_count, 4);
    assert_eq!(page.char_count, "Đoạn một.\n\nĐoạn hai.".chars().count());
}

#[test]
fn clear_drops_results_and_ignores_in_flight_completion() {
    let (state, first) = request_toc(AppState::new(), "https://n.example/a");
    let (state, _) = update(
        state,
        Msg::TocCompleted {
            request_id: first,
            result: Ok(vec![row("A", "https://n.example/a/1")]),
        },
    );
    let (state, in_flight) = request_toc(state, "https://n.example/b");
    let (state, _) = update(state, Msg::Cleared);
    let (state, _) = update(
        state,
        Msg::TocCompleted {
            request_id: in_flight,
            result: Ok(vec![row("B", "https://n.example/b/1")]),
        },
    );

    let view = state.view();
    assert!(view.chapters.is_empty());
    assert_eq!(view.toc_phase, Phase::Idle);
    assert_eq!(view.toc_error, None);
}
