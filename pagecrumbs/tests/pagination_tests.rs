//! End-to-end tests for link building and rendering
//!
//! Tests cover:
//! - Crumb selection on a 20-page listing (first, middle, last page)
//! - Disabled controls at both ends of the range
//! - Range and configuration errors
//! - Full HTML output for a small listing
//! - Rel prev/next hrefs and canonical URLs
//! - One state per thread over a shared configuration

use pagecrumbs::{
    Error, HtmlRenderer, JsonRenderer, LinkDescriptor, LinkKind, PaginationConfig,
    PaginationState, Rel,
};
use std::sync::Arc;
use std::thread;

/// Install a test-writer subscriber so debug logs show up with --nocapture
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_test_writer()
        .try_init();
}

fn listing(current: i64, total: u64) -> PaginationState {
    let mut state = PaginationState::new();
    state
        .set_current(current)
        .set_total(total)
        .set_items_per_page(10)
        .set_max_crumbs(5)
        .set_request_path("/results");
    state
}

fn crumb_pages(links: &[LinkDescriptor]) -> Vec<i64> {
    links
        .iter()
        .filter(|l| l.kind.is_crumb())
        .filter_map(|l| l.page_number)
        .collect()
}

fn link(links: &[LinkDescriptor], kind: LinkKind) -> &LinkDescriptor {
    links
        .iter()
        .find(|l| l.kind == kind)
        .expect("link kind should be present")
}

// =============================================================================
// Crumb windows on a 20-page listing
// =============================================================================

#[test]
fn test_first_page_of_twenty() {
    init_tracing();
    let state = listing(1, 200);
    assert_eq!(state.page_count().unwrap(), 20);

    let window = state.crumb_window().unwrap();
    assert_eq!(window.leading_count, 0);
    assert_eq!(window.trailing_count, 4);

    let links = state.build_links().unwrap();
    assert_eq!(crumb_pages(&links), vec![1, 2, 3, 4, 5]);
    assert_eq!(link(&links, LinkKind::Current).page_number, Some(1));
}

#[test]
fn test_middle_page_of_twenty() {
    init_tracing();
    let state = listing(10, 200);

    let window = state.crumb_window().unwrap();
    assert_eq!((window.leading_count, window.trailing_count), (2, 2));

    let links = state.build_links().unwrap();
    assert_eq!(crumb_pages(&links), vec![8, 9, 10, 11, 12]);
}

#[test]
fn test_last_page_of_twenty() {
    init_tracing();
    let state = listing(20, 200);

    let window = state.crumb_window().unwrap();
    assert_eq!((window.leading_count, window.trailing_count), (4, 0));

    let links = state.build_links().unwrap();
    assert_eq!(crumb_pages(&links), vec![16, 17, 18, 19, 20]);
}

#[test]
fn test_window_fills_budget_for_every_position() {
    for total in [1u64, 9, 10, 11, 35, 99, 200, 1000] {
        for max_crumbs in 1..=9u32 {
            let mut state = listing(1, total);
            state.set_max_crumbs(max_crumbs);
            let pages = state.page_count().unwrap();

            for current in 1..=pages {
                state.set_current(current);
                let window = state.crumb_window().unwrap();
                assert_eq!(
                    window.leading_count + window.trailing_count + 1,
                    pages.min(i64::from(max_crumbs)),
                    "total={} max_crumbs={} current={}",
                    total,
                    max_crumbs,
                    current
                );
            }
        }
    }
}

// =============================================================================
// Controls at the edges
// =============================================================================

#[test]
fn test_edges_disable_controls() {
    let links = listing(1, 200).build_links().unwrap();
    for kind in [LinkKind::First, LinkKind::Previous] {
        let l = link(&links, kind);
        assert!(l.disabled);
        assert_eq!(l.href, "#");
    }
    for kind in [LinkKind::Next, LinkKind::Last] {
        assert!(!link(&links, kind).disabled);
    }

    let links = listing(20, 200).build_links().unwrap();
    for kind in [LinkKind::Next, LinkKind::Last] {
        let l = link(&links, kind);
        assert!(l.disabled);
        assert_eq!(l.href, "#");
    }
    assert_eq!(link(&links, LinkKind::First).href, "/results?page=1");
    assert_eq!(link(&links, LinkKind::Previous).href, "/results?page=19");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_missing_configuration() {
    let mut state = PaginationState::new();
    assert!(matches!(
        state.build_links().unwrap_err(),
        Error::MissingCurrentPage
    ));

    state.set_current(1);
    assert!(matches!(state.build_links().unwrap_err(), Error::MissingTotal));
}

#[test]
fn test_out_of_range_pages() {
    assert!(matches!(
        listing(0, 200).build_links().unwrap_err(),
        Error::PageBelowRange { current: 0 }
    ));
    assert!(matches!(
        listing(25, 200).build_links().unwrap_err(),
        Error::PageAboveRange {
            current: 25,
            page_count: 20
        }
    ));
    assert!(listing(25, 200).render(&HtmlRenderer).is_err());
}

#[test]
fn test_empty_listing_renders_nothing() {
    let state = listing(1, 0);
    assert_eq!(state.page_count().unwrap(), 0);
    assert!(state.build_links().unwrap().is_empty());
    assert_eq!(state.render(&HtmlRenderer).unwrap(), "");
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_full_html_for_small_listing() {
    let state = listing(2, 25);
    let html = state.render(&HtmlRenderer).unwrap();

    let expected = concat!(
        r#"<ul class="clearfix pagination">"#,
        r#"<li class="first"><a href="/results?page=1">« First</a></li>"#,
        r#"<li class="previous"><a href="/results?page=1">« Previous</a></li>"#,
        r#"<li class="number"><a href="/results?page=1" data-pagenumber="1">1</a></li>"#,
        r#"<li class="number active"><a href="/results?page=2" data-pagenumber="2">2</a></li>"#,
        r#"<li class="number"><a href="/results?page=3" data-pagenumber="3">3</a></li>"#,
        r#"<li class="next"><a href="/results?page=3">Next »</a></li>"#,
        r#"<li class="last"><a href="/results?page=3">Last »»</a></li>"#,
        "</ul>"
    );
    assert_eq!(html, expected);
}

#[test]
fn test_clean_mode_html() {
    let mut state = listing(1, 25);
    state.clean().set_classes(["pager"]);
    let html = state.render(&HtmlRenderer).unwrap();

    let expected = concat!(
        r#"<ul class="pager">"#,
        r##"<li class="first disabled"><a href="#">« First</a></li>"##,
        r##"<li class="previous disabled"><a href="#">« Previous</a></li>"##,
        r#"<li class="next"><a href="/results?page=2">Next »</a></li>"#,
        r#"<li class="last"><a href="/results?page=3">Last »»</a></li>"#,
        "</ul>"
    );
    assert_eq!(html, expected);
}

#[test]
fn test_json_render() {
    let json = listing(3, 25).render(&JsonRenderer).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let links = value["links"].as_array().unwrap();
    assert_eq!(links.len(), 7);
    assert_eq!(links[4]["kind"], "current");
    assert_eq!(links[4]["page_number"], 3);
    assert_eq!(links[6]["disabled"], true);
}

// =============================================================================
// SEO helpers
// =============================================================================

#[test]
fn test_rel_prev_next() {
    assert!(listing(1, 10).rel_prev_next_links().unwrap().is_empty());

    let rels = listing(1, 200).rel_prev_next_links().unwrap();
    assert_eq!(rels.len(), 1);
    assert_eq!(rels[0].rel, Rel::Next);

    let rels = listing(5, 200).rel_prev_next_links().unwrap();
    assert_eq!(
        HtmlRenderer.render_rel_links(&rels),
        r#"<link rel="prev" href="/results?page=4"><link rel="next" href="/results?page=6">"#
    );
}

#[test]
fn test_canonical_urls() {
    let host = "https://shop.example";
    assert_eq!(
        listing(1, 200)
            .canonical_url("/results?sort=price", host)
            .unwrap(),
        "https://shop.example/results"
    );
    assert_eq!(
        listing(6, 200)
            .canonical_url("/results?sort=price&page=6", host)
            .unwrap(),
        "https://shop.example/results?page=6"
    );
}

// =============================================================================
// Concurrency: shared defaults, one state per request
// =============================================================================

#[test]
fn test_state_per_thread_from_shared_defaults() {
    let defaults = Arc::new(PaginationConfig::default());

    let handles: Vec<_> = (1..=8i64)
        .map(|current| {
            let defaults = Arc::clone(&defaults);
            thread::spawn(move || {
                let mut state = PaginationState::from_config((*defaults).clone());
                state.set_current(current).set_total(80);
                crumb_pages(&state.build_links().unwrap())
            })
        })
        .collect();

    let results: Vec<Vec<i64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], vec![1, 2, 3, 4, 5]);
    assert_eq!(results[3], vec![2, 3, 4, 5, 6]);
    assert_eq!(results[7], vec![4, 5, 6, 7, 8]);
}
