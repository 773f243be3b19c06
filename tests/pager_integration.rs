use sitesearch::{ResultsPager, SearchMode, SearchRequest, SearchResults};

/// Builds a service-shaped JSON payload with `count` hits. Even-ranked hits
/// carry a tensor highlight map, odd-ranked ones the empty-list shape.
fn service_payload(count: usize) -> SearchResults {
    let hits: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            let highlights = if i % 2 == 0 {
                serde_json::json!({"body": format!("...excerpt {}...", i)})
            } else {
                serde_json::json!([])
            };
            serde_json::json!({
                "url": format!("https://example.com/blog/post-{}", i),
                "title": format!("Post {}", i),
                "body": format!("Body of post {}", i),
                "scraped_from": "blogs",
                "_id": format!("doc-{}", i),
                "_score": 1.0 - i as f64 / 100.0,
                "_highlights": highlights,
            })
        })
        .collect();

    let payload = serde_json::json!({
        "hits": hits,
        "processingTimeMs": 43,
        "query": "ignored by the client",
    });
    serde_json::from_value(payload).expect("payload should decode")
}

#[test]
fn test_browse_25_hits_end_to_end() {
    let request = SearchRequest::new("international payment fees");
    assert_eq!(request.mode, SearchMode::Tensor);

    let results = service_payload(25);
    assert_eq!(results.processing_time_ms, Some(43));

    let mut pager = ResultsPager::new();
    pager.install(results);

    // First page: ten hits, starting at the top
    assert_eq!(pager.current_page(), Some(0));
    assert_eq!(pager.visible_slice().len(), 10);
    assert_eq!(pager.visible_slice()[0].title, "Post 0");

    // Two pages forward lands on the five-hit tail
    pager.next();
    pager.next();
    assert_eq!(pager.current_page(), Some(2));
    let tail = pager.visible_slice();
    assert_eq!(tail.len(), 5);
    assert_eq!(tail[0].title, "Post 20");

    // The cursor is pinned at the last page
    pager.next();
    assert_eq!(pager.current_page(), Some(2));
    assert_eq!(pager.visible_slice().len(), 5);

    // And walks back to the first page, no further
    pager.previous();
    pager.previous();
    pager.previous();
    assert_eq!(pager.current_page(), Some(0));
    assert_eq!(pager.page_label().as_deref(), Some("1"));
}

#[test]
fn test_highlights_resolve_per_mode_across_a_page() {
    let results = service_payload(10);
    let mut pager = ResultsPager::new();
    pager.install(results);

    let page = pager.visible_slice();
    for (i, hit) in page.iter().enumerate() {
        let tensor = hit.highlights.resolve(SearchMode::Tensor);
        let lexical = hit.highlights.resolve(SearchMode::Lexical);
        assert_eq!(lexical, None);
        if i % 2 == 0 {
            assert_eq!(tensor.unwrap(), format!("...excerpt {}...", i));
        } else {
            assert_eq!(tensor, None);
        }
    }
}

#[test]
fn test_empty_result_set_is_distinct_from_no_query() {
    let mut pager = ResultsPager::new();
    assert!(!pager.has_query());
    assert!(!pager.is_empty());

    pager.install(service_payload(0));
    assert!(pager.has_query());
    assert!(pager.is_empty());
    assert!(pager.visible_slice().is_empty());
    assert_eq!(pager.page_label(), None);
}
