// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dishstore::domain::models::recipe_page::{
    CrawlContent, CrawlStatus, ExtractionStatus, RecipePage,
};

fn new_page() -> RecipePage {
    RecipePage::new(
        "https://example.com/recipes/noodles".to_string(),
        Some("https://Example.com/recipes/noodles/".to_string()),
        Some(7),
        Some("https://example.com/sitemap.xml".to_string()),
    )
}

#[test]
fn test_status_strings_round_trip() {
    for status in [
        CrawlStatus::CrawlPending,
        CrawlStatus::Crawled,
        CrawlStatus::CrawlFailed,
    ] {
        assert_eq!(status.to_string().parse::<CrawlStatus>(), Ok(status));
    }

    for status in [
        ExtractionStatus::Pending,
        ExtractionStatus::Complete,
        ExtractionStatus::Failed,
    ] {
        assert_eq!(status.to_string().parse::<ExtractionStatus>(), Ok(status));
    }

    assert!("crawling".parse::<CrawlStatus>().is_err());
}

#[test]
fn test_mark_crawled_happy_path() {
    // Given: 等待抓取的页面
    let page = new_page();
    assert_eq!(page.status, CrawlStatus::CrawlPending);

    // When: 记录抓取成功
    let crawled = page
        .mark_crawled(CrawlContent {
            parsed_text: Some("Boil water.".to_string()),
            parsed_md: None,
            title: Some("Noodles".to_string()),
            description: None,
            is_recipe: Some(true),
            proxy_used: Some("premium".to_string()),
        })
        .unwrap();

    // Then: 状态推进且内容写入
    assert_eq!(crawled.status, CrawlStatus::Crawled);
    assert!(crawled.last_crawled.is_some());
    assert!(crawled.is_extraction_ready());
}

#[test]
fn test_mark_crawled_rejects_second_crawl() {
    let crawled = new_page().mark_crawled(CrawlContent::default()).unwrap();

    assert!(crawled.mark_crawled(CrawlContent::default()).is_err());
}

#[test]
fn test_mark_crawl_failed_records_reason() {
    let failed = new_page()
        .mark_crawl_failed("fetch_failed".to_string())
        .unwrap();

    assert_eq!(failed.status, CrawlStatus::CrawlFailed);
    assert_eq!(failed.failure_reason.as_deref(), Some("fetch_failed"));
    assert!(failed.last_attempt.is_some());
    assert!(!failed.is_extraction_ready());
}

#[test]
fn test_extraction_ready_requires_recipe_flag_and_text() {
    let crawled = new_page()
        .mark_crawled(CrawlContent {
            parsed_text: None,
            is_recipe: Some(true),
            ..CrawlContent::default()
        })
        .unwrap();
    // 没有正文不可提取
    assert!(!crawled.is_extraction_ready());

    let not_a_recipe = new_page()
        .mark_crawled(CrawlContent {
            parsed_text: Some("About us".to_string()),
            is_recipe: Some(false),
            ..CrawlContent::default()
        })
        .unwrap();
    assert!(!not_a_recipe.is_extraction_ready());
}
