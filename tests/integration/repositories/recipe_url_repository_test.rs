// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use dishstore::domain::models::recipe_page::{CrawlContent, CrawlStatus, ExtractionStatus};
use dishstore::domain::repositories::recipe_url_repository::{DiscoveredUrl, RecipeUrlRepository};
use dishstore::domain::repositories::RepositoryError;
use dishstore::infrastructure::repositories::recipe_url_repo_impl::RecipeUrlRepositoryImpl;

fn discovered(url: &str) -> DiscoveredUrl {
    DiscoveredUrl {
        url: url.to_string(),
        original_url: format!("{}/", url.to_uppercase()),
        site_id: None,
        sitemap_url: Some("https://example.com/sitemap.xml".to_string()),
    }
}

/// 测试批量插入跳过重复URL并分配randnum
#[tokio::test]
async fn test_insert_discovered_skips_duplicates() {
    let app = create_test_db().await;
    let repo = RecipeUrlRepositoryImpl::new(app.db.clone());

    let batch = vec![
        discovered("https://example.com/recipes/a"),
        discovered("https://example.com/recipes/b"),
    ];
    assert_eq!(repo.insert_discovered(&batch).await.unwrap(), 2);

    // Same batch again: every URL conflicts, nothing inserted
    assert_eq!(repo.insert_discovered(&batch).await.unwrap(), 0);

    let page = repo
        .find_by_url("https://example.com/recipes/a")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.status, CrawlStatus::CrawlPending);
    assert!(page.randnum.is_some_and(|n| (0..=10).contains(&n)));
    assert!(repo.exists(page.id).await.unwrap());
}

/// 测试抓取与提取生命周期：pending → crawled → extraction complete
#[tokio::test]
async fn test_crawl_and_extraction_lifecycle() {
    let app = create_test_db().await;
    let repo = RecipeUrlRepositoryImpl::new(app.db.clone());

    repo.insert_discovered(&[discovered("https://example.com/recipes/soup")])
        .await
        .unwrap();

    let pending = repo.fetch_crawl_pending(10).await.unwrap();
    assert_eq!(pending.len(), 1);
    let page_id = pending[0].id;

    let content = CrawlContent {
        parsed_text: Some("Chop the onions.".to_string()),
        parsed_md: Some("# Soup".to_string()),
        title: Some("Onion Soup".to_string()),
        description: Some("A classic.".to_string()),
        is_recipe: Some(true),
        proxy_used: Some("datacenter".to_string()),
    };
    let crawled = repo.save_crawl_success(page_id, content).await.unwrap();
    assert_eq!(crawled.status, CrawlStatus::Crawled);
    assert!(crawled.last_crawled.is_some());

    // No longer crawl-pending, but extraction-pending now
    assert!(repo.fetch_crawl_pending(10).await.unwrap().is_empty());
    let extractable = repo.fetch_extraction_pending(10).await.unwrap();
    assert_eq!(extractable.len(), 1);
    assert!(extractable[0].is_extraction_ready());

    repo.update_extraction_status(page_id, ExtractionStatus::Complete, None)
        .await
        .unwrap();
    assert!(repo.fetch_extraction_pending(10).await.unwrap().is_empty());

    // A second crawl of the same page violates the lifecycle
    let again = repo
        .save_crawl_success(page_id, CrawlContent::default())
        .await;
    assert!(matches!(again, Err(RepositoryError::Domain(_))));
}

/// 测试抓取失败路径与randnum抽样
#[tokio::test]
async fn test_crawl_failure_and_sampling() {
    let app = create_test_db().await;
    let repo = RecipeUrlRepositoryImpl::new(app.db.clone());

    let batch: Vec<DiscoveredUrl> = (0..20)
        .map(|i| discovered(&format!("https://example.com/recipes/{}", i)))
        .collect();
    repo.insert_discovered(&batch).await.unwrap();

    let pending = repo.fetch_crawl_pending(1).await.unwrap();
    let failed = repo
        .save_crawl_failure(pending[0].id, "fetch_failed")
        .await
        .unwrap();
    assert_eq!(failed.status, CrawlStatus::CrawlFailed);
    assert_eq!(failed.failure_reason.as_deref(), Some("fetch_failed"));
    assert!(failed.last_attempt.is_some());

    // Sampling respects the randnum bound
    let sampled = repo.sample(5, 100).await.unwrap();
    assert!(sampled.iter().all(|p| p.randnum.unwrap_or(11) <= 5));

    // Unknown page id surfaces NotFound
    let missing = repo
        .update_extraction_status(uuid::Uuid::new_v4(), ExtractionStatus::Failed, Some("x"))
        .await;
    assert!(matches!(missing, Err(RepositoryError::NotFound)));
}
