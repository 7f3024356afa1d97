// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use chrono::Utc;
use dishstore::domain::models::menu_item::MenuItem;
use dishstore::domain::models::recipe_page::ExtractionStatus;
use dishstore::domain::repositories::menu_item_repository::MenuItemRepository;
use dishstore::infrastructure::database::entities::menu;
use dishstore::infrastructure::repositories::menu_item_repo_impl::MenuItemRepositoryImpl;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

/// 测试提取待办批次只含有描述非空的pending条目
#[tokio::test]
async fn test_extraction_pending_batch() {
    let app = create_test_db().await;
    let repo = MenuItemRepositoryImpl::new(app.db.clone());

    let mut described = MenuItem::new(
        "Pho".to_string(),
        Some("Beef noodle soup with star anise".to_string()),
        Some("soups".to_string()),
    );
    described.date_uploaded = Some(Utc::now().into());
    repo.create(&described).await.unwrap();

    let undescribed = MenuItem::new("Mystery Special".to_string(), None, None);
    repo.create(&undescribed).await.unwrap();

    let empty_desc = MenuItem::new("Blank".to_string(), Some(String::new()), None);
    repo.create(&empty_desc).await.unwrap();

    let pending = repo.fetch_extraction_pending(10).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].name, "Pho");
    assert!(pending[0].is_extraction_ready());

    repo.update_extraction_status(described.item_id, ExtractionStatus::Complete, None)
        .await
        .unwrap();
    assert!(repo.fetch_extraction_pending(10).await.unwrap().is_empty());

    let failed = MenuItem::new(
        "Broken".to_string(),
        Some("LLM rejected".to_string()),
        None,
    );
    repo.create(&failed).await.unwrap();
    repo.update_extraction_status(
        failed.item_id,
        ExtractionStatus::Failed,
        Some("content filter"),
    )
    .await
    .unwrap();

    let reloaded = repo.find_by_id(failed.item_id).await.unwrap().unwrap();
    assert_eq!(reloaded.llm_status, ExtractionStatus::Failed);
    assert_eq!(reloaded.llm_error_reason.as_deref(), Some("content filter"));
}

/// 测试图片回填：按old_image_id关联，补齐后再跑一遍无事可做
#[tokio::test]
async fn test_backfill_images() {
    let app = create_test_db().await;
    let repo = MenuItemRepositoryImpl::new(app.db.clone());
    let db = app.db.as_ref();

    let uploaded: chrono::DateTime<chrono::FixedOffset> = Utc::now().into();
    let image_id = Uuid::new_v4();
    menu::menu_image::ActiveModel {
        image_id: Set(image_id),
        old_image_id: Set(Some("legacy-42".to_string())),
        date_uploaded: Set(Some(uploaded)),
    }
    .insert(db)
    .await
    .unwrap();

    let mut item = MenuItem::new("Ramen".to_string(), Some("Tonkotsu".to_string()), None);
    item.old_image_id = Some("legacy-42".to_string());
    repo.create(&item).await.unwrap();

    // An item without an old image id is left alone
    let untouched = MenuItem::new("Salad".to_string(), Some("Green".to_string()), None);
    repo.create(&untouched).await.unwrap();

    assert_eq!(repo.backfill_images(100).await.unwrap(), 1);

    let filled = repo.find_by_id(item.item_id).await.unwrap().unwrap();
    assert_eq!(filled.image_id, Some(image_id));
    // timestamptz round-trips at microsecond precision
    assert_eq!(
        filled.date_uploaded.unwrap().timestamp_micros(),
        uploaded.timestamp_micros()
    );

    let skipped = repo.find_by_id(untouched.item_id).await.unwrap().unwrap();
    assert!(skipped.image_id.is_none());

    // Everything already backfilled
    assert_eq!(repo.backfill_images(100).await.unwrap(), 0);
}
