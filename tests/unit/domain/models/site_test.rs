// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dishstore::domain::models::menu_item::MenuItem;
use dishstore::domain::models::site::{Site, SiteStatus};

#[test]
fn test_new_site_is_pending() {
    let site = Site::new("https://example.com".to_string(), None);

    assert_eq!(site.status, SiteStatus::UrlExtractionPending);
    assert!(site.last_processed.is_none());
}

#[test]
fn test_site_transitions_record_processing_time() {
    let done = Site::new("https://example.com".to_string(), None).complete();
    assert_eq!(done.status, SiteStatus::Complete);
    assert!(done.last_processed.is_some());

    let failed = Site::new("https://example.com".to_string(), None).fail();
    assert_eq!(failed.status, SiteStatus::Failed);
    assert!(failed.last_processed.is_some());
}

#[test]
fn test_site_status_round_trip() {
    for status in [
        SiteStatus::UrlExtractionPending,
        SiteStatus::Complete,
        SiteStatus::Failed,
    ] {
        assert_eq!(status.to_string().parse::<SiteStatus>(), Ok(status));
    }
}

#[test]
fn test_menu_item_extraction_readiness() {
    let ready = MenuItem::new(
        "Laksa".to_string(),
        Some("Coconut noodle soup".to_string()),
        None,
    );
    assert!(ready.is_extraction_ready());

    let no_description = MenuItem::new("Laksa".to_string(), None, None);
    assert!(!no_description.is_extraction_ready());

    let empty_description = MenuItem::new("Laksa".to_string(), Some(String::new()), None);
    assert!(!empty_description.is_extraction_ready());
}
