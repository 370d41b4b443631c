//! Index loading, pagination and failure paths.

use std::collections::BTreeSet;

use glossa_collection::{shard_path, RuntimeConfig};
use glossa_query::{QueryEngine, QueryOptions};

use crate::common::SiteFixture;

fn english_site(pages: usize) -> SiteFixture {
    let fixture = SiteFixture::new(&["en"]);
    for seq in 0..pages {
        fixture.page(
            &format!("posts/post-{seq}/index.en.md"),
            seq,
            &format!("Post {seq}"),
            "Weekly notes",
            "Short body.",
        );
    }
    fixture
}

// ----------------------------------------------------------------------------
// Pagination
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_get_documents_first_window() {
    let fixture = english_site(25);
    let built = fixture.build().await;
    let engine = QueryEngine::load(&fixture.source(), Some("en")).await.unwrap();

    let pages = engine.get_documents(0, 10).await.unwrap();
    let ids: Vec<u64> = pages.iter().map(|p| p.id).collect();
    assert_eq!(ids, (0..10).collect::<Vec<u64>>());

    let expected = &built.result.get("en").unwrap().pages[..10];
    assert_eq!(pages, expected);
    assert_eq!(pages[0].name, "Post 24");
}

#[tokio::test]
async fn test_get_documents_near_end() {
    let fixture = english_site(25);
    fixture.build().await;
    let engine = QueryEngine::load(&fixture.source(), Some("en")).await.unwrap();

    assert_eq!(engine.get_documents(20, 10).await.unwrap().len(), 5);
    assert!(engine.get_documents(25, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_head_pages_match_first_window() {
    let fixture = english_site(12);
    let built = fixture.build().await;
    let engine = QueryEngine::load(&fixture.source(), Some("en")).await.unwrap();

    let metadata = &built.result.get("en").unwrap().metadata;
    let first = engine.get_documents(0, metadata.pagination_size).await.unwrap();
    assert_eq!(first, metadata.head_pages);
}

// ----------------------------------------------------------------------------
// Runtime config and shards
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_runtime_config_lists_written_shards() {
    let fixture = english_site(3);
    let built = fixture.build().await;
    let runtime = RuntimeConfig::read(fixture.assets_dir()).await.unwrap();

    let listed: BTreeSet<String> = runtime
        .index_keys("en")
        .iter()
        .map(|k| format!("{k}.json"))
        .collect();
    let written: BTreeSet<String> = std::fs::read_dir(fixture.assets_dir().join("collection/en"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    assert_eq!(listed, written);
    assert_eq!(runtime.index_keys("en"), built.report.language_index_keys["en"].as_slice());
    assert_eq!(runtime.min_query_length, built.config.collection.search.min_query_length);
}

#[tokio::test]
async fn test_missing_shard_fails_load() {
    let fixture = english_site(3);
    fixture.build().await;
    std::fs::remove_file(shard_path(fixture.assets_dir(), "en", "description.map")).unwrap();

    let err = QueryEngine::load(&fixture.source(), Some("en")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_corrupt_shard_fails_load() {
    let fixture = english_site(3);
    fixture.build().await;
    std::fs::write(shard_path(fixture.assets_dir(), "en", "tag"), "not json").unwrap();

    assert!(QueryEngine::load(&fixture.source(), Some("en")).await.is_err());
}

#[tokio::test]
async fn test_unlisted_language_loads_empty_index() {
    let fixture = english_site(3);
    fixture.build().await;

    let engine = QueryEngine::load(&fixture.source(), Some("fr")).await.unwrap();
    assert_eq!(engine.collection_size(), 0);
    assert!(engine.query("post", 0, 10).await.unwrap().is_empty());
    assert!(engine.get_documents(0, 10).await.unwrap().is_empty());
}

// ----------------------------------------------------------------------------
// Query gate
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_min_query_length_override() {
    let fixture = english_site(3);
    fixture.build().await;
    let engine = QueryEngine::load(&fixture.source(), Some("en")).await.unwrap();

    assert_eq!(engine.query("weekly", 0, 10).await.unwrap().len(), 3);

    let strict = QueryOptions::window(0, 10).with_min_query_length(7);
    assert!(engine.query_with("weekly", &strict).await.unwrap().is_empty());
}
