//! Three-language build → index → load → query scenario.

use std::collections::HashSet;

use glossa_query::QueryEngine;

use crate::common::{category, SiteFixture};

const PAGES_PER_LANGUAGE: usize = 30;

/// en, ja and zh-tw with 30 pages each and one distinctive page per language.
fn multilingual_site() -> SiteFixture {
    let fixture = SiteFixture::new(&["en", "ja", "zh-tw"]);
    for seq in 0..PAGES_PER_LANGUAGE {
        if seq == 7 {
            fixture.page(
                "europe/norway/index.en.md",
                seq,
                "Norway",
                "Fjords of Norway",
                "# Norway\n\nNorway has fjords and northern lights.",
            );
        } else {
            fixture.page(
                &format!("region-{}/place-{seq}/index.en.md", seq % 3),
                seq,
                &format!("Place {seq}"),
                "A quiet place to visit",
                "Notes about the trip.",
            );
        }

        if seq == 3 {
            fixture.page("asia/tokyo/index.ja.md", seq, "東京タワー", "東京の旅行", "東京の夜景");
        } else {
            fixture.page(
                &format!("region-{}/place-{seq}/index.ja.md", seq % 3),
                seq,
                &format!("場所{seq}"),
                "旅行の記録",
                "メモ",
            );
        }

        if seq == 5 {
            fixture.page("asia/taipei/index.zh-tw.md", seq, "台北之旅", "台北的旅遊", "夜市");
        } else {
            fixture.page(
                &format!("region-{}/place-{seq}/index.zh-tw.md", seq % 3),
                seq,
                &format!("地點{seq}"),
                "旅遊紀錄",
                "筆記",
            );
        }
    }
    fixture
}

// ----------------------------------------------------------------------------
// Build
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_build_sizes_and_facets() {
    let fixture = multilingual_site();
    let built = fixture.build().await;

    for language in ["en", "ja", "zh-tw"] {
        let collection = built.result.get(language).unwrap();
        assert_eq!(collection.pages.len(), PAGES_PER_LANGUAGE, "{language}");

        let ids: Vec<u64> = collection.pages.iter().map(|p| p.id).collect();
        assert_eq!(ids, (0..PAGES_PER_LANGUAGE as u64).collect::<Vec<_>>());
    }

    let facets: Vec<(&str, usize)> = built.result.get("en").unwrap().metadata.categories
        .iter()
        .map(|f| (f.label.as_str(), f.count))
        .collect();
    assert_eq!(
        facets,
        vec![("Art", 7), ("Food", 8), ("Nature", 7), ("Travel", 8)]
    );
}

// ----------------------------------------------------------------------------
// Queries
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_norway_query_returns_single_document() {
    let fixture = multilingual_site();
    fixture.build().await;

    let engine = QueryEngine::load(&fixture.source(), Some("en")).await.unwrap();
    let pages = engine.query("norway", 0, 10).await.unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].rel_url, "europe/norway");
    assert_eq!(pages[0].name, "Norway");
    assert!(pages[0].content.as_deref().unwrap().contains("fjords"));
}

#[tokio::test]
async fn test_cjk_queries() {
    let fixture = multilingual_site();
    fixture.build().await;
    let source = fixture.source();

    let ja = QueryEngine::load(&source, Some("ja")).await.unwrap();
    let pages = ja.query("東京", 0, 10).await.unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].rel_url, "asia/tokyo");

    let zh = QueryEngine::load(&source, Some("zh-tw")).await.unwrap();
    let pages = zh.query("台北", 0, 10).await.unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].rel_url, "asia/taipei");
    assert_eq!(pages[0].author_url, "/zh-tw/about");
}

#[tokio::test]
async fn test_tag_filtered_query_fills_window() {
    let fixture = multilingual_site();
    fixture.build().await;
    let engine = QueryEngine::load(&fixture.source(), Some("en")).await.unwrap();

    let pages = engine
        .query_and_filter_by_tags("place", &["food"], 0, 5)
        .await
        .unwrap();
    assert_eq!(pages.len(), 5);
    assert!(pages.iter().all(|p| p.tags == vec!["food"]));

    let all = engine
        .query_and_filter_by_tags("place", &["food"], 0, 50)
        .await
        .unwrap();
    let expected = (0..PAGES_PER_LANGUAGE).filter(|&s| category(s) == "food").count();
    assert_eq!(all.len(), expected);

    let unique: HashSet<u64> = all.iter().map(|p| p.id).collect();
    assert_eq!(unique.len(), all.len());
}

#[tokio::test]
async fn test_tag_listing() {
    let fixture = multilingual_site();
    fixture.build().await;
    let engine = QueryEngine::load(&fixture.source(), Some("ja")).await.unwrap();

    let pages = engine.get_documents_by_tags(&["travel"], 0, 3).await.unwrap();
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|p| p.tags == vec!["travel"]));
    assert_eq!(pages[0].category_labels[0].label, "旅行");

    let ids: Vec<u64> = pages.iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_load_defaults_to_first_language() {
    let fixture = multilingual_site();
    fixture.build().await;

    let engine = QueryEngine::load(&fixture.source(), None).await.unwrap();
    assert_eq!(engine.language(), "en");
    assert_eq!(engine.collection_size(), PAGES_PER_LANGUAGE);
}
