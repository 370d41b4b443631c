//! Common site fixtures for query engine integration tests.

use std::path::Path;

use glossa_collection::{
    BuildCollectionResult, CollectionBuilder, CollectionIndexer, IndexReport, SiteConfig,
    SiteLayout,
};
use glossa_query::DirShardSource;
use tempfile::TempDir;

/// Category ids, assigned round-robin to generated pages.
pub const CATEGORIES: [&str; 4] = ["travel", "food", "art", "nature"];

/// A site directory plus an assets output directory.
pub struct SiteFixture {
    /// Site root.
    pub site: TempDir,
    /// Assets output root.
    pub assets: TempDir,
}

/// Everything one build run produced.
pub struct Built {
    /// Parsed site configuration.
    pub config: SiteConfig,
    /// Assembled collections.
    pub result: BuildCollectionResult,
    /// Index export report.
    pub report: IndexReport,
}

impl SiteFixture {
    /// Create a site with the given languages and content indexing enabled.
    pub fn new(languages: &[&str]) -> Self {
        let site = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();

        let enabled: Vec<String> = languages.iter().map(|l| format!("\"{l}\"")).collect();
        let categories: Vec<String> = CATEGORIES.iter().map(|c| format!("\"{c}\"")).collect();
        let toml = format!(
            "[languages]\nenabled = [{}]\n\n\
             [collection]\npages_dir = \"blog\"\n\n\
             [collection.taxonomy]\ncategories = [{}]\n\n\
             [collection.index]\ncontent = true\n",
            enabled.join(", "),
            categories.join(", ")
        );
        std::fs::write(site.path().join("site.toml"), toml).unwrap();

        for lang in languages {
            let dir = site.path().join("languages").join(lang);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(
                dir.join("contributors.json"),
                r#"{"contributors": {"default": "jill", "jill": {"name": "Jill", "url": "${pages.urls.about}"}}}"#,
            )
            .unwrap();
            std::fs::write(dir.join("taxonomy.json"), taxonomy_json(lang)).unwrap();
        }

        Self { site, assets }
    }

    /// Write one admitted page; `seq` picks its date and category.
    pub fn page(&self, rel: &str, seq: usize, name: &str, description: &str, body: &str) {
        let path = self.site.path().join("pages/blog").join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let source = format!(
            "---\nname: {name}\ndescription: {description}\ncategories: {}\n\
             date: {}\nenabled: true\n---\n{body}\n",
            category(seq),
            date(seq)
        );
        std::fs::write(path, source).unwrap();
    }

    /// Build and index the site.
    pub async fn build(&self) -> Built {
        let layout = SiteLayout::new(self.site.path());
        let config = SiteConfig::load(layout.root()).await.unwrap();
        let result = CollectionBuilder::new(&config, &layout).build().await.unwrap();
        let report = CollectionIndexer::new(&config, self.assets.path())
            .index(&result)
            .await
            .unwrap();
        Built {
            config,
            result,
            report,
        }
    }

    /// Shard source over the assets directory.
    pub fn source(&self) -> DirShardSource {
        DirShardSource::new(self.assets.path())
    }

    /// Assets root.
    pub fn assets_dir(&self) -> &Path {
        self.assets.path()
    }
}

/// Category of the `seq`-th generated page.
pub fn category(seq: usize) -> &'static str {
    CATEGORIES[seq % CATEGORIES.len()]
}

/// Strictly increasing dates, so a descending sort puts the last page first.
pub fn date(seq: usize) -> String {
    format!("2024-{:02}-{:02}", 1 + seq / 28, 1 + seq % 28)
}

fn taxonomy_json(language: &str) -> &'static str {
    match language {
        "ja" => {
            r#"{"taxonomy": {"categories": {"travel": "旅行", "food": "食べ物", "art": "アート", "nature": "自然"}}}"#
        }
        "zh-tw" => {
            r#"{"taxonomy": {"categories": {"travel": "旅遊", "food": "美食", "art": "藝術", "nature": "自然"}}}"#
        }
        _ => {
            r#"{"taxonomy": {"categories": {"travel": "Travel", "food": "Food", "art": "Art", "nature": "Nature"}}}"#
        }
    }
}
