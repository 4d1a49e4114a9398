//! Asynchronous asset phase.
//!
//! All text assets for a level are fetched concurrently and joined before
//! the scene is built. Nothing in the simulation performs I/O.

use std::collections::HashMap;

use futures::future::{self, BoxFuture};
use serde::{Deserialize, Serialize};

use crate::assets::level::LevelLegend;
use crate::assets::manifest::AssetManifest;
use crate::error::EngineError;

/// Where text assets come from (HTTP fetch, disk, embedded strings...).
pub trait AssetSource {
    fn load_text<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<String, EngineError>>;
}

/// Paths of the assets making up one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPaths {
    pub manifest: String,
    pub legend: String,
    pub level: String,
}

impl AssetPaths {
    /// Conventional layout: `<root>/manifest.json`, `<root>/legend.json`,
    /// `<root>/levels/<name>.lvl`.
    pub fn for_level(root: &str, name: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            manifest: format!("{}/manifest.json", root),
            legend: format!("{}/legend.json", root),
            level: format!("{}/levels/{}.lvl", root, name),
        }
    }
}

/// Everything needed to build a play scene, fully parsed.
#[derive(Debug, Clone)]
pub struct LevelAssets {
    pub manifest: AssetManifest,
    pub legend: LevelLegend,
    pub level_text: String,
}

impl LevelAssets {
    /// Parse already-fetched asset texts.
    pub fn from_sources(
        manifest_json: &str,
        legend_json: &str,
        level_text: impl Into<String>,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            manifest: AssetManifest::from_json(manifest_json)?,
            legend: LevelLegend::from_json(legend_json)?,
            level_text: level_text.into(),
        })
    }
}

/// Fetch manifest, legend and level text concurrently, then parse them.
pub async fn load_level_assets(
    source: &dyn AssetSource,
    paths: &AssetPaths,
) -> Result<LevelAssets, EngineError> {
    let (manifest, legend, level) = futures::try_join!(
        source.load_text(&paths.manifest),
        source.load_text(&paths.legend),
        source.load_text(&paths.level),
    )?;
    log::info!(
        "loaded assets {}, {}, {}",
        paths.manifest,
        paths.legend,
        paths.level
    );
    LevelAssets::from_sources(&manifest, &legend, level)
}

/// In-memory asset source, for embedded games and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }
}

impl AssetSource for MemorySource {
    fn load_text<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<String, EngineError>> {
        let result = self.files.get(path).cloned().ok_or_else(|| EngineError::Asset {
            path: path.to_string(),
            reason: "not found".to_string(),
        });
        Box::pin(future::ready(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn source() -> MemorySource {
        MemorySource::new()
            .with("assets/manifest.json", r#"{ "atlases": [] }"#)
            .with("assets/legend.json", r##"{ "tiles": { "#": { "kind": "ground", "solid": true } } }"##)
            .with("assets/levels/1-1.lvl", "####\n")
    }

    #[test]
    fn conventional_paths() {
        let paths = AssetPaths::for_level("assets/", "1-1");
        assert_eq!(paths.manifest, "assets/manifest.json");
        assert_eq!(paths.level, "assets/levels/1-1.lvl");
    }

    #[test]
    fn loads_all_assets() {
        let paths = AssetPaths::for_level("assets", "1-1");
        let assets = block_on(load_level_assets(&source(), &paths)).unwrap();
        assert!(assets.legend.tiles[&'#'].solid);
        assert_eq!(assets.level_text, "####\n");
    }

    #[test]
    fn missing_file_fails_the_whole_load() {
        let paths = AssetPaths::for_level("assets", "1-2");
        match block_on(load_level_assets(&source(), &paths)) {
            Err(EngineError::Asset { path, .. }) => assert_eq!(path, "assets/levels/1-2.lvl"),
            other => panic!("expected asset error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn malformed_legend_is_a_json_error() {
        let src = source().with("assets/legend.json", "{ nope");
        let paths = AssetPaths::for_level("assets", "1-1");
        assert!(matches!(
            block_on(load_level_assets(&src, &paths)),
            Err(EngineError::Json(_))
        ));
    }
}
