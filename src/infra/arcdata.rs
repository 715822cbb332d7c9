#![allow(dead_code)]

//! Asynchronous client for the community arcraiders-data repository.
//!
//! - Downloads the nine hideout module files and projects.json.
//! - Serves from the disk cache while fresh; falls back to a stale copy
//!   when the network is down.

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::domain::{ModuleRecord, ProjectRecord};
use crate::infra::cache::{load_cached, save_cached, CachedFile};

const RAW_BASE_URL: &str = "https://raw.githubusercontent.com/RaidTheory/arcraiders-data/main/";
const USER_AGENT: &str = "arc-safe-recycle/0.1.0";

/// Hideout module files published by the data repo.
pub const HIDEOUT_FILES: [&str; 9] = [
    "equipment_bench",
    "explosives_bench",
    "med_station",
    "refiner",
    "scrappy",
    "stash",
    "utility_bench",
    "weapon_bench",
    "workbench",
];

/// Relative cache/URL path of projects.json.
const PROJECTS_FILE: &str = "projects";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected data shape: {0}")]
    Shape(String),
}

/// Where a file came from on this run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
    Stale,
}

/// Per-file provenance, surfaced on the settings page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceReport {
    pub name: String,
    pub status: CacheStatus,
    pub age: String,
}

/// Everything one load pass produces.
#[derive(Clone, Debug, Default)]
pub struct GameData {
    pub modules: Vec<ModuleRecord>,
    pub projects: Vec<ProjectRecord>,
    pub reports: Vec<SourceReport>,
}

impl GameData {
    pub fn any_stale(&self) -> bool {
        self.reports
            .iter()
            .any(|report| report.status == CacheStatus::Stale)
    }
}

#[derive(Clone)]
pub struct ArcDataClient {
    http: Client,
    base_url: Url,
}

impl ArcDataClient {
    pub fn new() -> Result<Self, DataError> {
        Self::with_base_url(RAW_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, DataError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    /// Loads modules and projects, cache-first. One pass at startup; the
    /// records stay in memory for index rebuilds afterwards.
    pub async fn load_game_data(&self) -> Result<GameData, DataError> {
        let mut data = GameData::default();

        for name in HIDEOUT_FILES {
            let rel = format!("hideout/{name}");
            let (value, report) = self.ensure_file(&rel).await?;
            data.modules.push(parse_module(&rel, value)?);
            data.reports.push(report);
        }

        let (value, report) = self.ensure_file(PROJECTS_FILE).await?;
        data.projects = parse_projects(value)?;
        data.reports.push(report);

        println!(
            "[data] Loaded {} modules and {} project roots",
            data.modules.len(),
            data.projects.len()
        );
        Ok(data)
    }

    /// One file, cache-first: fresh cache entry wins, then a download, then
    /// a stale cache entry if the download failed.
    async fn ensure_file(&self, rel: &str) -> Result<(Value, SourceReport), DataError> {
        let disk = load_cached(rel);

        if let Some(entry) = disk.as_ref().filter(|entry| !entry.is_expired()) {
            let report = SourceReport {
                name: rel.to_string(),
                status: CacheStatus::Cached,
                age: entry.age_string(),
            };
            return Ok((entry.data.clone(), report));
        }

        match self.fetch_json(rel).await {
            Ok(value) => {
                let entry = CachedFile::new(value.clone());
                if let Err(e) = save_cached(rel, &entry) {
                    println!("[data] Warning: failed to cache {rel}: {e}");
                }
                let report = SourceReport {
                    name: rel.to_string(),
                    status: CacheStatus::Fresh,
                    age: entry.age_string(),
                };
                Ok((value, report))
            }
            Err(error) => {
                if let Some(entry) = disk {
                    println!("[data] Download of {rel} failed ({error}); using stale cache");
                    let report = SourceReport {
                        name: rel.to_string(),
                        status: CacheStatus::Stale,
                        age: entry.age_string(),
                    };
                    return Ok((entry.data, report));
                }
                Err(error)
            }
        }
    }

    async fn fetch_json(&self, rel: &str) -> Result<Value, DataError> {
        let url = self.base_url.join(&format!("{rel}.json"))?;
        println!("[data] Fetching {url}");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// A hideout file holds exactly one module object. Sparse fields default;
/// a different top-level shape is a hard error the caller reports.
pub fn parse_module(name: &str, value: Value) -> Result<ModuleRecord, DataError> {
    if !value.is_object() {
        return Err(DataError::Shape(format!("{name}.json is not an object")));
    }
    serde_json::from_value(value).map_err(|e| DataError::Shape(format!("{name}.json: {e}")))
}

/// projects.json holds an array of project roots. Corrupt elements are
/// skipped; a non-array top level is a hard error.
pub fn parse_projects(value: Value) -> Result<Vec<ProjectRecord>, DataError> {
    let Value::Array(entries) = value else {
        return Err(DataError::Shape("projects.json is not a list".to_string()));
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::domain::pick_display_name;

    #[test]
    fn module_files_parse_with_sparse_fields() {
        let module = parse_module("stash", json!({"name": {"en": "Stash"}})).unwrap();
        assert_eq!(pick_display_name(&module.name), "Stash");
        assert_eq!(module.max_level, 0);
        assert!(module.levels.is_empty());
    }

    #[test]
    fn non_object_module_is_a_shape_error() {
        let err = parse_module("stash", json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, DataError::Shape(_)));
    }

    #[test]
    fn corrupt_levels_degrade_without_killing_the_module() {
        let module = parse_module(
            "workbench",
            json!({
                "name": "Workbench",
                "levels": [
                    {"level": 1, "requirementItemIds": [{"itemId": "wood"}, "garbage"]},
                    "garbage",
                    {"level": 2}
                ]
            }),
        )
        .unwrap();

        assert_eq!(module.levels.len(), 2);
        assert_eq!(module.levels[0].requirement_item_ids.len(), 1);
        assert!(module.levels[1].requirement_item_ids.is_empty());
    }

    #[test]
    fn projects_must_be_a_list() {
        let err = parse_projects(json!({"phases": []})).unwrap_err();
        assert!(matches!(err, DataError::Shape(_)));
    }

    #[test]
    fn corrupt_project_roots_are_skipped() {
        let projects = parse_projects(json!([
            {"name": {"en": "Expedition"}, "phases": []},
            42
        ]))
        .unwrap();
        assert_eq!(projects.len(), 1);
    }
}
