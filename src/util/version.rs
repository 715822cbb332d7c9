use std::fmt;

use reqwest::Client;
use semver::Version;
use serde::Deserialize;
use thiserror::Error;

pub const APP_NAME: &str = "ARC Safe Recycle";
pub const APP_REPO_URL: &str = "https://github.com/skynatbs/arc_safe_recycle";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

const TAGS_URL: &str = "https://api.github.com/repos/skynatbs/arc_safe_recycle/tags?per_page=100";

#[derive(Clone, Debug)]
pub struct UpdateInfo {
    pub current: Version,
    pub latest_tag: String,
    pub latest: Version,
}

impl UpdateInfo {
    pub fn update_available(&self) -> bool {
        self.latest > self.current
    }
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("failed to build HTTP client: {0}")]
    BuildClient(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
    #[error("no release tags found")]
    NoTags,
}

#[derive(Deserialize)]
struct GitTag {
    name: String,
}

/// Compares the running build against the newest semver tag on GitHub.
/// Tags that do not parse as versions (e.g. "nightly") are ignored.
pub async fn check_for_update() -> Result<UpdateInfo, UpdateError> {
    let user_agent = format!("{}/{} (+{})", APP_NAME, version_label(), APP_REPO_URL);
    let client = Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|err| UpdateError::BuildClient(err.to_string()))?;

    let tags: Vec<GitTag> = client
        .get(TAGS_URL)
        .send()
        .await
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .error_for_status()
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .json()
        .await
        .map_err(|err| UpdateError::Decode(err.to_string()))?;

    let (latest, latest_tag) = newest_tag(tags).ok_or(UpdateError::NoTags)?;

    Ok(UpdateInfo {
        current: current_version()?,
        latest,
        latest_tag,
    })
}

/// Picks the highest semver among the repository's tags.
fn newest_tag(tags: Vec<GitTag>) -> Option<(Version, String)> {
    tags.into_iter()
        .filter_map(|tag| {
            parse_version_str(&tag.name)
                .ok()
                .map(|version| (version, tag.name))
        })
        .max_by(|a, b| a.0.cmp(&b.0))
}

fn parse_version_str(input: &str) -> Result<Version, UpdateError> {
    let trimmed = input.trim_start_matches(|ch| ch == 'v' || ch == 'V');
    Version::parse(trimmed).map_err(|err| UpdateError::InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, UpdateError> {
    if let Some(tag) = GIT_TAG {
        return parse_version_str(tag);
    }

    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

impl fmt::Display for UpdateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.update_available() {
            write!(
                f,
                "New version available: {} (current {})",
                self.latest_tag, self.current
            )
        } else {
            write!(f, "Up to date on {}", self.latest_tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<GitTag> {
        names
            .iter()
            .map(|name| GitTag {
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn tags_parse_with_and_without_prefix() {
        assert!(parse_version_str("v1.2.3").is_ok());
        assert!(parse_version_str("0.4.0").is_ok());
        assert!(parse_version_str("latest").is_err());
    }

    #[test]
    fn newest_tag_picks_the_highest_semver() {
        let (version, raw) = newest_tag(tags(&["v0.3.0", "nightly", "v0.10.1", "0.4.2"])).unwrap();
        assert_eq!(raw, "v0.10.1");
        assert_eq!(version, Version::new(0, 10, 1));
    }

    #[test]
    fn unparseable_tags_yield_nothing() {
        assert!(newest_tag(tags(&["latest", "beta"])).is_none());
        assert!(newest_tag(Vec::new()).is_none());
    }

    #[test]
    fn newer_release_means_update_available() {
        let info = UpdateInfo {
            current: Version::new(0, 1, 0),
            latest_tag: "v0.2.0".to_string(),
            latest: Version::new(0, 2, 0),
        };
        assert!(info.update_available());
        assert_eq!(
            info.to_string(),
            "New version available: v0.2.0 (current 0.1.0)"
        );
    }
}
