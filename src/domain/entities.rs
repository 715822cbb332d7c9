#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable source-data key identifying a craftable/consumable resource.
pub type ItemId = String;

/// ItemId -> (usage label -> summed quantity). Labels stay sorted so the
/// preformatted blocks come out in lexicographic order.
pub type UsageMap = BTreeMap<ItemId, BTreeMap<String, u32>>;

/// A name field from the data repo: either a bare string or a
/// language-code map ({"en": "...", "de": "..."}). Anything else is kept
/// as-is and later resolves to the "Unknown" placeholder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameField {
    Plain(String),
    Localized(BTreeMap<String, Value>),
    Other(Value),
}

impl Default for NameField {
    fn default() -> Self {
        NameField::Plain(String::new())
    }
}

/// One hideout module (crafting station) as shipped in the data repo.
/// Every field defaults so a sparse or partially broken record still loads.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ModuleRecord {
    #[serde(default)]
    pub name: NameField,
    #[serde(default, alias = "maxLevel")]
    pub max_level: u32,
    #[serde(default, deserialize_with = "lenient_records")]
    pub levels: Vec<LevelRecord>,
}

/// One upgrade level of a module.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LevelRecord {
    #[serde(default)]
    pub level: u32,
    #[serde(
        default,
        alias = "requirementItemIds",
        deserialize_with = "lenient_records"
    )]
    pub requirement_item_ids: Vec<RequirementRecord>,
}

/// One requirement row. The quantity key varies across the data repo
/// ("quantity", "count", ...), so everything besides the item id is kept
/// raw and probed later.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RequirementRecord {
    #[serde(default, alias = "itemId")]
    pub item_id: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

/// A project root from projects.json. Only the first root (the expedition)
/// is authoritative.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub name: NameField,
    #[serde(default, deserialize_with = "lenient_records")]
    pub phases: Vec<PhaseRecord>,
}

/// One expedition phase.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PhaseRecord {
    #[serde(default)]
    pub phase: u32,
    #[serde(default)]
    pub name: NameField,
    #[serde(
        default,
        alias = "requirementItemIds",
        deserialize_with = "lenient_records"
    )]
    pub requirement_item_ids: Vec<RequirementRecord>,
}

/// Decodes a list while skipping elements that fail to decode. The data
/// repo is community-maintained; one broken row must not take the whole
/// file down with it.
fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// Settings-page row for one module: display name plus the upper bound of
/// its level stepper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMeta {
    pub name: String,
    pub max_level: u32,
}

/// Settings-page row for the expedition: fixed label plus the highest phase
/// observed in the data (independent of how far the player is).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub max_stage: u32,
}
