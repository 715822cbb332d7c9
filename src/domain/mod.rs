//! Domain logic for recycle-safety lookups lives here.

pub mod aggregate;
pub mod app_state;
pub mod entities;
pub mod index;
pub mod matcher;
pub mod normalize;
pub mod query;
pub mod settings;

#[allow(unused_imports)]
pub use aggregate::{aggregate, Aggregation};
#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use entities::{
    ItemId, LevelRecord, ModuleMeta, ModuleRecord, NameField, PhaseRecord, ProjectMeta,
    ProjectRecord, RequirementRecord, UsageMap,
};
#[allow(unused_imports)]
pub use index::{materialize, rebuild_index, IndexBundle, SearchIndex};
#[allow(unused_imports)]
pub use matcher::{fuzzy_score, levenshtein, match_names, FUZZY_THRESHOLD};
#[allow(unused_imports)]
pub use normalize::{
    extract_quantity, pick_display_name, pretty_from_item_id, title_case, QUANTITY_KEYS,
};
#[allow(unused_imports)]
pub use query::{resolve, MAX_RESULTS};
#[allow(unused_imports)]
pub use settings::{ProgressSettings, EXPEDITION_PROJECT_KEY};
