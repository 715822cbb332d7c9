//! Player progress: completed workstation levels and the completed
//! expedition phase. This is the only mutable input to the index; the
//! persistence mechanics live in `util::persistence`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fixed key under `projects` for the expedition track.
pub const EXPEDITION_PROJECT_KEY: &str = "Expedition Project";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSettings {
    /// Module display name -> highest completed level.
    #[serde(default)]
    pub workstations: BTreeMap<String, u32>,
    /// Project key -> highest completed phase. Always carries the
    /// expedition key after normalization.
    #[serde(default)]
    pub projects: BTreeMap<String, u32>,
}

impl ProgressSettings {
    /// Ensures both maps exist in a usable shape. Deserialized values from
    /// old or hand-edited files may lack the expedition entry.
    pub fn normalize(&mut self) {
        self.projects.entry(EXPEDITION_PROJECT_KEY.to_string()).or_insert(0);
    }

    pub fn workstation_level(&self, module_name: &str) -> u32 {
        self.workstations.get(module_name).copied().unwrap_or(0)
    }

    pub fn expedition_phase(&self) -> u32 {
        self.projects
            .get(EXPEDITION_PROJECT_KEY)
            .copied()
            .unwrap_or(0)
    }

    pub fn set_workstation_level(&mut self, module_name: &str, level: u32) {
        self.workstations.insert(module_name.to_string(), level);
    }

    pub fn set_expedition_phase(&mut self, phase: u32) {
        self.projects
            .insert(EXPEDITION_PROJECT_KEY.to_string(), phase);
    }
}
