#![allow(dead_code)]

use super::entities::{ModuleRecord, ModuleMeta, ProjectMeta, ProjectRecord};
use super::index::{rebuild_index, IndexBundle, SearchIndex};
use super::settings::ProgressSettings;

/// Everything the UI needs in one place: the raw records kept for rebuilds,
/// the player's progress, and the current query snapshot.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub settings: ProgressSettings,
    pub modules: Vec<ModuleRecord>,
    pub projects: Vec<ProjectRecord>,
    pub index: SearchIndex,
    pub modules_meta: Vec<ModuleMeta>,
    pub projects_meta: Vec<ProjectMeta>,
    /// False until the first data load lands.
    pub data_ready: bool,
}

impl AppState {
    pub fn apply_persisted(&mut self, mut saved: ProgressSettings) {
        saved.normalize();
        self.settings = saved;
    }

    pub fn to_persisted(&self) -> ProgressSettings {
        self.settings.clone()
    }

    /// Stores freshly loaded records and derives the first snapshot.
    pub fn install_data(&mut self, modules: Vec<ModuleRecord>, projects: Vec<ProjectRecord>) {
        self.modules = modules;
        self.projects = projects;
        self.data_ready = true;
        self.rebuild();
    }

    /// Re-derives the snapshot from the records currently in memory. The
    /// whole bundle is replaced in one assignment so a reader either sees
    /// the old index or the new one, never a mix.
    pub fn rebuild(&mut self) {
        let IndexBundle {
            index,
            modules_meta,
            projects_meta,
        } = rebuild_index(&self.modules, &self.projects, &self.settings);
        self.index = index;
        self.modules_meta = modules_meta;
        self.projects_meta = projects_meta;
    }

    /// Expedition stepper bound; the data's highest phase, 0 before load.
    pub fn expedition_max_stage(&self) -> u32 {
        self.projects_meta
            .first()
            .map(|meta| meta.max_stage)
            .unwrap_or(0)
    }
}
