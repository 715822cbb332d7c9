//! Settings-filtered aggregation: walks hideout modules and expedition
//! phases, drops everything the player has already completed, and sums the
//! remaining requirements into one item -> usages map.

use std::collections::BTreeMap;

use super::entities::{ModuleRecord, ModuleMeta, ProjectMeta, ProjectRecord, UsageMap};
use super::normalize::{extract_quantity, pick_display_name};
use super::settings::ProgressSettings;

/// Label used for the single expedition row on the settings page.
const EXPEDITION_META_NAME: &str = "Expedition Phase";

/// Everything one aggregation pass produces. The meta lists exist solely to
/// drive the settings steppers; the matcher never sees them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregation {
    pub usage: UsageMap,
    pub modules_meta: Vec<ModuleMeta>,
    pub projects_meta: Vec<ProjectMeta>,
}

/// Builds the outstanding-requirements map from raw records and the current
/// progress. Total over its inputs: malformed pieces degrade per record
/// instead of failing the pass.
pub fn aggregate(
    modules: &[ModuleRecord],
    project_roots: &[ProjectRecord],
    settings: &ProgressSettings,
) -> Aggregation {
    let mut usage = UsageMap::new();
    let mut modules_meta = Vec::with_capacity(modules.len());

    for module in modules {
        let module_name = pick_display_name(&module.name);
        modules_meta.push(ModuleMeta {
            name: module_name.clone(),
            max_level: module.max_level,
        });

        let current_level = settings.workstation_level(&module_name);
        for level in &module.levels {
            if level.level <= current_level {
                continue; // already built
            }
            let label = if level.level > 0 {
                format!("{module_name} {}", level.level)
            } else {
                module_name.clone()
            };
            for requirement in &level.requirement_item_ids {
                let item_id = requirement.item_id.trim();
                if item_id.is_empty() {
                    continue;
                }
                let qty = extract_quantity(&requirement.fields);
                add_usage(&mut usage, item_id, &label, qty);
            }
        }
    }

    let max_phase = add_expedition_phases(&mut usage, project_roots, settings);
    let projects_meta = vec![ProjectMeta {
        name: EXPEDITION_META_NAME.to_string(),
        max_stage: max_phase,
    }];

    Aggregation {
        usage,
        modules_meta,
        projects_meta,
    }
}

fn add_usage(usage: &mut UsageMap, item_id: &str, label: &str, qty: u32) {
    let bucket = usage.entry(item_id.to_string()).or_insert_with(BTreeMap::new);
    *bucket.entry(label.to_string()).or_insert(0) += qty;
}

/// Folds the expedition phases in. Only the first project root counts.
/// Returns the highest phase number seen, tracked before filtering so the
/// settings stepper keeps its full range even late in the game.
fn add_expedition_phases(
    usage: &mut UsageMap,
    project_roots: &[ProjectRecord],
    settings: &ProgressSettings,
) -> u32 {
    let current_phase = settings.expedition_phase();
    let mut max_phase = 0;

    if let Some(root) = project_roots.first() {
        for phase in &root.phases {
            max_phase = max_phase.max(phase.phase);
            if phase.phase <= current_phase {
                continue; // treated as completed
            }
            let phase_name = pick_display_name(&phase.name);
            let label = format!("Expedition – {phase_name} {}", phase.phase)
                .trim()
                .to_string();
            for requirement in &phase.requirement_item_ids {
                let item_id = requirement.item_id.trim();
                if item_id.is_empty() {
                    continue;
                }
                let qty = extract_quantity(&requirement.fields);
                add_usage(usage, item_id, &label, qty);
            }
        }
    }

    max_phase
}
