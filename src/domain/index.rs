//! Index materialization: turns the aggregated usage map into the sorted
//! name list and the preformatted result blocks the search page renders.

use std::collections::HashMap;

use super::aggregate::{aggregate, Aggregation};
use super::entities::{ModuleRecord, ModuleMeta, ProjectMeta, ProjectRecord, UsageMap};
use super::normalize::pretty_from_item_id;
use super::settings::ProgressSettings;

/// Immutable query snapshot: the sorted display names plus one ready-to-show
/// line block per name. Rebuilt wholesale on every settings change; readers
/// never see a half-built index because the owner swaps the whole value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchIndex {
    pub names: Vec<String>,
    pub blocks: HashMap<String, Vec<String>>,
}

/// A full rebuild's output: the query snapshot plus the settings-page meta.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexBundle {
    pub index: SearchIndex,
    pub modules_meta: Vec<ModuleMeta>,
    pub projects_meta: Vec<ProjectMeta>,
}

/// One-call rebuild from raw records and progress settings.
pub fn rebuild_index(
    modules: &[ModuleRecord],
    project_roots: &[ProjectRecord],
    settings: &ProgressSettings,
) -> IndexBundle {
    let Aggregation {
        usage,
        modules_meta,
        projects_meta,
    } = aggregate(modules, project_roots, settings);

    IndexBundle {
        index: materialize(&usage),
        modules_meta,
        projects_meta,
    }
}

/// Preformats one block per item. Outstanding items get a "❌" header and
/// one line per usage label (labels already sorted in the map); items with
/// an empty bucket get a bare "✅" header. Every block ends with a blank
/// separator line.
pub fn materialize(usage: &UsageMap) -> SearchIndex {
    let mut names = Vec::with_capacity(usage.len());
    let mut blocks = HashMap::with_capacity(usage.len());

    for (item_id, uses) in usage {
        let name = pretty_from_item_id(item_id);

        let mut lines = Vec::with_capacity(uses.len() + 2);
        if uses.is_empty() {
            lines.push(format!("✅ {name}"));
        } else {
            lines.push(format!("❌ {name}"));
            for (label, qty) in uses {
                lines.push(format!("• {label} – ×{qty}"));
            }
        }
        lines.push(String::new());

        names.push(name.clone());
        blocks.insert(name, lines);
    }

    names.sort();
    SearchIndex { names, blocks }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn usage_of(entries: &[(&str, &[(&str, u32)])]) -> UsageMap {
        entries
            .iter()
            .map(|(item, uses)| {
                let bucket = uses
                    .iter()
                    .map(|(label, qty)| (label.to_string(), *qty))
                    .collect::<BTreeMap<_, _>>();
                (item.to_string(), bucket)
            })
            .collect()
    }

    #[test]
    fn blocks_are_preformatted_and_labels_sorted() {
        let usage = usage_of(&[(
            "metal_parts",
            &[("Workbench 2", 4), ("Scrappy 1", 2)],
        )]);

        let index = materialize(&usage);
        assert_eq!(
            index.blocks["Metal Parts"],
            vec![
                "❌ Metal Parts".to_string(),
                "• Scrappy 1 – ×2".to_string(),
                "• Workbench 2 – ×4".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn empty_bucket_renders_recycle_safe() {
        let usage = usage_of(&[("old_fuse", &[])]);
        let index = materialize(&usage);
        assert_eq!(
            index.blocks["Old Fuse"],
            vec!["✅ Old Fuse".to_string(), String::new()]
        );
    }

    #[test]
    fn names_come_out_sorted() {
        let usage = usage_of(&[
            ("wires", &[("Stash", 1)]),
            ("arc_alloy", &[("Stash", 1)]),
            ("fabric", &[("Stash", 1)]),
        ]);

        let index = materialize(&usage);
        assert_eq!(index.names, vec!["Arc Alloy", "Fabric", "Wires"]);
    }

    #[test]
    fn rebuild_composes_aggregation_and_materialization() {
        let modules: Vec<ModuleRecord> = serde_json::from_value(serde_json::json!([{
            "name": {"en": "Workbench"},
            "maxLevel": 2,
            "levels": [
                {"level": 1, "requirementItemIds": [{"itemId": "wood", "quantity": 5}]},
                {"level": 2, "requirementItemIds": [{"itemId": "wood", "quantity": 8}]}
            ]
        }]))
        .unwrap();

        let mut settings = ProgressSettings::default();
        settings.set_workstation_level("Workbench", 1);

        let bundle = rebuild_index(&modules, &[], &settings);
        assert_eq!(bundle.index.names, vec!["Wood"]);
        assert_eq!(
            bundle.index.blocks["Wood"],
            vec![
                "❌ Wood".to_string(),
                "• Workbench 2 – ×8".to_string(),
                String::new(),
            ]
        );
        assert_eq!(bundle.modules_meta.len(), 1);
        assert_eq!(bundle.projects_meta.len(), 1);
    }
}
