//! Query resolution: runs the matcher over the current snapshot and stitches
//! the preformatted blocks into the final line list.

use std::collections::HashSet;

use super::index::SearchIndex;
use super::matcher::match_names;
use super::normalize::title_case;

/// At most this many item blocks per query.
pub const MAX_RESULTS: usize = 5;

/// Resolves a free-text query to display lines. A query that matches nothing
/// in the index gets a synthetic "✅" block — an item no recipe needs is by
/// definition safe to recycle.
pub fn resolve(query: &str, index: &SearchIndex) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let hits = match_names(query, &index.names);
    if hits.is_empty() {
        return vec![format!("✅ {}", title_case(query)), String::new()];
    }

    let mut lines = Vec::new();
    let mut seen = HashSet::new();
    for name in hits.iter().take(MAX_RESULTS) {
        if !seen.insert(name.as_str()) {
            continue;
        }
        if let Some(block) = index.blocks.get(name) {
            lines.extend(block.iter().cloned());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::super::entities::UsageMap;
    use super::super::index::materialize;
    use super::*;

    fn index_for(items: &[(&str, &[(&str, u32)])]) -> SearchIndex {
        let usage: UsageMap = items
            .iter()
            .map(|(item, uses)| {
                let bucket = uses
                    .iter()
                    .map(|(label, qty)| (label.to_string(), *qty))
                    .collect::<BTreeMap<_, _>>();
                (item.to_string(), bucket)
            })
            .collect();
        materialize(&usage)
    }

    #[test]
    fn empty_query_yields_no_lines() {
        let index = index_for(&[("wood", &[("Workbench 1", 2)])]);
        assert_eq!(resolve("", &index), Vec::<String>::new());
        assert_eq!(resolve("   ", &index), Vec::<String>::new());
    }

    #[test]
    fn unmatched_query_gets_a_synthetic_safe_block() {
        let index = index_for(&[("wood", &[("Workbench 1", 2)])]);
        assert_eq!(
            resolve("rusty engine", &index),
            vec!["✅ Rusty Engine".to_string(), String::new()]
        );
    }

    #[test]
    fn recycle_safe_items_resolve_to_a_safe_header() {
        let index = index_for(&[("old_fuse", &[])]);
        assert_eq!(
            resolve("old fuse", &index),
            vec!["✅ Old Fuse".to_string(), String::new()]
        );
    }

    #[test]
    fn matched_query_returns_the_preformatted_block() {
        let index = index_for(&[("wood", &[("Workbench 1", 2)])]);
        assert_eq!(
            resolve("  wood ", &index),
            vec![
                "❌ Wood".to_string(),
                "• Workbench 1 – ×2".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn results_cap_at_five_blocks() {
        let items: Vec<String> = (0..8).map(|i| format!("scrap_{i}")).collect();
        let entries: Vec<(&str, &[(&str, u32)])> = items
            .iter()
            .map(|item| (item.as_str(), [("Stash", 1)].as_slice()))
            .collect();
        let index = index_for(&entries);

        let lines = resolve("scrap", &index);
        // Each block is a header, one usage line, and a blank line.
        assert_eq!(lines.len(), 5 * 3);
        assert_eq!(lines[0], "❌ Scrap 0");
        assert_eq!(lines[12], "❌ Scrap 4");
    }

    #[test]
    fn duplicate_names_emit_one_block() {
        // Two ids that prettify to the same display name.
        let index = index_for(&[
            ("scrap_metal", &[("Stash", 1)]),
            ("scrap__metal", &[("Scrappy 2", 3)]),
        ]);

        let lines = resolve("scrap metal", &index);
        assert_eq!(
            lines
                .iter()
                .filter(|line| line.starts_with("❌ Scrap Metal"))
                .count(),
            1
        );
    }
}
