//! Approximate name matching: exact prefix first, then substring, then an
//! edit-distance fallback so typos still land on the right item.

/// Minimum 0-100 score a name must reach in the fuzzy tier.
pub const FUZZY_THRESHOLD: i32 = 70;

/// Resolves a pre-trimmed query against the sorted name list. Tiers are
/// tried in order and the first one with any hit wins; within a tier the
/// original name order is preserved (score-descending for the fuzzy tier,
/// ties in name order).
pub fn match_names(query: &str, names: &[String]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();

    let prefix_hits: Vec<String> = names
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&query))
        .cloned()
        .collect();
    if !prefix_hits.is_empty() {
        return prefix_hits;
    }

    let substring_hits: Vec<String> = names
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .cloned()
        .collect();
    if !substring_hits.is_empty() {
        return substring_hits;
    }

    let mut scored: Vec<(i32, &String)> = names
        .iter()
        .filter_map(|name| {
            let score = fuzzy_score(&query, &name.to_lowercase());
            (score >= FUZZY_THRESHOLD).then_some((score, name))
        })
        .collect();
    // Stable sort keeps equal scores in name-list order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, name)| name.clone()).collect()
}

/// 0-100 similarity between an already-lowercased query and candidate:
/// a prefix/substring bonus (40/20) plus normalized edit-distance
/// similarity, capped at 100.
pub fn fuzzy_score(query: &str, candidate: &str) -> i32 {
    let prefix_bonus = if candidate.starts_with(query) {
        40
    } else if candidate.contains(query) {
        20
    } else {
        0
    };

    if query.is_empty() && candidate.is_empty() {
        return 100;
    }

    let distance = levenshtein(query, candidate);
    let max_len = query.chars().count().max(candidate.chars().count()).max(1);
    let similarity = ((1.0 - distance as f64 / max_len as f64) * 100.0) as i32;
    (prefix_bonus + similarity).min(100)
}

/// Classic unit-cost edit distance over Unicode scalars, rolling two rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = (current[j] + 1)
                .min(prev[j + 1] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn levenshtein_reference_values() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn exact_match_scores_full() {
        assert_eq!(fuzzy_score("cat", "cat"), 100);
    }

    #[test]
    fn score_is_capped_at_100() {
        // Prefix bonus 40 + similarity 75.
        assert_eq!(fuzzy_score("cat", "catt"), 100);
    }

    #[test]
    fn both_empty_is_a_perfect_score() {
        assert_eq!(fuzzy_score("", ""), 100);
    }

    #[test]
    fn prefix_tier_wins_and_keeps_order() {
        let names = names(&["Cat Bed", "Catalyst", "Dog Bed"]);
        assert_eq!(match_names("cat", &names), vec!["Cat Bed", "Catalyst"]);
    }

    #[test]
    fn substring_tier_runs_only_without_prefix_hits() {
        let names = names(&["Dog Bed", "Bedrock"]);
        // "bed" prefixes Bedrock, so the substring-only Dog Bed is skipped.
        assert_eq!(match_names("bed", &names), vec!["Bedrock"]);
        assert_eq!(match_names("og b", &names), vec!["Dog Bed"]);
    }

    #[test]
    fn fuzzy_tier_needs_the_threshold() {
        let names = names(&["Scrap Metal"]);
        assert_eq!(match_names("xqz", &names), Vec::<String>::new());
    }

    #[test]
    fn fuzzy_tier_accepts_close_typos() {
        let names = names(&["Cat"]);
        // No prefix or substring hit; distance 1 of 4 scores 75.
        assert_eq!(match_names("catt", &names), vec!["Cat"]);
    }

    #[test]
    fn fuzzy_tier_sorts_by_score_then_input_order() {
        let names = names(&["abcdefghxy", "abcdefghix", "qbcdefghij"]);
        // Distances 2, 1, 1 from the query: 80, 90, 90.
        assert_eq!(
            match_names("abcdefghij", &names),
            vec!["abcdefghix", "qbcdefghij", "abcdefghxy"]
        );
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert_eq!(match_names("", &names(&["Cat"])), Vec::<String>::new());
    }
}
