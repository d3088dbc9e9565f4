//! Ingredient-coverage ranking for recipe suggestions.
//!
//! Pure functions over the two aggregates produced by the persistence layer:
//! per-recipe coverage (distinct available items among its ingredients) and
//! per-recipe totals (ingredient count, zero included). The database crate
//! runs the queries and hydrates the winners; everything in between lives here.
//!
//! Ordering: fewest missing ingredients first, then highest coverage ratio,
//! then recipe id so equal candidates come back in a stable order.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::responses::MatchStats;

/// Default number of suggestions returned.
pub const DEFAULT_SUGGEST_LIMIT: u32 = 20;

/// Default number of missing ingredients tolerated.
pub const DEFAULT_ALLOWED_MISSING: u32 = 0;

/// One candidate recipe after scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecipe {
    pub recipe_id: String,
    pub stats: MatchStats,
}

/// Deduplicate caller-supplied item ids and drop blanks, keeping first-seen order.
#[must_use]
pub fn sanitize_item_ids(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(*id))
        .map(String::from)
        .collect()
}

/// Compute the match statistics for a single recipe.
#[must_use]
pub fn match_stats(matched: u32, total: u32) -> MatchStats {
    // Coverage can never exceed the ingredient count; clamp if a concurrent
    // delete made the two queries disagree.
    let matched = matched.min(total);
    let match_pct = if total > 0 {
        f64::from(matched) / f64::from(total)
    } else {
        0.0
    };
    MatchStats {
        matched,
        total,
        missing: total - matched,
        match_pct,
    }
}

/// Best match first.
pub fn compare_ranked(left: &RankedRecipe, right: &RankedRecipe) -> Ordering {
    left.stats
        .missing
        .cmp(&right.stats.missing)
        .then_with(|| right.stats.match_pct.total_cmp(&left.stats.match_pct))
        .then_with(|| left.recipe_id.cmp(&right.recipe_id))
}

/// Score every recipe in `totals`, drop those missing more than
/// `allowed_missing` ingredients, sort, and keep the first `limit`.
///
/// `totals` defines the candidate universe: a recipe with no ingredients is a
/// candidate with total 0 and passes any threshold. Coverage entries for
/// recipes absent from `totals` are ignored.
#[must_use]
pub fn rank_candidates(
    coverage: &HashMap<String, u32>,
    totals: &HashMap<String, u32>,
    allowed_missing: u32,
    limit: u32,
) -> Vec<RankedRecipe> {
    let mut ranked: Vec<RankedRecipe> = totals
        .iter()
        .map(|(recipe_id, &total)| RankedRecipe {
            recipe_id: recipe_id.clone(),
            stats: match_stats(coverage.get(recipe_id).copied().unwrap_or(0), total),
        })
        .filter(|candidate| candidate.stats.missing <= allowed_missing)
        .collect();

    ranked.sort_by(compare_ranked);

    #[allow(clippy::cast_possible_truncation)]
    ranked.truncate(limit as usize);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn map(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries
            .iter()
            .map(|(id, n)| ((*id).to_string(), *n))
            .collect()
    }

    fn ids(ranked: &[RankedRecipe]) -> Vec<&str> {
        ranked.iter().map(|r| r.recipe_id.as_str()).collect()
    }

    #[test]
    fn sanitize_dedups_and_drops_blanks() {
        let raw = vec![
            "itm-a".to_string(),
            String::new(),
            "itm-b".to_string(),
            "  ".to_string(),
            "itm-a".to_string(),
        ];
        assert_eq!(sanitize_item_ids(&raw), vec!["itm-a", "itm-b"]);
    }

    #[test]
    fn sanitize_all_blank_is_empty() {
        let raw = vec![String::new(), " ".to_string()];
        assert!(sanitize_item_ids(&raw).is_empty());
    }

    #[test]
    fn zero_ingredient_recipe_is_perfect_match() {
        let stats = match_stats(0, 0);
        assert_eq!(stats.missing, 0);
        assert!(stats.match_pct.abs() < f64::EPSILON);
    }

    #[test]
    fn two_recipe_scenario_strict() {
        // R1 = {A, B}, R2 = {A}, available = {A}
        let coverage = map(&[("r1", 1), ("r2", 1)]);
        let totals = map(&[("r1", 2), ("r2", 1)]);

        let ranked = rank_candidates(&coverage, &totals, 0, 20);
        assert_eq!(ids(&ranked), vec!["r2"]);
        assert_eq!(ranked[0].stats.missing, 0);
        assert!((ranked[0].stats.match_pct - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn two_recipe_scenario_one_missing_allowed() {
        let coverage = map(&[("r1", 1), ("r2", 1)]);
        let totals = map(&[("r1", 2), ("r2", 1)]);

        let ranked = rank_candidates(&coverage, &totals, 1, 20);
        assert_eq!(ids(&ranked), vec!["r2", "r1"]);
        assert_eq!(ranked[1].stats.missing, 1);
        assert!((ranked[1].stats.match_pct - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_on_missing_break_by_match_pct_then_id() {
        // All miss one ingredient; coverage ratios 2/3, 1/2, 1/2.
        let coverage = map(&[("c", 2), ("b", 1), ("a", 1)]);
        let totals = map(&[("c", 3), ("b", 2), ("a", 2)]);

        let ranked = rank_candidates(&coverage, &totals, 1, 20);
        assert_eq!(ids(&ranked), vec!["c", "a", "b"]);
    }

    #[test]
    fn recipes_without_coverage_are_still_candidates() {
        let coverage = map(&[]);
        let totals = map(&[("r1", 1), ("empty", 0)]);

        let ranked = rank_candidates(&coverage, &totals, 1, 20);
        assert_eq!(ids(&ranked), vec!["empty", "r1"]);
        assert_eq!(ranked[1].stats.matched, 0);
    }

    #[test]
    fn coverage_outside_totals_is_ignored() {
        let coverage = map(&[("other-house", 3)]);
        let totals = map(&[("r1", 1)]);

        let ranked = rank_candidates(&coverage, &totals, 5, 20);
        assert_eq!(ids(&ranked), vec!["r1"]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(10, 3)]
    fn limit_caps_result_count(#[case] limit: u32, #[case] expected: usize) {
        let coverage = map(&[("a", 1), ("b", 1), ("c", 1)]);
        let totals = map(&[("a", 1), ("b", 1), ("c", 1)]);
        assert_eq!(rank_candidates(&coverage, &totals, 0, limit).len(), expected);
    }

    #[test]
    fn larger_threshold_is_superset() {
        let coverage = map(&[("a", 3), ("b", 1), ("c", 0), ("d", 2)]);
        let totals = map(&[("a", 3), ("b", 3), ("c", 2), ("d", 4), ("e", 0)]);

        let mut previous: Vec<String> = Vec::new();
        for allowed in 0..5 {
            let current: Vec<String> = rank_candidates(&coverage, &totals, allowed, 100)
                .into_iter()
                .map(|r| r.recipe_id)
                .collect();
            for id in &previous {
                assert!(current.contains(id), "{id} dropped at threshold {allowed}");
            }
            previous = current;
        }
        assert_eq!(previous.len(), 5);
    }

    #[test]
    fn output_is_sorted_by_comparator() {
        let coverage = map(&[("a", 1), ("b", 2), ("c", 1), ("d", 0), ("e", 4)]);
        let totals = map(&[("a", 4), ("b", 3), ("c", 1), ("d", 2), ("e", 5), ("f", 0)]);

        let ranked = rank_candidates(&coverage, &totals, 10, 100);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0].stats, &pair[1].stats);
            assert!(
                a.missing < b.missing || (a.missing == b.missing && a.match_pct >= b.match_pct),
                "{:?} ranked before {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}
