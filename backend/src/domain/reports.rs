//! Aggregation over expense entries.
//!
//! Pure functions over slices; the report service feeds them ledger snapshots.

use shared::{Category, ExpenseEntry};
use std::collections::BTreeMap;

/// Sum of all amounts. Zero for empty input.
pub fn total_sum(entries: &[ExpenseEntry]) -> f64 {
    entries.iter().map(|e| e.amount).sum()
}

/// Per-category totals. Only categories present in the input appear as keys.
pub fn sum_by_category(entries: &[ExpenseEntry]) -> BTreeMap<Category, f64> {
    let mut totals = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.category).or_insert(0.0) += entry.amount;
    }
    totals
}

/// Distinct `YYYY-MM` keys, sorted ascending.
///
/// Lexicographic order on the keys is chronological order.
pub fn months_present(entries: &[ExpenseEntry]) -> Vec<String> {
    let mut months: Vec<String> = entries.iter().map(|e| e.month_key()).collect();
    months.sort();
    months.dedup();
    months
}

/// Entries whose date falls in the given month, original relative order kept.
pub fn filter_by_month(entries: &[ExpenseEntry], month_key: &str) -> Vec<ExpenseEntry> {
    entries
        .iter()
        .filter(|e| e.month_key() == month_key)
        .cloned()
        .collect()
}

/// The category with the maximal summed amount.
///
/// Ties break to the lexicographically smallest category name, so the result
/// never depends on grouping or insertion order. `None` for an empty map.
pub fn highest_category(totals: &BTreeMap<Category, f64>) -> Option<(Category, f64)> {
    let mut ranked: Vec<(Category, f64)> = totals.iter().map(|(c, t)| (*c, *t)).collect();
    ranked.sort_by(|a, b| a.0.name().cmp(b.0.name()));

    let mut best: Option<(Category, f64)> = None;
    for (category, total) in ranked {
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((category, total)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, category: Category, amount: f64) -> ExpenseEntry {
        ExpenseEntry {
            date: date.parse().unwrap(),
            category,
            description: "test".to_string(),
            amount,
        }
    }

    #[test]
    fn test_total_sum_empty_is_zero() {
        assert_eq!(total_sum(&[]), 0.0);
    }

    #[test]
    fn test_total_sum_is_order_independent() {
        let a = entry("2024-05-01", Category::Food, 200.0);
        let b = entry("2024-05-02", Category::Transport, 30.0);
        let c = entry("2024-05-03", Category::Others, 12.5);

        let forward = total_sum(&[a.clone(), b.clone(), c.clone()]);
        let reversed = total_sum(&[c, b, a]);
        assert_eq!(forward, 242.5);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_single_entry_scenario() {
        // add (2024-05-01, Food, "Lunch", 200): total 200, {Food: 200}
        let entries = vec![ExpenseEntry {
            date: "2024-05-01".parse().unwrap(),
            category: Category::Food,
            description: "Lunch".to_string(),
            amount: 200.0,
        }];

        assert_eq!(total_sum(&entries), 200.0);
        let by_category = sum_by_category(&entries);
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[&Category::Food], 200.0);
    }

    #[test]
    fn test_sum_by_category_only_present_categories() {
        let entries = vec![
            entry("2024-05-01", Category::Food, 200.0),
            entry("2024-05-02", Category::Food, 50.0),
            entry("2024-05-03", Category::Shopping, 120.0),
        ];

        let by_category = sum_by_category(&entries);
        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category[&Category::Food], 250.0);
        assert_eq!(by_category[&Category::Shopping], 120.0);
        assert!(!by_category.contains_key(&Category::Transport));
    }

    #[test]
    fn test_category_totals_sum_to_grand_total() {
        let entries = vec![
            entry("2024-05-01", Category::Food, 200.0),
            entry("2024-05-02", Category::Transport, 30.0),
            entry("2024-06-01", Category::Food, 80.0),
            entry("2024-06-15", Category::Entertainment, 45.5),
        ];

        let by_category_total: f64 = sum_by_category(&entries).values().sum();
        assert_eq!(by_category_total, total_sum(&entries));
    }

    #[test]
    fn test_months_present_sorted_and_distinct() {
        let entries = vec![
            entry("2024-06-10", Category::Food, 1.0),
            entry("2024-05-01", Category::Food, 1.0),
            entry("2024-06-20", Category::Others, 1.0),
            entry("2023-12-31", Category::Food, 1.0),
        ];

        assert_eq!(months_present(&entries), vec!["2023-12", "2024-05", "2024-06"]);
    }

    #[test]
    fn test_months_present_empty() {
        assert!(months_present(&[]).is_empty());
    }

    #[test]
    fn test_filter_by_month_preserves_relative_order() {
        let entries = vec![
            entry("2024-05-03", Category::Food, 1.0),
            entry("2024-06-01", Category::Food, 2.0),
            entry("2024-05-01", Category::Transport, 3.0),
            entry("2024-05-20", Category::Others, 4.0),
        ];

        let may = filter_by_month(&entries, "2024-05");
        let amounts: Vec<f64> = may.iter().map(|e| e.amount).collect();
        // Original relative order, not date order.
        assert_eq!(amounts, vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_filtered_total_matches_manual_filter() {
        let entries = vec![
            entry("2024-05-03", Category::Food, 10.0),
            entry("2024-06-01", Category::Food, 20.0),
            entry("2024-05-20", Category::Others, 30.0),
        ];

        let filtered_total = total_sum(&filter_by_month(&entries, "2024-05"));
        let manual: f64 = entries
            .iter()
            .filter(|e| e.month_key() == "2024-05")
            .map(|e| e.amount)
            .sum();
        assert_eq!(filtered_total, manual);
        assert_eq!(filtered_total, 40.0);
    }

    #[test]
    fn test_highest_category_picks_maximum() {
        let entries = vec![
            entry("2024-05-01", Category::Food, 200.0),
            entry("2024-05-02", Category::Shopping, 350.0),
            entry("2024-05-03", Category::Transport, 30.0),
        ];

        let totals = sum_by_category(&entries);
        assert_eq!(highest_category(&totals), Some((Category::Shopping, 350.0)));
    }

    #[test]
    fn test_highest_category_tie_breaks_lexicographically() {
        let entries = vec![
            entry("2024-05-01", Category::Shopping, 100.0),
            entry("2024-05-02", Category::Education, 100.0),
        ];

        // "Education" < "Shopping" by name, so it wins the tie.
        let totals = sum_by_category(&entries);
        assert_eq!(highest_category(&totals), Some((Category::Education, 100.0)));
    }

    #[test]
    fn test_highest_category_empty_is_none() {
        assert_eq!(highest_category(&BTreeMap::new()), None);
    }
}
