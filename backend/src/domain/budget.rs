//! Budget classification for a month's spend.

use shared::{BudgetEvaluation, BudgetLevel, Category};

/// Usage percentage at or above which a within-budget month is flagged.
pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;

/// Categories whose dominance in a month raises the reduce-spending advisory.
pub const DISCRETIONARY_CATEGORIES: [Category; 2] = [Category::Shopping, Category::Entertainment];

/// Classify a month's total against a budget.
///
/// `None` when the budget is zero or negative: no evaluation is performed and
/// no percentage is computed (nothing divides by the budget). Otherwise
/// exactly one level applies, first match wins:
/// exceeded when the total is over the budget, warning at or above the usage
/// threshold, ok below it.
pub fn evaluate_budget(monthly_total: f64, budget: f64) -> Option<BudgetEvaluation> {
    if budget <= 0.0 {
        return None;
    }

    let usage_percent = monthly_total / budget * 100.0;
    let level = if monthly_total > budget {
        BudgetLevel::Exceeded
    } else if usage_percent >= WARNING_THRESHOLD_PERCENT {
        BudgetLevel::Warning
    } else {
        BudgetLevel::Ok
    };

    Some(BudgetEvaluation {
        level,
        usage_percent,
    })
}

/// Whether a category counts as discretionary spending.
pub fn is_discretionary(category: Category) -> bool {
    DISCRETIONARY_CATEGORIES.contains(&category)
}
