use crate::domain::budget::{evaluate_budget, is_discretionary};
use crate::domain::ledger::ExpenseLedger;
use crate::domain::reports::{
    filter_by_month, highest_category, months_present, sum_by_category, total_sum,
};
use shared::{
    BudgetStatusResponse, MonthListResponse, MonthlyReportResponse, OverallSummaryResponse,
    TopCategory,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Read-only query surface over the session's ledger.
///
/// Every method takes a fresh snapshot and recomputes from scratch; the view
/// is rebuilt on each interaction rather than updated incrementally.
#[derive(Clone)]
pub struct ReportService {
    ledger: Arc<RwLock<ExpenseLedger>>,
}

impl ReportService {
    pub fn new(ledger: Arc<RwLock<ExpenseLedger>>) -> Self {
        Self { ledger }
    }

    /// Total and per-category breakdown over the whole ledger.
    pub async fn overall_summary(&self) -> OverallSummaryResponse {
        let entries = self.ledger.read().await.all();
        OverallSummaryResponse {
            total: total_sum(&entries),
            by_category: sum_by_category(&entries),
        }
    }

    /// Months that have at least one expense, sorted ascending.
    pub async fn months_present(&self) -> MonthListResponse {
        let entries = self.ledger.read().await.all();
        MonthListResponse {
            months: months_present(&entries),
        }
    }

    /// Full report for one month: totals, breakdown, top category, advisory.
    ///
    /// A month with no expenses yields zero totals and no top category; an
    /// empty store is a valid state, not an error.
    pub async fn monthly_report(&self, month: &str) -> MonthlyReportResponse {
        let entries = self.ledger.read().await.all();
        let monthly = filter_by_month(&entries, month);

        let by_category = sum_by_category(&monthly);
        let top = highest_category(&by_category);
        let discretionary_alert = top.map(|(category, _)| is_discretionary(category)).unwrap_or(false);

        info!(
            "Monthly report for {}: {} entries, discretionary_alert={}",
            month,
            monthly.len(),
            discretionary_alert
        );

        MonthlyReportResponse {
            month: month.to_string(),
            total: total_sum(&monthly),
            by_category,
            top_category: top.map(|(category, amount)| TopCategory { category, amount }),
            discretionary_alert,
        }
    }

    /// Compare one month's spend against a user-supplied budget.
    pub async fn budget_status(&self, month: &str, budget: f64) -> BudgetStatusResponse {
        let entries = self.ledger.read().await.all();
        let monthly_total = total_sum(&filter_by_month(&entries, month));

        BudgetStatusResponse {
            month: month.to_string(),
            monthly_total,
            budget,
            evaluation: evaluate_budget(monthly_total, budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BudgetLevel, Category, ExpenseEntry};

    fn entry(date: &str, category: Category, amount: f64) -> ExpenseEntry {
        ExpenseEntry {
            date: date.parse().unwrap(),
            category,
            description: "test".to_string(),
            amount,
        }
    }

    fn service_with(entries: Vec<ExpenseEntry>) -> ReportService {
        let mut ledger = ExpenseLedger::new();
        for entry in entries {
            ledger.append(entry);
        }
        ReportService::new(Arc::new(RwLock::new(ledger)))
    }

    #[tokio::test]
    async fn test_overall_summary_empty_store() {
        let service = service_with(vec![]);
        let summary = service.overall_summary().await;
        assert_eq!(summary.total, 0.0);
        assert!(summary.by_category.is_empty());
    }

    #[tokio::test]
    async fn test_overall_summary_totals() {
        let service = service_with(vec![
            entry("2024-05-01", Category::Food, 200.0),
            entry("2024-06-02", Category::Food, 100.0),
            entry("2024-06-03", Category::Shopping, 50.0),
        ]);

        let summary = service.overall_summary().await;
        assert_eq!(summary.total, 350.0);
        assert_eq!(summary.by_category[&Category::Food], 300.0);
        assert_eq!(summary.by_category[&Category::Shopping], 50.0);
    }

    #[tokio::test]
    async fn test_months_present_across_months() {
        let service = service_with(vec![
            entry("2024-06-15", Category::Food, 1.0),
            entry("2024-05-01", Category::Food, 1.0),
        ]);

        let response = service.months_present().await;
        assert_eq!(response.months, vec!["2024-05", "2024-06"]);
    }

    #[tokio::test]
    async fn test_monthly_report_filters_to_month() {
        let service = service_with(vec![
            entry("2024-05-01", Category::Food, 200.0),
            entry("2024-06-02", Category::Food, 999.0),
            entry("2024-05-20", Category::Transport, 50.0),
        ]);

        let report = service.monthly_report("2024-05").await;
        assert_eq!(report.month, "2024-05");
        assert_eq!(report.total, 250.0);
        assert_eq!(report.by_category.len(), 2);
        let top = report.top_category.unwrap();
        assert_eq!(top.category, Category::Food);
        assert_eq!(top.amount, 200.0);
        assert!(!report.discretionary_alert);
    }

    #[tokio::test]
    async fn test_monthly_report_discretionary_alert() {
        let service = service_with(vec![
            entry("2024-05-01", Category::Shopping, 400.0),
            entry("2024-05-02", Category::Food, 100.0),
        ]);

        let report = service.monthly_report("2024-05").await;
        let top = report.top_category.unwrap();
        assert_eq!(top.category, Category::Shopping);
        assert!(report.discretionary_alert);
    }

    #[tokio::test]
    async fn test_monthly_report_for_empty_month() {
        let service = service_with(vec![entry("2024-05-01", Category::Food, 10.0)]);

        let report = service.monthly_report("2030-01").await;
        assert_eq!(report.total, 0.0);
        assert!(report.by_category.is_empty());
        assert!(report.top_category.is_none());
        assert!(!report.discretionary_alert);
    }

    #[tokio::test]
    async fn test_budget_status_exceeded() {
        let service = service_with(vec![entry("2024-05-01", Category::Food, 1200.0)]);

        let status = service.budget_status("2024-05", 1000.0).await;
        assert_eq!(status.monthly_total, 1200.0);
        let evaluation = status.evaluation.unwrap();
        assert_eq!(evaluation.level, BudgetLevel::Exceeded);
    }

    #[tokio::test]
    async fn test_budget_status_skipped_for_zero_budget() {
        let service = service_with(vec![entry("2024-05-01", Category::Food, 100.0)]);

        let status = service.budget_status("2024-05", 0.0).await;
        assert_eq!(status.monthly_total, 100.0);
        assert!(status.evaluation.is_none());
    }
}
