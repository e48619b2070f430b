use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fixed set of spending categories.
///
/// No free-form categories exist anywhere in the system; every entry carries
/// exactly one of these, and the backend re-checks membership on every add
/// rather than trusting the form widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Education,
    Entertainment,
    Shopping,
    Others,
}

impl Category {
    /// All categories in the order the add-expense form lists them.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Education,
        Category::Entertainment,
        Category::Shopping,
        Category::Others,
    ];

    /// Resolve a category name to its enumeration member.
    ///
    /// Matching is exact ("Food", not "food"): the only legitimate producers
    /// of category strings are the form select and the API, both of which use
    /// the serialized names.
    pub fn parse(name: &str) -> Option<Category> {
        match name {
            "Food" => Some(Category::Food),
            "Transport" => Some(Category::Transport),
            "Education" => Some(Category::Education),
            "Entertainment" => Some(Category::Entertainment),
            "Shopping" => Some(Category::Shopping),
            "Others" => Some(Category::Others),
            _ => None,
        }
    }

    /// Serialized / display name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Calendar date of the expense (no time component), ISO format on the wire.
    pub date: NaiveDate,
    pub category: Category,
    /// Free text, non-empty after trimming.
    pub description: String,
    /// Strictly positive; enforced at insertion time.
    pub amount: f64,
}

impl ExpenseEntry {
    /// Grouping key for monthly reports, e.g. "2024-05".
    ///
    /// Lexicographic order on these keys is chronological order.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Why an add-expense request was rejected.
///
/// All variants are recoverable: the ledger is untouched and the message is
/// rendered next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ValidationError {
    #[error("Amount must be greater than 0")]
    InvalidAmount,
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("Unknown category: {0}")]
    InvalidCategory(String),
}

/// Request to record a new expense.
///
/// `category` travels as a plain string so the backend can validate
/// membership itself instead of relying on the select widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExpenseRequest {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

/// Response after recording an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExpenseResponse {
    pub entry: ExpenseEntry,
    pub success_message: String,
}

/// Response containing the full expense list in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub entries: Vec<ExpenseEntry>,
}

/// Aggregate over the whole ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSummaryResponse {
    pub total: f64,
    /// Only categories that actually occur in the ledger appear as keys.
    pub by_category: BTreeMap<Category, f64>,
}

/// Months that have at least one expense, as sorted `YYYY-MM` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthListResponse {
    pub months: Vec<String>,
}

/// Highest-spending category within a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategory {
    pub category: Category,
    pub amount: f64,
}

/// Response for a single month's report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReportResponse {
    pub month: String,
    pub total: f64,
    pub by_category: BTreeMap<Category, f64>,
    /// `None` when the month has no expenses.
    pub top_category: Option<TopCategory>,
    /// Raised when the top category is a discretionary one (Shopping or
    /// Entertainment); the frontend renders the reduce-spending advisory.
    pub discretionary_alert: bool,
}

/// How a month's spend compares against the user's budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetLevel {
    Exceeded,
    Warning,
    Ok,
}

/// Outcome of evaluating a monthly total against a positive budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEvaluation {
    pub level: BudgetLevel,
    pub usage_percent: f64,
}

/// Response for a budget check against one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatusResponse {
    pub month: String,
    pub monthly_total: f64,
    pub budget: f64,
    /// `None` when the budget is zero or negative: nothing was evaluated.
    pub evaluation: Option<BudgetEvaluation>,
}

/// Display conventions shared by backend messages and the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub currency_symbol: String,
    pub success_message_duration_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            success_message_duration_ms: 3000,
        }
    }
}
