use gloo::net::http::Request;
use shared::{
    AddExpenseRequest, AddExpenseResponse, BudgetStatusResponse, ExpenseListResponse,
    MonthListResponse, MonthlyReportResponse, OverallSummaryResponse,
};

/// API client for communicating with the backend server
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Record a new expense
    pub async fn add_expense(
        &self,
        request: AddExpenseRequest,
    ) -> Result<AddExpenseResponse, String> {
        let url = format!("{}/api/expenses", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<AddExpenseResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    // Validation rejections arrive as a plain message body.
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Get all recorded expenses in insertion order
    pub async fn list_expenses(&self) -> Result<ExpenseListResponse, String> {
        let url = format!("{}/api/expenses", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<ExpenseListResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse expenses: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch expenses: {}", e)),
        }
    }

    /// Get the overall summary (total + per-category breakdown)
    pub async fn overall_summary(&self) -> Result<OverallSummaryResponse, String> {
        let url = format!("{}/api/summary", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<OverallSummaryResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse summary: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch summary: {}", e)),
        }
    }

    /// Get the months that have at least one expense
    pub async fn months(&self) -> Result<MonthListResponse, String> {
        let url = format!("{}/api/reports/months", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<MonthListResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse month list: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch month list: {}", e)),
        }
    }

    /// Get the report for a specific month
    pub async fn monthly_report(&self, month: &str) -> Result<MonthlyReportResponse, String> {
        let url = format!("{}/api/reports/monthly?month={}", self.base_url, month);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<MonthlyReportResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse monthly report: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch monthly report: {}", e)),
        }
    }

    /// Check a month's spend against a budget
    pub async fn budget_status(
        &self,
        month: &str,
        budget: f64,
    ) -> Result<BudgetStatusResponse, String> {
        let url = format!(
            "{}/api/reports/budget?month={}&budget={}",
            self.base_url, month, budget
        );

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<BudgetStatusResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse budget status: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch budget status: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
