use crate::domain::ledger::ExpenseLedger;
use crate::domain::validate::validate_entry;
use shared::{AddExpenseRequest, ExpenseEntry, ValidationError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Service owning writes to the session's ledger.
///
/// The ledger is shared with the report service; the lock only exists to
/// satisfy the async HTTP host. Logically every operation is one synchronous
/// pass.
#[derive(Clone)]
pub struct ExpenseService {
    ledger: Arc<RwLock<ExpenseLedger>>,
}

impl ExpenseService {
    pub fn new(ledger: Arc<RwLock<ExpenseLedger>>) -> Self {
        Self { ledger }
    }

    /// Validate and record a new expense.
    ///
    /// On rejection the ledger is untouched and the error carries the message
    /// shown next to the form.
    pub async fn add_expense(
        &self,
        request: AddExpenseRequest,
    ) -> Result<ExpenseEntry, ValidationError> {
        let entry = match validate_entry(
            request.date,
            &request.category,
            &request.description,
            request.amount,
        ) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Rejected expense ({}): {:?}", e, request);
                return Err(e);
            }
        };

        let mut ledger = self.ledger.write().await;
        ledger.append(entry.clone());
        info!(
            "Recorded expense: {} {} {:.2} ({} entries total)",
            entry.date,
            entry.category,
            entry.amount,
            ledger.len()
        );

        Ok(entry)
    }

    /// Snapshot of all recorded expenses in insertion order.
    pub async fn list_expenses(&self) -> Vec<ExpenseEntry> {
        self.ledger.read().await.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    fn service() -> ExpenseService {
        ExpenseService::new(Arc::new(RwLock::new(ExpenseLedger::new())))
    }

    fn request(category: &str, description: &str, amount: f64) -> AddExpenseRequest {
        AddExpenseRequest {
            date: "2024-05-01".parse().unwrap(),
            category: category.to_string(),
            description: description.to_string(),
            amount,
        }
    }

    #[tokio::test]
    async fn test_add_expense_appends_to_ledger() {
        let service = service();

        let entry = service
            .add_expense(request("Food", "Lunch", 200.0))
            .await
            .unwrap();
        assert_eq!(entry.category, Category::Food);

        let listed = service.list_expenses().await;
        assert_eq!(listed, vec![entry]);
    }

    #[tokio::test]
    async fn test_rejected_expense_leaves_ledger_unchanged() {
        let service = service();
        service
            .add_expense(request("Food", "Lunch", 200.0))
            .await
            .unwrap();

        let result = service.add_expense(request("Food", "Dinner", 0.0)).await;
        assert_eq!(result, Err(ValidationError::InvalidAmount));

        // Store length unchanged after the rejection.
        assert_eq!(service.list_expenses().await.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_category_is_rejected_defensively() {
        let service = service();
        let result = service.add_expense(request("Rent", "May rent", 800.0)).await;
        assert_eq!(
            result,
            Err(ValidationError::InvalidCategory("Rent".to_string()))
        );
        assert!(service.list_expenses().await.is_empty());
    }

    #[tokio::test]
    async fn test_entries_keep_insertion_order() {
        let service = service();
        for (description, amount) in [("a", 1.0), ("b", 2.0), ("c", 3.0)] {
            service
                .add_expense(request("Others", description, amount))
                .await
                .unwrap();
        }

        let descriptions: Vec<String> = service
            .list_expenses()
            .await
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(descriptions, vec!["a", "b", "c"]);
    }
}
