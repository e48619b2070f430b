//! Entry validation.

use chrono::NaiveDate;
use shared::{Category, ExpenseEntry, ValidationError};

/// Check a prospective expense and build the entry if acceptable.
///
/// Pure function: the caller decides what to do with the decision. The
/// accepted entry carries the trimmed description. The category arrives as a
/// string and is checked against the enumeration here; nothing outside a form
/// widget constrains the value.
pub fn validate_entry(
    date: NaiveDate,
    category: &str,
    description: &str,
    amount: f64,
) -> Result<ExpenseEntry, ValidationError> {
    // NaN is rejected alongside zero and negatives.
    if amount <= 0.0 || amount.is_nan() {
        return Err(ValidationError::InvalidAmount);
    }

    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let category = Category::parse(category)
        .ok_or_else(|| ValidationError::InvalidCategory(category.to_string()))?;

    Ok(ExpenseEntry {
        date,
        category,
        description: description.to_string(),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        "2024-05-01".parse().unwrap()
    }

    #[test]
    fn test_accepts_well_formed_entry() {
        let entry = validate_entry(date(), "Food", "Lunch", 200.0).unwrap();
        assert_eq!(entry.category, Category::Food);
        assert_eq!(entry.description, "Lunch");
        assert_eq!(entry.amount, 200.0);
        assert_eq!(entry.date, date());
    }

    #[test]
    fn test_rejects_zero_amount() {
        let result = validate_entry(date(), "Food", "Lunch", 0.0);
        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_rejects_negative_amount() {
        let result = validate_entry(date(), "Food", "Lunch", -5.0);
        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_rejects_nan_amount() {
        let result = validate_entry(date(), "Food", "Lunch", f64::NAN);
        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_rejects_empty_description() {
        let result = validate_entry(date(), "Food", "", 10.0);
        assert_eq!(result, Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn test_rejects_whitespace_only_description() {
        let result = validate_entry(date(), "Food", "   \t ", 10.0);
        assert_eq!(result, Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn test_trims_description_on_accept() {
        let entry = validate_entry(date(), "Transport", "  Bus ticket  ", 30.0).unwrap();
        assert_eq!(entry.description, "Bus ticket");
    }

    #[test]
    fn test_rejects_unknown_category() {
        let result = validate_entry(date(), "Groceries", "Weekly shop", 50.0);
        assert_eq!(
            result,
            Err(ValidationError::InvalidCategory("Groceries".to_string()))
        );
    }

    #[test]
    fn test_amount_checked_before_description() {
        // Both fields are bad; the amount rejection wins.
        let result = validate_entry(date(), "Food", "", 0.0);
        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }
}
