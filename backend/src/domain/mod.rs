//! Business logic for the expense tracker.
//!
//! Everything here is synchronous arithmetic over the in-memory ledger; the
//! service structs only add the locking required by the async HTTP host.

pub mod budget;
pub mod ledger;
pub mod reports;
pub mod validate;

mod expense_service;
mod report_service;

pub use expense_service::ExpenseService;
pub use ledger::ExpenseLedger;
pub use report_service::ReportService;
