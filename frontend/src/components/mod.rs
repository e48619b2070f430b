pub mod category_chart;
pub mod expense_form;
pub mod expense_table;
pub mod monthly_report;
pub mod summary_panel;

pub use category_chart::CategoryChart;
pub use expense_form::ExpenseForm;
pub use expense_table::ExpenseTable;
pub use monthly_report::MonthlyReport;
pub use summary_panel::SummaryPanel;
