// Reports module
// Sales summaries (totals, best/worst seller, per-coffee breakdown) and profit over ingredient cost

pub mod handlers;
pub mod profit;
pub mod sales;

pub use handlers::{profit_report_handler, sales_report_handler};
pub use profit::{CostModel, ProfitReport};
pub use sales::{CoffeeSales, SalesReport};
