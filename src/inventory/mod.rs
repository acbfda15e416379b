// Inventory module
// Ingredient ledger, per-order ingredient usage and the admin endpoints over them

pub mod handlers;
pub mod ledger;
pub mod usage;

pub use handlers::{get_inventory_handler, restock_handler, InventoryResponse, RestockRequest};
pub use ledger::{Deduction, Ingredient, InventoryLedger, InventoryWarning, StockLevel};
pub use usage::ingredient_usage;
