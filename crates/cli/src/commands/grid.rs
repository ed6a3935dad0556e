//! Data-grid configuration command.
//!
//! # Usage
//!
//! ```bash
//! # Options for the staff products table
//! glyke grid products
//!
//! # Options for the cart table
//! glyke grid cart
//! ```

use clap::ValueEnum;
use glyke_admin::components::data_table::{cart_table_config, products_staff_table_config};

/// Tables with a predefined grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GridTable {
    /// Staff products table
    Products,
    /// Storefront cart table
    Cart,
}

/// Render the widget options for a table as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn options_json(table: GridTable) -> Result<String, serde_json::Error> {
    let config = match table {
        GridTable::Products => products_staff_table_config(),
        GridTable::Cart => cart_table_config(),
    };
    tracing::debug!(table_id = %config.table_id, "Rendering grid options");
    serde_json::to_string_pretty(&config.to_json()?)
}
