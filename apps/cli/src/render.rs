//! # Table Rendering
//!
//! Fixed-width console tables for the record listing and search results.
//!
//! ```text
//! Code  Product                              Value  Price $  Quantity  Shipping Method
//! ----  -----------------------------------  -----  -------  --------  ---------------
//! 4     Knife Block Set                      High   99.95    2         Delivery
//! ```
//!
//! Cells are left-aligned and padded to the column width, columns are
//! separated by two spaces, and trailing whitespace is trimmed. Values wider
//! than their column push the rest of the row to the right.

use serde::Serialize;
use shopcart_core::{Money, PurchaseRecord, SearchAggregateRow};

/// A table column: header text and minimum width.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

const fn column(title: &'static str, width: usize) -> Column {
    Column { title, width }
}

/// Columns of the record listing shown on `END`.
pub const RECORD_COLUMNS: [Column; 6] = [
    column("Code", 4),
    column("Product", 35),
    column("Value", 5),
    column("Price $", 7),
    column("Quantity", 8),
    column("Shipping Method", 15),
];

/// Columns of the search result table.
pub const SEARCH_COLUMNS: [Column; 6] = [
    column("Code", 4),
    column("Product", 35),
    column("Value", 5),
    column("Price $", 7),
    column("Quantity", 8),
    column("Cost $", 6),
];

/// Renders header, underline and rows, one line each.
pub fn render_table<const N: usize>(columns: &[Column; N], rows: &[[String; N]]) -> Vec<String> {
    let header: Vec<String> = columns.iter().map(|c| c.title.to_string()).collect();
    let underline: Vec<String> = columns.iter().map(|c| "-".repeat(c.width)).collect();

    let mut lines = vec![render_row(columns, &header), render_row(columns, &underline)];
    lines.extend(rows.iter().map(|row| render_row(columns, row)));
    lines
}

fn render_row(columns: &[Column], cells: &[String]) -> String {
    let line = columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| format!("{:<width$}", cell, width = column.width))
        .collect::<Vec<_>>()
        .join("  ");

    line.trim_end().to_string()
}

/// Amount as shown in a table cell: rounded to cents, no symbol.
pub fn amount_cell(money: Money) -> String {
    format!("{}.{:02}", money.dollars(), money.cents_part())
}

/// Table lines for a record listing.
pub fn record_table(records: &[PurchaseRecord]) -> Vec<String> {
    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.code.to_string(),
                r.name.clone(),
                r.value_tier.to_string(),
                amount_cell(r.unit_price),
                r.quantity.to_string(),
                r.shipping_method.to_string(),
            ]
        })
        .collect();

    render_table(&RECORD_COLUMNS, &rows)
}

/// Table lines for search results.
pub fn search_table(rows: &[SearchAggregateRow]) -> Vec<String> {
    let rows: Vec<[String; 6]> = rows
        .iter()
        .map(|r| {
            [
                r.code.to_string(),
                r.name.clone(),
                r.value_tier.to_string(),
                amount_cell(r.unit_price),
                r.aggregated_quantity.to_string(),
                amount_cell(r.aggregated_cost),
            ]
        })
        .collect();

    render_table(&SEARCH_COLUMNS, &rows)
}

/// Closing line under every listing.
pub fn total_line(total: Money) -> String {
    format!("Total cost is: {}", total)
}

/// JSON document for the record listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordReport<'a> {
    pub records: &'a [PurchaseRecord],
    pub total: Money,
}
