//! Order wire types and the line-number partition predicate

use serde::{Deserialize, Serialize};

/// Line numbers arrive as either a single number or a list of numbers.
///
/// Only the list form participates in matching; a scalar never matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineNo {
    One(f64),
    Many(Vec<f64>),
}

/// Sub-record of an order carrying line numbers and a product code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBlock {
    #[serde(rename = "lineNo")]
    pub line_no: LineNo,
    #[serde(rename = "ProductCode")]
    pub product_code: String,
}

/// Transient order payload; only `orderID` is persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "orderInvoiceNo")]
    pub order_invoice_no: String,
    #[serde(rename = "OrderBlocks")]
    pub order_blocks: Vec<OrderBlock>,
}

impl Order {
    /// True when some block carries a list-valued lineNo containing a
    /// multiple of 3
    fn has_matching_block(&self) -> bool {
        self.order_blocks.iter().any(|block| match &block.line_no {
            LineNo::Many(lines) => lines.iter().any(|line| line % 3.0 == 0.0),
            LineNo::One(_) => false,
        })
    }
}

/// Partition orders into (matched, unmatched) by the multiple-of-3 predicate,
/// preserving input order on both sides
pub fn partition_orders(orders: &[Order]) -> (Vec<Order>, Vec<Order>) {
    orders
        .iter()
        .cloned()
        .partition(Order::has_matching_block)
}
