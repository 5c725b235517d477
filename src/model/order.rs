use serde::{Deserialize, Serialize};

use super::basket::BasketSnapshot;
use super::product::LineItem;

/// Fixed charges added on top of the basket subtotal at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub service: f64,
    pub delivery: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            service: 2.99,
            delivery: 5.99,
        }
    }
}

/// What the customer pays for, as shown on the order confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub line_items: Vec<LineItem>,
    pub item_count: u64,
    pub subtotal: f64,
    pub service_fee: f64,
    pub delivery_fee: f64,
    /// `subtotal + service_fee + delivery_fee`
    pub total: f64,
}

impl OrderSummary {
    /// Prices a basket snapshot with the given fees.
    pub fn new(snapshot: BasketSnapshot, fees: FeeSchedule) -> Self {
        Self {
            total: snapshot.subtotal + fees.service + fees.delivery,
            line_items: snapshot.line_items,
            item_count: snapshot.item_count,
            subtotal: snapshot.subtotal,
            service_fee: fees.service,
            delivery_fee: fees.delivery,
        }
    }
}
