use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

use super::product::{LineItem, Product, ProductId};
use crate::basket_actor::BasketError;

/// Type-safe identifier for a basket session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasketId(pub u32);

impl From<u32> for BasketId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BasketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "basket_{}", self.0)
    }
}

/// The products a customer has selected, with derived totals.
///
/// Line items are keyed by [`ProductId`], so each product appears at most once and
/// iteration follows product id order. `item_count` and `subtotal` are caches: every mutation
/// recomputes them from `line_items`, so they can never drift from the items themselves.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait, so a
/// [`ResourceActor`](crate::framework::ResourceActor) can own one `Basket` per session.
/// See [`BasketAction`](crate::basket_actor::BasketAction) for the mutations it accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    pub id: BasketId,
    line_items: BTreeMap<ProductId, LineItem>,
    item_count: u64,
    subtotal: f64,
}

/// A consistent read of a basket at one point in time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BasketSnapshot {
    pub item_count: u64,
    pub subtotal: f64,
    pub line_items: Vec<LineItem>,
}

impl BasketSnapshot {
    /// Whether there is anything to show. Screens use this to hide basket affordances.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

impl Basket {
    /// Creates an empty basket.
    pub fn new(id: impl Into<BasketId>) -> Self {
        Self {
            id: id.into(),
            line_items: BTreeMap::new(),
            item_count: 0,
            subtotal: 0.0,
        }
    }

    /// Adds one unit of `product`. Returns the resulting quantity.
    pub fn add_product(&mut self, product: &Product) -> Result<u32, BasketError> {
        self.add_product_quantity(product, 1)
    }

    /// Adds `quantity` units of `product`. Returns the resulting quantity.
    ///
    /// A product already in the basket keeps its line item (and the name and price recorded
    /// when it was first added); only the quantity grows.
    ///
    /// # Errors
    /// * [`BasketError::InvalidQuantity`] if `quantity` is zero or negative.
    /// * [`BasketError::QuantityOverflow`] if the new quantity does not fit in a `u32`.
    ///
    /// The basket is unchanged when an error is returned.
    pub fn add_product_quantity(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<u32, BasketError> {
        if quantity <= 0 {
            return Err(BasketError::InvalidQuantity(quantity));
        }
        let current = self.quantity_of(&product.id);
        let updated = u32::try_from(quantity)
            .ok()
            .and_then(|increment| current.checked_add(increment))
            .ok_or(BasketError::QuantityOverflow {
                current,
                requested: quantity,
            })?;

        self.line_items
            .entry(product.id)
            .and_modify(|item| item.quantity = updated)
            .or_insert_with(|| LineItem::from_product(product, updated));
        self.recompute();
        Ok(updated)
    }

    /// Removes one unit of the product. Returns the remaining quantity.
    ///
    /// The line item disappears when its last unit is removed. Reducing a product that is not in
    /// the basket is a no-op and returns 0.
    pub fn reduce_product(&mut self, id: &ProductId) -> u32 {
        match self.quantity_of(id) {
            0 => return 0,
            1 => {
                self.line_items.remove(id);
            }
            _ => {
                if let Some(item) = self.line_items.get_mut(id) {
                    item.quantity -= 1;
                }
            }
        }
        self.recompute();
        self.quantity_of(id)
    }

    /// Empties the basket. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        if self.line_items.is_empty() {
            return false;
        }
        self.line_items.clear();
        self.recompute();
        true
    }

    /// Empties the basket and returns what it held, in one step.
    ///
    /// # Errors
    /// [`BasketError::EmptyBasket`] if there is nothing to take; the basket is unchanged.
    pub fn take_all(&mut self) -> Result<BasketSnapshot, BasketError> {
        if self.line_items.is_empty() {
            return Err(BasketError::EmptyBasket);
        }
        let taken = self.snapshot();
        self.line_items.clear();
        self.recompute();
        Ok(taken)
    }

    pub fn snapshot(&self) -> BasketSnapshot {
        BasketSnapshot {
            item_count: self.item_count,
            subtotal: self.subtotal,
            line_items: self.line_items.values().cloned().collect(),
        }
    }

    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.line_items.get(id).map_or(0, |item| item.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items.values()
    }

    fn recompute(&mut self) {
        self.item_count = self.line_items.values().map(|item| u64::from(item.quantity)).sum();
        self.subtotal = self.line_items.values().map(LineItem::line_total).sum();
    }
}
