use crate::models::{CartLine, Product, ProductId};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// In-memory shopping cart.
///
/// Lines are keyed by product id, so a product appears at most once, and
/// iterate in the order each product was first added.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    lines: IndexMap<ProductId, CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    ///
    /// An existing line is incremented in place; otherwise a new line with
    /// quantity 1 is appended after the existing ones.
    pub fn add(&mut self, product: &Product) {
        self.lines
            .entry(product.id)
            .and_modify(|line| line.quantity = line.quantity.saturating_add(1))
            .or_insert_with(|| CartLine::new(product.clone()));
    }

    /// Removes the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        self.lines.shift_remove(&product_id).is_some()
    }

    /// Sets the quantity of an existing line.
    ///
    /// Zero or a negative quantity removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.get_mut(&product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// The "+" button of a cart row.
    pub fn increment(&mut self, product_id: ProductId) {
        if let Some(quantity) = self.quantity(product_id) {
            self.update_quantity(product_id, i64::from(quantity) + 1);
        }
    }

    /// The "-" button of a cart row; dropping below 1 removes the line.
    pub fn decrement(&mut self, product_id: ProductId) {
        if let Some(quantity) = self.quantity(product_id) {
            self.update_quantity(product_id, i64::from(quantity) - 1);
        }
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.get(&product_id)
    }

    pub fn quantity(&self, product_id: ProductId) -> Option<u32> {
        self.get(product_id).map(|line| line.quantity)
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over all lines, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.lines()
            .map(CartLine::line_total)
            .fold(0, u64::saturating_add)
    }

    /// Sum of quantities, used for the header badge.
    pub fn item_count(&self) -> u64 {
        self.lines()
            .map(|line| u64::from(line.quantity))
            .fold(0, u64::saturating_add)
    }
}

// IndexMap equality ignores ordering; two carts are only equal when their
// lines match in order as well.
impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool {
        self.lines.len() == other.lines.len() && self.lines.iter().eq(other.lines.iter())
    }
}

impl Eq for Cart {}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.lines.values())
    }
}

/// Sum of `price * quantity` over all lines of `cart`.
pub fn cart_total(cart: &Cart) -> u64 {
    cart.total()
}

/// Sum of quantities over all lines of `cart`.
pub fn cart_item_count(cart: &Cart) -> u64 {
    cart.item_count()
}
