//! Shopping cart engine with derived totals
//!
//! Cart contents are mutated exclusively through intents processed by
//! [`Cart::apply`]. Prices are carried in integer minor units so totals stay
//! exact.

use serde::{Deserialize, Serialize};

/// Identifier for a product in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in minor currency units
    pub unit_price: u64,
}

/// One cart line: a product and how many of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line total in minor currency units
    pub fn line_total(&self) -> u64 {
        self.product.unit_price * u64::from(self.quantity)
    }
}

/// Discrete state-change requests accepted by the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartIntent {
    /// Add one of the product, merging into an existing line if present
    AddProduct(Product),
    /// Set a line's quantity; zero removes the line, missing ids are ignored
    SetQuantity(ProductId, u32),
    /// Remove a line; missing ids are ignored
    Remove(ProductId),
}

/// Ordered cart contents, one line per product id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes an intent and returns the next cart. Pure and total.
    pub fn apply(mut self, intent: CartIntent) -> Cart {
        match intent {
            CartIntent::AddProduct(product) => {
                match self.lines.iter_mut().find(|line| line.product.id == product.id) {
                    Some(line) => line.quantity += 1,
                    None => self.lines.push(CartLine {
                        product,
                        quantity: 1,
                    }),
                }
                self
            }
            CartIntent::SetQuantity(id, 0) => self.apply(CartIntent::Remove(id)),
            CartIntent::SetQuantity(id, quantity) => {
                if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == id) {
                    line.quantity = quantity;
                }
                self
            }
            CartIntent::Remove(id) => {
                self.lines.retain(|line| line.product.id != id);
                self
            }
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Cart total in minor currency units
    pub fn total_price(&self) -> u64 {
        self.lines.iter().map(|line| line.line_total()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: u64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("product-{id}"),
            unit_price: price,
        }
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn adding_same_product_merges_lines() {
        let cart = Cart::new()
            .apply(CartIntent::AddProduct(product(1, 500)))
            .apply(CartIntent::AddProduct(product(1, 500)));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity(), 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn set_quantity_updates_line() {
        let cart = Cart::new()
            .apply(CartIntent::AddProduct(product(1, 500)))
            .apply(CartIntent::SetQuantity(ProductId(1), 4));

        assert_eq!(cart.lines()[0].quantity(), 4);
        assert_eq!(cart.total_price(), 2000);
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let cart = Cart::new()
            .apply(CartIntent::AddProduct(product(1, 500)))
            .apply(CartIntent::SetQuantity(ProductId(1), 0));

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_missing_id_is_noop() {
        let cart = Cart::new().apply(CartIntent::AddProduct(product(1, 500)));
        let before = cart.clone();
        let after = cart.apply(CartIntent::SetQuantity(ProductId(9), 3));
        assert_eq!(before, after);
    }

    #[test]
    fn remove_drops_line() {
        let cart = Cart::new()
            .apply(CartIntent::AddProduct(product(1, 500)))
            .apply(CartIntent::AddProduct(product(2, 300)))
            .apply(CartIntent::Remove(ProductId(1)));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product().id, ProductId(2));
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let cart = Cart::new().apply(CartIntent::AddProduct(product(1, 500)));
        let before = cart.clone();
        let after = cart.apply(CartIntent::Remove(ProductId(9)));
        assert_eq!(before, after);
    }

    #[test]
    fn totals_match_line_contents() {
        let cart = Cart::new()
            .apply(CartIntent::AddProduct(product(1, 599900)))
            .apply(CartIntent::AddProduct(product(2, 199900)))
            .apply(CartIntent::AddProduct(product(1, 599900)));

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), 2 * 599900 + 199900);
    }
}
