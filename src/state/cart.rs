use chrono::NaiveDateTime;

use super::data::{Product, ProductStatus};

/// One line in the shopping cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: u32,
    pub product_name: String,
    pub unit_price: u64,
    pub stock_quantity: u32,
    pub status: ProductStatus,
    pub created_date: NaiveDateTime,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name.clone(),
            unit_price: product.unit_price,
            stock_quantity: product.stock_quantity,
            status: product.status,
            created_date: product.created_date,
        }
    }
}

/// The single shopping cart for the session
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding a product that is already in the cart refreshes its stock
    /// quantity instead of adding a second line.
    pub fn add(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => existing.stock_quantity = item.stock_quantity,
            None => self.items.push(item),
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::tests::product;

    #[test]
    fn test_add_new_products() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());

        cart.add(CartItem::from(&product(1, 100, None)));
        cart.add(CartItem::from(&product(2, 200, None)));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[1].unit_price, 200);
    }

    #[test]
    fn test_duplicate_updates_stock_quantity() {
        let mut cart = Cart::new();
        let mut item = CartItem::from(&product(1, 100, None));
        cart.add(item.clone());

        item.stock_quantity = 3;
        cart.add(item);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].stock_quantity, 3);
    }
}
