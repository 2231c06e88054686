//! Module containg order model for query, insert, update
use std::time::SystemTime;

use num_traits::Zero;
use rust_decimal::Decimal;
use validator::Validate;

use models::validation_rules::*;
use models::{OrderItem, Product, ProductVariant};
use schema::orders;

/// Payload for querying orders
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "orders"]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub store_id: i32,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: SystemTime,
}

fn default_status() -> String {
    "Pending".to_string()
}

/// Payload for creating orders
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "orders"]
pub struct NewOrder {
    pub customer_id: i32,
    pub store_id: i32,
    #[validate(custom = "validate_non_negative")]
    pub total_amount: Decimal,
    #[serde(default = "default_status")]
    #[validate(length(min = "1", max = "20", message = "Status must not be empty"))]
    pub status: String,
}

/// Payload for updating orders
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "orders"]
pub struct UpdateOrder {
    #[validate(custom = "validate_non_negative")]
    pub total_amount: Option<Decimal>,
    #[validate(length(min = "1", max = "20", message = "Status must not be empty"))]
    pub status: Option<String>,
}

/// Order line item together with the variant it was bought as and the
/// variant's parent product.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderItemWithProduct {
    pub order_item: OrderItem,
    pub product_variant: ProductVariant,
    pub product: Product,
}

impl OrderItemWithProduct {
    pub fn new(order_item: OrderItem, product_variant: ProductVariant, product: Product) -> Self {
        Self {
            order_item,
            product_variant,
            product,
        }
    }

    /// Line total: the variant's current price times the ordered quantity.
    /// The price snapshot stored on the line item is left untouched, so a
    /// variant price change shows up in this value.
    pub fn total(&self) -> Decimal {
        self.product_variant.price * Decimal::from(self.order_item.quantity)
    }
}

/// Order together with its line items
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItemWithProduct>,
}

impl OrderWithItems {
    pub fn new(order: Order, items: Vec<OrderItemWithProduct>) -> Self {
        Self { order, items }
    }

    /// Sum of line totals at current variant prices.
    pub fn cart_total(&self) -> Decimal {
        self.items.iter().fold(Decimal::zero(), |total, item| total + item.total())
    }

    /// Total number of ordered units across line items.
    pub fn cart_items(&self) -> i32 {
        self.items.iter().map(|item| item.order_item.quantity).sum()
    }

    /// An order needs shipping when at least one line is a physical product.
    pub fn shipping(&self) -> bool {
        self.items.iter().any(|item| !item.product.digital)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_order() -> Order {
        Order {
            id: 1,
            customer_id: 1,
            store_id: 1,
            total_amount: Decimal::new(110000, 2),
            status: "Pending".to_string(),
            created_at: SystemTime::now(),
        }
    }

    fn create_product(digital: bool) -> Product {
        Product {
            id: 1,
            store_id: 1,
            category_id: 1,
            name: "Phone X".to_string(),
            description: None,
            price: Decimal::new(50000, 2),
            stock: 10,
            image: None,
            available: true,
            digital: digital,
            created_on: SystemTime::now(),
            created_by: None,
        }
    }

    fn create_variant(price: Decimal) -> ProductVariant {
        ProductVariant {
            id: 1,
            product_id: 1,
            name: "128GB".to_string(),
            price: price,
            stock: 5,
            additional_info: None,
            available: true,
            created_on: SystemTime::now(),
            created_by: None,
        }
    }

    fn create_order_item(quantity: i32, price: Decimal) -> OrderItem {
        OrderItem {
            id: 1,
            order_id: 1,
            product_variant_id: 1,
            quantity: quantity,
            price: price,
            created_at: SystemTime::now(),
        }
    }

    #[test]
    fn cart_total_uses_current_variant_price() {
        let variant_price = Decimal::new(55000, 2);
        let item = OrderItemWithProduct::new(
            create_order_item(2, variant_price),
            create_variant(variant_price),
            create_product(false),
        );
        let order = OrderWithItems::new(create_order(), vec![item]);
        assert_eq!(order.cart_total(), Decimal::new(110000, 2));
        assert_eq!(order.cart_items(), 2);
        assert!(order.shipping());
    }

    #[test]
    fn variant_price_change_shows_up_in_totals_but_not_in_snapshot() {
        let snapshot = Decimal::new(55000, 2);
        let raised = Decimal::new(60000, 2);
        let item = OrderItemWithProduct::new(create_order_item(2, snapshot), create_variant(raised), create_product(true));
        assert_eq!(item.total(), Decimal::new(120000, 2));
        assert_eq!(item.order_item.price, snapshot);
    }

    #[test]
    fn cart_items_sums_quantities_across_lines() {
        let price = Decimal::new(55000, 2);
        let first = OrderItemWithProduct::new(create_order_item(2, price), create_variant(price), create_product(true));
        let second = OrderItemWithProduct::new(create_order_item(3, price), create_variant(price), create_product(true));
        let order = OrderWithItems::new(create_order(), vec![first, second]);
        assert_eq!(order.cart_items(), 5);
    }

    #[test]
    fn fully_digital_order_needs_no_shipping() {
        let price = Decimal::new(55000, 2);
        let item = OrderItemWithProduct::new(create_order_item(1, price), create_variant(price), create_product(true));
        let order = OrderWithItems::new(create_order(), vec![item]);
        assert!(!order.shipping());
    }
}
