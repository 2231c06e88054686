//! Order items repo, presents CRUD operations with db for order line items
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{NewOrderItem, OrderItem, OrderItemWithProduct, Product, ProductVariant};
use repos::types::RepoResult;
use schema::order_items::dsl::*;
use schema::product_variants;
use schema::products;

/// Order items repository, responsible for handling order line items
pub struct OrderItemsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait OrderItemsRepo {
    /// Find specific order item by ID
    fn find(&self, order_item_id_arg: i32) -> RepoResult<Option<OrderItem>>;

    /// Returns all line items of an order
    fn find_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<OrderItem>>;

    /// Returns all line items of an order joined with their variant and product
    fn find_with_products(&self, order_id_arg: i32) -> RepoResult<Vec<OrderItemWithProduct>>;

    /// Creates new order item with the price snapshot carried in the payload
    fn create(&self, payload: NewOrderItem) -> RepoResult<OrderItem>;

    /// Deletes specific order item
    fn delete(&self, order_item_id_arg: i32) -> RepoResult<OrderItem>;

    /// Deletes all line items of an order, returns the deleted rows
    fn delete_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<OrderItem>>;

    /// Deletes all line items referencing a product variant, returns the deleted rows
    fn delete_by_product_variant(&self, product_variant_id_arg: i32) -> RepoResult<Vec<OrderItem>>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> OrderItemsRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> OrderItemsRepo for OrderItemsRepoImpl<'a, T> {
    /// Find specific order item by ID
    fn find(&self, order_item_id_arg: i32) -> RepoResult<Option<OrderItem>> {
        debug!("Find in order items with id {}.", order_item_id_arg);
        let query = order_items.find(order_item_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in order items with id {} error occurred.", order_item_id_arg))
                    .into()
            })
    }

    /// Returns all line items of an order
    fn find_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<OrderItem>> {
        debug!("Find line items of order {}.", order_id_arg);
        let query = order_items.filter(order_id.eq(order_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find line items of order {} error occurred.", order_id_arg))
                .into()
        })
    }

    /// Returns all line items of an order joined with their variant and product
    fn find_with_products(&self, order_id_arg: i32) -> RepoResult<Vec<OrderItemWithProduct>> {
        debug!("Find line items with products of order {}.", order_id_arg);
        let query = order_items
            .inner_join(product_variants::table.inner_join(products::table))
            .filter(order_id.eq(order_id_arg))
            .order(id);
        query
            .get_results::<(OrderItem, (ProductVariant, Product))>(self.db_conn)
            .map(|lines| {
                lines
                    .into_iter()
                    .map(|(item, (variant, product))| OrderItemWithProduct::new(item, variant, product))
                    .collect()
            }).map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find line items with products of order {} error occurred.", order_id_arg))
                    .into()
            })
    }

    /// Creates new order item with the price snapshot carried in the payload
    fn create(&self, payload: NewOrderItem) -> RepoResult<OrderItem> {
        debug!("Create order item with payload {:?}.", payload);
        let query = diesel::insert_into(order_items).values(&payload);
        query.get_result::<OrderItem>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create order item with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Deletes specific order item
    fn delete(&self, order_item_id_arg: i32) -> RepoResult<OrderItem> {
        debug!("Delete order item with id {}.", order_item_id_arg);
        let filtered = order_items.filter(id.eq(order_item_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<OrderItem>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete order item with id {} error occurred.", order_item_id_arg))
                .into()
        })
    }

    /// Deletes all line items of an order, returns the deleted rows
    fn delete_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<OrderItem>> {
        debug!("Delete line items of order {}.", order_id_arg);
        let filtered = order_items.filter(order_id.eq(order_id_arg));
        let query = diesel::delete(filtered);
        query.get_results::<OrderItem>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete line items of order {} error occurred.", order_id_arg))
                .into()
        })
    }

    /// Deletes all line items referencing a product variant, returns the deleted rows
    fn delete_by_product_variant(&self, product_variant_id_arg: i32) -> RepoResult<Vec<OrderItem>> {
        debug!("Delete line items of product variant {}.", product_variant_id_arg);
        let filtered = order_items.filter(product_variant_id.eq(product_variant_id_arg));
        let query = diesel::delete(filtered);
        query.get_results::<OrderItem>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete line items of product variant {} error occurred.", product_variant_id_arg))
                .into()
        })
    }
}
