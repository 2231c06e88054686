//! Orders repo, presents CRUD operations with db for orders
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{NewOrder, Order, UpdateOrder};
use repos::types::RepoResult;
use schema::orders::dsl::*;

/// Orders repository, responsible for handling orders
pub struct OrdersRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait OrdersRepo {
    /// Find specific order by ID
    fn find(&self, order_id_arg: i32) -> RepoResult<Option<Order>>;

    /// Returns all orders of a customer
    fn find_by_customer(&self, customer_id_arg: i32) -> RepoResult<Vec<Order>>;

    /// Returns all orders placed with a store
    fn find_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<Order>>;

    /// Creates new order
    fn create(&self, payload: NewOrder) -> RepoResult<Order>;

    /// Updates specific order
    fn update(&self, order_id_arg: i32, payload: UpdateOrder) -> RepoResult<Order>;

    /// Deletes specific order
    fn delete(&self, order_id_arg: i32) -> RepoResult<Order>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> OrdersRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> OrdersRepo for OrdersRepoImpl<'a, T> {
    /// Find specific order by ID
    fn find(&self, order_id_arg: i32) -> RepoResult<Option<Order>> {
        debug!("Find in orders with id {}.", order_id_arg);
        let query = orders.find(order_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in orders with id {} error occurred.", order_id_arg))
                    .into()
            })
    }

    /// Returns all orders of a customer
    fn find_by_customer(&self, customer_id_arg: i32) -> RepoResult<Vec<Order>> {
        debug!("Find orders of customer {}.", customer_id_arg);
        let query = orders.filter(customer_id.eq(customer_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find orders of customer {} error occurred.", customer_id_arg))
                .into()
        })
    }

    /// Returns all orders placed with a store
    fn find_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<Order>> {
        debug!("Find orders of store {}.", store_id_arg);
        let query = orders.filter(store_id.eq(store_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find orders of store {} error occurred.", store_id_arg))
                .into()
        })
    }

    /// Creates new order
    fn create(&self, payload: NewOrder) -> RepoResult<Order> {
        debug!("Create order with payload {:?}.", payload);
        let query = diesel::insert_into(orders).values(&payload);
        query.get_result::<Order>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create order with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific order
    fn update(&self, order_id_arg: i32, payload: UpdateOrder) -> RepoResult<Order> {
        debug!("Updating order with id {} and payload {:?}.", order_id_arg, payload);
        let filter = orders.filter(id.eq(order_id_arg));
        let query = diesel::update(filter).set(&payload);
        query.get_result::<Order>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating order with id {} error occurred.", order_id_arg))
                .into()
        })
    }

    /// Deletes specific order
    fn delete(&self, order_id_arg: i32) -> RepoResult<Order> {
        debug!("Delete order with id {}.", order_id_arg);
        let filtered = orders.filter(id.eq(order_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<Order>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete order with id {} error occurred.", order_id_arg))
                .into()
        })
    }
}
