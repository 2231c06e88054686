//! Shipping addresses repo, presents CRUD operations with db for shipping addresses
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::dsl::now;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{NewShippingAddress, ShippingAddress, UpdateShippingAddress};
use repos::types::RepoResult;
use schema::shipping_addresses::dsl::*;

/// Shipping addresses repository. References to customers and orders are
/// cleared instead of deleting the address row; `date_added` is rewritten on
/// every update.
pub struct ShippingAddressesRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait ShippingAddressesRepo {
    /// Find specific shipping address by ID
    fn find(&self, shipping_address_id_arg: i32) -> RepoResult<Option<ShippingAddress>>;

    /// Returns all shipping addresses attached to an order
    fn find_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<ShippingAddress>>;

    /// Creates new shipping address
    fn create(&self, payload: NewShippingAddress) -> RepoResult<ShippingAddress>;

    /// Updates specific shipping address, touching `date_added`
    fn update(&self, shipping_address_id_arg: i32, payload: UpdateShippingAddress) -> RepoResult<ShippingAddress>;

    /// Deletes specific shipping address
    fn delete(&self, shipping_address_id_arg: i32) -> RepoResult<ShippingAddress>;

    /// Clears the customer reference on all addresses of a customer
    fn nullify_customer(&self, customer_id_arg: i32) -> RepoResult<usize>;

    /// Clears the order reference on all addresses of an order
    fn nullify_order(&self, order_id_arg: i32) -> RepoResult<usize>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ShippingAddressesRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ShippingAddressesRepo
    for ShippingAddressesRepoImpl<'a, T>
{
    /// Find specific shipping address by ID
    fn find(&self, shipping_address_id_arg: i32) -> RepoResult<Option<ShippingAddress>> {
        debug!("Find in shipping addresses with id {}.", shipping_address_id_arg);
        let query = shipping_addresses.find(shipping_address_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in shipping addresses with id {} error occurred.", shipping_address_id_arg))
                    .into()
            })
    }

    /// Returns all shipping addresses attached to an order
    fn find_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<ShippingAddress>> {
        debug!("Find shipping addresses of order {}.", order_id_arg);
        let query = shipping_addresses.filter(order_id.eq(order_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find shipping addresses of order {} error occurred.", order_id_arg))
                .into()
        })
    }

    /// Creates new shipping address
    fn create(&self, payload: NewShippingAddress) -> RepoResult<ShippingAddress> {
        debug!("Create shipping address with payload {:?}.", payload);
        let query = diesel::insert_into(shipping_addresses).values(&payload);
        query.get_result::<ShippingAddress>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create shipping address with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific shipping address, touching `date_added`
    fn update(&self, shipping_address_id_arg: i32, payload: UpdateShippingAddress) -> RepoResult<ShippingAddress> {
        debug!("Updating shipping address with id {} and payload {:?}.", shipping_address_id_arg, payload);
        let filter = shipping_addresses.filter(id.eq(shipping_address_id_arg));
        let query = diesel::update(filter).set((&payload, date_added.eq(now)));
        query.get_result::<ShippingAddress>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating shipping address with id {} error occurred.", shipping_address_id_arg))
                .into()
        })
    }

    /// Deletes specific shipping address
    fn delete(&self, shipping_address_id_arg: i32) -> RepoResult<ShippingAddress> {
        debug!("Delete shipping address with id {}.", shipping_address_id_arg);
        let filtered = shipping_addresses.filter(id.eq(shipping_address_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<ShippingAddress>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete shipping address with id {} error occurred.", shipping_address_id_arg))
                .into()
        })
    }

    /// Clears the customer reference on all addresses of a customer
    fn nullify_customer(&self, customer_id_arg: i32) -> RepoResult<usize> {
        debug!("Detach customer {} from shipping addresses.", customer_id_arg);
        let filtered = shipping_addresses.filter(customer_id.eq(customer_id_arg));
        let query = diesel::update(filtered).set(customer_id.eq(None::<i32>));
        query.execute(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Detach customer {} from shipping addresses error occurred.", customer_id_arg))
                .into()
        })
    }

    /// Clears the order reference on all addresses of an order
    fn nullify_order(&self, order_id_arg: i32) -> RepoResult<usize> {
        debug!("Detach order {} from shipping addresses.", order_id_arg);
        let filtered = shipping_addresses.filter(order_id.eq(order_id_arg));
        let query = diesel::update(filtered).set(order_id.eq(None::<i32>));
        query.execute(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Detach order {} from shipping addresses error occurred.", order_id_arg))
                .into()
        })
    }
}
