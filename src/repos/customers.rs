//! Customers repo, presents CRUD operations with db for customers
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::dsl::exists;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{Customer, NewCustomer, UpdateCustomer};
use repos::types::RepoResult;
use schema::customers::dsl::*;

/// Customers repository, responsible for handling customer profiles
pub struct CustomersRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait CustomersRepo {
    /// Find specific customer by ID
    fn find(&self, customer_id_arg: i32) -> RepoResult<Option<Customer>>;

    /// Find the customer profile of a user
    fn find_by_user_id(&self, user_id_arg: i32) -> RepoResult<Option<Customer>>;

    /// Checks that a user already has a customer profile
    fn user_exists(&self, user_id_arg: i32) -> RepoResult<bool>;

    /// Creates new customer
    fn create(&self, payload: NewCustomer) -> RepoResult<Customer>;

    /// Updates specific customer
    fn update(&self, customer_id_arg: i32, payload: UpdateCustomer) -> RepoResult<Customer>;

    /// Deletes specific customer
    fn delete(&self, customer_id_arg: i32) -> RepoResult<Customer>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> CustomersRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> CustomersRepo for CustomersRepoImpl<'a, T> {
    /// Find specific customer by ID
    fn find(&self, customer_id_arg: i32) -> RepoResult<Option<Customer>> {
        debug!("Find in customers with id {}.", customer_id_arg);
        let query = customers.find(customer_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in customers with id {} error occurred.", customer_id_arg))
                    .into()
            })
    }

    /// Find the customer profile of a user
    fn find_by_user_id(&self, user_id_arg: i32) -> RepoResult<Option<Customer>> {
        debug!("Find customer of user {}.", user_id_arg);
        let query = customers.filter(user_id.eq(user_id_arg));
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find customer of user {} error occurred.", user_id_arg))
                    .into()
            })
    }

    /// Checks that a user already has a customer profile
    fn user_exists(&self, user_id_arg: i32) -> RepoResult<bool> {
        debug!("Check if customer exists for user {}.", user_id_arg);
        let query = diesel::select(exists(customers.filter(user_id.eq(user_id_arg))));
        query.get_result(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Check if customer exists for user {} error occurred.", user_id_arg))
                .into()
        })
    }

    /// Creates new customer
    fn create(&self, payload: NewCustomer) -> RepoResult<Customer> {
        debug!("Create customer with payload {:?}.", payload);
        let query = diesel::insert_into(customers).values(&payload);
        query.get_result::<Customer>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create customer with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific customer
    fn update(&self, customer_id_arg: i32, payload: UpdateCustomer) -> RepoResult<Customer> {
        debug!("Updating customer with id {} and payload {:?}.", customer_id_arg, payload);
        let filter = customers.filter(id.eq(customer_id_arg));
        let query = diesel::update(filter).set(&payload);
        query.get_result::<Customer>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating customer with id {} error occurred.", customer_id_arg))
                .into()
        })
    }

    /// Deletes specific customer
    fn delete(&self, customer_id_arg: i32) -> RepoResult<Customer> {
        debug!("Delete customer with id {}.", customer_id_arg);
        let filtered = customers.filter(id.eq(customer_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<Customer>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete customer with id {} error occurred.", customer_id_arg))
                .into()
        })
    }
}
