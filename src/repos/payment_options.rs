//! Payment options repo, presents CRUD operations with db for payment options
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{NewPaymentOption, PaymentOption, UpdatePaymentOption};
use repos::types::RepoResult;
use schema::payment_options::dsl::*;

/// Payment options repository, responsible for handling the payment catalog
pub struct PaymentOptionsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait PaymentOptionsRepo {
    /// Find specific payment option by ID
    fn find(&self, payment_option_id_arg: i32) -> RepoResult<Option<PaymentOption>>;

    /// Returns all payment options
    fn list(&self) -> RepoResult<Vec<PaymentOption>>;

    /// Creates new payment option
    fn create(&self, payload: NewPaymentOption) -> RepoResult<PaymentOption>;

    /// Updates specific payment option
    fn update(&self, payment_option_id_arg: i32, payload: UpdatePaymentOption) -> RepoResult<PaymentOption>;

    /// Deletes specific payment option
    fn delete(&self, payment_option_id_arg: i32) -> RepoResult<PaymentOption>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> PaymentOptionsRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> PaymentOptionsRepo
    for PaymentOptionsRepoImpl<'a, T>
{
    /// Find specific payment option by ID
    fn find(&self, payment_option_id_arg: i32) -> RepoResult<Option<PaymentOption>> {
        debug!("Find in payment options with id {}.", payment_option_id_arg);
        let query = payment_options.find(payment_option_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in payment options with id {} error occurred.", payment_option_id_arg))
                    .into()
            })
    }

    /// Returns all payment options
    fn list(&self) -> RepoResult<Vec<PaymentOption>> {
        debug!("Find all payment options.");
        let query = payment_options.order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context("Find all payment options error occurred.")
                .into()
        })
    }

    /// Creates new payment option
    fn create(&self, payload: NewPaymentOption) -> RepoResult<PaymentOption> {
        debug!("Create payment option with payload {:?}.", payload);
        let query = diesel::insert_into(payment_options).values(&payload);
        query.get_result::<PaymentOption>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create payment option with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific payment option
    fn update(&self, payment_option_id_arg: i32, payload: UpdatePaymentOption) -> RepoResult<PaymentOption> {
        debug!("Updating payment option with id {} and payload {:?}.", payment_option_id_arg, payload);
        let filter = payment_options.filter(id.eq(payment_option_id_arg));
        let query = diesel::update(filter).set(&payload);
        query.get_result::<PaymentOption>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating payment option with id {} error occurred.", payment_option_id_arg))
                .into()
        })
    }

    /// Deletes specific payment option
    fn delete(&self, payment_option_id_arg: i32) -> RepoResult<PaymentOption> {
        debug!("Delete payment option with id {}.", payment_option_id_arg);
        let filtered = payment_options.filter(id.eq(payment_option_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<PaymentOption>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete payment option with id {} error occurred.", payment_option_id_arg))
                .into()
        })
    }
}
