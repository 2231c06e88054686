//! Payments repo, presents CRUD operations with db for payments
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::dsl::exists;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{NewPayment, Payment};
use repos::types::RepoResult;
use schema::payments::dsl::*;

/// Payments repository, responsible for handling order payments
pub struct PaymentsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait PaymentsRepo {
    /// Find specific payment by ID
    fn find(&self, payment_id_arg: i32) -> RepoResult<Option<Payment>>;

    /// Returns all payments of an order
    fn find_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<Payment>>;

    /// Checks that transaction id already exists
    fn transaction_id_exists(&self, transaction_id_arg: String) -> RepoResult<bool>;

    /// Creates new payment
    fn create(&self, payload: NewPayment) -> RepoResult<Payment>;

    /// Deletes all payments of an order, returns the deleted rows
    fn delete_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<Payment>>;

    /// Deletes all payments made with a payment option, returns the deleted rows
    fn delete_by_payment_option(&self, payment_option_id_arg: i32) -> RepoResult<Vec<Payment>>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> PaymentsRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> PaymentsRepo for PaymentsRepoImpl<'a, T> {
    /// Find specific payment by ID
    fn find(&self, payment_id_arg: i32) -> RepoResult<Option<Payment>> {
        debug!("Find in payments with id {}.", payment_id_arg);
        let query = payments.find(payment_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in payments with id {} error occurred.", payment_id_arg))
                    .into()
            })
    }

    /// Returns all payments of an order
    fn find_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<Payment>> {
        debug!("Find payments of order {}.", order_id_arg);
        let query = payments.filter(order_id.eq(order_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find payments of order {} error occurred.", order_id_arg))
                .into()
        })
    }

    /// Checks that transaction id already exists
    fn transaction_id_exists(&self, transaction_id_arg: String) -> RepoResult<bool> {
        debug!("Check if transaction id {} exists.", transaction_id_arg);
        let query = diesel::select(exists(payments.filter(transaction_id.eq(transaction_id_arg.clone()))));
        query.get_result(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Check if transaction id {} exists error occurred.", transaction_id_arg))
                .into()
        })
    }

    /// Creates new payment
    fn create(&self, payload: NewPayment) -> RepoResult<Payment> {
        debug!("Create payment with payload {:?}.", payload);
        let query = diesel::insert_into(payments).values(&payload);
        query.get_result::<Payment>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create payment with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Deletes all payments of an order, returns the deleted rows
    fn delete_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<Payment>> {
        debug!("Delete payments of order {}.", order_id_arg);
        let filtered = payments.filter(order_id.eq(order_id_arg));
        let query = diesel::delete(filtered);
        query.get_results::<Payment>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete payments of order {} error occurred.", order_id_arg))
                .into()
        })
    }

    /// Deletes all payments made with a payment option, returns the deleted rows
    fn delete_by_payment_option(&self, payment_option_id_arg: i32) -> RepoResult<Vec<Payment>> {
        debug!("Delete payments of payment option {}.", payment_option_id_arg);
        let filtered = payments.filter(payment_option_id.eq(payment_option_id_arg));
        let query = diesel::delete(filtered);
        query.get_results::<Payment>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete payments of payment option {} error occurred.", payment_option_id_arg))
                .into()
        })
    }
}
