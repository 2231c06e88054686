//! Payment options Services, presents CRUD operations with the payment catalog
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use failure::Fail;
use futures_cpupool::CpuPool;
use r2d2::{ManageConnection, Pool};
use validator::Validate;

use super::types::ServiceFuture;
use errors::Error;
use models::{NewPaymentOption, PaymentOption, UpdatePaymentOption};
use repos::ReposFactory;

pub trait PaymentOptionsService {
    /// Returns payment option by ID
    fn get(&self, payment_option_id: i32) -> ServiceFuture<PaymentOption>;
    /// Returns all payment options
    fn list(&self) -> ServiceFuture<Vec<PaymentOption>>;
    /// Creates new payment option
    fn create(&self, payload: NewPaymentOption) -> ServiceFuture<PaymentOption>;
    /// Updates specific payment option
    fn update(&self, payment_option_id: i32, payload: UpdatePaymentOption) -> ServiceFuture<PaymentOption>;
    /// Deletes specific payment option together with payments made with it
    fn delete(&self, payment_option_id: i32) -> ServiceFuture<PaymentOption>;
}

/// Payment options services
pub struct PaymentOptionsServiceImpl<
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
    M: ManageConnection<Connection = T>,
    F: ReposFactory<T>,
> {
    pub db_pool: Pool<M>,
    pub cpu_pool: CpuPool,
    pub user_id: Option<i32>,
    pub repo_factory: F,
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > PaymentOptionsServiceImpl<T, M, F>
{
    pub fn new(db_pool: Pool<M>, cpu_pool: CpuPool, user_id: Option<i32>, repo_factory: F) -> Self {
        Self {
            db_pool,
            cpu_pool,
            user_id,
            repo_factory,
        }
    }
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > PaymentOptionsService for PaymentOptionsServiceImpl<T, M, F>
{
    /// Returns payment option by ID
    fn get(&self, payment_option_id: i32) -> ServiceFuture<PaymentOption> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let payment_options_repo = repo_factory.create_payment_options_repo(&*conn);
                    payment_options_repo.find(payment_option_id).and_then(|option| {
                        if let Some(option) = option {
                            Ok(option)
                        } else {
                            Err(format_err!("Not found such payment option id : {}", payment_option_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service PaymentOptions, get endpoint error occurred.").into())
        }))
    }

    /// Returns all payment options
    fn list(&self) -> ServiceFuture<Vec<PaymentOption>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let payment_options_repo = repo_factory.create_payment_options_repo(&*conn);
                    payment_options_repo.list()
                }).map_err(|e: FailureError| e.context("Service PaymentOptions, list endpoint error occurred.").into())
        }))
    }

    /// Creates new payment option
    fn create(&self, payload: NewPaymentOption) -> ServiceFuture<PaymentOption> {
        let db_pool = self.db_pool.clone();
        let user_id = self.user_id;
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let mut payload = payload;
                    payload.created_by = user_id;
                    payload
                        .validate()
                        .map_err(|e| FailureError::from(Error::Validate(e)))
                        .and_then(|_| {
                            let payment_options_repo = repo_factory.create_payment_options_repo(&*conn);
                            payment_options_repo.create(payload)
                        })
                }).map_err(|e: FailureError| e.context("Service PaymentOptions, create endpoint error occurred.").into())
        }))
    }

    /// Updates specific payment option
    fn update(&self, payment_option_id: i32, payload: UpdatePaymentOption) -> ServiceFuture<PaymentOption> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    payload
                        .validate()
                        .map_err(|e| FailureError::from(Error::Validate(e)))
                        .and_then(|_| {
                            let payment_options_repo = repo_factory.create_payment_options_repo(&*conn);
                            payment_options_repo.update(payment_option_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service PaymentOptions, update endpoint error occurred.").into())
        }))
    }

    /// Deletes specific payment option together with payments made with it
    fn delete(&self, payment_option_id: i32) -> ServiceFuture<PaymentOption> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let payment_options_repo = repo_factory.create_payment_options_repo(&*conn);
                    let payments_repo = repo_factory.create_payments_repo(&*conn);
                    conn.transaction::<PaymentOption, FailureError, _>(move || {
                        payments_repo.delete_by_payment_option(payment_option_id)?;
                        payment_options_repo.delete(payment_option_id)
                    })
                }).map_err(|e: FailureError| e.context("Service PaymentOptions, delete endpoint error occurred.").into())
        }))
    }
}
