//! Customers Services, presents CRUD operations with customer profiles
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use failure::Fail;
use futures_cpupool::CpuPool;
use r2d2::{ManageConnection, Pool};
use validator::Validate;

use super::cascades;
use super::types::ServiceFuture;
use errors::Error;
use models::{Customer, NewCustomer, UpdateCustomer};
use repos::ReposFactory;

pub trait CustomersService {
    /// Returns customer by ID
    fn get(&self, customer_id: i32) -> ServiceFuture<Customer>;
    /// Returns the customer profile of a user
    fn find_by_user(&self, user_id: i32) -> ServiceFuture<Option<Customer>>;
    /// Creates new customer profile, exactly one per user
    fn create(&self, payload: NewCustomer) -> ServiceFuture<Customer>;
    /// Updates specific customer
    fn update(&self, customer_id: i32, payload: UpdateCustomer) -> ServiceFuture<Customer>;
    /// Deletes specific customer together with the customer's orders;
    /// shipping addresses are detached, not deleted
    fn delete(&self, customer_id: i32) -> ServiceFuture<Customer>;
    /// Removes everything owned by a user: the user's stores with their
    /// dependents and the user's customer profile with its orders
    fn delete_user_data(&self, user_id: i32) -> ServiceFuture<()>;
}

/// Customers services
pub struct CustomersServiceImpl<
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
    > CustomersServiceImpl<T, M, F>
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
    > CustomersService for CustomersServiceImpl<T, M, F>
{
    /// Returns customer by ID
    fn get(&self, customer_id: i32) -> ServiceFuture<Customer> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let customers_repo = repo_factory.create_customers_repo(&*conn);
                    customers_repo.find(customer_id).and_then(|customer| {
                        if let Some(customer) = customer {
                            Ok(customer)
                        } else {
                            Err(format_err!("Not found such customer id : {}", customer_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service Customers, get endpoint error occurred.").into())
        }))
    }

    /// Returns the customer profile of a user
    fn find_by_user(&self, user_id: i32) -> ServiceFuture<Option<Customer>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let customers_repo = repo_factory.create_customers_repo(&*conn);
                    customers_repo.find_by_user_id(user_id)
                }).map_err(|e: FailureError| e.context("Service Customers, find by user endpoint error occurred.").into())
        }))
    }

    /// Creates new customer profile, exactly one per user
    fn create(&self, payload: NewCustomer) -> ServiceFuture<Customer> {
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
                            let customers_repo = repo_factory.create_customers_repo(&*conn);
                            conn.transaction::<Customer, FailureError, _>(move || {
                                if customers_repo.user_exists(payload.user_id)? {
                                    return Err(format_err!("User {} already has a customer profile.", payload.user_id)
                                        .context(Error::Validate(validation_errors!({
                                            "user_id": ["exists" => "User already has a customer profile"]
                                        }))).into());
                                }
                                customers_repo.create(payload)
                            })
                        })
                }).map_err(|e: FailureError| e.context("Service Customers, create endpoint error occurred.").into())
        }))
    }

    /// Updates specific customer
    fn update(&self, customer_id: i32, payload: UpdateCustomer) -> ServiceFuture<Customer> {
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
                            let customers_repo = repo_factory.create_customers_repo(&*conn);
                            customers_repo.update(customer_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Customers, update endpoint error occurred.").into())
        }))
    }

    /// Deletes specific customer together with the customer's orders;
    /// shipping addresses are detached, not deleted
    fn delete(&self, customer_id: i32) -> ServiceFuture<Customer> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let customers_repo = repo_factory.create_customers_repo(&*conn);
                    let orders_repo = repo_factory.create_orders_repo(&*conn);
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    let payments_repo = repo_factory.create_payments_repo(&*conn);
                    let shipping_addresses_repo = repo_factory.create_shipping_addresses_repo(&*conn);
                    conn.transaction::<Customer, FailureError, _>(move || {
                        let orders = orders_repo.find_by_customer(customer_id)?;
                        for order in orders {
                            cascades::delete_order_dependents(order.id, &*order_items_repo, &*payments_repo, &*shipping_addresses_repo)?;
                            orders_repo.delete(order.id)?;
                        }
                        shipping_addresses_repo.nullify_customer(customer_id)?;
                        customers_repo.delete(customer_id)
                    })
                }).map_err(|e: FailureError| e.context("Service Customers, delete endpoint error occurred.").into())
        }))
    }

    /// Removes everything owned by a user: the user's stores with their
    /// dependents and the user's customer profile with its orders
    fn delete_user_data(&self, user_id: i32) -> ServiceFuture<()> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let stores_repo = repo_factory.create_stores_repo(&*conn);
                    let store_locations_repo = repo_factory.create_store_locations_repo(&*conn);
                    let products_repo = repo_factory.create_products_repo(&*conn);
                    let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                    let customers_repo = repo_factory.create_customers_repo(&*conn);
                    let orders_repo = repo_factory.create_orders_repo(&*conn);
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    let payments_repo = repo_factory.create_payments_repo(&*conn);
                    let shipping_addresses_repo = repo_factory.create_shipping_addresses_repo(&*conn);
                    conn.transaction::<(), FailureError, _>(move || {
                        let stores = stores_repo.find_by_user_id(user_id)?;
                        for store in stores {
                            cascades::delete_store_dependents(
                                store.id,
                                &*store_locations_repo,
                                &*products_repo,
                                &*product_variants_repo,
                                &*orders_repo,
                                &*order_items_repo,
                                &*payments_repo,
                                &*shipping_addresses_repo,
                            )?;
                            stores_repo.delete(store.id)?;
                        }
                        if let Some(customer) = customers_repo.find_by_user_id(user_id)? {
                            let orders = orders_repo.find_by_customer(customer.id)?;
                            for order in orders {
                                cascades::delete_order_dependents(
                                    order.id,
                                    &*order_items_repo,
                                    &*payments_repo,
                                    &*shipping_addresses_repo,
                                )?;
                                orders_repo.delete(order.id)?;
                            }
                            shipping_addresses_repo.nullify_customer(customer.id)?;
                            customers_repo.delete(customer.id)?;
                        }
                        Ok(())
                    })
                }).map_err(|e: FailureError| e.context("Service Customers, delete user data endpoint error occurred.").into())
        }))
    }
}

#[cfg(test)]
pub mod tests {
    use futures_cpupool::CpuPool;
    use r2d2;
    use tokio_core::reactor::Core;

    use models::*;
    use repos::repo_factory::tests::*;
    use services::customers::{CustomersService, CustomersServiceImpl};

    fn create_customers_service(user_id: Option<i32>) -> CustomersServiceImpl<MockConnection, MockConnectionManager, ReposFactoryMock> {
        let manager = MockConnectionManager::default();
        let db_pool = r2d2::Pool::builder().build(manager).expect("Failed to create connection pool");
        let cpu_pool = CpuPool::new(1);

        CustomersServiceImpl {
            db_pool: db_pool,
            cpu_pool: cpu_pool,
            user_id: user_id,
            repo_factory: MOCK_REPO_FACTORY,
        }
    }

    pub fn create_new_customer(user_id: i32) -> NewCustomer {
        NewCustomer {
            user_id: user_id,
            address: Some("1 Mission street".to_string()),
            phone: Some("+14155550123".to_string()),
        }
    }

    #[test]
    fn test_get_customer() {
        let mut core = Core::new().unwrap();
        let service = create_customers_service(Some(MOCK_USER_ID));
        let work = service.get(1);
        let result = core.run(work).unwrap();
        assert_eq!(result.id, 1);
    }

    #[test]
    fn test_find_by_user() {
        let mut core = Core::new().unwrap();
        let service = create_customers_service(Some(MOCK_USER_ID));
        let work = service.find_by_user(MOCK_USER_ID);
        let result = core.run(work).unwrap();
        assert_eq!(result.unwrap().user_id, MOCK_USER_ID);
    }

    #[test]
    fn test_create_customer() {
        let mut core = Core::new().unwrap();
        let service = create_customers_service(Some(2));
        let work = service.create(create_new_customer(2));
        let result = core.run(work).unwrap();
        assert_eq!(result.user_id, 2);
    }

    #[test]
    fn test_create_second_customer_for_same_user() {
        let mut core = Core::new().unwrap();
        let service = create_customers_service(Some(MOCK_USER_ID));
        let work = service.create(create_new_customer(MOCK_USER_ID));
        let result = core.run(work);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_customer_with_bad_phone() {
        let mut core = Core::new().unwrap();
        let service = create_customers_service(Some(2));
        let mut payload = create_new_customer(2);
        payload.phone = Some("bad phone".to_string());
        let work = service.create(payload);
        let result = core.run(work);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_customer_keeps_shipping_addresses() {
        let mut core = Core::new().unwrap();
        let service = create_customers_service(Some(MOCK_USER_ID));
        let work = service.delete(1);
        let result = core.run(work).unwrap();
        assert_eq!(result.id, 1);
    }

    #[test]
    fn test_delete_user_data() {
        let mut core = Core::new().unwrap();
        let service = create_customers_service(Some(MOCK_USER_ID));
        let work = service.delete_user_data(MOCK_USER_ID);
        core.run(work).unwrap();
    }
}
