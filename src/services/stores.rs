//! Stores Services, presents CRUD operations with stores and their locations
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
use models::{NewStore, NewStoreLocation, Store, StoreLocation, UpdateStore, UpdateStoreLocation};
use repos::ReposFactory;

pub trait StoresService {
    /// Returns store by ID
    fn get(&self, store_id: i32) -> ServiceFuture<Store>;
    /// Returns all stores owned by a user
    fn list_by_user(&self, user_id: i32) -> ServiceFuture<Vec<Store>>;
    /// Creates new store
    fn create(&self, payload: NewStore) -> ServiceFuture<Store>;
    /// Updates specific store
    fn update(&self, store_id: i32, payload: UpdateStore) -> ServiceFuture<Store>;
    /// Deletes specific store together with its locations, products,
    /// product variants, orders and their line items and payments
    fn delete(&self, store_id: i32) -> ServiceFuture<Store>;
    /// Returns store location by ID
    fn get_location(&self, store_location_id: i32) -> ServiceFuture<StoreLocation>;
    /// Returns all locations of a store
    fn list_locations(&self, store_id: i32) -> ServiceFuture<Vec<StoreLocation>>;
    /// Creates new store location
    fn create_location(&self, payload: NewStoreLocation) -> ServiceFuture<StoreLocation>;
    /// Updates specific store location
    fn update_location(&self, store_location_id: i32, payload: UpdateStoreLocation) -> ServiceFuture<StoreLocation>;
    /// Deletes specific store location
    fn delete_location(&self, store_location_id: i32) -> ServiceFuture<StoreLocation>;
}

/// Stores services
pub struct StoresServiceImpl<
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
    > StoresServiceImpl<T, M, F>
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
    > StoresService for StoresServiceImpl<T, M, F>
{
    /// Returns store by ID
    fn get(&self, store_id: i32) -> ServiceFuture<Store> {
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
                    stores_repo.find(store_id).and_then(|store| {
                        if let Some(store) = store {
                            Ok(store)
                        } else {
                            Err(format_err!("Not found such store id : {}", store_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service Stores, get endpoint error occurred.").into())
        }))
    }

    /// Returns all stores owned by a user
    fn list_by_user(&self, user_id: i32) -> ServiceFuture<Vec<Store>> {
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
                    stores_repo.find_by_user_id(user_id)
                }).map_err(|e: FailureError| e.context("Service Stores, list by user endpoint error occurred.").into())
        }))
    }

    /// Creates new store
    fn create(&self, payload: NewStore) -> ServiceFuture<Store> {
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
                            let stores_repo = repo_factory.create_stores_repo(&*conn);
                            stores_repo.create(payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Stores, create endpoint error occurred.").into())
        }))
    }

    /// Updates specific store
    fn update(&self, store_id: i32, payload: UpdateStore) -> ServiceFuture<Store> {
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
                            let stores_repo = repo_factory.create_stores_repo(&*conn);
                            stores_repo.update(store_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Stores, update endpoint error occurred.").into())
        }))
    }

    /// Deletes specific store together with its locations, products,
    /// product variants, orders and their line items and payments
    fn delete(&self, store_id: i32) -> ServiceFuture<Store> {
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
                    let orders_repo = repo_factory.create_orders_repo(&*conn);
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    let payments_repo = repo_factory.create_payments_repo(&*conn);
                    let shipping_addresses_repo = repo_factory.create_shipping_addresses_repo(&*conn);
                    conn.transaction::<Store, FailureError, _>(move || {
                        cascades::delete_store_dependents(
                            store_id,
                            &*store_locations_repo,
                            &*products_repo,
                            &*product_variants_repo,
                            &*orders_repo,
                            &*order_items_repo,
                            &*payments_repo,
                            &*shipping_addresses_repo,
                        )?;
                        stores_repo.delete(store_id)
                    })
                }).map_err(|e: FailureError| e.context("Service Stores, delete endpoint error occurred.").into())
        }))
    }

    /// Returns store location by ID
    fn get_location(&self, store_location_id: i32) -> ServiceFuture<StoreLocation> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let store_locations_repo = repo_factory.create_store_locations_repo(&*conn);
                    store_locations_repo.find(store_location_id).and_then(|location| {
                        if let Some(location) = location {
                            Ok(location)
                        } else {
                            Err(format_err!("Not found such store location id : {}", store_location_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service Stores, get location endpoint error occurred.").into())
        }))
    }

    /// Returns all locations of a store
    fn list_locations(&self, store_id: i32) -> ServiceFuture<Vec<StoreLocation>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let store_locations_repo = repo_factory.create_store_locations_repo(&*conn);
                    store_locations_repo.find_by_store(store_id)
                }).map_err(|e: FailureError| e.context("Service Stores, list locations endpoint error occurred.").into())
        }))
    }

    /// Creates new store location
    fn create_location(&self, payload: NewStoreLocation) -> ServiceFuture<StoreLocation> {
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
                            let stores_repo = repo_factory.create_stores_repo(&*conn);
                            let store_locations_repo = repo_factory.create_store_locations_repo(&*conn);
                            conn.transaction::<StoreLocation, FailureError, _>(move || {
                                stores_repo.find(payload.store_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such store id : {}", payload.store_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                store_locations_repo.create(payload)
                            })
                        })
                }).map_err(|e: FailureError| e.context("Service Stores, create location endpoint error occurred.").into())
        }))
    }

    /// Updates specific store location
    fn update_location(&self, store_location_id: i32, payload: UpdateStoreLocation) -> ServiceFuture<StoreLocation> {
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
                            let store_locations_repo = repo_factory.create_store_locations_repo(&*conn);
                            store_locations_repo.update(store_location_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Stores, update location endpoint error occurred.").into())
        }))
    }

    /// Deletes specific store location
    fn delete_location(&self, store_location_id: i32) -> ServiceFuture<StoreLocation> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let store_locations_repo = repo_factory.create_store_locations_repo(&*conn);
                    store_locations_repo.delete(store_location_id)
                }).map_err(|e: FailureError| e.context("Service Stores, delete location endpoint error occurred.").into())
        }))
    }
}
