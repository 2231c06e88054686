//! Stores repo, presents CRUD operations with db for stores
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{NewStore, Store, UpdateStore};
use repos::types::RepoResult;
use schema::stores::dsl::*;

/// Stores repository, responsible for handling stores
pub struct StoresRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait StoresRepo {
    /// Find specific store by ID
    fn find(&self, store_id_arg: i32) -> RepoResult<Option<Store>>;

    /// Returns all stores owned by a user
    fn find_by_user_id(&self, user_id_arg: i32) -> RepoResult<Vec<Store>>;

    /// Creates new store
    fn create(&self, payload: NewStore) -> RepoResult<Store>;

    /// Updates specific store
    fn update(&self, store_id_arg: i32, payload: UpdateStore) -> RepoResult<Store>;

    /// Deletes specific store
    fn delete(&self, store_id_arg: i32) -> RepoResult<Store>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> StoresRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> StoresRepo for StoresRepoImpl<'a, T> {
    /// Find specific store by ID
    fn find(&self, store_id_arg: i32) -> RepoResult<Option<Store>> {
        debug!("Find in stores with id {}.", store_id_arg);
        let query = stores.find(store_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in stores with id {} error occurred.", store_id_arg))
                    .into()
            })
    }

    /// Returns all stores owned by a user
    fn find_by_user_id(&self, user_id_arg: i32) -> RepoResult<Vec<Store>> {
        debug!("Find stores of user {}.", user_id_arg);
        let query = stores.filter(user_id.eq(user_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find stores of user {} error occurred.", user_id_arg))
                .into()
        })
    }

    /// Creates new store
    fn create(&self, payload: NewStore) -> RepoResult<Store> {
        debug!("Create store with payload {:?}.", payload);
        let query = diesel::insert_into(stores).values(&payload);
        query.get_result::<Store>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create store with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific store
    fn update(&self, store_id_arg: i32, payload: UpdateStore) -> RepoResult<Store> {
        debug!("Updating store with id {} and payload {:?}.", store_id_arg, payload);
        let filter = stores.filter(id.eq(store_id_arg));
        let query = diesel::update(filter).set(&payload);
        query.get_result::<Store>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating store with id {} error occurred.", store_id_arg))
                .into()
        })
    }

    /// Deletes specific store
    fn delete(&self, store_id_arg: i32) -> RepoResult<Store> {
        debug!("Delete store with id {}.", store_id_arg);
        let filtered = stores.filter(id.eq(store_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<Store>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete store with id {} error occurred.", store_id_arg))
                .into()
        })
    }
}
