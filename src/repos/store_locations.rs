//! Store locations repo, presents CRUD operations with db for store locations
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{NewStoreLocation, StoreLocation, UpdateStoreLocation};
use repos::types::RepoResult;
use schema::store_locations::dsl::*;

/// Store locations repository, responsible for handling store locations
pub struct StoreLocationsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait StoreLocationsRepo {
    /// Find specific store location by ID
    fn find(&self, store_location_id_arg: i32) -> RepoResult<Option<StoreLocation>>;

    /// Returns all locations of a store
    fn find_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<StoreLocation>>;

    /// Creates new store location
    fn create(&self, payload: NewStoreLocation) -> RepoResult<StoreLocation>;

    /// Updates specific store location
    fn update(&self, store_location_id_arg: i32, payload: UpdateStoreLocation) -> RepoResult<StoreLocation>;

    /// Deletes specific store location
    fn delete(&self, store_location_id_arg: i32) -> RepoResult<StoreLocation>;

    /// Deletes all locations of a store, returns the deleted rows
    fn delete_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<StoreLocation>>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> StoreLocationsRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> StoreLocationsRepo
    for StoreLocationsRepoImpl<'a, T>
{
    /// Find specific store location by ID
    fn find(&self, store_location_id_arg: i32) -> RepoResult<Option<StoreLocation>> {
        debug!("Find in store locations with id {}.", store_location_id_arg);
        let query = store_locations.find(store_location_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in store locations with id {} error occurred.", store_location_id_arg))
                    .into()
            })
    }

    /// Returns all locations of a store
    fn find_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<StoreLocation>> {
        debug!("Find locations of store {}.", store_id_arg);
        let query = store_locations.filter(store_id.eq(store_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find locations of store {} error occurred.", store_id_arg))
                .into()
        })
    }

    /// Creates new store location
    fn create(&self, payload: NewStoreLocation) -> RepoResult<StoreLocation> {
        debug!("Create store location with payload {:?}.", payload);
        let query = diesel::insert_into(store_locations).values(&payload);
        query.get_result::<StoreLocation>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create store location with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific store location
    fn update(&self, store_location_id_arg: i32, payload: UpdateStoreLocation) -> RepoResult<StoreLocation> {
        debug!("Updating store location with id {} and payload {:?}.", store_location_id_arg, payload);
        let filter = store_locations.filter(id.eq(store_location_id_arg));
        let query = diesel::update(filter).set(&payload);
        query.get_result::<StoreLocation>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating store location with id {} error occurred.", store_location_id_arg))
                .into()
        })
    }

    /// Deletes specific store location
    fn delete(&self, store_location_id_arg: i32) -> RepoResult<StoreLocation> {
        debug!("Delete store location with id {}.", store_location_id_arg);
        let filtered = store_locations.filter(id.eq(store_location_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<StoreLocation>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete store location with id {} error occurred.", store_location_id_arg))
                .into()
        })
    }

    /// Deletes all locations of a store, returns the deleted rows
    fn delete_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<StoreLocation>> {
        debug!("Delete locations of store {}.", store_id_arg);
        let filtered = store_locations.filter(store_id.eq(store_id_arg));
        let query = diesel::delete(filtered);
        query.get_results::<StoreLocation>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete locations of store {} error occurred.", store_id_arg))
                .into()
        })
    }
}
