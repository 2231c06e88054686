//! Industries repo, presents CRUD operations with db for industries
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::dsl::exists;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{Industry, NewIndustry, UpdateIndustry};
use repos::types::RepoResult;
use schema::industries::dsl::*;

/// Industries repository, responsible for handling industries
pub struct IndustriesRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait IndustriesRepo {
    /// Find specific industry by ID
    fn find(&self, industry_id_arg: i32) -> RepoResult<Option<Industry>>;

    /// Returns all industries
    fn list(&self) -> RepoResult<Vec<Industry>>;

    /// Checks that name already exists
    fn name_exists(&self, name_arg: String) -> RepoResult<bool>;

    /// Creates new industry
    fn create(&self, payload: NewIndustry) -> RepoResult<Industry>;

    /// Updates specific industry
    fn update(&self, industry_id_arg: i32, payload: UpdateIndustry) -> RepoResult<Industry>;

    /// Deletes specific industry
    fn delete(&self, industry_id_arg: i32) -> RepoResult<Industry>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> IndustriesRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> IndustriesRepo for IndustriesRepoImpl<'a, T> {
    /// Find specific industry by ID
    fn find(&self, industry_id_arg: i32) -> RepoResult<Option<Industry>> {
        debug!("Find in industries with id {}.", industry_id_arg);
        let query = industries.find(industry_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in industries with id {} error occurred.", industry_id_arg))
                    .into()
            })
    }

    /// Returns all industries
    fn list(&self) -> RepoResult<Vec<Industry>> {
        debug!("Find all industries.");
        let query = industries.order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context("Find all industries error occurred.")
                .into()
        })
    }

    /// Checks that name already exists
    fn name_exists(&self, name_arg: String) -> RepoResult<bool> {
        debug!("Check if industry name {} exists.", name_arg);
        let query = diesel::select(exists(industries.filter(name.eq(name_arg.clone()))));
        query.get_result(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Check if industry name {} exists error occurred.", name_arg))
                .into()
        })
    }

    /// Creates new industry
    fn create(&self, payload: NewIndustry) -> RepoResult<Industry> {
        debug!("Create industry with payload {:?}.", payload);
        let query = diesel::insert_into(industries).values(&payload);
        query.get_result::<Industry>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create industry with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific industry
    fn update(&self, industry_id_arg: i32, payload: UpdateIndustry) -> RepoResult<Industry> {
        debug!("Updating industry with id {} and payload {:?}.", industry_id_arg, payload);
        let filter = industries.filter(id.eq(industry_id_arg));
        let query = diesel::update(filter).set(&payload);
        query.get_result::<Industry>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating industry with id {} error occurred.", industry_id_arg))
                .into()
        })
    }

    /// Deletes specific industry
    fn delete(&self, industry_id_arg: i32) -> RepoResult<Industry> {
        debug!("Delete industry with id {}.", industry_id_arg);
        let filtered = industries.filter(id.eq(industry_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<Industry>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete industry with id {} error occurred.", industry_id_arg))
                .into()
        })
    }
}
