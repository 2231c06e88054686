//! Categories repo, presents CRUD operations with db for categories
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{Category, NewCategory, UpdateCategory};
use repos::types::RepoResult;
use schema::categories::dsl::*;

/// Categories repository, responsible for handling categories
pub struct CategoriesRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait CategoriesRepo {
    /// Find specific category by ID
    fn find(&self, category_id_arg: i32) -> RepoResult<Option<Category>>;

    /// Returns all categories of an industry
    fn find_by_industry(&self, industry_id_arg: i32) -> RepoResult<Vec<Category>>;

    /// Creates new category
    fn create(&self, payload: NewCategory) -> RepoResult<Category>;

    /// Updates specific category
    fn update(&self, category_id_arg: i32, payload: UpdateCategory) -> RepoResult<Category>;

    /// Deletes specific category
    fn delete(&self, category_id_arg: i32) -> RepoResult<Category>;

    /// Deletes all categories of an industry, returns the deleted rows
    fn delete_by_industry(&self, industry_id_arg: i32) -> RepoResult<Vec<Category>>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> CategoriesRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> CategoriesRepo for CategoriesRepoImpl<'a, T> {
    /// Find specific category by ID
    fn find(&self, category_id_arg: i32) -> RepoResult<Option<Category>> {
        debug!("Find in categories with id {}.", category_id_arg);
        let query = categories.find(category_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in categories with id {} error occurred.", category_id_arg))
                    .into()
            })
    }

    /// Returns all categories of an industry
    fn find_by_industry(&self, industry_id_arg: i32) -> RepoResult<Vec<Category>> {
        debug!("Find categories of industry {}.", industry_id_arg);
        let query = categories.filter(industry_id.eq(industry_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find categories of industry {} error occurred.", industry_id_arg))
                .into()
        })
    }

    /// Creates new category
    fn create(&self, payload: NewCategory) -> RepoResult<Category> {
        debug!("Create category with payload {:?}.", payload);
        let query = diesel::insert_into(categories).values(&payload);
        query.get_result::<Category>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create category with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific category
    fn update(&self, category_id_arg: i32, payload: UpdateCategory) -> RepoResult<Category> {
        debug!("Updating category with id {} and payload {:?}.", category_id_arg, payload);
        let filter = categories.filter(id.eq(category_id_arg));
        let query = diesel::update(filter).set(&payload);
        query.get_result::<Category>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating category with id {} error occurred.", category_id_arg))
                .into()
        })
    }

    /// Deletes specific category
    fn delete(&self, category_id_arg: i32) -> RepoResult<Category> {
        debug!("Delete category with id {}.", category_id_arg);
        let filtered = categories.filter(id.eq(category_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<Category>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete category with id {} error occurred.", category_id_arg))
                .into()
        })
    }

    /// Deletes all categories of an industry, returns the deleted rows
    fn delete_by_industry(&self, industry_id_arg: i32) -> RepoResult<Vec<Category>> {
        debug!("Delete categories of industry {}.", industry_id_arg);
        let filtered = categories.filter(industry_id.eq(industry_id_arg));
        let query = diesel::delete(filtered);
        query.get_results::<Category>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete categories of industry {} error occurred.", industry_id_arg))
                .into()
        })
    }
}
