//! Products repo, presents CRUD operations with db for products
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{NewProduct, Product, UpdateProduct};
use repos::types::RepoResult;
use schema::products::dsl::*;

/// Products repository, responsible for handling products
pub struct ProductsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait ProductsRepo {
    /// Find specific product by ID
    fn find(&self, product_id_arg: i32) -> RepoResult<Option<Product>>;

    /// Returns all products of a store
    fn find_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<Product>>;

    /// Returns all products of a category
    fn find_by_category(&self, category_id_arg: i32) -> RepoResult<Vec<Product>>;

    /// Creates new product
    fn create(&self, payload: NewProduct) -> RepoResult<Product>;

    /// Updates specific product
    fn update(&self, product_id_arg: i32, payload: UpdateProduct) -> RepoResult<Product>;

    /// Deletes specific product
    fn delete(&self, product_id_arg: i32) -> RepoResult<Product>;

    /// Deletes all products of a store, returns the deleted rows
    fn delete_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<Product>>;

    /// Deletes all products of a category, returns the deleted rows
    fn delete_by_category(&self, category_id_arg: i32) -> RepoResult<Vec<Product>>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ProductsRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ProductsRepo for ProductsRepoImpl<'a, T> {
    /// Find specific product by ID
    fn find(&self, product_id_arg: i32) -> RepoResult<Option<Product>> {
        debug!("Find in products with id {}.", product_id_arg);
        let query = products.find(product_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in products with id {} error occurred.", product_id_arg))
                    .into()
            })
    }

    /// Returns all products of a store
    fn find_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<Product>> {
        debug!("Find products of store {}.", store_id_arg);
        let query = products.filter(store_id.eq(store_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find products of store {} error occurred.", store_id_arg))
                .into()
        })
    }

    /// Returns all products of a category
    fn find_by_category(&self, category_id_arg: i32) -> RepoResult<Vec<Product>> {
        debug!("Find products of category {}.", category_id_arg);
        let query = products.filter(category_id.eq(category_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find products of category {} error occurred.", category_id_arg))
                .into()
        })
    }

    /// Creates new product
    fn create(&self, payload: NewProduct) -> RepoResult<Product> {
        debug!("Create product with payload {:?}.", payload);
        let query = diesel::insert_into(products).values(&payload);
        query.get_result::<Product>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create product with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific product
    fn update(&self, product_id_arg: i32, payload: UpdateProduct) -> RepoResult<Product> {
        debug!("Updating product with id {} and payload {:?}.", product_id_arg, payload);
        let filter = products.filter(id.eq(product_id_arg));
        let query = diesel::update(filter).set(&payload);
        query.get_result::<Product>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating product with id {} error occurred.", product_id_arg))
                .into()
        })
    }

    /// Deletes specific product
    fn delete(&self, product_id_arg: i32) -> RepoResult<Product> {
        debug!("Delete product with id {}.", product_id_arg);
        let filtered = products.filter(id.eq(product_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<Product>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete product with id {} error occurred.", product_id_arg))
                .into()
        })
    }

    /// Deletes all products of a store, returns the deleted rows
    fn delete_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<Product>> {
        debug!("Delete products of store {}.", store_id_arg);
        let filtered = products.filter(store_id.eq(store_id_arg));
        let query = diesel::delete(filtered);
        query.get_results::<Product>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete products of store {} error occurred.", store_id_arg))
                .into()
        })
    }

    /// Deletes all products of a category, returns the deleted rows
    fn delete_by_category(&self, category_id_arg: i32) -> RepoResult<Vec<Product>> {
        debug!("Delete products of category {}.", category_id_arg);
        let filtered = products.filter(category_id.eq(category_id_arg));
        let query = diesel::delete(filtered);
        query.get_results::<Product>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete products of category {} error occurred.", category_id_arg))
                .into()
        })
    }
}
