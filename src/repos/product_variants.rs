//! Product variants repo, presents CRUD operations with db for product variants
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::Connection;
use failure::Error as FailureError;

use errors::Error;
use models::{NewProductVariant, ProductVariant, UpdateProductVariant};
use repos::types::RepoResult;
use schema::product_variants::dsl::*;

/// Product variants repository, responsible for handling variants
pub struct ProductVariantsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait ProductVariantsRepo {
    /// Find specific product variant by ID
    fn find(&self, product_variant_id_arg: i32) -> RepoResult<Option<ProductVariant>>;

    /// Returns all variants of a product
    fn find_by_product(&self, product_id_arg: i32) -> RepoResult<Vec<ProductVariant>>;

    /// Creates new product variant
    fn create(&self, payload: NewProductVariant) -> RepoResult<ProductVariant>;

    /// Updates specific product variant
    fn update(&self, product_variant_id_arg: i32, payload: UpdateProductVariant) -> RepoResult<ProductVariant>;

    /// Deletes specific product variant
    fn delete(&self, product_variant_id_arg: i32) -> RepoResult<ProductVariant>;

    /// Deletes all variants of a product, returns the deleted rows
    fn delete_by_product(&self, product_id_arg: i32) -> RepoResult<Vec<ProductVariant>>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ProductVariantsRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ProductVariantsRepo
    for ProductVariantsRepoImpl<'a, T>
{
    /// Find specific product variant by ID
    fn find(&self, product_variant_id_arg: i32) -> RepoResult<Option<ProductVariant>> {
        debug!("Find in product variants with id {}.", product_variant_id_arg);
        let query = product_variants.find(product_variant_id_arg);
        query
            .get_result(self.db_conn)
            .optional()
            .map_err(|e| {
                FailureError::from(Error::from(e))
                    .context(format!("Find in product variants with id {} error occurred.", product_variant_id_arg))
                    .into()
            })
    }

    /// Returns all variants of a product
    fn find_by_product(&self, product_id_arg: i32) -> RepoResult<Vec<ProductVariant>> {
        debug!("Find variants of product {}.", product_id_arg);
        let query = product_variants.filter(product_id.eq(product_id_arg)).order(id);
        query.get_results(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Find variants of product {} error occurred.", product_id_arg))
                .into()
        })
    }

    /// Creates new product variant
    fn create(&self, payload: NewProductVariant) -> RepoResult<ProductVariant> {
        debug!("Create product variant with payload {:?}.", payload);
        let query = diesel::insert_into(product_variants).values(&payload);
        query.get_result::<ProductVariant>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Create product variant with payload {:?} error occurred.", payload))
                .into()
        })
    }

    /// Updates specific product variant
    fn update(&self, product_variant_id_arg: i32, payload: UpdateProductVariant) -> RepoResult<ProductVariant> {
        debug!("Updating product variant with id {} and payload {:?}.", product_variant_id_arg, payload);
        let filter = product_variants.filter(id.eq(product_variant_id_arg));
        let query = diesel::update(filter).set(&payload);
        query.get_result::<ProductVariant>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Updating product variant with id {} error occurred.", product_variant_id_arg))
                .into()
        })
    }

    /// Deletes specific product variant
    fn delete(&self, product_variant_id_arg: i32) -> RepoResult<ProductVariant> {
        debug!("Delete product variant with id {}.", product_variant_id_arg);
        let filtered = product_variants.filter(id.eq(product_variant_id_arg));
        let query = diesel::delete(filtered);
        query.get_result::<ProductVariant>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete product variant with id {} error occurred.", product_variant_id_arg))
                .into()
        })
    }

    /// Deletes all variants of a product, returns the deleted rows
    fn delete_by_product(&self, product_id_arg: i32) -> RepoResult<Vec<ProductVariant>> {
        debug!("Delete variants of product {}.", product_id_arg);
        let filtered = product_variants.filter(product_id.eq(product_id_arg));
        let query = diesel::delete(filtered);
        query.get_results::<ProductVariant>(self.db_conn).map_err(|e| {
            FailureError::from(Error::from(e))
                .context(format!("Delete variants of product {} error occurred.", product_id_arg))
                .into()
        })
    }
}
