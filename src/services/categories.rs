//! Categories Services, presents CRUD operations with categories
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
use models::{Category, NewCategory, UpdateCategory};
use repos::ReposFactory;

pub trait CategoriesService {
    /// Returns category by ID
    fn get(&self, category_id: i32) -> ServiceFuture<Category>;
    /// Returns all categories of an industry
    fn list_by_industry(&self, industry_id: i32) -> ServiceFuture<Vec<Category>>;
    /// Creates new category
    fn create(&self, payload: NewCategory) -> ServiceFuture<Category>;
    /// Updates specific category
    fn update(&self, category_id: i32, payload: UpdateCategory) -> ServiceFuture<Category>;
    /// Deletes specific category together with its products, product
    /// variants and order items
    fn delete(&self, category_id: i32) -> ServiceFuture<Category>;
}

/// Categories services
pub struct CategoriesServiceImpl<
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
    > CategoriesServiceImpl<T, M, F>
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
    > CategoriesService for CategoriesServiceImpl<T, M, F>
{
    /// Returns category by ID
    fn get(&self, category_id: i32) -> ServiceFuture<Category> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let categories_repo = repo_factory.create_categories_repo(&*conn);
                    categories_repo.find(category_id).and_then(|category| {
                        if let Some(category) = category {
                            Ok(category)
                        } else {
                            Err(format_err!("Not found such category id : {}", category_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service Categories, get endpoint error occurred.").into())
        }))
    }

    /// Returns all categories of an industry
    fn list_by_industry(&self, industry_id: i32) -> ServiceFuture<Vec<Category>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let categories_repo = repo_factory.create_categories_repo(&*conn);
                    categories_repo.find_by_industry(industry_id)
                }).map_err(|e: FailureError| e.context("Service Categories, list by industry endpoint error occurred.").into())
        }))
    }

    /// Creates new category
    fn create(&self, payload: NewCategory) -> ServiceFuture<Category> {
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
                            let industries_repo = repo_factory.create_industries_repo(&*conn);
                            let categories_repo = repo_factory.create_categories_repo(&*conn);
                            conn.transaction::<Category, FailureError, _>(move || {
                                industries_repo.find(payload.industry_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such industry id : {}", payload.industry_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                categories_repo.create(payload)
                            })
                        })
                }).map_err(|e: FailureError| e.context("Service Categories, create endpoint error occurred.").into())
        }))
    }

    /// Updates specific category
    fn update(&self, category_id: i32, payload: UpdateCategory) -> ServiceFuture<Category> {
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
                            let categories_repo = repo_factory.create_categories_repo(&*conn);
                            categories_repo.update(category_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Categories, update endpoint error occurred.").into())
        }))
    }

    /// Deletes specific category together with its products, product
    /// variants and order items
    fn delete(&self, category_id: i32) -> ServiceFuture<Category> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let categories_repo = repo_factory.create_categories_repo(&*conn);
                    let products_repo = repo_factory.create_products_repo(&*conn);
                    let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    conn.transaction::<Category, FailureError, _>(move || {
                        let products = products_repo.find_by_category(category_id)?;
                        let product_ids = products.into_iter().map(|product| product.id).collect();
                        cascades::delete_product_dependents(product_ids, &*product_variants_repo, &*order_items_repo)?;
                        products_repo.delete_by_category(category_id)?;
                        categories_repo.delete(category_id)
                    })
                }).map_err(|e: FailureError| e.context("Service Categories, delete endpoint error occurred.").into())
        }))
    }
}
