//! Products Services, presents CRUD operations with products and their variants
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
use models::{NewProduct, NewProductVariant, Product, ProductVariant, UpdateProduct, UpdateProductVariant};
use repos::ReposFactory;

pub trait ProductsService {
    /// Returns product by ID
    fn get(&self, product_id: i32) -> ServiceFuture<Product>;
    /// Returns all products of a store
    fn list_by_store(&self, store_id: i32) -> ServiceFuture<Vec<Product>>;
    /// Returns all products of a category
    fn list_by_category(&self, category_id: i32) -> ServiceFuture<Vec<Product>>;
    /// Creates new product
    fn create(&self, payload: NewProduct) -> ServiceFuture<Product>;
    /// Updates specific product
    fn update(&self, product_id: i32, payload: UpdateProduct) -> ServiceFuture<Product>;
    /// Deletes specific product together with its variants and their order items
    fn delete(&self, product_id: i32) -> ServiceFuture<Product>;
    /// Returns product variant by ID
    fn get_variant(&self, product_variant_id: i32) -> ServiceFuture<ProductVariant>;
    /// Returns all variants of a product
    fn list_variants(&self, product_id: i32) -> ServiceFuture<Vec<ProductVariant>>;
    /// Creates new product variant
    fn create_variant(&self, payload: NewProductVariant) -> ServiceFuture<ProductVariant>;
    /// Updates specific product variant
    fn update_variant(&self, product_variant_id: i32, payload: UpdateProductVariant) -> ServiceFuture<ProductVariant>;
    /// Deletes specific product variant together with its order items
    fn delete_variant(&self, product_variant_id: i32) -> ServiceFuture<ProductVariant>;
}

/// Products services
pub struct ProductsServiceImpl<
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
    > ProductsServiceImpl<T, M, F>
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
    > ProductsService for ProductsServiceImpl<T, M, F>
{
    /// Returns product by ID
    fn get(&self, product_id: i32) -> ServiceFuture<Product> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let products_repo = repo_factory.create_products_repo(&*conn);
                    products_repo.find(product_id).and_then(|product| {
                        if let Some(product) = product {
                            Ok(product)
                        } else {
                            Err(format_err!("Not found such product id : {}", product_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service Products, get endpoint error occurred.").into())
        }))
    }

    /// Returns all products of a store
    fn list_by_store(&self, store_id: i32) -> ServiceFuture<Vec<Product>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let products_repo = repo_factory.create_products_repo(&*conn);
                    products_repo.find_by_store(store_id)
                }).map_err(|e: FailureError| e.context("Service Products, list by store endpoint error occurred.").into())
        }))
    }

    /// Returns all products of a category
    fn list_by_category(&self, category_id: i32) -> ServiceFuture<Vec<Product>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let products_repo = repo_factory.create_products_repo(&*conn);
                    products_repo.find_by_category(category_id)
                }).map_err(|e: FailureError| e.context("Service Products, list by category endpoint error occurred.").into())
        }))
    }

    /// Creates new product
    fn create(&self, payload: NewProduct) -> ServiceFuture<Product> {
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
                            let categories_repo = repo_factory.create_categories_repo(&*conn);
                            let products_repo = repo_factory.create_products_repo(&*conn);
                            conn.transaction::<Product, FailureError, _>(move || {
                                stores_repo.find(payload.store_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such store id : {}", payload.store_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                categories_repo.find(payload.category_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such category id : {}", payload.category_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                products_repo.create(payload)
                            })
                        })
                }).map_err(|e: FailureError| e.context("Service Products, create endpoint error occurred.").into())
        }))
    }

    /// Updates specific product
    fn update(&self, product_id: i32, payload: UpdateProduct) -> ServiceFuture<Product> {
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
                            let products_repo = repo_factory.create_products_repo(&*conn);
                            products_repo.update(product_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Products, update endpoint error occurred.").into())
        }))
    }

    /// Deletes specific product together with its variants and their order items
    fn delete(&self, product_id: i32) -> ServiceFuture<Product> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let products_repo = repo_factory.create_products_repo(&*conn);
                    let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    conn.transaction::<Product, FailureError, _>(move || {
                        cascades::delete_product_dependents(vec![product_id], &*product_variants_repo, &*order_items_repo)?;
                        products_repo.delete(product_id)
                    })
                }).map_err(|e: FailureError| e.context("Service Products, delete endpoint error occurred.").into())
        }))
    }

    /// Returns product variant by ID
    fn get_variant(&self, product_variant_id: i32) -> ServiceFuture<ProductVariant> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                    product_variants_repo.find(product_variant_id).and_then(|variant| {
                        if let Some(variant) = variant {
                            Ok(variant)
                        } else {
                            Err(format_err!("Not found such product variant id : {}", product_variant_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service Products, get variant endpoint error occurred.").into())
        }))
    }

    /// Returns all variants of a product
    fn list_variants(&self, product_id: i32) -> ServiceFuture<Vec<ProductVariant>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                    product_variants_repo.find_by_product(product_id)
                }).map_err(|e: FailureError| e.context("Service Products, list variants endpoint error occurred.").into())
        }))
    }

    /// Creates new product variant
    fn create_variant(&self, payload: NewProductVariant) -> ServiceFuture<ProductVariant> {
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
                            let products_repo = repo_factory.create_products_repo(&*conn);
                            let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                            conn.transaction::<ProductVariant, FailureError, _>(move || {
                                products_repo.find(payload.product_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such product id : {}", payload.product_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                product_variants_repo.create(payload)
                            })
                        })
                }).map_err(|e: FailureError| e.context("Service Products, create variant endpoint error occurred.").into())
        }))
    }

    /// Updates specific product variant
    fn update_variant(&self, product_variant_id: i32, payload: UpdateProductVariant) -> ServiceFuture<ProductVariant> {
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
                            let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                            product_variants_repo.update(product_variant_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Products, update variant endpoint error occurred.").into())
        }))
    }

    /// Deletes specific product variant together with its order items
    fn delete_variant(&self, product_variant_id: i32) -> ServiceFuture<ProductVariant> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    conn.transaction::<ProductVariant, FailureError, _>(move || {
                        order_items_repo.delete_by_product_variant(product_variant_id)?;
                        product_variants_repo.delete(product_variant_id)
                    })
                }).map_err(|e: FailureError| e.context("Service Products, delete variant endpoint error occurred.").into())
        }))
    }
}

#[cfg(test)]
pub mod tests {
    use futures_cpupool::CpuPool;
    use r2d2;
    use rust_decimal::Decimal;
    use tokio_core::reactor::Core;

    use models::*;
    use repos::repo_factory::tests::*;
    use services::products::{ProductsService, ProductsServiceImpl};

    fn create_products_service(user_id: Option<i32>) -> ProductsServiceImpl<MockConnection, MockConnectionManager, ReposFactoryMock> {
        let manager = MockConnectionManager::default();
        let db_pool = r2d2::Pool::builder().build(manager).expect("Failed to create connection pool");
        let cpu_pool = CpuPool::new(1);

        ProductsServiceImpl {
            db_pool: db_pool,
            cpu_pool: cpu_pool,
            user_id: user_id,
            repo_factory: MOCK_REPO_FACTORY,
        }
    }

    pub fn create_new_product(store_id: i32, category_id: i32) -> NewProduct {
        NewProduct {
            store_id: store_id,
            category_id: category_id,
            name: MOCK_PRODUCT_NAME.to_string(),
            description: None,
            price: Decimal::new(50000, 2),
            stock: 10,
            image: None,
            available: true,
            digital: false,
            created_by: None,
        }
    }

    pub fn create_new_product_variant(product_id: i32) -> NewProductVariant {
        NewProductVariant {
            product_id: product_id,
            name: MOCK_VARIANT_NAME.to_string(),
            price: Decimal::new(55000, 2),
            stock: 5,
            additional_info: None,
            available: true,
            created_by: None,
        }
    }

    #[test]
    fn test_get_product() {
        let mut core = Core::new().unwrap();
        let service = create_products_service(Some(MOCK_USER_ID));
        let work = service.get(1);
        let result = core.run(work).unwrap();
        assert_eq!(result.id, 1);
    }

    #[test]
    fn test_create_product() {
        let mut core = Core::new().unwrap();
        let service = create_products_service(Some(MOCK_USER_ID));
        let work = service.create(create_new_product(1, 1));
        let result = core.run(work).unwrap();
        assert_eq!(result.name, MOCK_PRODUCT_NAME);
        assert_eq!(result.price, Decimal::new(50000, 2));
    }

    #[test]
    fn test_create_product_with_negative_price() {
        let mut core = Core::new().unwrap();
        let service = create_products_service(Some(MOCK_USER_ID));
        let mut payload = create_new_product(1, 1);
        payload.price = Decimal::new(-50000, 2);
        let work = service.create(payload);
        let result = core.run(work);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_product_with_negative_stock() {
        let mut core = Core::new().unwrap();
        let service = create_products_service(Some(MOCK_USER_ID));
        let mut payload = create_new_product(1, 1);
        payload.stock = -1;
        let work = service.create(payload);
        let result = core.run(work);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_product() {
        let mut core = Core::new().unwrap();
        let service = create_products_service(Some(MOCK_USER_ID));
        let payload = UpdateProduct {
            price: Some(Decimal::new(45000, 2)),
            ..Default::default()
        };
        let work = service.update(1, payload);
        let result = core.run(work).unwrap();
        assert_eq!(result.id, 1);
        assert_eq!(result.price, Decimal::new(45000, 2));
    }

    #[test]
    fn test_delete_product_removes_dependents() {
        let mut core = Core::new().unwrap();
        let service = create_products_service(Some(MOCK_USER_ID));
        let work = service.delete(1);
        let result = core.run(work).unwrap();
        assert_eq!(result.id, 1);
    }

    #[test]
    fn test_create_variant() {
        let mut core = Core::new().unwrap();
        let service = create_products_service(Some(MOCK_USER_ID));
        let work = service.create_variant(create_new_product_variant(1));
        let result = core.run(work).unwrap();
        assert_eq!(result.name, MOCK_VARIANT_NAME);
        assert_eq!(result.product_id, 1);
    }

    #[test]
    fn test_list_variants() {
        let mut core = Core::new().unwrap();
        let service = create_products_service(Some(MOCK_USER_ID));
        let work = service.list_variants(1);
        let result = core.run(work).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_delete_variant_removes_order_items() {
        let mut core = Core::new().unwrap();
        let service = create_products_service(Some(MOCK_USER_ID));
        let work = service.delete_variant(1);
        let result = core.run(work).unwrap();
        assert_eq!(result.id, 1);
    }
}
