//! Industries Services, presents CRUD operations with industries
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
use models::{Industry, NewIndustry, UpdateIndustry};
use repos::ReposFactory;

pub trait IndustriesService {
    /// Returns industry by ID
    fn get(&self, industry_id: i32) -> ServiceFuture<Industry>;
    /// Returns all industries
    fn list(&self) -> ServiceFuture<Vec<Industry>>;
    /// Creates new industry
    fn create(&self, payload: NewIndustry) -> ServiceFuture<Industry>;
    /// Updates specific industry
    fn update(&self, industry_id: i32, payload: UpdateIndustry) -> ServiceFuture<Industry>;
    /// Deletes specific industry together with its categories, their
    /// products, product variants and order items
    fn delete(&self, industry_id: i32) -> ServiceFuture<Industry>;
}

/// Industries services
pub struct IndustriesServiceImpl<
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
    > IndustriesServiceImpl<T, M, F>
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
    > IndustriesService for IndustriesServiceImpl<T, M, F>
{
    /// Returns industry by ID
    fn get(&self, industry_id: i32) -> ServiceFuture<Industry> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let industries_repo = repo_factory.create_industries_repo(&*conn);
                    industries_repo.find(industry_id).and_then(|industry| {
                        if let Some(industry) = industry {
                            Ok(industry)
                        } else {
                            Err(format_err!("Not found such industry id : {}", industry_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service Industries, get endpoint error occurred.").into())
        }))
    }

    /// Returns all industries
    fn list(&self) -> ServiceFuture<Vec<Industry>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let industries_repo = repo_factory.create_industries_repo(&*conn);
                    industries_repo.list()
                }).map_err(|e: FailureError| e.context("Service Industries, list endpoint error occurred.").into())
        }))
    }

    /// Creates new industry
    fn create(&self, payload: NewIndustry) -> ServiceFuture<Industry> {
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
                            conn.transaction::<Industry, FailureError, _>(move || {
                                if industries_repo.name_exists(payload.name.clone())? {
                                    return Err(format_err!("Industry with name '{}' already exists.", payload.name)
                                        .context(Error::Validate(validation_errors!({
                                            "name": ["exists" => "Industry with this name already exists"]
                                        }))).into());
                                }
                                industries_repo.create(payload)
                            })
                        })
                }).map_err(|e: FailureError| e.context("Service Industries, create endpoint error occurred.").into())
        }))
    }

    /// Updates specific industry
    fn update(&self, industry_id: i32, payload: UpdateIndustry) -> ServiceFuture<Industry> {
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
                            let industries_repo = repo_factory.create_industries_repo(&*conn);
                            industries_repo.update(industry_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Industries, update endpoint error occurred.").into())
        }))
    }

    /// Deletes specific industry together with its categories, their
    /// products, product variants and order items
    fn delete(&self, industry_id: i32) -> ServiceFuture<Industry> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let industries_repo = repo_factory.create_industries_repo(&*conn);
                    let categories_repo = repo_factory.create_categories_repo(&*conn);
                    let products_repo = repo_factory.create_products_repo(&*conn);
                    let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    conn.transaction::<Industry, FailureError, _>(move || {
                        let categories = categories_repo.find_by_industry(industry_id)?;
                        for category in categories {
                            let products = products_repo.find_by_category(category.id)?;
                            let product_ids = products.into_iter().map(|product| product.id).collect();
                            cascades::delete_product_dependents(product_ids, &*product_variants_repo, &*order_items_repo)?;
                            products_repo.delete_by_category(category.id)?;
                        }
                        categories_repo.delete_by_industry(industry_id)?;
                        industries_repo.delete(industry_id)
                    })
                }).map_err(|e: FailureError| e.context("Service Industries, delete endpoint error occurred.").into())
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
    use services::industries::{IndustriesService, IndustriesServiceImpl};

    fn create_industries_service(user_id: Option<i32>) -> IndustriesServiceImpl<MockConnection, MockConnectionManager, ReposFactoryMock> {
        let manager = MockConnectionManager::default();
        let db_pool = r2d2::Pool::builder().build(manager).expect("Failed to create connection pool");
        let cpu_pool = CpuPool::new(1);

        IndustriesServiceImpl {
            db_pool: db_pool,
            cpu_pool: cpu_pool,
            user_id: user_id,
            repo_factory: MOCK_REPO_FACTORY,
        }
    }

    pub fn create_new_industry(name: &str) -> NewIndustry {
        NewIndustry {
            name: name.to_string(),
            description: None,
            created_by: None,
        }
    }

    #[test]
    fn test_get_industry() {
        let mut core = Core::new().unwrap();
        let service = create_industries_service(Some(MOCK_USER_ID));
        let work = service.get(1);
        let result = core.run(work).unwrap();
        assert_eq!(result.id, 1);
    }

    #[test]
    fn test_list_industries() {
        let mut core = Core::new().unwrap();
        let service = create_industries_service(Some(MOCK_USER_ID));
        let work = service.list();
        let result = core.run(work).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_create_industry() {
        let mut core = Core::new().unwrap();
        let service = create_industries_service(Some(MOCK_USER_ID));
        let work = service.create(create_new_industry("Apparel"));
        let result = core.run(work).unwrap();
        assert_eq!(result.name, "Apparel");
    }

    #[test]
    fn test_create_industry_with_existing_name() {
        let mut core = Core::new().unwrap();
        let service = create_industries_service(Some(MOCK_USER_ID));
        let work = service.create(create_new_industry(MOCK_INDUSTRY_NAME));
        let result = core.run(work);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_industry_with_empty_name() {
        let mut core = Core::new().unwrap();
        let service = create_industries_service(Some(MOCK_USER_ID));
        let work = service.create(create_new_industry(""));
        let result = core.run(work);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_industry() {
        let mut core = Core::new().unwrap();
        let service = create_industries_service(Some(MOCK_USER_ID));
        let payload = UpdateIndustry {
            name: Some("Home Goods".to_string()),
            ..Default::default()
        };
        let work = service.update(1, payload);
        let result = core.run(work).unwrap();
        assert_eq!(result.id, 1);
        assert_eq!(result.name, "Home Goods");
    }

    #[test]
    fn test_delete_industry_removes_dependents() {
        let mut core = Core::new().unwrap();
        let service = create_industries_service(Some(MOCK_USER_ID));
        let work = service.delete(1);
        let result = core.run(work).unwrap();
        assert_eq!(result.id, 1);
    }
}
