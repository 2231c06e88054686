//! Repo factory lets services create repos over any connection, so tests
//! can substitute canned mock repos for the diesel-backed ones.
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;

use repos::*;

pub trait ReposFactory<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static>:
    Clone + Send + 'static
{
    fn create_industries_repo<'a>(&self, db_conn: &'a C) -> Box<IndustriesRepo + 'a>;
    fn create_categories_repo<'a>(&self, db_conn: &'a C) -> Box<CategoriesRepo + 'a>;
    fn create_stores_repo<'a>(&self, db_conn: &'a C) -> Box<StoresRepo + 'a>;
    fn create_store_locations_repo<'a>(&self, db_conn: &'a C) -> Box<StoreLocationsRepo + 'a>;
    fn create_products_repo<'a>(&self, db_conn: &'a C) -> Box<ProductsRepo + 'a>;
    fn create_product_variants_repo<'a>(&self, db_conn: &'a C) -> Box<ProductVariantsRepo + 'a>;
    fn create_payment_options_repo<'a>(&self, db_conn: &'a C) -> Box<PaymentOptionsRepo + 'a>;
    fn create_customers_repo<'a>(&self, db_conn: &'a C) -> Box<CustomersRepo + 'a>;
    fn create_orders_repo<'a>(&self, db_conn: &'a C) -> Box<OrdersRepo + 'a>;
    fn create_order_items_repo<'a>(&self, db_conn: &'a C) -> Box<OrderItemsRepo + 'a>;
    fn create_payments_repo<'a>(&self, db_conn: &'a C) -> Box<PaymentsRepo + 'a>;
    fn create_shipping_addresses_repo<'a>(&self, db_conn: &'a C) -> Box<ShippingAddressesRepo + 'a>;
}

/// Implementation of repo factory
#[derive(Default, Copy, Clone)]
pub struct ReposFactoryImpl;

impl<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ReposFactory<C> for ReposFactoryImpl {
    fn create_industries_repo<'a>(&self, db_conn: &'a C) -> Box<IndustriesRepo + 'a> {
        Box::new(IndustriesRepoImpl::new(db_conn)) as Box<IndustriesRepo>
    }
    fn create_categories_repo<'a>(&self, db_conn: &'a C) -> Box<CategoriesRepo + 'a> {
        Box::new(CategoriesRepoImpl::new(db_conn)) as Box<CategoriesRepo>
    }
    fn create_stores_repo<'a>(&self, db_conn: &'a C) -> Box<StoresRepo + 'a> {
        Box::new(StoresRepoImpl::new(db_conn)) as Box<StoresRepo>
    }
    fn create_store_locations_repo<'a>(&self, db_conn: &'a C) -> Box<StoreLocationsRepo + 'a> {
        Box::new(StoreLocationsRepoImpl::new(db_conn)) as Box<StoreLocationsRepo>
    }
    fn create_products_repo<'a>(&self, db_conn: &'a C) -> Box<ProductsRepo + 'a> {
        Box::new(ProductsRepoImpl::new(db_conn)) as Box<ProductsRepo>
    }
    fn create_product_variants_repo<'a>(&self, db_conn: &'a C) -> Box<ProductVariantsRepo + 'a> {
        Box::new(ProductVariantsRepoImpl::new(db_conn)) as Box<ProductVariantsRepo>
    }
    fn create_payment_options_repo<'a>(&self, db_conn: &'a C) -> Box<PaymentOptionsRepo + 'a> {
        Box::new(PaymentOptionsRepoImpl::new(db_conn)) as Box<PaymentOptionsRepo>
    }
    fn create_customers_repo<'a>(&self, db_conn: &'a C) -> Box<CustomersRepo + 'a> {
        Box::new(CustomersRepoImpl::new(db_conn)) as Box<CustomersRepo>
    }
    fn create_orders_repo<'a>(&self, db_conn: &'a C) -> Box<OrdersRepo + 'a> {
        Box::new(OrdersRepoImpl::new(db_conn)) as Box<OrdersRepo>
    }
    fn create_order_items_repo<'a>(&self, db_conn: &'a C) -> Box<OrderItemsRepo + 'a> {
        Box::new(OrderItemsRepoImpl::new(db_conn)) as Box<OrderItemsRepo>
    }
    fn create_payments_repo<'a>(&self, db_conn: &'a C) -> Box<PaymentsRepo + 'a> {
        Box::new(PaymentsRepoImpl::new(db_conn)) as Box<PaymentsRepo>
    }
    fn create_shipping_addresses_repo<'a>(&self, db_conn: &'a C) -> Box<ShippingAddressesRepo + 'a> {
        Box::new(ShippingAddressesRepoImpl::new(db_conn)) as Box<ShippingAddressesRepo>
    }
}

#[cfg(test)]
pub mod tests {

    use std::error::Error;
    use std::fmt;
    use std::time::SystemTime;

    use diesel::connection::AnsiTransactionManager;
    use diesel::connection::SimpleConnection;
    use diesel::deserialize::QueryableByName;
    use diesel::pg::Pg;
    use diesel::query_builder::AsQuery;
    use diesel::query_builder::QueryFragment;
    use diesel::query_builder::QueryId;
    use diesel::sql_types::HasSqlType;
    use diesel::Connection;
    use diesel::ConnectionResult;
    use diesel::QueryResult;
    use diesel::Queryable;
    use r2d2::ManageConnection;
    use rust_decimal::Decimal;

    use models::*;
    use repos::*;

    pub const MOCK_REPO_FACTORY: ReposFactoryMock = ReposFactoryMock {};
    pub static MOCK_USER_ID: i32 = 1;
    pub static MOCK_INDUSTRY_NAME: &'static str = "Electronics";
    pub static MOCK_CATEGORY_NAME: &'static str = "Phones";
    pub static MOCK_STORE_NAME: &'static str = "Phone Store";
    pub static MOCK_PRODUCT_NAME: &'static str = "Phone X";
    pub static MOCK_VARIANT_NAME: &'static str = "128GB";
    pub static MOCK_TRANSACTION_ID: &'static str = "txn-8000-0001";

    #[derive(Default, Copy, Clone)]
    pub struct ReposFactoryMock;

    impl<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ReposFactory<C> for ReposFactoryMock {
        fn create_industries_repo<'a>(&self, _db_conn: &'a C) -> Box<IndustriesRepo + 'a> {
            Box::new(IndustriesRepoMock::default()) as Box<IndustriesRepo>
        }
        fn create_categories_repo<'a>(&self, _db_conn: &'a C) -> Box<CategoriesRepo + 'a> {
            Box::new(CategoriesRepoMock::default()) as Box<CategoriesRepo>
        }
        fn create_stores_repo<'a>(&self, _db_conn: &'a C) -> Box<StoresRepo + 'a> {
            Box::new(StoresRepoMock::default()) as Box<StoresRepo>
        }
        fn create_store_locations_repo<'a>(&self, _db_conn: &'a C) -> Box<StoreLocationsRepo + 'a> {
            Box::new(StoreLocationsRepoMock::default()) as Box<StoreLocationsRepo>
        }
        fn create_products_repo<'a>(&self, _db_conn: &'a C) -> Box<ProductsRepo + 'a> {
            Box::new(ProductsRepoMock::default()) as Box<ProductsRepo>
        }
        fn create_product_variants_repo<'a>(&self, _db_conn: &'a C) -> Box<ProductVariantsRepo + 'a> {
            Box::new(ProductVariantsRepoMock::default()) as Box<ProductVariantsRepo>
        }
        fn create_payment_options_repo<'a>(&self, _db_conn: &'a C) -> Box<PaymentOptionsRepo + 'a> {
            Box::new(PaymentOptionsRepoMock::default()) as Box<PaymentOptionsRepo>
        }
        fn create_customers_repo<'a>(&self, _db_conn: &'a C) -> Box<CustomersRepo + 'a> {
            Box::new(CustomersRepoMock::default()) as Box<CustomersRepo>
        }
        fn create_orders_repo<'a>(&self, _db_conn: &'a C) -> Box<OrdersRepo + 'a> {
            Box::new(OrdersRepoMock::default()) as Box<OrdersRepo>
        }
        fn create_order_items_repo<'a>(&self, _db_conn: &'a C) -> Box<OrderItemsRepo + 'a> {
            Box::new(OrderItemsRepoMock::default()) as Box<OrderItemsRepo>
        }
        fn create_payments_repo<'a>(&self, _db_conn: &'a C) -> Box<PaymentsRepo + 'a> {
            Box::new(PaymentsRepoMock::default()) as Box<PaymentsRepo>
        }
        fn create_shipping_addresses_repo<'a>(&self, _db_conn: &'a C) -> Box<ShippingAddressesRepo + 'a> {
            Box::new(ShippingAddressesRepoMock::default()) as Box<ShippingAddressesRepo>
        }
    }

    #[derive(Clone, Default)]
    pub struct IndustriesRepoMock;

    impl IndustriesRepo for IndustriesRepoMock {
        fn find(&self, industry_id_arg: i32) -> RepoResult<Option<Industry>> {
            Ok(Some(create_industry(industry_id_arg, MOCK_INDUSTRY_NAME)))
        }

        fn list(&self) -> RepoResult<Vec<Industry>> {
            Ok(vec![create_industry(1, MOCK_INDUSTRY_NAME), create_industry(2, "Apparel")])
        }

        fn name_exists(&self, name_arg: String) -> RepoResult<bool> {
            Ok(name_arg == MOCK_INDUSTRY_NAME)
        }

        fn create(&self, payload: NewIndustry) -> RepoResult<Industry> {
            Ok(create_industry(1, &payload.name))
        }

        fn update(&self, industry_id_arg: i32, payload: UpdateIndustry) -> RepoResult<Industry> {
            let mut industry = create_industry(industry_id_arg, MOCK_INDUSTRY_NAME);
            if let Some(name) = payload.name {
                industry.name = name;
            }
            Ok(industry)
        }

        fn delete(&self, industry_id_arg: i32) -> RepoResult<Industry> {
            Ok(create_industry(industry_id_arg, MOCK_INDUSTRY_NAME))
        }
    }

    #[derive(Clone, Default)]
    pub struct CategoriesRepoMock;

    impl CategoriesRepo for CategoriesRepoMock {
        fn find(&self, category_id_arg: i32) -> RepoResult<Option<Category>> {
            Ok(Some(create_category(category_id_arg, 1)))
        }

        fn find_by_industry(&self, industry_id_arg: i32) -> RepoResult<Vec<Category>> {
            Ok(vec![create_category(1, industry_id_arg)])
        }

        fn create(&self, payload: NewCategory) -> RepoResult<Category> {
            let mut category = create_category(1, payload.industry_id);
            category.name = payload.name;
            Ok(category)
        }

        fn update(&self, category_id_arg: i32, payload: UpdateCategory) -> RepoResult<Category> {
            let mut category = create_category(category_id_arg, 1);
            if let Some(name) = payload.name {
                category.name = name;
            }
            Ok(category)
        }

        fn delete(&self, category_id_arg: i32) -> RepoResult<Category> {
            Ok(create_category(category_id_arg, 1))
        }

        fn delete_by_industry(&self, industry_id_arg: i32) -> RepoResult<Vec<Category>> {
            Ok(vec![create_category(1, industry_id_arg)])
        }
    }

    #[derive(Clone, Default)]
    pub struct StoresRepoMock;

    impl StoresRepo for StoresRepoMock {
        fn find(&self, store_id_arg: i32) -> RepoResult<Option<Store>> {
            Ok(Some(create_store(store_id_arg, MOCK_USER_ID)))
        }

        fn find_by_user_id(&self, user_id_arg: i32) -> RepoResult<Vec<Store>> {
            Ok(vec![create_store(1, user_id_arg)])
        }

        fn create(&self, payload: NewStore) -> RepoResult<Store> {
            let mut store = create_store(1, payload.user_id);
            store.name = payload.name;
            store.logo = payload.logo;
            Ok(store)
        }

        fn update(&self, store_id_arg: i32, payload: UpdateStore) -> RepoResult<Store> {
            let mut store = create_store(store_id_arg, MOCK_USER_ID);
            if let Some(name) = payload.name {
                store.name = name;
            }
            Ok(store)
        }

        fn delete(&self, store_id_arg: i32) -> RepoResult<Store> {
            Ok(create_store(store_id_arg, MOCK_USER_ID))
        }
    }

    #[derive(Clone, Default)]
    pub struct StoreLocationsRepoMock;

    impl StoreLocationsRepo for StoreLocationsRepoMock {
        fn find(&self, store_location_id_arg: i32) -> RepoResult<Option<StoreLocation>> {
            Ok(Some(create_store_location(store_location_id_arg, 1)))
        }

        fn find_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<StoreLocation>> {
            Ok(vec![create_store_location(1, store_id_arg)])
        }

        fn create(&self, payload: NewStoreLocation) -> RepoResult<StoreLocation> {
            let mut location = create_store_location(1, payload.store_id);
            location.city = payload.city;
            Ok(location)
        }

        fn update(&self, store_location_id_arg: i32, payload: UpdateStoreLocation) -> RepoResult<StoreLocation> {
            let mut location = create_store_location(store_location_id_arg, 1);
            if let Some(city) = payload.city {
                location.city = city;
            }
            Ok(location)
        }

        fn delete(&self, store_location_id_arg: i32) -> RepoResult<StoreLocation> {
            Ok(create_store_location(store_location_id_arg, 1))
        }

        fn delete_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<StoreLocation>> {
            Ok(vec![create_store_location(1, store_id_arg)])
        }
    }

    #[derive(Clone, Default)]
    pub struct ProductsRepoMock;

    impl ProductsRepo for ProductsRepoMock {
        fn find(&self, product_id_arg: i32) -> RepoResult<Option<Product>> {
            Ok(Some(create_product(product_id_arg, 1)))
        }

        fn find_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<Product>> {
            Ok(vec![create_product(1, store_id_arg)])
        }

        fn find_by_category(&self, _category_id_arg: i32) -> RepoResult<Vec<Product>> {
            Ok(vec![create_product(1, 1)])
        }

        fn create(&self, payload: NewProduct) -> RepoResult<Product> {
            let mut product = create_product(1, payload.store_id);
            product.name = payload.name;
            product.price = payload.price;
            product.stock = payload.stock;
            Ok(product)
        }

        fn update(&self, product_id_arg: i32, payload: UpdateProduct) -> RepoResult<Product> {
            let mut product = create_product(product_id_arg, 1);
            if let Some(name) = payload.name {
                product.name = name;
            }
            if let Some(price) = payload.price {
                product.price = price;
            }
            Ok(product)
        }

        fn delete(&self, product_id_arg: i32) -> RepoResult<Product> {
            Ok(create_product(product_id_arg, 1))
        }

        fn delete_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<Product>> {
            Ok(vec![create_product(1, store_id_arg)])
        }

        fn delete_by_category(&self, _category_id_arg: i32) -> RepoResult<Vec<Product>> {
            Ok(vec![create_product(1, 1)])
        }
    }

    #[derive(Clone, Default)]
    pub struct ProductVariantsRepoMock;

    impl ProductVariantsRepo for ProductVariantsRepoMock {
        fn find(&self, product_variant_id_arg: i32) -> RepoResult<Option<ProductVariant>> {
            Ok(Some(create_product_variant(product_variant_id_arg, 1)))
        }

        fn find_by_product(&self, product_id_arg: i32) -> RepoResult<Vec<ProductVariant>> {
            Ok(vec![create_product_variant(1, product_id_arg)])
        }

        fn create(&self, payload: NewProductVariant) -> RepoResult<ProductVariant> {
            let mut variant = create_product_variant(1, payload.product_id);
            variant.name = payload.name;
            variant.price = payload.price;
            variant.stock = payload.stock;
            Ok(variant)
        }

        fn update(&self, product_variant_id_arg: i32, payload: UpdateProductVariant) -> RepoResult<ProductVariant> {
            let mut variant = create_product_variant(product_variant_id_arg, 1);
            if let Some(name) = payload.name {
                variant.name = name;
            }
            if let Some(price) = payload.price {
                variant.price = price;
            }
            Ok(variant)
        }

        fn delete(&self, product_variant_id_arg: i32) -> RepoResult<ProductVariant> {
            Ok(create_product_variant(product_variant_id_arg, 1))
        }

        fn delete_by_product(&self, product_id_arg: i32) -> RepoResult<Vec<ProductVariant>> {
            Ok(vec![create_product_variant(1, product_id_arg)])
        }
    }

    #[derive(Clone, Default)]
    pub struct PaymentOptionsRepoMock;

    impl PaymentOptionsRepo for PaymentOptionsRepoMock {
        fn find(&self, payment_option_id_arg: i32) -> RepoResult<Option<PaymentOption>> {
            Ok(Some(create_payment_option(payment_option_id_arg)))
        }

        fn list(&self) -> RepoResult<Vec<PaymentOption>> {
            Ok(vec![create_payment_option(1), create_payment_option(2)])
        }

        fn create(&self, payload: NewPaymentOption) -> RepoResult<PaymentOption> {
            let mut option = create_payment_option(1);
            option.name = payload.name;
            Ok(option)
        }

        fn update(&self, payment_option_id_arg: i32, payload: UpdatePaymentOption) -> RepoResult<PaymentOption> {
            let mut option = create_payment_option(payment_option_id_arg);
            if let Some(name) = payload.name {
                option.name = name;
            }
            Ok(option)
        }

        fn delete(&self, payment_option_id_arg: i32) -> RepoResult<PaymentOption> {
            Ok(create_payment_option(payment_option_id_arg))
        }
    }

    #[derive(Clone, Default)]
    pub struct CustomersRepoMock;

    impl CustomersRepo for CustomersRepoMock {
        fn find(&self, customer_id_arg: i32) -> RepoResult<Option<Customer>> {
            Ok(Some(create_customer(customer_id_arg, MOCK_USER_ID)))
        }

        fn find_by_user_id(&self, user_id_arg: i32) -> RepoResult<Option<Customer>> {
            if user_id_arg == MOCK_USER_ID {
                Ok(Some(create_customer(1, user_id_arg)))
            } else {
                Ok(None)
            }
        }

        fn user_exists(&self, user_id_arg: i32) -> RepoResult<bool> {
            Ok(user_id_arg == MOCK_USER_ID)
        }

        fn create(&self, payload: NewCustomer) -> RepoResult<Customer> {
            Ok(create_customer(1, payload.user_id))
        }

        fn update(&self, customer_id_arg: i32, payload: UpdateCustomer) -> RepoResult<Customer> {
            let mut customer = create_customer(customer_id_arg, MOCK_USER_ID);
            if let Some(address) = payload.address {
                customer.address = Some(address);
            }
            Ok(customer)
        }

        fn delete(&self, customer_id_arg: i32) -> RepoResult<Customer> {
            Ok(create_customer(customer_id_arg, MOCK_USER_ID))
        }
    }

    #[derive(Clone, Default)]
    pub struct OrdersRepoMock;

    impl OrdersRepo for OrdersRepoMock {
        fn find(&self, order_id_arg: i32) -> RepoResult<Option<Order>> {
            Ok(Some(create_order(order_id_arg, 1, 1)))
        }

        fn find_by_customer(&self, customer_id_arg: i32) -> RepoResult<Vec<Order>> {
            Ok(vec![create_order(1, customer_id_arg, 1)])
        }

        fn find_by_store(&self, store_id_arg: i32) -> RepoResult<Vec<Order>> {
            Ok(vec![create_order(1, 1, store_id_arg)])
        }

        fn create(&self, payload: NewOrder) -> RepoResult<Order> {
            let mut order = create_order(1, payload.customer_id, payload.store_id);
            order.total_amount = payload.total_amount;
            order.status = payload.status;
            Ok(order)
        }

        fn update(&self, order_id_arg: i32, payload: UpdateOrder) -> RepoResult<Order> {
            let mut order = create_order(order_id_arg, 1, 1);
            if let Some(status) = payload.status {
                order.status = status;
            }
            if let Some(total_amount) = payload.total_amount {
                order.total_amount = total_amount;
            }
            Ok(order)
        }

        fn delete(&self, order_id_arg: i32) -> RepoResult<Order> {
            Ok(create_order(order_id_arg, 1, 1))
        }
    }

    #[derive(Clone, Default)]
    pub struct OrderItemsRepoMock;

    impl OrderItemsRepo for OrderItemsRepoMock {
        fn find(&self, order_item_id_arg: i32) -> RepoResult<Option<OrderItem>> {
            Ok(Some(create_order_item(order_item_id_arg, 1)))
        }

        fn find_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<OrderItem>> {
            Ok(vec![create_order_item(1, order_id_arg)])
        }

        fn find_with_products(&self, order_id_arg: i32) -> RepoResult<Vec<OrderItemWithProduct>> {
            Ok(vec![OrderItemWithProduct::new(
                create_order_item(1, order_id_arg),
                create_product_variant(1, 1),
                create_product(1, 1),
            )])
        }

        fn create(&self, payload: NewOrderItem) -> RepoResult<OrderItem> {
            let mut order_item = create_order_item(1, payload.order_id);
            order_item.product_variant_id = payload.product_variant_id;
            order_item.quantity = payload.quantity;
            order_item.price = payload.price;
            Ok(order_item)
        }

        fn delete(&self, order_item_id_arg: i32) -> RepoResult<OrderItem> {
            Ok(create_order_item(order_item_id_arg, 1))
        }

        fn delete_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<OrderItem>> {
            Ok(vec![create_order_item(1, order_id_arg)])
        }

        fn delete_by_product_variant(&self, _product_variant_id_arg: i32) -> RepoResult<Vec<OrderItem>> {
            Ok(vec![create_order_item(1, 1)])
        }
    }

    #[derive(Clone, Default)]
    pub struct PaymentsRepoMock;

    impl PaymentsRepo for PaymentsRepoMock {
        fn find(&self, payment_id_arg: i32) -> RepoResult<Option<Payment>> {
            Ok(Some(create_payment(payment_id_arg, 1)))
        }

        fn find_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<Payment>> {
            Ok(vec![create_payment(1, order_id_arg)])
        }

        fn transaction_id_exists(&self, transaction_id_arg: String) -> RepoResult<bool> {
            Ok(transaction_id_arg == MOCK_TRANSACTION_ID)
        }

        fn create(&self, payload: NewPayment) -> RepoResult<Payment> {
            let mut payment = create_payment(1, payload.order_id);
            payment.amount = payload.amount;
            payment.transaction_id = payload.transaction_id;
            Ok(payment)
        }

        fn delete_by_order(&self, order_id_arg: i32) -> RepoResult<Vec<Payment>> {
            Ok(vec![create_payment(1, order_id_arg)])
        }

        fn delete_by_payment_option(&self, _payment_option_id_arg: i32) -> RepoResult<Vec<Payment>> {
            Ok(vec![create_payment(1, 1)])
        }
    }

    #[derive(Clone, Default)]
    pub struct ShippingAddressesRepoMock;

    impl ShippingAddressesRepo for ShippingAddressesRepoMock {
        fn find(&self, shipping_address_id_arg: i32) -> RepoResult<Option<ShippingAddress>> {
            Ok(Some(create_shipping_address(shipping_address_id_arg)))
        }

        fn find_by_order(&self, _order_id_arg: i32) -> RepoResult<Vec<ShippingAddress>> {
            Ok(vec![create_shipping_address(1)])
        }

        fn create(&self, payload: NewShippingAddress) -> RepoResult<ShippingAddress> {
            let mut shipping_address = create_shipping_address(1);
            shipping_address.customer_id = payload.customer_id;
            shipping_address.order_id = payload.order_id;
            shipping_address.address = payload.address;
            Ok(shipping_address)
        }

        fn update(&self, shipping_address_id_arg: i32, payload: UpdateShippingAddress) -> RepoResult<ShippingAddress> {
            let mut shipping_address = create_shipping_address(shipping_address_id_arg);
            if let Some(address) = payload.address {
                shipping_address.address = Some(address);
            }
            shipping_address.date_added = SystemTime::now();
            Ok(shipping_address)
        }

        fn delete(&self, shipping_address_id_arg: i32) -> RepoResult<ShippingAddress> {
            Ok(create_shipping_address(shipping_address_id_arg))
        }

        fn nullify_customer(&self, _customer_id_arg: i32) -> RepoResult<usize> {
            Ok(1)
        }

        fn nullify_order(&self, _order_id_arg: i32) -> RepoResult<usize> {
            Ok(1)
        }
    }

    pub fn create_industry(id: i32, name: &str) -> Industry {
        Industry {
            id,
            name: name.to_string(),
            description: None,
            created_on: SystemTime::now(),
            created_by: Some(MOCK_USER_ID),
        }
    }

    pub fn create_category(id: i32, industry_id: i32) -> Category {
        Category {
            id,
            industry_id,
            name: MOCK_CATEGORY_NAME.to_string(),
            description: None,
            created_on: SystemTime::now(),
            created_by: Some(MOCK_USER_ID),
        }
    }

    pub fn create_store(id: i32, user_id: i32) -> Store {
        Store {
            id,
            user_id,
            name: MOCK_STORE_NAME.to_string(),
            description: None,
            logo: Some(DEFAULT_IMAGE_PATH.to_string()),
            website: None,
            created_on: SystemTime::now(),
            created_by: Some(MOCK_USER_ID),
        }
    }

    pub fn create_store_location(id: i32, store_id: i32) -> StoreLocation {
        StoreLocation {
            id,
            store_id,
            address: Some("1 Market street".to_string()),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            postal_code: "94105".to_string(),
            country: "USA".to_string(),
            latitude: None,
            longitude: None,
            phone: Some("+14155550100".to_string()),
            created_on: SystemTime::now(),
            created_by: Some(MOCK_USER_ID),
        }
    }

    pub fn create_product(id: i32, store_id: i32) -> Product {
        Product {
            id,
            store_id,
            category_id: 1,
            name: MOCK_PRODUCT_NAME.to_string(),
            description: None,
            price: Decimal::new(50000, 2),
            stock: 10,
            image: None,
            available: true,
            digital: false,
            created_on: SystemTime::now(),
            created_by: Some(MOCK_USER_ID),
        }
    }

    pub fn create_product_variant(id: i32, product_id: i32) -> ProductVariant {
        ProductVariant {
            id,
            product_id,
            name: MOCK_VARIANT_NAME.to_string(),
            price: Decimal::new(55000, 2),
            stock: 5,
            additional_info: None,
            available: true,
            created_on: SystemTime::now(),
            created_by: Some(MOCK_USER_ID),
        }
    }

    pub fn create_payment_option(id: i32) -> PaymentOption {
        PaymentOption {
            id,
            name: "Card".to_string(),
            description: None,
            created_on: SystemTime::now(),
            created_by: Some(MOCK_USER_ID),
        }
    }

    pub fn create_customer(id: i32, user_id: i32) -> Customer {
        Customer {
            id,
            user_id,
            address: Some("1 Mission street".to_string()),
            phone: Some("+14155550123".to_string()),
            created_on: SystemTime::now(),
        }
    }

    pub fn create_order(id: i32, customer_id: i32, store_id: i32) -> Order {
        Order {
            id,
            customer_id,
            store_id,
            total_amount: Decimal::new(110000, 2),
            status: "Pending".to_string(),
            created_at: SystemTime::now(),
        }
    }

    pub fn create_order_item(id: i32, order_id: i32) -> OrderItem {
        OrderItem {
            id,
            order_id,
            product_variant_id: 1,
            quantity: 2,
            price: Decimal::new(55000, 2),
            created_at: SystemTime::now(),
        }
    }

    pub fn create_payment(id: i32, order_id: i32) -> Payment {
        Payment {
            id,
            order_id,
            payment_option_id: 1,
            amount: Decimal::new(110000, 2),
            payment_date: SystemTime::now(),
            transaction_id: MOCK_TRANSACTION_ID.to_string(),
        }
    }

    pub fn create_shipping_address(id: i32) -> ShippingAddress {
        ShippingAddress {
            id,
            customer_id: Some(1),
            order_id: Some(1),
            address: Some("1 Mission street".to_string()),
            city: Some("San Francisco".to_string()),
            zipcode: Some("94105".to_string()),
            date_added: SystemTime::now(),
        }
    }

    #[derive(Default)]
    pub struct MockConnection {
        tr: AnsiTransactionManager,
    }

    impl Connection for MockConnection {
        type Backend = Pg;
        type TransactionManager = AnsiTransactionManager;

        fn establish(_database_url: &str) -> ConnectionResult<MockConnection> {
            Ok(MockConnection::default())
        }

        fn execute(&self, _query: &str) -> QueryResult<usize> {
            unimplemented!()
        }

        fn query_by_index<T, U>(&self, _source: T) -> QueryResult<Vec<U>>
        where
            T: AsQuery,
            T::Query: QueryFragment<Pg> + QueryId,
            Pg: HasSqlType<T::SqlType>,
            U: Queryable<T::SqlType, Pg>,
        {
            unimplemented!()
        }

        fn query_by_name<T, U>(&self, _source: &T) -> QueryResult<Vec<U>>
        where
            T: QueryFragment<Pg> + QueryId,
            U: QueryableByName<Pg>,
        {
            unimplemented!()
        }

        fn execute_returning_count<T>(&self, _source: &T) -> QueryResult<usize>
        where
            T: QueryFragment<Pg> + QueryId,
        {
            unimplemented!()
        }

        fn transaction_manager(&self) -> &Self::TransactionManager {
            &self.tr
        }
    }

    impl SimpleConnection for MockConnection {
        fn batch_execute(&self, _query: &str) -> QueryResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MockConnectionManager;

    impl ManageConnection for MockConnectionManager {
        type Connection = MockConnection;
        type Error = MockError;

        fn connect(&self) -> Result<MockConnection, MockError> {
            Ok(MockConnection::default())
        }

        fn is_valid(&self, _conn: &mut MockConnection) -> Result<(), MockError> {
            Ok(())
        }

        fn has_broken(&self, _conn: &mut MockConnection) -> bool {
            false
        }
    }

    #[derive(Debug)]
    pub struct MockError {}

    impl fmt::Display for MockError {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Mock connection error")
        }
    }

    impl Error for MockError {
        fn description(&self) -> &str {
            "Mock connection error"
        }

        fn cause(&self) -> Option<&Error> {
            None
        }
    }
}
