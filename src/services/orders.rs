//! Orders Services, presents CRUD operations with orders, their line items,
//! payments and shipping addresses
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
use models::{
    NewOrder, NewOrderItem, NewPayment, NewShippingAddress, Order, OrderItem, OrderWithItems, Payment, ShippingAddress, UpdateOrder,
    UpdateShippingAddress,
};
use repos::ReposFactory;

pub trait OrdersService {
    /// Returns order by ID
    fn get(&self, order_id: i32) -> ServiceFuture<Order>;
    /// Returns order by ID together with its line items and their products
    fn get_with_items(&self, order_id: i32) -> ServiceFuture<OrderWithItems>;
    /// Returns all orders of a customer
    fn list_by_customer(&self, customer_id: i32) -> ServiceFuture<Vec<Order>>;
    /// Returns all orders placed with a store
    fn list_by_store(&self, store_id: i32) -> ServiceFuture<Vec<Order>>;
    /// Creates new order
    fn create(&self, payload: NewOrder) -> ServiceFuture<Order>;
    /// Updates specific order
    fn update(&self, order_id: i32, payload: UpdateOrder) -> ServiceFuture<Order>;
    /// Deletes specific order together with its line items and payments;
    /// shipping addresses are detached, not deleted
    fn delete(&self, order_id: i32) -> ServiceFuture<Order>;
    /// Returns all line items of an order
    fn list_order_items(&self, order_id: i32) -> ServiceFuture<Vec<OrderItem>>;
    /// Adds a line item to an order; the payload price is the snapshot
    /// taken at order time
    fn create_order_item(&self, payload: NewOrderItem) -> ServiceFuture<OrderItem>;
    /// Deletes specific line item
    fn delete_order_item(&self, order_item_id: i32) -> ServiceFuture<OrderItem>;
    /// Records a payment against an order
    fn create_payment(&self, payload: NewPayment) -> ServiceFuture<Payment>;
    /// Returns all payments of an order
    fn list_payments(&self, order_id: i32) -> ServiceFuture<Vec<Payment>>;
    /// Returns shipping address by ID
    fn get_shipping_address(&self, shipping_address_id: i32) -> ServiceFuture<ShippingAddress>;
    /// Returns all shipping addresses attached to an order
    fn list_shipping_addresses(&self, order_id: i32) -> ServiceFuture<Vec<ShippingAddress>>;
    /// Creates new shipping address
    fn create_shipping_address(&self, payload: NewShippingAddress) -> ServiceFuture<ShippingAddress>;
    /// Updates specific shipping address
    fn update_shipping_address(&self, shipping_address_id: i32, payload: UpdateShippingAddress) -> ServiceFuture<ShippingAddress>;
    /// Deletes specific shipping address
    fn delete_shipping_address(&self, shipping_address_id: i32) -> ServiceFuture<ShippingAddress>;
}

/// Orders services
pub struct OrdersServiceImpl<
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
    > OrdersServiceImpl<T, M, F>
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
    > OrdersService for OrdersServiceImpl<T, M, F>
{
    /// Returns order by ID
    fn get(&self, order_id: i32) -> ServiceFuture<Order> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let orders_repo = repo_factory.create_orders_repo(&*conn);
                    orders_repo.find(order_id).and_then(|order| {
                        if let Some(order) = order {
                            Ok(order)
                        } else {
                            Err(format_err!("Not found such order id : {}", order_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service Orders, get endpoint error occurred.").into())
        }))
    }

    /// Returns order by ID together with its line items and their products
    fn get_with_items(&self, order_id: i32) -> ServiceFuture<OrderWithItems> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let orders_repo = repo_factory.create_orders_repo(&*conn);
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    orders_repo
                        .find(order_id)
                        .and_then(|order| {
                            if let Some(order) = order {
                                Ok(order)
                            } else {
                                Err(format_err!("Not found such order id : {}", order_id)
                                    .context(Error::NotFound)
                                    .into())
                            }
                        }).and_then(|order| {
                            let items = order_items_repo.find_with_products(order_id)?;
                            Ok(OrderWithItems::new(order, items))
                        })
                }).map_err(|e: FailureError| e.context("Service Orders, get with items endpoint error occurred.").into())
        }))
    }

    /// Returns all orders of a customer
    fn list_by_customer(&self, customer_id: i32) -> ServiceFuture<Vec<Order>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let orders_repo = repo_factory.create_orders_repo(&*conn);
                    orders_repo.find_by_customer(customer_id)
                }).map_err(|e: FailureError| e.context("Service Orders, list by customer endpoint error occurred.").into())
        }))
    }

    /// Returns all orders placed with a store
    fn list_by_store(&self, store_id: i32) -> ServiceFuture<Vec<Order>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let orders_repo = repo_factory.create_orders_repo(&*conn);
                    orders_repo.find_by_store(store_id)
                }).map_err(|e: FailureError| e.context("Service Orders, list by store endpoint error occurred.").into())
        }))
    }

    /// Creates new order
    fn create(&self, payload: NewOrder) -> ServiceFuture<Order> {
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
                            let customers_repo = repo_factory.create_customers_repo(&*conn);
                            let stores_repo = repo_factory.create_stores_repo(&*conn);
                            let orders_repo = repo_factory.create_orders_repo(&*conn);
                            conn.transaction::<Order, FailureError, _>(move || {
                                customers_repo.find(payload.customer_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such customer id : {}", payload.customer_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                stores_repo.find(payload.store_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such store id : {}", payload.store_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                orders_repo.create(payload)
                            })
                        })
                }).map_err(|e: FailureError| e.context("Service Orders, create endpoint error occurred.").into())
        }))
    }

    /// Updates specific order
    fn update(&self, order_id: i32, payload: UpdateOrder) -> ServiceFuture<Order> {
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
                            let orders_repo = repo_factory.create_orders_repo(&*conn);
                            orders_repo.update(order_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Orders, update endpoint error occurred.").into())
        }))
    }

    /// Deletes specific order together with its line items and payments;
    /// shipping addresses are detached, not deleted
    fn delete(&self, order_id: i32) -> ServiceFuture<Order> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let orders_repo = repo_factory.create_orders_repo(&*conn);
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    let payments_repo = repo_factory.create_payments_repo(&*conn);
                    let shipping_addresses_repo = repo_factory.create_shipping_addresses_repo(&*conn);
                    conn.transaction::<Order, FailureError, _>(move || {
                        cascades::delete_order_dependents(order_id, &*order_items_repo, &*payments_repo, &*shipping_addresses_repo)?;
                        orders_repo.delete(order_id)
                    })
                }).map_err(|e: FailureError| e.context("Service Orders, delete endpoint error occurred.").into())
        }))
    }

    /// Returns all line items of an order
    fn list_order_items(&self, order_id: i32) -> ServiceFuture<Vec<OrderItem>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    order_items_repo.find_by_order(order_id)
                }).map_err(|e: FailureError| e.context("Service Orders, list order items endpoint error occurred.").into())
        }))
    }

    /// Adds a line item to an order; the payload price is the snapshot
    /// taken at order time
    fn create_order_item(&self, payload: NewOrderItem) -> ServiceFuture<OrderItem> {
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
                            let orders_repo = repo_factory.create_orders_repo(&*conn);
                            let product_variants_repo = repo_factory.create_product_variants_repo(&*conn);
                            let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                            conn.transaction::<OrderItem, FailureError, _>(move || {
                                orders_repo.find(payload.order_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such order id : {}", payload.order_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                product_variants_repo.find(payload.product_variant_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such product variant id : {}", payload.product_variant_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                order_items_repo.create(payload)
                            })
                        })
                }).map_err(|e: FailureError| e.context("Service Orders, create order item endpoint error occurred.").into())
        }))
    }

    /// Deletes specific line item
    fn delete_order_item(&self, order_item_id: i32) -> ServiceFuture<OrderItem> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let order_items_repo = repo_factory.create_order_items_repo(&*conn);
                    order_items_repo.delete(order_item_id)
                }).map_err(|e: FailureError| e.context("Service Orders, delete order item endpoint error occurred.").into())
        }))
    }

    /// Records a payment against an order
    fn create_payment(&self, payload: NewPayment) -> ServiceFuture<Payment> {
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
                            let orders_repo = repo_factory.create_orders_repo(&*conn);
                            let payment_options_repo = repo_factory.create_payment_options_repo(&*conn);
                            let payments_repo = repo_factory.create_payments_repo(&*conn);
                            conn.transaction::<Payment, FailureError, _>(move || {
                                orders_repo.find(payload.order_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such order id : {}", payload.order_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                payment_options_repo.find(payload.payment_option_id)?.ok_or_else(|| -> FailureError {
                                    format_err!("Not found such payment option id : {}", payload.payment_option_id)
                                        .context(Error::NotFound)
                                        .into()
                                })?;
                                if payments_repo.transaction_id_exists(payload.transaction_id.clone())? {
                                    return Err(format_err!("Payment with transaction id '{}' already exists.", payload.transaction_id)
                                        .context(Error::Validate(validation_errors!({
                                            "transaction_id": ["exists" => "Payment with this transaction id already exists"]
                                        }))).into());
                                }
                                payments_repo.create(payload)
                            })
                        })
                }).map_err(|e: FailureError| e.context("Service Orders, create payment endpoint error occurred.").into())
        }))
    }

    /// Returns all payments of an order
    fn list_payments(&self, order_id: i32) -> ServiceFuture<Vec<Payment>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let payments_repo = repo_factory.create_payments_repo(&*conn);
                    payments_repo.find_by_order(order_id)
                }).map_err(|e: FailureError| e.context("Service Orders, list payments endpoint error occurred.").into())
        }))
    }

    /// Returns shipping address by ID
    fn get_shipping_address(&self, shipping_address_id: i32) -> ServiceFuture<ShippingAddress> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let shipping_addresses_repo = repo_factory.create_shipping_addresses_repo(&*conn);
                    shipping_addresses_repo.find(shipping_address_id).and_then(|shipping_address| {
                        if let Some(shipping_address) = shipping_address {
                            Ok(shipping_address)
                        } else {
                            Err(format_err!("Not found such shipping address id : {}", shipping_address_id)
                                .context(Error::NotFound)
                                .into())
                        }
                    })
                }).map_err(|e: FailureError| e.context("Service Orders, get shipping address endpoint error occurred.").into())
        }))
    }

    /// Returns all shipping addresses attached to an order
    fn list_shipping_addresses(&self, order_id: i32) -> ServiceFuture<Vec<ShippingAddress>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let shipping_addresses_repo = repo_factory.create_shipping_addresses_repo(&*conn);
                    shipping_addresses_repo.find_by_order(order_id)
                }).map_err(|e: FailureError| e.context("Service Orders, list shipping addresses endpoint error occurred.").into())
        }))
    }

    /// Creates new shipping address
    fn create_shipping_address(&self, payload: NewShippingAddress) -> ServiceFuture<ShippingAddress> {
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
                            let shipping_addresses_repo = repo_factory.create_shipping_addresses_repo(&*conn);
                            shipping_addresses_repo.create(payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Orders, create shipping address endpoint error occurred.").into())
        }))
    }

    /// Updates specific shipping address
    fn update_shipping_address(&self, shipping_address_id: i32, payload: UpdateShippingAddress) -> ServiceFuture<ShippingAddress> {
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
                            let shipping_addresses_repo = repo_factory.create_shipping_addresses_repo(&*conn);
                            shipping_addresses_repo.update(shipping_address_id, payload)
                        })
                }).map_err(|e: FailureError| e.context("Service Orders, update shipping address endpoint error occurred.").into())
        }))
    }

    /// Deletes specific shipping address
    fn delete_shipping_address(&self, shipping_address_id: i32) -> ServiceFuture<ShippingAddress> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    e.context(Error::Connection).into()
                }).and_then(move |conn| {
                    let shipping_addresses_repo = repo_factory.create_shipping_addresses_repo(&*conn);
                    shipping_addresses_repo.delete(shipping_address_id)
                }).map_err(|e: FailureError| e.context("Service Orders, delete shipping address endpoint error occurred.").into())
        }))
    }
}
