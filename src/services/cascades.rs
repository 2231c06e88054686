//! Explicit multi-table delete paths shared by the services.
//!
//! Every parent delete removes its dependents child-first inside the
//! caller's transaction, mirroring the referential actions declared in the
//! schema DDL. Shipping addresses are never deleted here, only detached.

use repos::types::RepoResult;
use repos::{OrderItemsRepo, OrdersRepo, PaymentsRepo, ProductVariantsRepo, ProductsRepo, ShippingAddressesRepo, StoreLocationsRepo};

/// Removes the variants of the given products together with the order items
/// referencing those variants. The product rows are left to the caller.
pub fn delete_product_dependents(
    product_ids: Vec<i32>,
    product_variants_repo: &ProductVariantsRepo,
    order_items_repo: &OrderItemsRepo,
) -> RepoResult<()> {
    for product_id in product_ids {
        let variants = product_variants_repo.find_by_product(product_id)?;
        for variant in variants {
            order_items_repo.delete_by_product_variant(variant.id)?;
        }
        product_variants_repo.delete_by_product(product_id)?;
    }
    Ok(())
}

/// Removes line items and payments of an order and detaches its shipping
/// addresses. The order row is left to the caller.
pub fn delete_order_dependents(
    order_id: i32,
    order_items_repo: &OrderItemsRepo,
    payments_repo: &PaymentsRepo,
    shipping_addresses_repo: &ShippingAddressesRepo,
) -> RepoResult<()> {
    order_items_repo.delete_by_order(order_id)?;
    payments_repo.delete_by_order(order_id)?;
    shipping_addresses_repo.nullify_order(order_id)?;
    Ok(())
}

/// Removes everything hanging off a store: its locations, its orders with
/// their dependents, and its products with theirs. The store row is left to
/// the caller.
pub fn delete_store_dependents(
    store_id: i32,
    store_locations_repo: &StoreLocationsRepo,
    products_repo: &ProductsRepo,
    product_variants_repo: &ProductVariantsRepo,
    orders_repo: &OrdersRepo,
    order_items_repo: &OrderItemsRepo,
    payments_repo: &PaymentsRepo,
    shipping_addresses_repo: &ShippingAddressesRepo,
) -> RepoResult<()> {
    store_locations_repo.delete_by_store(store_id)?;
    let orders = orders_repo.find_by_store(store_id)?;
    for order in orders {
        delete_order_dependents(order.id, order_items_repo, payments_repo, shipping_addresses_repo)?;
        orders_repo.delete(order.id)?;
    }
    let products = products_repo.find_by_store(store_id)?;
    let product_ids = products.into_iter().map(|product| product.id).collect();
    delete_product_dependents(product_ids, product_variants_repo, order_items_repo)?;
    products_repo.delete_by_store(store_id)?;
    Ok(())
}
