//! Diesel table definitions for the marketplace schema.

/// diesel table for industries
table! {
    industries (id) {
        id -> Integer,
        name -> VarChar,
        description -> Nullable<Text>,
        created_on -> Timestamp,
        created_by -> Nullable<Integer>,
    }
}

/// diesel table for categories
table! {
    categories (id) {
        id -> Integer,
        industry_id -> Integer,
        name -> VarChar,
        description -> Nullable<Text>,
        created_on -> Timestamp,
        created_by -> Nullable<Integer>,
    }
}

/// diesel table for stores
table! {
    stores (id) {
        id -> Integer,
        user_id -> Integer,
        name -> VarChar,
        description -> Nullable<Text>,
        logo -> Nullable<VarChar>,
        website -> Nullable<VarChar>,
        created_on -> Timestamp,
        created_by -> Nullable<Integer>,
    }
}

/// diesel table for store_locations
table! {
    store_locations (id) {
        id -> Integer,
        store_id -> Integer,
        address -> Nullable<Text>,
        city -> VarChar,
        state -> VarChar,
        postal_code -> VarChar,
        country -> VarChar,
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
        phone -> Nullable<VarChar>,
        created_on -> Timestamp,
        created_by -> Nullable<Integer>,
    }
}

/// diesel table for products
table! {
    products (id) {
        id -> Integer,
        store_id -> Integer,
        category_id -> Integer,
        name -> VarChar,
        description -> Nullable<Text>,
        price -> Numeric,
        stock -> Integer,
        image -> Nullable<VarChar>,
        available -> Bool,
        digital -> Bool,
        created_on -> Timestamp,
        created_by -> Nullable<Integer>,
    }
}

/// diesel table for product_variants
table! {
    product_variants (id) {
        id -> Integer,
        product_id -> Integer,
        name -> VarChar,
        price -> Numeric,
        stock -> Integer,
        additional_info -> Nullable<Text>,
        available -> Bool,
        created_on -> Timestamp,
        created_by -> Nullable<Integer>,
    }
}

/// diesel table for payment_options
table! {
    payment_options (id) {
        id -> Integer,
        name -> VarChar,
        description -> Nullable<Text>,
        created_on -> Timestamp,
        created_by -> Nullable<Integer>,
    }
}

/// diesel table for customers
table! {
    customers (id) {
        id -> Integer,
        user_id -> Integer,
        address -> Nullable<Text>,
        phone -> Nullable<VarChar>,
        created_on -> Timestamp,
    }
}

/// diesel table for orders
table! {
    orders (id) {
        id -> Integer,
        customer_id -> Integer,
        store_id -> Integer,
        total_amount -> Numeric,
        status -> VarChar,
        created_at -> Timestamp,
    }
}

/// diesel table for order_items
table! {
    order_items (id) {
        id -> Integer,
        order_id -> Integer,
        product_variant_id -> Integer,
        quantity -> Integer,
        price -> Numeric,
        created_at -> Timestamp,
    }
}

/// diesel table for payments
table! {
    payments (id) {
        id -> Integer,
        order_id -> Integer,
        payment_option_id -> Integer,
        amount -> Numeric,
        payment_date -> Timestamp,
        transaction_id -> VarChar,
    }
}

/// diesel table for shipping_addresses
table! {
    shipping_addresses (id) {
        id -> Integer,
        customer_id -> Nullable<Integer>,
        order_id -> Nullable<Integer>,
        address -> Nullable<VarChar>,
        city -> Nullable<VarChar>,
        zipcode -> Nullable<VarChar>,
        date_added -> Timestamp,
    }
}

joinable!(categories -> industries (industry_id));
joinable!(store_locations -> stores (store_id));
joinable!(products -> stores (store_id));
joinable!(products -> categories (category_id));
joinable!(product_variants -> products (product_id));
joinable!(orders -> customers (customer_id));
joinable!(orders -> stores (store_id));
joinable!(order_items -> orders (order_id));
joinable!(order_items -> product_variants (product_variant_id));
joinable!(payments -> orders (order_id));
joinable!(payments -> payment_options (payment_option_id));
joinable!(shipping_addresses -> customers (customer_id));
joinable!(shipping_addresses -> orders (order_id));

allow_tables_to_appear_in_same_query!(
    industries,
    categories,
    stores,
    store_locations,
    products,
    product_variants,
    payment_options,
    customers,
    orders,
    order_items,
    payments,
    shipping_addresses,
);
