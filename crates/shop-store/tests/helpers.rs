//! Shared fixtures for store integration tests.
//!
//! Each integration test compiles this module separately, so some helpers may
//! look unused from one file or another.

#![allow(dead_code)]

use shop_contracts::{Address, CheckoutRequest, PaymentMethod, Product, User};

pub fn product(id: &str, name: &str, category: &str, price: f64) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        description: format!("{name} from the {category} range"),
        category: category.into(),
        price,
        original_price: None,
        image: format!("https://img.example/{id}.jpg"),
        images: None,
        rating: 4.2,
        review_count: 10,
        in_stock: true,
        featured: None,
    }
}

/// Mixed catalog mirroring the demo data: two electronics, shoes, a hat, a mug.
pub fn demo_catalog() -> Vec<Product> {
    let mut headphones = product("1", "Wireless Headphones", "Electronics", 199.99);
    headphones.original_price = Some(249.99);
    headphones.featured = Some(true);
    let mut shoes = product("3", "Running Shoes", "Sports", 89.5);
    shoes.featured = Some(true);
    vec![
        headphones,
        product("2", "Smart Watch", "Electronics", 299.0),
        shoes,
        product("4", "Hat", "Clothing", 19.0),
        product("5", "Coffee Mug", "Home & Kitchen", 12.0),
    ]
}

pub fn shopper() -> User {
    User {
        id: "user1".into(),
        email: "user@example.com".into(),
        name: "Demo User".into(),
        avatar: None,
        is_admin: false,
    }
}

pub fn checkout_request(payment_method: PaymentMethod, placed_at_ms: u64) -> CheckoutRequest {
    CheckoutRequest {
        address: Address {
            name: "Demo User".into(),
            street: "42 Elm Street".into(),
            city: "Portland".into(),
            state: "OR".into(),
            zip_code: "97201".into(),
            country: "United States".into(),
        },
        payment_method,
        placed_at_ms,
    }
}

pub fn visible_ids(store: &shop_store::Store) -> Vec<String> {
    store
        .catalog()
        .visible_products()
        .map(|p| p.id.to_string())
        .collect()
}
