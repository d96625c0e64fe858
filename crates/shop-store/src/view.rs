//! Serializable read model handed to the view layer.

use serde::Serialize;
use shop_contracts::{CartLine, Order, Product, StatusFilter, User, ViewMode};

use crate::checkout::CheckoutSummary;
use crate::orders::StatusCounts;
use crate::store::Store;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub catalog: CatalogView,
    pub cart: CartView,
    pub wishlist: Vec<Product>,
    pub user: Option<User>,
    pub orders: OrdersView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub search_query: String,
    pub selected_category: String,
    pub categories: Vec<String>,
    pub view_mode: ViewMode,
    pub loading: bool,
    pub total_products: usize,
    pub visible_products: Vec<Product>,
    pub featured_products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: f64,
    pub item_count: u64,
    pub summary: CheckoutSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersView {
    pub filter: StatusFilter,
    pub orders: Vec<Order>,
    pub counts: StatusCounts,
}

impl StoreSnapshot {
    pub fn capture(store: &Store) -> Self {
        let catalog = store.catalog();
        let cart = store.cart();
        let orders = store.orders();
        Self {
            catalog: CatalogView {
                search_query: catalog.search_query().to_string(),
                selected_category: catalog.selected_category().to_string(),
                categories: catalog.categories().to_vec(),
                view_mode: catalog.view_mode(),
                loading: catalog.is_loading(),
                total_products: catalog.all_products().len(),
                visible_products: catalog.visible_products().cloned().collect(),
                featured_products: catalog.featured_products().cloned().collect(),
            },
            cart: CartView {
                lines: cart.lines().cloned().collect(),
                total: cart.total(),
                item_count: cart.item_count(),
                summary: store.checkout_summary(),
            },
            wishlist: store.wishlist().iter().cloned().collect(),
            user: store.session().user().cloned(),
            orders: OrdersView {
                filter: orders.status_filter(),
                orders: orders.filtered_orders().cloned().collect(),
                counts: orders.status_counts(),
            },
        }
    }
}
