use super::{
    Address, Order, OrderId, PaymentMethod, Product, ProductId, StatusFilter, User, ViewMode,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CatalogEvent {
    LoadProducts(Vec<Product>),
    AddProduct(Product),
    RemoveProduct(ProductId),
    SetSearchQuery(String),
    SetSelectedCategory(String),
    SetViewMode(ViewMode),
    ToggleViewMode,
    SetLoading(bool),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CartEvent {
    Add(Product),
    Remove(ProductId),
    /// Absolute quantity; zero or negative removes the line.
    UpdateQuantity {
        id: ProductId,
        quantity: i64,
    },
    Clear,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum WishlistEvent {
    Add(Product),
    Remove(ProductId),
    Toggle(Product),
    Clear,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    LoginSucceeded(User),
    UpdateProfile {
        name: String,
        #[serde(default)]
        avatar: Option<String>,
    },
    Logout,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum OrderEvent {
    Record(Order),
    Advance { id: OrderId, at_ms: u64 },
    Cancel { id: OrderId, at_ms: u64 },
    SetStatusFilter(StatusFilter),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub address: Address,
    pub payment_method: PaymentMethod,
    pub placed_at_ms: u64,
}

/// Everything the view layer can dispatch into the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StoreAction {
    Catalog(CatalogEvent),
    Cart(CartEvent),
    Wishlist(WishlistEvent),
    Session(SessionEvent),
    Orders(OrderEvent),
    PlaceOrder(CheckoutRequest),
}

impl StoreAction {
    /// Slice name used in diagnostics.
    pub const fn slice(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "catalog",
            Self::Cart(_) => "cart",
            Self::Wishlist(_) => "wishlist",
            Self::Session(_) => "session",
            Self::Orders(_) => "orders",
            Self::PlaceOrder(_) => "checkout",
        }
    }
}

impl From<CatalogEvent> for StoreAction {
    fn from(event: CatalogEvent) -> Self {
        Self::Catalog(event)
    }
}

impl From<CartEvent> for StoreAction {
    fn from(event: CartEvent) -> Self {
        Self::Cart(event)
    }
}

impl From<WishlistEvent> for StoreAction {
    fn from(event: WishlistEvent) -> Self {
        Self::Wishlist(event)
    }
}

impl From<SessionEvent> for StoreAction {
    fn from(event: SessionEvent) -> Self {
        Self::Session(event)
    }
}

impl From<OrderEvent> for StoreAction {
    fn from(event: OrderEvent) -> Self {
        Self::Orders(event)
    }
}
