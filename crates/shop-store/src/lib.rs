//! In-memory storefront state: catalog filtering, cart, wishlist, session,
//! checkout and the admin order book.
//!
//! Each slice is a plain state value driven by a [`Reducer`]. The root
//! [`Store`] routes [`StoreAction`]s to the matching reducer and drains any
//! follow-up actions in FIFO order before `dispatch` returns.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod orders;
pub mod reducer;
pub mod session;
mod store;
pub mod view;
pub mod wishlist;

pub use cart::{CartReducer, CartState};
pub use catalog::{CatalogReducer, CatalogState, filter_products};
pub use checkout::{CheckoutError, CheckoutSummary, prepare_order};
pub use config::StoreConfig;
pub use orders::{OrderBook, OrderError, OrderReducer, StatusCounts, next_status};
pub use reducer::{Reducer, ReducerCtx, step};
pub use session::{SessionReducer, SessionState};
pub use shop_contracts::StoreAction;
pub use store::{Store, StoreError};
pub use view::StoreSnapshot;
pub use wishlist::{WishlistReducer, WishlistState};
