//! Storefront data contracts.
//!
//! Plain records and the action families consumed by the `shop-store`
//! reducers. Nothing here owns state or performs I/O.

mod cart;
mod catalog;
mod events;
mod ids;
mod order;
mod product;
mod session;

pub use cart::*;
pub use catalog::*;
pub use events::*;
pub use ids::*;
pub use order::*;
pub use product::*;
pub use session::*;
