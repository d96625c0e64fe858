use std::collections::VecDeque;
use std::convert::Infallible;

use shop_contracts::{CartEvent, CheckoutRequest, OrderEvent, StoreAction};
use thiserror::Error;

use crate::cart::{CartReducer, CartState};
use crate::catalog::{CatalogReducer, CatalogState};
use crate::checkout::{CheckoutError, CheckoutSummary, prepare_order};
use crate::config::StoreConfig;
use crate::orders::{OrderBook, OrderError, OrderReducer};
use crate::reducer::step;
use crate::session::{SessionReducer, SessionState};
use crate::view::StoreSnapshot;
use crate::wishlist::{WishlistReducer, WishlistState};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("checkout failed: {0}")]
    Checkout(#[from] CheckoutError),
    #[error("order update failed: {0}")]
    Orders(#[from] OrderError),
}

impl From<Infallible> for StoreError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Application-root state container. Owns every slice; all writes go through
/// [`Store::dispatch`].
#[derive(Debug, Default)]
pub struct Store {
    config: StoreConfig,
    catalog: CatalogState,
    cart: CartState,
    wishlist: WishlistState,
    session: SessionState,
    orders: OrderBook,
    catalog_reducer: CatalogReducer,
    cart_reducer: CartReducer,
    wishlist_reducer: WishlistReducer,
    session_reducer: SessionReducer,
    order_reducer: OrderReducer,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Apply `action` and every follow-up it triggers, first in first out.
    ///
    /// On error the rest of the queue is dropped. Entries already applied stay applied.
    pub fn dispatch(&mut self, action: impl Into<StoreAction>) -> Result<(), StoreError> {
        let mut queue: VecDeque<StoreAction> = VecDeque::from([action.into()]);
        while let Some(action) = queue.pop_front() {
            let slice = action.slice();
            tracing::debug!(slice, pending = queue.len(), "dispatch");
            match self.apply(action) {
                Ok(follow_ups) => queue.extend(follow_ups),
                Err(err) => {
                    tracing::warn!(slice, error = %err, "dispatch failed");
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Dispatch a batch in order, stopping at the first failure.
    pub fn dispatch_all(
        &mut self,
        actions: impl IntoIterator<Item = StoreAction>,
    ) -> Result<(), StoreError> {
        actions
            .into_iter()
            .try_for_each(|action| self.dispatch(action))
    }

    fn apply(&mut self, action: StoreAction) -> Result<Vec<StoreAction>, StoreError> {
        let follow_ups = match action {
            StoreAction::Catalog(event) => {
                step(&mut self.catalog_reducer, &mut self.catalog, event)?
            }
            StoreAction::Cart(event) => step(&mut self.cart_reducer, &mut self.cart, event)?,
            StoreAction::Wishlist(event) => {
                step(&mut self.wishlist_reducer, &mut self.wishlist, event)?
            }
            StoreAction::Session(event) => {
                step(&mut self.session_reducer, &mut self.session, event)?
            }
            StoreAction::Orders(event) => step(&mut self.order_reducer, &mut self.orders, event)?,
            StoreAction::PlaceOrder(request) => self.place_order(&request)?,
        };
        Ok(follow_ups)
    }

    fn place_order(&self, request: &CheckoutRequest) -> Result<Vec<StoreAction>, CheckoutError> {
        let order = prepare_order(&self.cart, &self.session, &self.config, request)?;
        tracing::info!(order = %order.id, payment = %order.payment_method, "order placed");
        Ok(vec![
            OrderEvent::Record(order).into(),
            CartEvent::Clear.into(),
        ])
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn wishlist(&self) -> &WishlistState {
        &self.wishlist
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn checkout_summary(&self) -> CheckoutSummary {
        CheckoutSummary::for_cart(&self.cart, &self.config)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot::capture(self)
    }
}
