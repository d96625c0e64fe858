use serde::Serialize;
use shop_contracts::{CheckoutRequest, Order, OrderId, OrderStatus, PaymentMethod};
use thiserror::Error;

use crate::cart::CartState;
use crate::config::StoreConfig;
use crate::session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("checkout requires a signed-in user")]
    NotSignedIn,
    #[error("address field '{field}' is required")]
    IncompleteAddress { field: &'static str },
    #[error("payment method '{0}' is not available")]
    PaymentUnavailable(PaymentMethod),
}

/// Price breakdown shown on the checkout screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl CheckoutSummary {
    pub fn for_cart(cart: &CartState, config: &StoreConfig) -> Self {
        let subtotal = cart.total();
        let shipping = config.shipping_cost;
        let tax = subtotal * config.tax_rate;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// Validate a checkout request against the current cart and session and build
/// the resulting order. Reads only; the caller applies the order.
pub fn prepare_order(
    cart: &CartState,
    session: &SessionState,
    config: &StoreConfig,
    request: &CheckoutRequest,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let user = session.user().ok_or(CheckoutError::NotSignedIn)?;
    if let Some(field) = request.address.first_missing_field() {
        return Err(CheckoutError::IncompleteAddress { field });
    }
    if !config.accepts(request.payment_method) {
        return Err(CheckoutError::PaymentUnavailable(request.payment_method));
    }

    let summary = CheckoutSummary::for_cart(cart, config);
    Ok(Order {
        id: OrderId::from_placed_at(request.placed_at_ms),
        user_id: user.id.clone(),
        items: cart.lines().cloned().collect(),
        subtotal: summary.subtotal,
        shipping: summary.shipping,
        tax: summary.tax,
        total: summary.total,
        status: OrderStatus::Processing,
        address: request.address.clone(),
        payment_method: request.payment_method,
        created_at_ms: request.placed_at_ms,
        updated_at_ms: request.placed_at_ms,
    })
}
