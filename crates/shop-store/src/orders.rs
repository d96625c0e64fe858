//! Admin order book: placed orders, status transitions, and the status filter.

use indexmap::IndexMap;
use serde::Serialize;
use shop_contracts::{Order, OrderEvent, OrderId, OrderStatus, StatusFilter};
use thiserror::Error;

use crate::reducer::{Reducer, ReducerCtx};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("unknown order '{0}'")]
    UnknownOrder(OrderId),
    /// `to == from` when a finished order is asked to advance or cancel again.
    #[error("order '{id}' cannot move from {from} to {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
}

/// Fulfilment step after `status`, if any. Cancellation is not a step.
pub fn next_status(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Processing => Some(OrderStatus::Shipped),
        OrderStatus::Shipped => Some(OrderStatus::Delivered),
        OrderStatus::Delivered | OrderStatus::Cancelled => None,
    }
}

pub fn transition_order(
    order: &mut Order,
    next: OrderStatus,
    at_ms: u64,
) -> Result<(), OrderError> {
    if order.status == next {
        return Ok(());
    }

    let allowed = matches!(
        (order.status, next),
        (OrderStatus::Processing, OrderStatus::Shipped)
            | (OrderStatus::Shipped, OrderStatus::Delivered)
            | (OrderStatus::Processing, OrderStatus::Cancelled)
    );

    if !allowed {
        return Err(OrderError::InvalidTransition {
            id: order.id.clone(),
            from: order.status,
            to: next,
        });
    }

    order.status = next;
    order.updated_at_ms = at_ms;
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Processing => self.processing,
            OrderStatus::Shipped => self.shipped,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: IndexMap<OrderId, Order>,
    filter: StatusFilter,
}

impl OrderBook {
    /// Insert, or replace an order with the same id in place.
    pub fn record(&mut self, order: Order) {
        self.orders.insert(order.id.clone(), order);
    }

    pub fn advance(&mut self, id: &OrderId, at_ms: u64) -> Result<OrderStatus, OrderError> {
        let order = self.order_mut(id)?;
        let next = next_status(order.status).ok_or_else(|| OrderError::InvalidTransition {
            id: id.clone(),
            from: order.status,
            to: order.status,
        })?;
        transition_order(order, next, at_ms)?;
        Ok(next)
    }

    pub fn cancel(&mut self, id: &OrderId, at_ms: u64) -> Result<(), OrderError> {
        let order = self.order_mut(id)?;
        if order.status.is_terminal() {
            return Err(OrderError::InvalidTransition {
                id: id.clone(),
                from: order.status,
                to: order.status,
            });
        }
        transition_order(order, OrderStatus::Cancelled, at_ms)
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn filtered_orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders
            .values()
            .filter(|order| self.filter.matches(order.status))
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            all: self.orders.len(),
            ..StatusCounts::default()
        };
        for order in self.orders.values() {
            match order.status {
                OrderStatus::Processing => counts.processing += 1,
                OrderStatus::Shipped => counts.shipped += 1,
                OrderStatus::Delivered => counts.delivered += 1,
                OrderStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn order_mut(&mut self, id: &OrderId) -> Result<&mut Order, OrderError> {
        self.orders
            .get_mut(id)
            .ok_or_else(|| OrderError::UnknownOrder(id.clone()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OrderReducer;

impl Reducer for OrderReducer {
    type State = OrderBook;
    type Event = OrderEvent;
    type Error = OrderError;

    fn reduce(
        &mut self,
        event: Self::Event,
        ctx: &mut ReducerCtx<'_, Self::State>,
    ) -> Result<(), Self::Error> {
        match event {
            OrderEvent::Record(order) => {
                tracing::info!(order = %order.id, total = order.total, "order recorded");
                ctx.state.record(order);
            }
            OrderEvent::Advance { id, at_ms } => {
                let status = ctx.state.advance(&id, at_ms)?;
                tracing::info!(order = %id, %status, "order advanced");
            }
            OrderEvent::Cancel { id, at_ms } => {
                ctx.state.cancel(&id, at_ms)?;
                tracing::info!(order = %id, "order cancelled");
            }
            OrderEvent::SetStatusFilter(filter) => ctx.state.set_status_filter(filter),
        }
        Ok(())
    }
}
