use std::convert::Infallible;

use indexmap::IndexMap;
use shop_contracts::{CartEvent, CartLine, Product, ProductId};

use crate::reducer::{Reducer, ReducerCtx};

/// Cart lines keyed by product id, in the order they were first added.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    lines: IndexMap<ProductId, CartLine>,
    total: f64,
}

impl CartState {
    /// Repeat adds bump the quantity and keep the snapshot stored by the first add.
    pub fn add_to_cart(&mut self, product: Product) {
        match self.lines.get_mut(&product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => {
                self.lines.insert(
                    product.id.clone(),
                    CartLine {
                        product,
                        quantity: 1,
                    },
                );
            }
        }
        self.recompute_total();
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) {
        if self.lines.shift_remove(id).is_some() {
            self.recompute_total();
        }
    }

    /// Absolute set. Non-positive quantities remove the line; unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        let Some(line) = self.lines.get_mut(id) else {
            return;
        };
        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.recompute_total();
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.total = 0.0;
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> + '_ {
        self.lines.values()
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.get(id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.lines.contains_key(id)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across lines (header badge count).
    pub fn item_count(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn recompute_total(&mut self) {
        self.total = self.lines.values().map(CartLine::line_total).sum();
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Event = CartEvent;
    type Error = Infallible;

    fn reduce(
        &mut self,
        event: Self::Event,
        ctx: &mut ReducerCtx<'_, Self::State>,
    ) -> Result<(), Self::Error> {
        match event {
            CartEvent::Add(product) => ctx.state.add_to_cart(product),
            CartEvent::Remove(id) => ctx.state.remove_from_cart(&id),
            CartEvent::UpdateQuantity { id, quantity } => ctx.state.update_quantity(&id, quantity),
            CartEvent::Clear => ctx.state.clear_cart(),
        }
        Ok(())
    }
}
