use std::convert::Infallible;

use indexmap::IndexMap;
use shop_contracts::{Product, ProductId, WishlistEvent};

use crate::reducer::{Reducer, ReducerCtx};

/// Saved products keyed by id. Membership ignores every field but `id`.
#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    items: IndexMap<ProductId, Product>,
}

impl WishlistState {
    pub fn add_to_wishlist(&mut self, product: Product) {
        self.items.entry(product.id.clone()).or_insert(product);
    }

    pub fn remove_from_wishlist(&mut self, id: &ProductId) {
        self.items.shift_remove(id);
    }

    /// Heart-button behaviour: drop when saved, save otherwise.
    pub fn toggle(&mut self, product: Product) {
        if self.contains(&product.id) {
            self.remove_from_wishlist(&product.id);
        } else {
            self.add_to_wishlist(product);
        }
    }

    pub fn clear_wishlist(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WishlistReducer;

impl Reducer for WishlistReducer {
    type State = WishlistState;
    type Event = WishlistEvent;
    type Error = Infallible;

    fn reduce(
        &mut self,
        event: Self::Event,
        ctx: &mut ReducerCtx<'_, Self::State>,
    ) -> Result<(), Self::Error> {
        match event {
            WishlistEvent::Add(product) => ctx.state.add_to_wishlist(product),
            WishlistEvent::Remove(id) => ctx.state.remove_from_wishlist(&id),
            WishlistEvent::Toggle(product) => ctx.state.toggle(product),
            WishlistEvent::Clear => ctx.state.clear_wishlist(),
        }
        Ok(())
    }
}
