use std::convert::Infallible;

use shop_contracts::{CartEvent, SessionEvent, User, WishlistEvent};

use crate::reducer::{Reducer, ReducerCtx};

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    user: Option<User>,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }
}

/// Session reducer. Logout also clears the shopper's cart and wishlist.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Event = SessionEvent;
    type Error = Infallible;

    fn reduce(
        &mut self,
        event: Self::Event,
        ctx: &mut ReducerCtx<'_, Self::State>,
    ) -> Result<(), Self::Error> {
        match event {
            SessionEvent::LoginSucceeded(user) => {
                tracing::debug!(user = %user.id, admin = user.is_admin, "signed in");
                ctx.state.user = Some(user);
            }
            SessionEvent::UpdateProfile { name, avatar } => {
                if let Some(user) = ctx.state.user.as_mut() {
                    user.name = name;
                    user.avatar = avatar;
                }
            }
            SessionEvent::Logout => {
                ctx.state.user = None;
                ctx.emit(CartEvent::Clear);
                ctx.emit(WishlistEvent::Clear);
            }
        }
        Ok(())
    }
}
