use shop_contracts::StoreAction;

/// Trait implemented by every slice reducer.
pub trait Reducer: Default {
    /// Slice state owned by the store root.
    type State: Default;

    /// Event family consumed by this reducer.
    type Event;

    /// Failure type; `Infallible` for slices that degrade to no-ops.
    type Error;

    /// Core reducer logic.
    fn reduce(
        &mut self,
        event: Self::Event,
        ctx: &mut ReducerCtx<'_, Self::State>,
    ) -> Result<(), Self::Error>;
}

/// Reducer execution context passed to `Reducer::reduce`.
pub struct ReducerCtx<'a, S> {
    pub state: &'a mut S,
    reducer_name: &'static str,
    follow_ups: Vec<StoreAction>,
}

impl<'a, S> ReducerCtx<'a, S> {
    pub fn new(state: &'a mut S, reducer_name: &'static str) -> Self {
        Self {
            state,
            reducer_name,
            follow_ups: Vec::new(),
        }
    }

    /// Name of the reducer type (for diagnostics).
    pub fn reducer_name(&self) -> &'static str {
        self.reducer_name
    }

    /// Queue an action behind the one currently being reduced.
    pub fn emit(&mut self, action: impl Into<StoreAction>) {
        self.follow_ups.push(action.into());
    }

    /// Actions emitted so far, in emission order.
    pub fn follow_ups(&self) -> &[StoreAction] {
        &self.follow_ups
    }

    fn finish(self) -> Vec<StoreAction> {
        self.follow_ups
    }
}

/// Run one event through a reducer and collect its follow-up actions.
pub fn step<R: Reducer>(
    reducer: &mut R,
    state: &mut R::State,
    event: R::Event,
) -> Result<Vec<StoreAction>, R::Error> {
    let mut ctx = ReducerCtx::new(state, core::any::type_name::<R>());
    reducer.reduce(event, &mut ctx)?;
    Ok(ctx.finish())
}
