//! In-memory owner of the variant state.
//!
//! The store holds the current [`VariantState`], applies dispatched actions
//! through [`VariantSlice`], and notifies subscribers synchronously after each
//! transition. It is single-threaded: subscribers run inside `dispatch`.

use std::fmt;

use tracing::debug;

use crate::core::reducer::{Reducer, VariantSlice};
use crate::core::types::{VariantAction, VariantState};

/// Handle returned by [`VariantStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&VariantState)>;

#[derive(Default)]
pub struct VariantStore {
    state: VariantState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    dispatched: u64,
}

impl VariantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot instead of the empty default.
    pub fn with_state(state: VariantState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &VariantState {
        &self.state
    }

    /// Number of actions applied since the store was created.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Apply `action`, replace the owned state, then notify subscribers in
    /// registration order.
    pub fn dispatch(&mut self, action: &VariantAction) -> &VariantState {
        let next = VariantSlice::reduce(&self.state, action);
        let payload = action.payload();
        debug!(
            action = action.kind(),
            resource_type = %payload.resource_type,
            name = %payload.name,
            variant = %payload.variant,
            "dispatch"
        );
        self.state = next;
        self.dispatched += 1;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        &self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&VariantState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Consume the store, returning the final state.
    pub fn into_state(self) -> VariantState {
        self.state
    }
}

impl fmt::Debug for VariantStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("dispatched", &self.dispatched)
            .finish()
    }
}
