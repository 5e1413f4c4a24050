//! Per-engine listener lists.
//!
//! Each engine owns its own [`Listeners`]; there is no process-wide bus.
//! Dispatch is synchronous and happens only after a mutation is fully
//! applied, so every listener sees a consistent, owned snapshot.

use serde::{Deserialize, Serialize};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Zero or more callbacks receiving events of type `E`, in subscription order.
pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener<E>)>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl<E> Listeners<E> {
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emits_in_subscription_order_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<u8> = Listeners::default();

        let first = {
            let seen = Rc::clone(&seen);
            listeners.subscribe(move |e| seen.borrow_mut().push(("first", *e)))
        };
        {
            let seen = Rc::clone(&seen);
            listeners.subscribe(move |e| seen.borrow_mut().push(("second", *e)));
        }

        listeners.emit(&1);
        assert!(listeners.unsubscribe(first));
        assert!(!listeners.unsubscribe(first));
        listeners.emit(&2);

        assert_eq!(
            *seen.borrow(),
            vec![("first", 1), ("second", 1), ("second", 2)]
        );
        assert_eq!(listeners.len(), 1);
    }
}
