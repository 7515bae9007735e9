// Synchronous publish/subscribe channel.
//
// Delivery happens on the caller's stack, in subscription order. Each emit
// works on a snapshot of the subscriber list, so subscribing or unsubscribing
// from inside a handler takes effect on the next emit. A failing handler is
// logged and does not stop delivery to the others.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Events that can be filtered by a kind.
pub trait Keyed {
    type Key: Copy + PartialEq + std::fmt::Debug;
    fn key(&self) -> Self::Key;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u32);

type Handler<E> = Rc<RefCell<dyn FnMut(&E) -> anyhow::Result<()>>>;

struct Subscriber<E: Keyed> {
    id: SubscriptionId,
    filter: Option<E::Key>,
    handler: Handler<E>,
}

pub struct Emitter<E: Keyed> {
    next_id: Cell<u32>,
    subscribers: RefCell<Vec<Subscriber<E>>>,
}

impl<E: Keyed> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Keyed> Emitter<E> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Receive every event.
    pub fn subscribe(
        &self,
        handler: impl FnMut(&E) -> anyhow::Result<()> + 'static,
    ) -> SubscriptionId {
        self.insert(None, Rc::new(RefCell::new(handler)))
    }

    /// Receive only events of one kind.
    pub fn on(
        &self,
        key: E::Key,
        handler: impl FnMut(&E) -> anyhow::Result<()> + 'static,
    ) -> SubscriptionId {
        self.insert(Some(key), Rc::new(RefCell::new(handler)))
    }

    /// Returns false if `id` was not subscribed.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscribers.borrow_mut();
        let before = subs.len();
        subs.retain(|s| s.id != id);
        subs.len() != before
    }

    pub fn clear(&self) {
        self.subscribers.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` and return how many handlers completed without error.
    pub fn emit(&self, event: &E) -> usize {
        let key = event.key();
        let targets: SmallVec<[(SubscriptionId, Handler<E>); 8]> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.filter.map_or(true, |k| k == key))
            .map(|s| (s.id, s.handler.clone()))
            .collect();

        let mut delivered = 0;
        for (id, handler) in targets {
            let Ok(mut guard) = handler.try_borrow_mut() else {
                log::warn!(
                    "[events] subscriber {} re-entered on {:?}; nested delivery skipped",
                    id.0,
                    key
                );
                continue;
            };
            match (&mut *guard)(event) {
                Ok(()) => delivered += 1,
                Err(e) => log::warn!("[events] subscriber {} failed on {:?}: {:#}", id.0, key, e),
            }
        }
        delivered
    }

    fn insert(&self, filter: Option<E::Key>, handler: Handler<E>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            filter,
            handler,
        });
        id
    }
}
