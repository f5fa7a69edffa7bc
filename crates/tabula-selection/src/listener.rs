//! Listener registry for selection notifications.
//!
//! Callbacks are kept in subscription order. Each one receives the
//! [`SelectionManager`] that raised the event, so a handler may select or
//! deselect items while it runs. To make that possible the manager lends a
//! callback out of the registry for the duration of its call.

use std::fmt;

use smallvec::SmallVec;

use crate::event::{SelectionEvent, SelectionEventKind};
use crate::manager::SelectionManager;

/// Handle returned by a subscription, used to unsubscribe.
///
/// Ids are allocated sequentially per manager and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type EventHandler<T> = Box<dyn FnMut(&mut SelectionManager<T>, &SelectionEvent<T>)>;
type ItemHandler<T> = Box<dyn FnMut(&mut SelectionManager<T>, &T)>;

/// A subscribed handler.
pub(crate) enum Callback<T> {
    /// Sees every event.
    Event(EventHandler<T>),
    /// Sees only the item of events of one kind (the kind lives on the entry).
    Item(ItemHandler<T>),
}

impl<T> Callback<T> {
    pub(crate) fn call(&mut self, manager: &mut SelectionManager<T>, event: &SelectionEvent<T>) {
        match self {
            Self::Event(f) => f(manager, event),
            Self::Item(f) => f(manager, event.item()),
        }
    }
}

struct Entry<T> {
    id: ListenerId,
    filter: Option<SelectionEventKind>,
    // `None` while the callback is lent out for delivery.
    callback: Option<Callback<T>>,
}

/// Ordered set of selection listeners.
///
/// Most selections have a handful of observers (a highlighter, a UI panel),
/// so entries live inline until the fifth subscription.
pub(crate) struct Listeners<T> {
    entries: SmallVec<[Entry<T>; 4]>,
    next_id: u64,
}

impl<T> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Append a callback. `filter` restricts it to one event kind.
    pub(crate) fn push(
        &mut self,
        filter: Option<SelectionEventKind>,
        callback: Callback<T>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            filter,
            callback: Some(callback),
        });
        id
    }

    /// Remove a listener, lent out or not. Returns `false` if `id` is not
    /// subscribed.
    ///
    /// The relative order of the remaining listeners is preserved.
    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ids of the listeners interested in `kind`, in subscription order.
    pub(crate) fn matching(&self, kind: SelectionEventKind) -> SmallVec<[ListenerId; 4]> {
        self.entries
            .iter()
            .filter(|e| e.filter.map_or(true, |wanted| wanted == kind))
            .map(|e| e.id)
            .collect()
    }

    /// Lend out the callback of `id`.
    ///
    /// Returns `None` if the listener was unsubscribed or its callback is
    /// already lent out (it is running further up the stack).
    pub(crate) fn take(&mut self, id: ListenerId) -> Option<Callback<T>> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .and_then(|e| e.callback.take())
    }

    /// Return a lent callback. Dropped if the listener unsubscribed while
    /// it was out.
    pub(crate) fn restore(&mut self, id: ListenerId, callback: Callback<T>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.callback = Some(callback);
        }
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop<T: 'static>() -> Callback<T> {
        Callback::Event(Box::new(|_, _| {}))
    }

    #[test]
    fn matching_respects_filter_and_order() {
        let mut listeners: Listeners<u32> = Listeners::new();
        let all = listeners.push(None, noop());
        let sel = listeners.push(Some(SelectionEventKind::Selected), noop());
        let desel = listeners.push(Some(SelectionEventKind::Deselected), noop());

        assert_eq!(
            listeners.matching(SelectionEventKind::Selected).as_slice(),
            &[all, sel]
        );
        assert_eq!(
            listeners.matching(SelectionEventKind::Deselected).as_slice(),
            &[all, desel]
        );
    }

    #[test]
    fn lent_callback_cannot_be_taken_twice() {
        let mut listeners: Listeners<u32> = Listeners::new();
        let id = listeners.push(None, noop());

        let callback = listeners.take(id);
        assert!(callback.is_some());
        assert!(listeners.take(id).is_none());
        assert_eq!(listeners.len(), 1);

        listeners.restore(id, callback.unwrap());
        assert!(listeners.take(id).is_some());
    }

    #[test]
    fn unsubscribe_while_lent_drops_on_restore() {
        let mut listeners: Listeners<u32> = Listeners::new();
        let id = listeners.push(None, noop());

        let callback = listeners.take(id).unwrap();
        assert!(listeners.unsubscribe(id));
        listeners.restore(id, callback);

        assert_eq!(listeners.len(), 0);
        assert!(listeners.take(id).is_none());
    }

    #[test]
    fn unsubscribe_keeps_order_and_ids_unique() {
        let mut listeners: Listeners<()> = Listeners::new();
        let ids: Vec<_> = (0..5).map(|_| listeners.push(None, noop())).collect();

        assert!(listeners.unsubscribe(ids[1]));
        assert!(!listeners.unsubscribe(ids[1]));
        assert_eq!(listeners.len(), 4);

        let fresh = listeners.push(None, noop());
        assert!(!ids.contains(&fresh));

        let order = listeners.matching(SelectionEventKind::Deselected);
        assert_eq!(order.as_slice(), &[ids[0], ids[2], ids[3], ids[4], fresh]);
    }
}
