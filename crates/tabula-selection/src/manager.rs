//! The selection tracker.

use std::hash::Hash;

use indexmap::IndexSet;
use log::trace;

use crate::event::{SelectionEvent, SelectionEventKind};
use crate::listener::{Callback, ListenerId, Listeners};

/// Tracks which items are selected and notifies listeners on change.
///
/// An item is in the selection if and only if it is currently selected.
/// The manager keeps a clone of each selected item until it is deselected.
/// Iteration order is the order in which items were selected, but callers
/// should not depend on it.
///
/// Listeners receive the manager along with the event and may select or
/// deselect items while they run. Such nested changes are delivered
/// immediately to every other listener; a listener never receives the
/// events it causes itself.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use tabula_selection::{SelectionEvent, SelectionManager};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut selection: SelectionManager<&str> = SelectionManager::new();
/// let sink = Rc::clone(&seen);
/// selection.subscribe(move |_, e| sink.borrow_mut().push(e.clone()));
///
/// assert!(selection.select("knight"));
/// assert!(!selection.select("knight"));
/// assert!(selection.deselect(&"knight"));
/// assert!(!selection.deselect(&"knight"));
///
/// assert_eq!(
///     *seen.borrow(),
///     vec![
///         SelectionEvent::Selected("knight"),
///         SelectionEvent::Deselected("knight"),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct SelectionManager<T> {
    selected: IndexSet<T>,
    listeners: Listeners<T>,
}

impl<T> SelectionManager<T>
where
    T: Eq + Hash + Clone,
{
    /// Create a manager with nothing selected and no listeners.
    pub fn new() -> Self {
        Self {
            selected: IndexSet::new(),
            listeners: Listeners::new(),
        }
    }

    /// Whether `item` is currently selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selected.contains(item)
    }

    /// Select `item`.
    ///
    /// Returns `true` and emits [`SelectionEvent::Selected`] if the item was
    /// unselected. Returns `false` without emitting anything if it was
    /// already selected.
    pub fn select(&mut self, item: T) -> bool {
        if self.selected.contains(&item) {
            return false;
        }
        self.selected.insert(item.clone());
        trace!("selected item ({} selected)", self.selected.len());
        self.emit(SelectionEvent::Selected(item));
        true
    }

    /// Deselect `item`.
    ///
    /// Returns `true` and emits [`SelectionEvent::Deselected`] if the item
    /// was selected, `false` otherwise.
    pub fn deselect(&mut self, item: &T) -> bool {
        match self.selected.shift_take(item) {
            Some(removed) => {
                trace!("deselected item ({} selected)", self.selected.len());
                self.emit(SelectionEvent::Deselected(removed));
                true
            }
            None => false,
        }
    }

    /// Flip the state of `item`.
    ///
    /// Returns `true` if the item is now selected, `false` if it is now
    /// deselected.
    pub fn toggle(&mut self, item: T) -> bool {
        if self.selected.contains(&item) {
            !self.deselect(&item)
        } else {
            self.select(item)
        }
    }

    /// Deselect every selected item, one [`SelectionEvent::Deselected`]
    /// per item.
    ///
    /// Works from a snapshot of the selection taken before the first
    /// notification, so listeners may select or deselect items during the
    /// walk. Items selected by a listener mid-walk stay selected. Snapshot
    /// items a listener already deselected are skipped and not counted.
    ///
    /// Returns how many items this call deselected.
    pub fn deselect_all(&mut self) -> usize {
        let snapshot: Vec<T> = self.selected.iter().cloned().collect();
        snapshot.iter().filter(|item| self.deselect(item)).count()
    }

    /// Iterate over the selected items.
    pub fn selected(&self) -> impl Iterator<Item = &T> + '_ {
        self.selected.iter()
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Observe every selection change.
    ///
    /// A listener subscribed while an event is being delivered first hears
    /// the next event.
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&mut SelectionManager<T>, &SelectionEvent<T>) + 'static,
    {
        self.listeners.push(None, Callback::Event(Box::new(callback)))
    }

    /// Observe items becoming selected.
    pub fn on_selected<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&mut SelectionManager<T>, &T) + 'static,
    {
        self.listeners.push(
            Some(SelectionEventKind::Selected),
            Callback::Item(Box::new(callback)),
        )
    }

    /// Observe items becoming deselected.
    pub fn on_deselected<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&mut SelectionManager<T>, &T) + 'static,
    {
        self.listeners.push(
            Some(SelectionEventKind::Deselected),
            Callback::Item(Box::new(callback)),
        )
    }

    /// Stop delivering events to a listener. Returns `false` if `id` was not
    /// subscribed.
    ///
    /// A listener may unsubscribe itself or others from inside a callback.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to the listeners subscribed when it was raised, in
    /// subscription order.
    ///
    /// Each callback is lent out of the registry while it runs so that it
    /// can be handed `&mut self`.
    fn emit(&mut self, event: SelectionEvent<T>) {
        for id in self.listeners.matching(event.kind()) {
            let Some(mut callback) = self.listeners.take(id) else {
                continue;
            };
            callback.call(self, &event);
            self.listeners.restore(id, callback);
        }
    }
}

impl<T> Default for SelectionManager<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
