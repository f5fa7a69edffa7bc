//! Selection tracking with synchronous change notifications.
//!
//! [`SelectionManager`] keeps the set of currently selected items and
//! broadcasts a [`SelectionEvent`] to every subscribed listener whenever an
//! item changes state. Each item is either unselected or selected;
//! transitions happen only through [`select`](SelectionManager::select),
//! [`deselect`](SelectionManager::deselect),
//! [`toggle`](SelectionManager::toggle) and
//! [`deselect_all`](SelectionManager::deselect_all).
//!
//! Delivery is inline: listeners run on the caller's stack, in subscription
//! order, before the triggering call returns. Each listener is handed the
//! manager itself and may change the selection from inside the callback.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod event;
pub mod listener;
pub mod manager;

pub use event::{SelectionEvent, SelectionEventKind};
pub use listener::ListenerId;
pub use manager::SelectionManager;
