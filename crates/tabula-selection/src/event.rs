//! Selection change notifications.

use std::fmt;

/// Which transition a [`SelectionEvent`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionEventKind {
    /// The item went from unselected to selected.
    Selected,
    /// The item went from selected to unselected.
    Deselected,
}

impl fmt::Display for SelectionEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selected => write!(f, "selected"),
            Self::Deselected => write!(f, "deselected"),
        }
    }
}

/// A single state transition of one item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionEvent<T> {
    /// `T` was selected.
    Selected(T),
    /// `T` was deselected.
    Deselected(T),
}

impl<T> SelectionEvent<T> {
    /// The item whose state changed.
    pub fn item(&self) -> &T {
        match self {
            Self::Selected(item) | Self::Deselected(item) => item,
        }
    }

    /// Consume the event, returning the item.
    pub fn into_item(self) -> T {
        match self {
            Self::Selected(item) | Self::Deselected(item) => item,
        }
    }

    /// The transition this event reports.
    pub fn kind(&self) -> SelectionEventKind {
        match self {
            Self::Selected(_) => SelectionEventKind::Selected,
            Self::Deselected(_) => SelectionEventKind::Deselected,
        }
    }

    /// Whether this is a [`Selected`](Self::Selected) event.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_agree_with_variant() {
        let e = SelectionEvent::Selected(4);
        assert_eq!(e.kind(), SelectionEventKind::Selected);
        assert!(e.is_selected());
        assert_eq!(*e.item(), 4);

        let e = SelectionEvent::Deselected("rook");
        assert_eq!(e.kind(), SelectionEventKind::Deselected);
        assert!(!e.is_selected());
        assert_eq!(e.into_item(), "rook");
    }

    #[test]
    fn kind_display() {
        assert_eq!(SelectionEventKind::Selected.to_string(), "selected");
        assert_eq!(SelectionEventKind::Deselected.to_string(), "deselected");
    }
}
