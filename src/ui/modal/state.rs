//! Phase of a modal dialog.

use crate::ui::mvi::UiState;

/// What a pointer interaction landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Exactly the backdrop element, not anything rendered on top of it.
    Backdrop,
    /// The content box or anything inside it other than the close button.
    Content,
    CloseButton,
    /// Nothing belonging to this dialog.
    Outside,
}

/// Why the user dismissed the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    DismissKey,
    Backdrop,
    CloseButton,
}

/// Dialog lifecycle.
///
/// `Open` and `Closed` follow the host's `is_open` prop. `Dismissed` is the
/// closed phase entered when the user dismissed the dialog while the prop is
/// still true; only a fresh false → true edge of the prop reopens it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,

    Open {
        close_on_backdrop: bool,
        /// Where the primary pointer button went down, if it is still held.
        pressed: Option<HitTarget>,
    },

    Dismissed {
        reason: DismissReason,
    },
}

impl UiState for DialogPhase {}

impl DialogPhase {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn dismiss_reason(&self) -> Option<DismissReason> {
        match self {
            Self::Dismissed { reason } => Some(*reason),
            _ => None,
        }
    }
}
