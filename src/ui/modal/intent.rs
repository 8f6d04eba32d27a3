//! Intents for the modal dialog.

use crate::ui::mvi::Intent;

use super::state::HitTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIntent {
    /// Host props as of this render.
    Sync { is_open: bool, close_on_backdrop: bool },

    /// The subscribed dismissal key was pressed.
    DismissKey,

    /// Primary pointer button went down.
    PointerDown(HitTarget),

    /// Primary pointer button was released.
    PointerUp(HitTarget),

    /// Close button activated from the keyboard.
    CloseButton,
}

impl Intent for DialogIntent {}
