//! Reducer for the modal dialog.

use crate::ui::mvi::Reducer;

use super::intent::DialogIntent;
use super::state::{DialogPhase, DismissReason, HitTarget};

/// Reducer for dialog phase transitions.
///
/// Pure: the key subscription, scroll lock, focus memento and close
/// notification are handled by `DialogController` around each dispatch.
pub struct DialogReducer;

impl Reducer for DialogReducer {
    type State = DialogPhase;
    type Intent = DialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DialogIntent::Sync {
                is_open: false, ..
            } => DialogPhase::Closed,

            DialogIntent::Sync {
                is_open: true,
                close_on_backdrop,
            } => match state {
                DialogPhase::Closed => DialogPhase::Open {
                    close_on_backdrop,
                    pressed: None,
                },
                DialogPhase::Open { pressed, .. } => DialogPhase::Open {
                    close_on_backdrop,
                    pressed,
                },
                // Stay closed until the host acknowledges the dismissal.
                dismissed @ DialogPhase::Dismissed { .. } => dismissed,
            },

            DialogIntent::DismissKey => match state {
                DialogPhase::Open { .. } => DialogPhase::Dismissed {
                    reason: DismissReason::DismissKey,
                },
                other => other,
            },

            DialogIntent::CloseButton => match state {
                DialogPhase::Open { .. } => DialogPhase::Dismissed {
                    reason: DismissReason::CloseButton,
                },
                other => other,
            },

            DialogIntent::PointerDown(target) => match state {
                DialogPhase::Open {
                    close_on_backdrop, ..
                } => DialogPhase::Open {
                    close_on_backdrop,
                    pressed: Some(target),
                },
                other => other,
            },

            DialogIntent::PointerUp(target) => match state {
                DialogPhase::Open {
                    close_on_backdrop,
                    pressed,
                } => match (pressed, target) {
                    // Press and release must both land on the backdrop itself.
                    (Some(HitTarget::Backdrop), HitTarget::Backdrop) if close_on_backdrop => {
                        DialogPhase::Dismissed {
                            reason: DismissReason::Backdrop,
                        }
                    }
                    (Some(HitTarget::CloseButton), HitTarget::CloseButton) => {
                        DialogPhase::Dismissed {
                            reason: DismissReason::CloseButton,
                        }
                    }
                    _ => DialogPhase::Open {
                        close_on_backdrop,
                        pressed: None,
                    },
                },
                other => other,
            },
        }
    }
}
