//! Modal dialog.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Dialog phase and hit targets
//! - `intent.rs` - Prop changes and input
//! - `reducer.rs` - Phase transitions
//! - `controller.rs` - Effects around the reducer (focus, listeners, scroll lock)
//! - `view.rs` - Props, layout and rendering

mod controller;
mod intent;
mod reducer;
mod state;
mod view;

pub use controller::{DialogController, DialogIds, EventOutcome};
pub use intent::DialogIntent;
pub use reducer::DialogReducer;
pub use state::{DialogPhase, DismissReason, HitTarget};
pub use view::{ModalLayout, ModalProps, ModalView, CLOSE_BUTTON_LABEL};
