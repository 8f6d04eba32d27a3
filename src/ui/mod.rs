pub mod components;
pub mod events;
pub mod layout;
pub mod modal;
pub mod mvi;
pub mod runtime;
pub mod style;
pub mod surface;
pub mod terminal_guard;
pub mod theme;
