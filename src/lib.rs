//! Terminal component library: buttons, badges, alerts, cards, form fields
//! and a modal dialog with focus trapping and page scroll locking.

pub mod config;
pub mod logging;
pub mod ui;
