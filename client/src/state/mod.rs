//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `messages`, `toast`, `ui`) so individual
//! components can depend on small focused models. App-wide pieces are
//! provided as `RwSignal` contexts from `app::App`.

pub mod auth;
pub mod messages;
pub mod toast;
pub mod ui;
