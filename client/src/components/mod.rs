//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome (header, footer, sidebar), the toast
//! stacks, form primitives, and the two Messages columns. They read and write
//! shared state from the Leptos context providers set up in `app::App`.

pub mod chat_window;
pub mod common;
pub mod conversation_list;
pub mod feature_grid;
pub mod footer;
pub mod header;
pub mod layout;
pub mod sidebar;
pub mod toaster;
