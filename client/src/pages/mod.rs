//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Which chrome wraps a page is decided by the route table
//! in `app::App`, not by the page itself.

pub mod about;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod messages;
pub mod minimal;
pub mod not_found;
pub mod services;
pub mod signup;
