//! Local UI chrome state (theme, menus, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation toggles out of domain state (`auth`,
//! `messages`) so layout controls can evolve independently of data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub user_menu_open: bool,
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Collapse every open menu, e.g. after navigating.
    pub fn close_menus(&mut self) {
        self.mobile_menu_open = false;
        self.user_menu_open = false;
        self.sidebar_open = false;
    }
}

/// A label/href pair for static menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

const fn nav(id: &'static str, label: &'static str, href: &'static str) -> NavigationItem {
    NavigationItem { id, label, href }
}

/// Header navigation.
pub const MAIN_NAVIGATION: [NavigationItem; 5] = [
    nav("1", "Home", "/"),
    nav("2", "About", "/about"),
    nav("3", "Services", "/services"),
    nav("4", "Contact", "/contact"),
    nav("5", "Chat", "/messages"),
];

/// Sidebar navigation.
pub const SIDEBAR_NAVIGATION: [NavigationItem; 4] = [
    nav("1", "Dashboard", "/dashboard"),
    nav("2", "Profile", "/profile"),
    nav("3", "Settings", "/settings"),
    nav("4", "Analytics", "/analytics"),
];

/// Footer quick links.
pub const FOOTER_LINKS: [NavigationItem; 4] = [
    nav("1", "Home", "/"),
    nav("2", "About", "/about"),
    nav("3", "Services", "/services"),
    nav("4", "Contact", "/contact"),
];
