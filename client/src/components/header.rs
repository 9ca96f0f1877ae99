//! Top bar: brand, navigation, theme toggle, and the user menu.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{MAIN_NAVIGATION, UiState};
use crate::util::auth::LOGIN_PATH;
use crate::util::dark_mode;
use crate::util::storage::BrowserStorage;

#[component]
pub fn Header(#[prop(optional, into)] class: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    // The link itself routes to the login page once the session is gone.
    let on_sign_out = move |_| {
        auth.update(|a| a.sign_out(&BrowserStorage));
        ui.update(UiState::close_menus);
    };

    let nav_links = move |link_class: &'static str| {
        MAIN_NAVIGATION
            .iter()
            .map(|item| {
                view! {
                    <a
                        href=item.href
                        class=link_class
                        on:click=move |_| ui.update(UiState::close_menus)
                    >
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=format!("site-header {class}")>
            <div class="site-header__bar">
                <a href="/" class="site-header__brand">"Baby chat"</a>

                <div class="site-header__actions">
                    <nav class="site-header__nav">{nav_links("site-header__link")}</nav>

                    <button
                        class="btn site-header__theme"
                        on:click=on_theme
                        aria-label="Toggle theme"
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>

                    <div class="user-menu">
                        <button
                            class="user-menu__trigger"
                            on:click=move |_| ui.update(UiState::toggle_user_menu)
                        >
                            <img
                                class="user-menu__avatar"
                                src=move || auth.get().avatar_url()
                                alt=move || auth.get().display_name().to_owned()
                            />
                            <span class="user-menu__name">
                                {move || auth.get().display_name().to_owned()}
                            </span>
                        </button>

                        <Show when=move || ui.get().user_menu_open>
                            <div class="user-menu__dropdown">
                                <div class="user-menu__identity">
                                    <p class="user-menu__identity-name">
                                        {move || auth.get().display_name().to_owned()}
                                    </p>
                                    <p class="user-menu__identity-email">
                                        {move || auth.get().display_email().to_owned()}
                                    </p>
                                </div>
                                <a href="/profile" class="user-menu__item">"Profile"</a>
                                <a href="/settings" class="user-menu__item">"Settings"</a>
                                <a
                                    href=LOGIN_PATH
                                    class="user-menu__item user-menu__item--danger"
                                    on:click=on_sign_out
                                >
                                    "Sign out"
                                </a>
                            </div>
                        </Show>
                    </div>

                    <button
                        class="site-header__hamburger"
                        aria-expanded=move || ui.get().mobile_menu_open.to_string()
                        on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || ui.get().mobile_menu_open>
                <nav class="site-header__mobile-nav">{nav_links("site-header__mobile-link")}</nav>
            </Show>
        </header>
    }
}
