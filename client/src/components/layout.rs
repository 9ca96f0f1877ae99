//! Page frame shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes wrap their page in `Layout` and choose which chrome to show: the
//! Messages route drops the footer, the dashboard adds the sidebar, and the
//! minimal route renders the bare content area.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

#[component]
pub fn Layout(
    #[prop(default = true)] show_header: bool,
    #[prop(default = true)] show_footer: bool,
    #[prop(optional)] show_sidebar: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let sidebar_open = Signal::derive(move || ui.get().sidebar_open);
    let toggle_sidebar = Callback::new(move |()| ui.update(UiState::toggle_sidebar));

    let body_class = if show_sidebar { "layout__body layout__body--with-sidebar" } else { "layout__body" };

    view! {
        <div class=format!("layout {class}")>
            {show_header.then(|| view! { <Header /> })}

            <div class=body_class>
                {show_sidebar.then(|| view! { <Sidebar open=sidebar_open on_toggle=toggle_sidebar /> })}

                <main class="layout__main">
                    {show_sidebar
                        .then(|| {
                            view! {
                                <button
                                    class="layout__sidebar-toggle"
                                    on:click=move |_| toggle_sidebar.run(())
                                    title="Open sidebar"
                                >
                                    "☰"
                                </button>
                            }
                        })}
                    {children()}
                </main>
            </div>

            {show_footer.then(|| view! { <Footer /> })}
        </div>
    }
}
