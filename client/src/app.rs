//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::toaster::Toaster;
use crate::pages::{
    about::AboutPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, messages::MessagesPage,
    minimal::MinimalPage, not_found::NotFoundPage, services::ServicesPage, signup::SignUpPage,
};
use crate::state::{auth::AuthState, toast::ToastState, ui::UiState};
use crate::util::dark_mode;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);

    // Browser storage is only readable after mount; restoring here keeps the
    // first client render identical to the server markup.
    Effect::new(move || {
        auth.set(AuthState::restore(&BrowserStorage));
        ui.update(|u| u.dark_mode = dark_mode::read_preference());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/babychat.css"/>
        <Title text="Baby Chat"/>

        <Router>
            <Routes fallback=|| view! { <Layout><NotFoundPage/></Layout> }>
                <Route path=StaticSegment("") view=|| view! { <Layout><HomePage/></Layout> }/>
                <Route path=StaticSegment("about") view=|| view! { <Layout><AboutPage/></Layout> }/>
                <Route path=StaticSegment("services") view=|| view! { <Layout><ServicesPage/></Layout> }/>
                <Route
                    path=StaticSegment("messages")
                    view=|| view! { <Layout show_footer=false><MessagesPage/></Layout> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Layout show_sidebar=true><DashboardPage/></Layout> }
                />
                <Route
                    path=StaticSegment("minimal")
                    view=|| view! { <Layout show_header=false show_footer=false><MinimalPage/></Layout> }
                />
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
            </Routes>
        </Router>

        <Toaster/>
    }
}
