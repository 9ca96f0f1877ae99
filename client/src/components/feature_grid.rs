//! Card grid used by the marketing pages.

use leptos::prelude::*;

/// A titled blurb shown as one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[component]
pub fn FeatureGrid(features: &'static [Feature], #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("feature-grid {class}")>
            {features
                .iter()
                .map(|feature| {
                    view! {
                        <div class="feature-card">
                            <h3 class="feature-card__title">{feature.title}</h3>
                            <p class="feature-card__text">{feature.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
