//! Services page: offering grid and pricing plans.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::components::feature_grid::{Feature, FeatureGrid};

const SERVICES: &[Feature] = &[
    Feature { title: "Text Messaging", description: "Send instant messages with emoji support and file sharing capabilities." },
    Feature { title: "Video Calls", description: "Crystal clear video calls with up to 8 participants simultaneously." },
    Feature { title: "Voice Calls", description: "High-quality voice calls with noise cancellation technology." },
    Feature { title: "Cloud Storage", description: "Secure cloud storage for your messages and shared files." },
    Feature { title: "Enhanced Security", description: "End-to-end encryption and two-factor authentication." },
    Feature { title: "24/7 Support", description: "Round-the-clock customer support for all your needs." },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Basic",
        price: "Free",
        description: "Perfect for personal use",
        features: &[
            "Unlimited text messaging",
            "Basic file sharing",
            "Group chats up to 10 people",
            "1GB cloud storage",
            "Standard support",
        ],
        highlighted: false,
    },
    PricingPlan {
        name: "Pro",
        price: "$9.99/mo",
        description: "Great for small teams",
        features: &[
            "Everything in Basic",
            "Video calls up to 8 people",
            "Group chats up to 50 people",
            "10GB cloud storage",
            "Priority support",
            "Custom emojis",
        ],
        highlighted: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: "Custom",
        description: "For large organizations",
        features: &[
            "Everything in Pro",
            "Unlimited video calls",
            "Unlimited group size",
            "Custom storage options",
            "24/7 dedicated support",
            "Admin dashboard",
            "Custom integration",
        ],
        highlighted: false,
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="marketing">
            <section class="hero hero--compact">
                <h1 class="hero__title">"Our Services"</h1>
                <p class="hero__text">
                    "Discover the full range of communication tools and services designed to keep you connected with the world."
                </p>
            </section>

            <section class="marketing__section">
                <FeatureGrid features=SERVICES class="feature-grid--three" />
            </section>

            <section class="marketing__section marketing__section--tinted">
                <h2 class="marketing__heading">"Choose Your Plan"</h2>
                <div class="pricing">
                    {PRICING_PLANS.iter().map(|plan| view! { <PlanCard plan=*plan /> }).collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2 class="cta__title">"Need Custom Solutions?"</h2>
                <p class="cta__text">
                    "Contact our sales team to discuss custom enterprise solutions tailored to your organization's needs."
                </p>
                <a href="/contact" class="btn btn--inverse btn--pill">"Contact Sales"</a>
            </section>
        </div>
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    let card_class = if plan.highlighted { "plan-card plan-card--highlighted" } else { "plan-card" };

    view! {
        <div class=card_class>
            <h3 class="plan-card__name">{plan.name}</h3>
            <div class="plan-card__price">{plan.price}</div>
            <p class="plan-card__description">{plan.description}</p>
            <ul class="plan-card__features">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="plan-card__feature">
                                <span class="plan-card__check">"✓"</span>
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href="/signup" class="btn btn--pill plan-card__cta">"Get Started"</a>
        </div>
    }
}
