//! About page: product pitch, mission stats, call to action.

use leptos::prelude::*;

use crate::components::feature_grid::{Feature, FeatureGrid};

const FEATURES: &[Feature] = &[
    Feature { title: "Instant Messaging", description: "Real-time messaging with friends and family across any device." },
    Feature { title: "Secure Communication", description: "End-to-end encryption ensures your conversations stay private." },
    Feature { title: "Group Chats", description: "Create groups for family, friends, or team collaboration." },
    Feature { title: "Cross-Platform", description: "Available on web, mobile, and desktop platforms." },
    Feature { title: "Lightning Fast", description: "Optimized for speed and reliability." },
    Feature { title: "User-Friendly", description: "Intuitive interface designed for everyone." },
];

const STATS: [(&str, &str); 3] = [("1M+", "Active Users"), ("150+", "Countries"), ("24/7", "Support")];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="marketing">
            <section class="hero hero--compact">
                <h1 class="hero__title">"About Baby Chat"</h1>
                <p class="hero__text">
                    "Baby Chat is a modern messaging platform designed to bring people closer together through seamless communication. We believe in making conversations more meaningful, secure, and accessible to everyone."
                </p>
            </section>

            <section class="marketing__section">
                <h2 class="marketing__heading">"Why Choose Baby Chat?"</h2>
                <FeatureGrid features=FEATURES class="feature-grid--three" />
            </section>

            <section class="marketing__section marketing__section--tinted">
                <h2 class="marketing__heading">"Our Mission"</h2>
                <p class="marketing__lead">
                    "We're on a mission to transform how people connect and communicate in the digital age. By providing a secure, fast, and intuitive messaging platform, we're making it easier for everyone to stay connected with the people who matter most."
                </p>
                <div class="stats">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stats__item">
                                    <span class="stats__value">{*value}</span>
                                    <span class="stats__label">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2 class="cta__title">"Ready to Get Started?"</h2>
                <p class="cta__text">"Join millions of users already enjoying Baby Chat's secure messaging platform."</p>
                <a href="/signup" class="btn btn--inverse btn--pill">"Create Account"</a>
            </section>
        </div>
    }
}
