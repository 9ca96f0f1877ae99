//! Landing page.

use leptos::prelude::*;

use crate::components::feature_grid::{Feature, FeatureGrid};

const FEATURES: &[Feature] = &[
    Feature {
        title: "Instant Messaging",
        description: "Connect in real-time with our blazing-fast messaging infrastructure. No delays, just conversation.",
    },
    Feature {
        title: "Group Chats",
        description: "Create groups for your friends, family, or team. Stay connected with everyone in one place.",
    },
    Feature {
        title: "Secure & Private",
        description: "Your conversations are yours. With end-to-end encryption, your privacy is our top priority.",
    },
    Feature {
        title: "Rich Communication",
        description: "Express yourself fully with support for emojis, GIFs, and file sharing. Make every chat lively.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="marketing">
            <section class="hero">
                <h1 class="hero__title">
                    "Connect Instantly,"
                    <br />
                    <span class="hero__accent">"Chat Seamlessly."</span>
                </h1>
                <p class="hero__text">
                    "Welcome to Baby Chat, the simple, fast, and secure way to stay in touch with the people who matter most."
                </p>
                <div class="hero__actions">
                    <a href="/messages" class="btn btn--primary btn--pill">"Start Chatting"</a>
                    <a href="/about" class="btn btn--ghost btn--pill">"Learn More"</a>
                </div>
            </section>

            <section class="marketing__section">
                <h2 class="marketing__heading">"Everything You Need to Connect"</h2>
                <p class="marketing__lead">"A feature-rich experience designed for modern communication."</p>
                <FeatureGrid features=FEATURES />
            </section>

            <section class="cta">
                <h2 class="cta__title">"Ready to Join the Conversation?"</h2>
                <p class="cta__text">
                    "Create an account in seconds and start connecting with your world today. It's free!"
                </p>
                <a href="/signup" class="btn btn--inverse btn--pill">"Sign Up Now"</a>
            </section>
        </div>
    }
}
