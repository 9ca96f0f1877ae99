//! Site footer: company blurb, quick links, contact, copyright.

use leptos::prelude::*;

use crate::state::ui::FOOTER_LINKS;
use crate::util::clock::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <section class="site-footer__section">
                    <h3 class="site-footer__title">"Company"</h3>
                    <p class="site-footer__text">
                        "Building amazing products for the modern world. Simple, fast, and reliable."
                    </p>
                </section>

                <section class="site-footer__section">
                    <h3 class="site-footer__title">"Quick Links"</h3>
                    <ul class="site-footer__links">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a href=link.href class="site-footer__link">{link.label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="site-footer__section">
                    <h3 class="site-footer__title">"Contact"</h3>
                    <p class="site-footer__text">"Email: contact@yourapp.com"</p>
                    <p class="site-footer__text">"Phone: +1 (555) 123-4567"</p>
                </section>
            </div>

            <div class="site-footer__bottom">
                <p>{format!("© {year} Baby Chat. All rights reserved.")}</p>
            </div>
        </footer>
    }
}
