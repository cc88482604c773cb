//! Contactページ
//!
//! フォーム送信は持たない。メールアドレスとSNSへのリンクのみ。

use super::PageLinks;
use crate::components::footer::SOCIAL_LINKS;
use leptos::prelude::*;
use portfolio_common::Binding;

const EMAIL: &str = "hello@orangebeanie.design";
const LOCATION: &str = "Porto, Portugal";

#[component]
pub fn ContactPage(links: PageLinks) -> impl IntoView {
    let back = move |_| links.go(Binding::Back);

    view! {
        <article class="page-contact">
            <button class="back" on:click=back>"← Back"</button>

            <section class="intro">
                <span class="caption">"Say hello"</span>
                <h1 class="hero-title">"I'd love to hear from you"</h1>
                <p class="hero-lead">
                    "Whether it's a new project, a creative collaboration or just a friendly hello, my inbox is always open."
                </p>
            </section>

            <section class="section">
                <span class="caption">"Write to me"</span>
                <a class="contact-email" href=format!("mailto:{}", EMAIL)>
                    {EMAIL}
                </a>
                <p class="contact-location">{LOCATION}</p>
            </section>

            <section class="section">
                <span class="caption">"Elsewhere"</span>
                <ul class="contact-socials">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(name, href)| {
                            view! {
                                <li>
                                    <a href=*href target="_blank" rel="noopener noreferrer">
                                        {*name}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </article>
    }
}
