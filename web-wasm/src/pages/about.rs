//! Aboutページ

use super::PageLinks;
use leptos::prelude::*;
use portfolio_common::Binding;

/// (期間, 役職, 所属)
const EXPERIENCE: [(&str, &str, &str); 4] = [
    ("2021 – 2025", "Intern and full-time Designer", "A Cor Laranja"),
    ("2019 – 2020", "Freelance Designer", "Dope Digital Agency"),
    ("2016", "Intern Designer", "Teatro Baltazar Dias"),
    ("2014", "Intern 3D Designer", "Proinov"),
];

const SKILLS: [&str; 9] = [
    "Graphic Design",
    "Branding",
    "Motion Graphics",
    "Editorial Design",
    "Photography / Video",
    "Image Editing",
    "Print Production",
    "Logo Design",
    "Project Management",
];

#[component]
pub fn AboutPage(links: PageLinks) -> impl IntoView {
    let back = {
        let links = links.clone();
        move |_| links.go(Binding::Back)
    };
    let contact = {
        let links = links.clone();
        move |_| links.go(Binding::ViewContact)
    };
    let work = move |_| links.go(Binding::ViewWork);

    view! {
        <article class="page-about">
            <button class="back" on:click=back>"← Back"</button>

            <section class="intro">
                <span class="caption">"About"</span>
                <h1 class="hero-title">"Designer focused on identity, digital and visual systems."</h1>
                <p class="hero-lead">
                    "I work across branding, digital design and visual content, building clear and consistent systems for brands that care about culture and intention."
                </p>
            </section>

            <section class="section">
                <span class="caption">"Work Experience"</span>
                <ul class="experience">
                    {EXPERIENCE
                        .iter()
                        .map(|(period, role, company)| {
                            view! {
                                <li class="experience-item">
                                    <span class="experience-period">{*period}</span>
                                    <span class="experience-role">{*role}</span>
                                    <span class="experience-company">{*company}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="section">
                <span class="caption">"Skills"</span>
                <ul class="skills">
                    {SKILLS.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
                </ul>
            </section>

            <section class="section cta">
                <button class="btn-primary" on:click=contact>"Get in touch"</button>
                <button class="btn-outline" on:click=work>"View work"</button>
            </section>
        </article>
    }
}
