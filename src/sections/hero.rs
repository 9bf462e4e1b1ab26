use leptos::prelude::*;

use super::PRICING_ANCHOR;

#[component]
pub fn Hero() -> impl IntoView {
    let cta_target = format!("#{PRICING_ANCHOR}");
    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">"Extractor API"</h1>
                <p class="hero-description">
                    "Monetize your resume parsing with AI-powered extraction and subscription management."
                </p>
                <a href=cta_target class="btn btn-primary">
                    "Get Started"
                </a>
            </div>
        </section>
    }
}
