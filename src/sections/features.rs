use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Features"</h2>
                </div>
                <ul class="feature-list">
                    <li>"AI-powered resume skill extraction"</li>
                    <li>"Usage-based subscription management"</li>
                    <li>"Secure Paddle payments integration"</li>
                    <li>"FastAPI backend with robust rate limiting"</li>
                    <li>"Easy integration for developers"</li>
                </ul>
            </div>
        </section>
    }
}
