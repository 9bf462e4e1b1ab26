use leptos::prelude::*;

use super::{DOCS_URL, PRICING_ANCHOR};

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id=PRICING_ANCHOR class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Pricing"</h2>
                </div>
                <div class="pricing-card">
                    <h3 class="plan-name">"Developer Plan"</h3>
                    <p class="plan-price">"$10/month"</p>
                    <ul class="plan-benefits">
                        <li>"Up to 1,000 API calls/month"</li>
                        <li>"Full access to all features"</li>
                        <li>"Cancel anytime"</li>
                    </ul>
                    <a href=DOCS_URL target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                        "Subscribe"
                    </a>
                </div>
            </div>
        </section>
    }
}
