use leptos::prelude::*;

use super::DOCS_URL;

#[component]
pub fn DocsLink() -> impl IntoView {
    view! {
        <section class="docs-link">
            <div class="container">
                <a href=DOCS_URL target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                    "View Full API Documentation"
                </a>
            </div>
        </section>
    }
}
