use leptos::prelude::*;

use super::DOCS_URL;

/// Example upload request shown verbatim in the quickstart block.
const EXAMPLE_REQUEST: &str = r#"POST /upload-resume/
Authorization: Bearer <your_token>
Content-Type: multipart/form-data

file: <your_resume.pdf>
"#;

#[component]
pub fn Quickstart() -> impl IntoView {
    view! {
        <section class="quickstart">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Quickstart"</h2>
                </div>
                <pre class="quickstart-snippet">{EXAMPLE_REQUEST}</pre>
                <p class="quickstart-docs">
                    "See "
                    <a href=DOCS_URL target="_blank" rel="noopener noreferrer">"API Docs"</a>
                    " for more details."
                </p>
            </div>
        </section>
    }
}
