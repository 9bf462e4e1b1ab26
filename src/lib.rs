//! # extractor-landing
//!
//! Static marketing landing page for the Extractor API, built with
//! [Leptos](https://leptos.dev/) client-side rendering.
//!
//! Every section is a stateless component with its content inlined; the
//! page has no signals, no data fetching and no interactivity beyond
//! plain hyperlinks.
//!
//! # Page layout
//!
//! ```text
//! App
//! ├── Hero       (title, value proposition, CTA to #pricing)
//! ├── Features   (five-item feature list)
//! ├── Pricing    (Developer Plan card, anchor target, subscribe link)
//! ├── Quickstart (example upload request, docs link)
//! ├── DocsLink   (docs CTA)
//! └── Contact    (mailto + support note)
//! ```
//!
//! The browser entry point lives in `main.rs`; [`render_page`] renders
//! the same tree to a plain HTML string for tests and static prerendering:
//!
//! ```rust
//! let html = extractor_landing::render_page();
//! assert!(html.contains("Extractor API"));
//! ```

pub mod sections;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use sections::*;

/// Root composer: the six landing sections in fixed vertical order.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="landing">
            <Hero />
            <Features />
            <Pricing />
            <Quickstart />
            <DocsLink />
            <Contact />
        </main>
    }
}

/// Render the whole landing page to an HTML string.
///
/// The page is fully static, so repeated calls return byte-identical
/// output.
pub fn render_page() -> String {
    view! { <App /> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn composes_exactly_six_sections() {
        let html = render_page();
        assert_eq!(html.matches("<section").count(), 6);
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let html = render_page();
        let landmarks = [
            "class=\"hero\"",
            "class=\"features\"",
            "class=\"pricing\"",
            "class=\"quickstart\"",
            "class=\"docs-link\"",
            "class=\"contact\"",
        ]
        .map(|landmark| html.find(landmark).unwrap());
        assert!(landmarks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn hero_cta_matches_pricing_anchor() {
        let html = render_page();
        assert!(html.contains(&format!("href=\"#{PRICING_ANCHOR}\"")));
        assert!(html.contains(&format!("id=\"{PRICING_ANCHOR}\"")));
    }

    #[test]
    fn docs_url_is_identical_across_three_sections() {
        let html = render_page();
        let occurrences = html.matches(&format!("href=\"{DOCS_URL}\"")).count();
        assert_eq!(occurrences, 3);
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_page(), render_page());
    }
}
