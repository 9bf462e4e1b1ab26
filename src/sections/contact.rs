use leptos::prelude::*;

use super::CONTACT_EMAIL;

#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_EMAIL}");
    view! {
        <section class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Contact & Support"</h2>
                </div>
                <p class="contact-email">
                    "Email: "
                    <a href=mailto>{CONTACT_EMAIL}</a>
                </p>
                <p class="contact-note">"For support or feedback, reach out anytime!"</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        view! { <Contact /> }.to_html()
    }

    #[test]
    fn renders_heading_and_support_note() {
        let html = render();
        // Ampersand in the heading arrives HTML-escaped
        assert!(html.contains("Contact &amp; Support"));
        assert!(html.contains("For support or feedback, reach out anytime!"));
    }

    #[test]
    fn mailto_link_carries_literal_address() {
        let html = render();
        assert!(html.contains(&format!("href=\"mailto:{CONTACT_EMAIL}\"")));
        assert!(html.contains(CONTACT_EMAIL));
    }
}
