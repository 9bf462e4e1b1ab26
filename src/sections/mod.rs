// Landing page sections

/// External API documentation URL used across the landing page (single source of truth).
/// Pricing, Quickstart and DocsLink all point at this exact string.
pub const DOCS_URL: &str = "https://extractor-api-2m1a.onrender.com/docs";

/// Support address rendered as a mailto link in the Contact section.
pub const CONTACT_EMAIL: &str = "mohamedalsaedi1999@gmail.com";

/// Anchor id on the Pricing section, targeted by the Hero call-to-action.
pub const PRICING_ANCHOR: &str = "pricing";

mod contact;
mod docs_link;
mod features;
mod hero;
mod pricing;
mod quickstart;

pub use contact::Contact;
pub use docs_link::DocsLink;
pub use features::Features;
pub use hero::Hero;
pub use pricing::Pricing;
pub use quickstart::Quickstart;
