//! Browser entry point for the Extractor API landing page.

use extractor_landing::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    log::info!("Extractor API landing - mounting");

    leptos::mount::mount_to_body(|| view! { <App /> });
}
