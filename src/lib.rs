pub mod admonition;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
#[cfg(feature = "rss")]
pub mod feed;
#[cfg(any(feature = "ssr", feature = "rss"))]
mod markdown;
pub mod posts;
pub mod site;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload, where the old logger is fine
    let _ = console_log::init_with_level(console_level());
    leptos::mount::hydrate_body(App);
}

/// Phase-by-phase traces only reach the console in debug builds.
#[cfg(any(test, feature = "hydrate"))]
fn console_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
