mod admonition;
mod footer;
mod homepage;
mod navbar;
mod posts;
mod title;

pub use admonition::Admonition;
pub use title::PageTitle;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::SITE;
use footer::Footer;
use homepage::HomePage;
use navbar::Navbar;
use posts::{PostPage, PostsIndex};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="text-black bg-white dark:text-white dark:bg-black">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/colby-site.css" />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title=SITE.owner
                    href="/rss.xml"
                />
                <MetaTags />
            </head>
            <body class="antialiased max-w-xl mx-4 mt-8 lg:mx-auto font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // default document title, pages below the root replace it
        <Title text=SITE.owner />
        <Meta name="description" content=SITE.description />

        <Router>
            <main class="flex-auto min-w-0 mt-6 flex flex-col px-2 md:px-0">
                <Navbar />
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/posts") view=PostsIndex />
                    <Route path=path!("/posts/:slug") view=PostPage />
                </Routes>
                <Footer />
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text=SITE.page_title("Not Found") />
        <PageTitle>"404"</PageTitle>
        <p class="mb-4">"Page not found."</p>
    }
}
