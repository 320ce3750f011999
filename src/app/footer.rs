use leptos::prelude::*;

use crate::site::{build_year, SITE};

#[component]
pub fn Footer() -> impl IntoView {
    let links = [("/rss.xml", "rss"), (SITE.github, "github")];

    view! {
        <footer class="mb-16">
            <ul class="font-sm mt-8 flex flex-col space-x-0 space-y-2 text-neutral-600 md:flex-row md:space-x-4 md:space-y-0 dark:text-neutral-300">
                {links
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a
                                    class="flex items-center transition-all hover:text-neutral-800 dark:hover:text-neutral-100"
                                    rel="noopener noreferrer"
                                    target="_blank"
                                    href=href
                                >
                                    <span class="mr-1">"↗"</span>
                                    <span>{label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="mt-8 text-neutral-600 dark:text-neutral-300">
                {match build_year() {
                    Some(year) => format!("© {year} {}", SITE.owner),
                    None => format!("© {}", SITE.owner),
                }}
            </p>
        </footer>
    }
}
