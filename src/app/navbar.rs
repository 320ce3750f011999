use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const NAV_ITEMS: [(&str, &str); 2] = [("/", "home"), ("/posts", "posts")];

fn is_active(current: &str, href: &str) -> bool {
    if href == "/" {
        current == "/"
    } else {
        current == href || current.starts_with(&format!("{href}/"))
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="-ml-[8px] mb-16 tracking-tight">
            <nav class="flex flex-row items-start relative px-0 pb-0 fade md:overflow-auto scroll-pr-6 md:relative">
                <div class="flex flex-row space-x-0 pr-10">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <A
                                    href=href
                                    attr:class=move || {
                                        if is_active(&pathname.get(), href) {
                                            "transition-all underline underline-offset-4 flex align-middle relative py-1 px-2 m-1"
                                        } else {
                                            "transition-all hover:text-neutral-800 dark:hover:text-neutral-200 flex align-middle relative py-1 px-2 m-1"
                                        }
                                    }
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </aside>
    }
}
