use leptos::{html::Input, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use super::{Admonition, PageTitle};
use crate::admonition::CAUTION;
use crate::site::SITE;
#[cfg(feature = "ssr")]
use crate::posts::{list_posts, load_post};
use crate::posts::{Post, PostMeta};

#[server(input = GetUrl)]
pub async fn get_posts(pattern: String) -> Result<Vec<PostMeta>, ServerFnError> {
    list_posts(&pattern).map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = GetUrl)]
pub async fn get_post(slug: String) -> Result<Post, ServerFnError> {
    load_post(&slug).map_err(|e| {
        tracing::warn!(%slug, error = %e, "post lookup failed");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn PostsIndex() -> impl IntoView {
    let (pattern, set_pattern) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let posts = Resource::new(pattern, get_posts);

    view! {
        <Title text=SITE.page_title("Posts") />
        <section>
            <PageTitle>"Posts"</PageTitle>
            <form
                class="flex gap-2 mb-8"
                on:submit=move |ev| {
                    ev.prevent_default();
                    if let Some(el) = input_ref.get_untracked() {
                        set_pattern(el.value());
                    }
                }
            >
                <input
                    node_ref=input_ref
                    type="search"
                    placeholder="Search (regex)"
                    autocapitalize="none"
                    class="flex-1 px-3 py-1 rounded-md border border-neutral-300 dark:border-neutral-700 bg-transparent"
                />
                <button type="submit" class="px-3 py-1 rounded-md border border-neutral-300 dark:border-neutral-700">
                    "Search"
                </button>
            </form>
            <Transition fallback=|| view! { <p class="text-neutral-500">"Loading..."</p> }>
                {move || Suspend::new(async move {
                    match posts.await {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="text-neutral-500">"No posts match."</p> }.into_any()
                        }
                        Ok(list) => list.into_iter().map(post_link).collect_view().into_any(),
                        Err(e) => view! { <LoadError error=e.to_string() /> }.into_any(),
                    }
                })}
            </Transition>
        </section>
    }
}

fn post_link(post: PostMeta) -> impl IntoView {
    view! {
        <A href=format!("/posts/{}", post.slug) attr:class="flex flex-col space-y-1 mb-4">
            <div class="w-full flex flex-col md:flex-row space-x-0 md:space-x-2">
                <p class="text-neutral-600 dark:text-neutral-400 w-[110px] tabular-nums">
                    {post.date.format("%b %e, %Y").to_string()}
                </p>
                <p class="text-neutral-900 dark:text-neutral-100 tracking-tight">{post.title}</p>
            </div>
        </A>
    }
}

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let post = Resource::new(slug, get_post);

    view! {
        <Suspense>
            {move || Suspend::new(async move {
                match post.await {
                    Ok(p) => {
                        view! {
                            <Title text=SITE.page_title(&p.meta.title) />
                            <section>
                                <PageTitle>{p.meta.title}</PageTitle>
                                <div class="flex justify-between items-center mt-2 mb-8 text-sm">
                                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                        {p.meta.date.format("%B %e, %Y").to_string()}
                                    </p>
                                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                        {p.meta.tags.join(" · ")}
                                    </p>
                                </div>
                                <article class="prose dark:prose-invert" inner_html=p.html></article>
                            </section>
                        }
                            .into_any()
                    }
                    Err(e) => view! { <LoadError error=e.to_string() /> }.into_any(),
                }
            })}
        </Suspense>
    }
}

#[component]
fn LoadError(error: String) -> impl IntoView {
    view! {
        <Admonition schema=CAUTION title="Couldn't load that">
            <p>{error}</p>
        </Admonition>
    }
}
