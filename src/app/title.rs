use leptos::prelude::*;

#[component]
pub fn PageTitle(children: Children) -> impl IntoView {
    view! { <h1 class="font-semibold text-2xl mb-8 tracking-tighter">{children()}</h1> }
}
