use leptos::prelude::*;

use crate::admonition::AdmonitionSchema;

/// A callout box styled by `schema`. `title` overrides the schema's default.
#[component]
pub fn Admonition(
    schema: AdmonitionSchema,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let title = schema.title(title.as_deref()).to_string();
    view! {
        <div class=schema.frame_class()>
            <div class=schema.title_class()>
                <span class="shrink-0 inline-flex" inner_html=schema.icon></span>
                {title}
            </div>
            <div class="p-3">{children()}</div>
        </div>
    }
}
