use leptos::prelude::*;
use leptos_router::components::A;
use leptos_use::use_interval_fn;

use super::{Admonition, PageTitle};
use crate::admonition::TIP;
use crate::typewriter::{Phase, Typewriter, TICK_INTERVAL};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <PageTitle>
                <TypedName />
            </PageTitle>
            <p class="mb-4 motion-safe:animate-enter">
                "Hi! This is my personal site where I host my posts and slides."
            </p>
            <Admonition schema=TIP title="Looking for something to read?">
                "Everything I've written lives under " <A href="/posts">"/posts"</A> "."
            </Admonition>
        </div>
    }
}

/// The name, typed out one character per tick after a quick detour.
#[component]
fn TypedName() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::default());

    // the interval belongs to this component's owner, so it is cleared on teardown
    let ticker = use_interval_fn(
        move || {
            advance(typewriter);
        },
        TICK_INTERVAL.as_millis() as u64,
    );

    let pause = ticker.pause;
    let done = Memo::new(move |_| typewriter.with(|tw| tw.phase() == Phase::Done));
    Effect::new(move |_| {
        if done.get() {
            pause();
        }
    });

    view! { <span>{move || typewriter.with(|tw| tw.text().to_string())}</span> }
}

/// One tick of the animation. Returns the phases before and after it, or
/// `None` when the signal was already disposed and nothing changed.
fn advance(typewriter: RwSignal<Typewriter>) -> Option<(Phase, Phase)> {
    let phases = typewriter.try_update(|tw| {
        let before = tw.phase();
        (before, tw.tick())
    });
    match phases {
        Some((before, after)) if before != after => {
            log::debug!("typewriter moved from {before:?} to {after:?}");
        }
        Some(_) => {}
        None => log::debug!("typewriter tick after teardown ignored"),
    }
    phases
}
