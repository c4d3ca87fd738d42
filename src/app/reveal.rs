use leptos::{html::Div, prelude::*};
use leptos_use::{
    js, use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{RevealState, REVEAL_THRESHOLD};

/// Fades and slides its children in the first time they scroll into view.
#[component]
pub fn RevealOnView(children: Children) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let state = RwSignal::new(RevealState::new());
    let is_supported = use_supported(|| js!("IntersectionObserver" in &window()));

    // never build the observer where the browser can't provide one
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                state.maybe_update(|s| s.observe(entry.intersection_ratio(), entry.is_intersecting()));
            }
        },
        UseIntersectionObserverOptions::default()
            .immediate(is_supported.get_untracked())
            .thresholds(vec![REVEAL_THRESHOLD]),
    );

    // one-shot: stop observing once shown, or show at once without an observer
    Effect::new(move |_| {
        if !is_supported.get() {
            state.maybe_update(RevealState::force_visible);
        }
        if state.with(RevealState::is_visible) {
            stop();
        }
    });

    view! {
        <div
            node_ref=target
            class=move || state.with(RevealState::classes)
            style=RevealState::transition_style()
        >
            {children()}
        </div>
    }
}
