use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use crate::content::OWNER;
use crate::nav::{is_scrolled, scroll_target, Section};

use super::ThemeContext;

/// Smoothly scrolls so the section's top sits just below the fixed header.
/// Does nothing if the section isn't in the document.
fn scroll_to_section(section: Section) {
    let el = if let Some(el) = document().get_element_by_id(section.id()) {
        el
    } else {
        log::debug!("no #{} section to scroll to", section.id());
        return;
    };
    let el = match el.dyn_into::<web_sys::HtmlElement>() {
        Ok(el) => el,
        Err(_) => return,
    };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(scroll_target(f64::from(el.offset_top())));
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Click handler for in-page links: resolves the clicked anchor's `href` to a
/// [`Section`] and scrolls there instead of jumping.
pub(super) fn scroll_to_anchor(ev: &MouseEvent) {
    ev.prevent_default();
    let href = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.get_attribute("href"));
    match href.as_deref().and_then(Section::from_href) {
        Some(section) => scroll_to_section(section),
        None => log::debug!("{href:?} is not a section link"),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    let handle_link_click = move |ev: MouseEvent| {
        scroll_to_anchor(&ev);
        set_is_open.set(false);
    };

    let desktop_links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <a
                    href=section.href()
                    on:click=handle_link_click
                    class="nav-link text-gray-700 dark:text-gray-300 hover:text-blue-500 px-3 py-2"
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    let mobile_links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <a
                    href=section.href()
                    on:click=handle_link_click
                    class="block px-3 py-2 rounded-md text-base font-medium text-gray-700 dark:text-gray-300 hover:text-blue-500 hover:bg-gray-50 dark:hover:bg-gray-700"
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            format!(
                "bg-white/80 dark:bg-gray-800/80 backdrop-blur-sm fixed w-full z-20 transition-all duration-300 {}",
                if is_scrolled(scroll_y.get()) { "shadow-lg" } else { "shadow-sm" },
            )
        }>
            <div class="max-w-6xl mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0 flex items-center">
                        <span class="text-xl font-bold gradient-text">{OWNER}</span>
                    </div>
                    <div class="hidden md:flex items-center space-x-8">
                        {desktop_links} <ThemeToggle />
                    </div>
                    <div class="md:hidden flex items-center">
                        <ThemeToggle extra_class="mr-4" />
                        <button
                            type="button"
                            aria-label="Toggle navigation"
                            aria-expanded=move || is_open.get().to_string()
                            on:click=move |_| set_is_open.update(|open| *open = !*open)
                            class="text-gray-700 dark:text-gray-300 focus:outline-none"
                        >
                            <svg
                                class="w-6 h-6"
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                                xmlns="http://www.w3.org/2000/svg"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                ></path>
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
            <div class=move || {
                if is_open.get() {
                    "md:hidden block bg-white dark:bg-gray-800 shadow-lg"
                } else {
                    "md:hidden hidden bg-white dark:bg-gray-800 shadow-lg"
                }
            }>
                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">{mobile_links}</div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeToggle(#[prop(optional)] extra_class: &'static str) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            type="button"
            aria-label="Toggle dark mode"
            on:click=move |_| theme.toggle()
            class=format!(
                "{extra_class} text-gray-700 dark:text-gray-300 focus:outline-none text-xl w-10 h-10 rounded-full hover:bg-gray-100 dark:hover:bg-gray-700 flex items-center justify-center transition-colors",
            )
        >
            <i class=move || theme.get().toggle_icon()></i>
        </button>
    }
}
