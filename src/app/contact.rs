use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{ContactField, ContactState, MOCK_SUBMIT_DELAY_MS};
use crate::content::{CONTACT_BLURB, CONTACT_LINKS};
use crate::nav::Section;

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 outline-none transition";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-16 px-4 bg-white dark:bg-gray-800">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 gradient-text">"Get In Touch"</h2>
                <div class="flex flex-col md:flex-row gap-8">
                    <div class="md:w-1/2">
                        <ContactInfo />
                    </div>
                    <div class="md:w-1/2">
                        <MessageForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <h3 class="text-2xl font-semibold mb-4">"Contact Information"</h3>
        <p class="text-gray-600 dark:text-gray-400 mb-6">{CONTACT_BLURB}</p>
        <div class="space-y-4">
            {CONTACT_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <div class="flex items-center">
                            <div class="bg-blue-100 p-3 rounded-full mr-4">
                                <i class=format!("{} text-blue-600", link.icon)></i>
                            </div>
                            <div>
                                <p class="text-gray-500 text-sm">{link.label}</p>
                                <a
                                    href=link.href
                                    target=link.external.then_some("_blank")
                                    rel=link.external.then_some("noopener noreferrer")
                                    class="text-gray-800 dark:text-gray-300 hover:text-blue-600"
                                >
                                    {link.text}
                                </a>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Mock form: nothing leaves the browser. A submit shows "Sending...", then
/// reports success and clears the fields after a fixed delay. The pending
/// timer is cleared if the form is unmounted first.
#[component]
fn MessageForm() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            state.maybe_update(ContactState::complete);
        },
        f64::from(MOCK_SUBMIT_DELAY_MS),
    );

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match state.try_update(ContactState::begin_submit) {
            Some(Ok(())) => start(()),
            Some(Err(e)) => log::debug!("contact form not sent: {e}"),
            None => {}
        }
    };

    let fields = ContactField::ALL
        .into_iter()
        .map(|field| {
            let value = move || state.with(|s| s.form.get(field).to_string());
            let handle_input = move |ev: Event| {
                state.update(|s| s.form.set(field, event_target_value(&ev)));
            };
            let input = if field.is_multiline() {
                Either::Left(view! {
                    <textarea
                        id=field.id()
                        rows="4"
                        required=true
                        prop:value=value
                        on:input=handle_input
                        class=INPUT_CLASS
                    ></textarea>
                })
            } else {
                Either::Right(view! {
                    <input
                        type=field.input_type()
                        id=field.id()
                        required=true
                        prop:value=value
                        on:input=handle_input
                        class=INPUT_CLASS
                    />
                })
            };
            view! {
                <div>
                    <label
                        for=field.id()
                        class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                    >
                        {field.label()}
                    </label>
                    {input}
                </div>
            }
        })
        .collect_view();

    view! {
        <form on:submit=handle_submit class="space-y-4">
            {fields}
            <button
                type="submit"
                disabled=move || state.with(ContactState::is_sending)
                class="w-full bg-blue-600 hover:bg-blue-700 disabled:opacity-70 text-white px-6 py-3 rounded-lg font-medium transition duration-300"
            >
                "Send Message"
            </button>
            {move || {
                state
                    .with(|s| s.status.message())
                    .map(|msg| view! { <p class="text-center mt-2">{msg}</p> })
            }}
        </form>
    }
}
