use leptos::prelude::*;

use crate::content::{
    ResumeEntry, OWNER, RESUME_EDUCATION, RESUME_EXPERIENCE, RESUME_LOCATION, RESUME_PDF,
    RESUME_ROLE,
};
use crate::nav::Section;

use super::avatar::Avatar;

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <section id=Section::Resume.id() class="py-16 px-4 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 gradient-text">"My Resume"</h2>
                <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-8 max-w-3xl mx-auto">
                    <Summary />
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <EntryList title="Education" entries=&RESUME_EDUCATION />
                        <EntryList title="Experience" entries=&RESUME_EXPERIENCE />
                    </div>
                    <div class="mt-8 text-center">
                        <a
                            href=RESUME_PDF
                            class="inline-flex items-center bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg font-medium transition duration-300"
                        >
                            <i class="fas fa-download mr-2"></i>
                            "Download Full Resume (PDF)"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Summary() -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row items-center mb-8">
            <div class="md:w-1/3 mb-6 md:mb-0 flex justify-center">
                <Avatar size="w-32 h-32" />
            </div>
            <div class="md:w-2/3 md:pl-8 text-center md:text-left">
                <h3 class="text-2xl font-bold mb-2">{OWNER}</h3>
                <p class="text-gray-600 dark:text-gray-400 mb-2">{RESUME_ROLE}</p>
                <p class="text-gray-500 dark:text-gray-500 text-sm">
                    <i class="fas fa-map-marker-alt mr-1"></i>
                    {RESUME_LOCATION}
                </p>
            </div>
        </div>
    }
}

#[component]
fn EntryList(title: &'static str, entries: &'static [ResumeEntry]) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-bold text-lg mb-4 border-b dark:border-gray-700 pb-2">{title}</h4>
            {entries
                .iter()
                .map(|entry| {
                    view! {
                        <div class="mb-6">
                            <h5 class="font-semibold">{entry.title}</h5>
                            <p class="text-gray-600 dark:text-gray-400">{entry.organization}</p>
                            <p class="text-gray-500 dark:text-gray-500 text-sm">{entry.period}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
