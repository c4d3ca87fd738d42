use leptos::prelude::*;

use crate::content::{copyright_year, FOOTER_TAGLINE, OWNER, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-8 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <span class="text-xl font-bold gradient-text">{OWNER}</span>
                        <p class="text-gray-400 mt-1">{FOOTER_TAGLINE}</p>
                    </div>
                    <div class="flex space-x-6">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        aria-label=link.label
                                        class="text-gray-400 hover:text-white transition duration-300"
                                    >
                                        <i class=format!("{} text-xl", link.icon)></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-400 text-sm">
                    <p>{format!("© {} {OWNER}. All rights reserved.", copyright_year())}</p>
                </div>
            </div>
        </footer>
    }
}
