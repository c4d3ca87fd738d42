use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::Title;

use crate::content::{
    projects, tag_badge_class, Project, ABOUT_PARAGRAPHS, EDUCATION, HEADLINE, OWNER, SKILL_GROUPS,
    TAGLINE,
};
use crate::nav::Section;

use super::avatar::Avatar;
use super::contact::Contact;
use super::header::scroll_to_anchor;
use super::resume::Resume;
use super::reveal::RevealOnView;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <RevealOnView>
            <About />
        </RevealOnView>
        <RevealOnView>
            <Skills />
        </RevealOnView>
        <RevealOnView>
            <Projects />
        </RevealOnView>
        <RevealOnView>
            <Resume />
        </RevealOnView>
        <RevealOnView>
            <Contact />
        </RevealOnView>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="pt-24 pb-16 md:pt-32 md:pb-24 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="flex flex-col md:flex-row items-center">
                    <div class="md:w-1/2 mb-8 md:mb-0 hero-slide-in">
                        <h1 class="text-4xl md:text-5xl font-bold mb-4">
                            "Hi, I'm " <span class="gradient-text">{OWNER}</span>
                        </h1>
                        <h2 class="text-2xl md:text-3xl font-semibold text-gray-600 dark:text-gray-400 mb-6">
                            {HEADLINE}
                        </h2>
                        <p class="text-lg text-gray-600 dark:text-gray-400 mb-8">{TAGLINE}</p>
                        <div class="flex space-x-4">
                            <a
                                href=Section::Projects.href()
                                on:click=|ev: MouseEvent| scroll_to_anchor(&ev)
                                class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg font-medium transition duration-300 transform hover:scale-105"
                            >
                                "View My Work"
                            </a>
                            <a
                                href=Section::Contact.href()
                                on:click=|ev: MouseEvent| scroll_to_anchor(&ev)
                                class="border border-blue-600 text-blue-600 hover:bg-blue-50 dark:hover:bg-gray-800 px-6 py-3 rounded-lg font-medium transition duration-300 transform hover:scale-105"
                            >
                                "Contact Me"
                            </a>
                        </div>
                    </div>
                    <div class="md:w-1/2 flex justify-center hero-zoom-in">
                        <Avatar size="w-64 h-64 md:w-80 md:h-80" hover=true />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-16 px-4 bg-white dark:bg-gray-800">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 gradient-text">"About Me"</h2>
                <div class="flex flex-col md:flex-row gap-8">
                    <div class="md:w-1/2">
                        <h3 class="text-2xl font-semibold mb-4">"Who I Am"</h3>
                        {ABOUT_PARAGRAPHS
                            .into_iter()
                            .map(|p| view! { <p class="text-gray-600 dark:text-gray-400 mb-6">{p}</p> })
                            .collect_view()}
                    </div>
                    <div class="md:w-1/2">
                        <h3 class="text-2xl font-semibold mb-4">"Education"</h3>
                        <div class="space-y-6">
                            {EDUCATION
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <div class=format!("border-l-4 {} pl-4", entry.accent)>
                                            <h4 class="font-bold text-lg">{entry.title}</h4>
                                            <p class="text-gray-600 dark:text-gray-400">{entry.detail}</p>
                                            {entry
                                                .note
                                                .map(|note| {
                                                    view! {
                                                        <p class="text-gray-500 dark:text-gray-500 text-sm">
                                                            {note}
                                                        </p>
                                                    }
                                                })}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-16 px-4 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 gradient-text">"My Skills"</h2>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    {SKILL_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(i, group)| {
                            view! {
                                <div
                                    class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-sm skill-card"
                                    style=format!("animation-delay: {}ms", i * 100)
                                >
                                    <h3 class="font-bold text-lg mb-4 flex items-center">
                                        <i class=format!(
                                            "fas {} mr-2 {}",
                                            group.icon,
                                            group.icon_color,
                                        )></i>
                                        {group.title}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class=format!(
                                                        "skill-badge {} px-3 py-1 rounded-full text-sm",
                                                        group.badge_color,
                                                    )>{*skill}</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-16 px-4 bg-white dark:bg-gray-800">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 gradient-text">"My Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For each=projects key=|p| p.id.clone() let:project>
                        <ProjectCard project />
                    </For>
                </div>
                <div class="text-center mt-12">
                    <a
                        href="#"
                        class="inline-block border border-blue-600 text-blue-600 hover:bg-blue-50 dark:hover:bg-gray-700 px-6 py-3 rounded-lg font-medium transition duration-300 transform hover:scale-105"
                    >
                        "View All Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        tags,
        live_link,
        source_link,
        icon,
        gradient,
        ..
    } = project;

    view! {
        <div class="project-card bg-white dark:bg-gray-700 rounded-xl overflow-hidden shadow-md border border-gray-100 dark:border-gray-600 transition duration-300 hover:-translate-y-2.5 hover:shadow-xl">
            <div class=format!("h-48 bg-gradient-to-r {gradient} flex items-center justify-center")>
                <i class=format!("fas {icon} text-white text-6xl")></i>
            </div>
            <div class="p-6">
                <h3 class="font-bold text-xl mb-2">{title}</h3>
                <p class="text-gray-600 dark:text-gray-400 mb-4">{description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            let class = tag_badge_class(&tag);
                            view! { <span class=class>{tag}</span> }
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-3">
                    <a href=live_link class="text-blue-600 hover:text-blue-800 font-medium">
                        "Live Demo"
                    </a>
                    <a
                        href=source_link
                        class="text-gray-600 dark:text-gray-400 hover:text-gray-800 font-medium"
                    >
                        "Source Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
