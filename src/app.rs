mod avatar;
mod contact;
mod footer;
mod header;
mod homepage;
mod resume;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER;
use crate::theme::{apply_to_document, Theme, ThemeController, THEME_BOOTSTRAP_SCRIPT};

use footer::Footer;
use header::Header;
use homepage::HomePage;

#[cfg(feature = "hydrate")]
type SiteThemeStore = crate::theme::LocalThemeStore;
#[cfg(not(feature = "hydrate"))]
type SiteThemeStore = crate::theme::MemoryThemeStore;

const NOSCRIPT_STYLE: &str = ".reveal { opacity: 1 !important; transform: none !important; }";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                // must run before the body paints
                <script inner_html=THEME_BOOTSTRAP_SCRIPT></script>
                <noscript>
                    <style inner_html=NOSCRIPT_STYLE></style>
                </noscript>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Shared light/dark preference. The controller is only loaded in the browser,
/// after hydration, so the first client render matches the server's.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    controller: StoredValue<Option<ThemeController<SiteThemeStore>>>,
}

impl ThemeContext {
    fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            controller: StoredValue::new(None),
        }
    }

    fn load(&self) {
        let controller = ThemeController::init(SiteThemeStore::default());
        let current = controller.current();
        self.controller.set_value(Some(controller));
        apply_to_document(current);
        self.theme.set(current);
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.controller.try_update_value(|controller| {
            controller
                .get_or_insert_with(|| ThemeController::init(SiteThemeStore::default()))
                .toggle()
        });
        if let Some(next) = next {
            apply_to_document(next);
            self.theme.set(next);
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = ThemeContext::new();
    provide_context(theme);
    Effect::watch(|| (), move |_, _, _| theme.load(), true);

    view! {
        // sets the document title
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta name="description" content=crate::content::HEADLINE />

        <Router>
            <div class="bg-gray-50 text-gray-800 dark:bg-gray-900 dark:text-gray-200 transition-colors duration-300">
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
