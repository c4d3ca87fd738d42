use leptos::prelude::*;

use crate::content::{OWNER, PROFILE_IMAGE};

/// Round profile picture on a gradient backdrop. `size` carries the Tailwind
/// width/height classes.
#[component]
pub fn Avatar(size: &'static str, #[prop(optional)] hover: bool) -> impl IntoView {
    let class = format!(
        "{size} bg-gradient-to-br from-blue-400 to-purple-500 rounded-full overflow-hidden {}",
        if hover { "shadow-xl profile-img-container" } else { "shadow-lg" },
    );
    view! {
        <div class=class>
            <img src=PROFILE_IMAGE alt=format!("{OWNER} profile") class="w-full h-full object-cover" />
        </div>
    }
}
