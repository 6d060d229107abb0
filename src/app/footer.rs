use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use super::SITE_OWNER;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(BUILD_TIME).ok();
    let year = built.map(|d| d.year().to_string()).unwrap_or_default();
    let built = built.map(|d| format!("Last built {}", d.format("%b %e, %Y")));

    view! {
        <footer class="w-full border-t border-muted/30 mt-12 py-6 text-sm text-muted">
            <div class="max-w-6xl mx-auto px-4 flex flex-col sm:flex-row justify-between items-center gap-2">
                <span>{format!("© {year} {SITE_OWNER}")}</span>
                {built.map(|s| view! { <span>{s}</span> })}
            </div>
        </footer>
    }
}
