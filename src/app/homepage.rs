use leptos::prelude::*;
use leptos_meta::Title;

use super::hero::Hero;
use super::project_grid::ProjectGallery;
use super::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="w-full max-w-6xl mx-auto page-content">
            <Hero />
            <ProjectGallery />
            <Skills />
        </div>
    }
}
