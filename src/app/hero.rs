use leptos::prelude::*;

use super::SITE_OWNER;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="flex flex-col justify-center items-center text-center gap-4 py-16 lg:py-24 section-content">
            <h1 class="text-3xl lg:text-5xl font-bold">{format!("Hi, I'm {SITE_OWNER}")}</h1>
            <p class="max-w-2xl text-lg text-muted leading-relaxed">
                "I build fast, reliable software for the web and beyond, mostly in "
                <span class="text-cyan">"Rust"</span>
                " and "
                <span class="text-cyan">"TypeScript"</span>
                ". Below are a few things I've made recently."
            </p>
            <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-4">
                <a
                    href="#projects"
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                >
                    "See my work"
                </a>
                <a
                    href="https://github.com/portfolio-dev"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-white hover:text-brightWhite text-2xl"
                    aria-label="GitHub Profile"
                >
                    <i class="devicon-github-plain"></i>
                </a>
            </div>
        </section>
    }
}
