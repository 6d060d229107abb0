use leptos::{either::Either, prelude::*};

use crate::skills::SKILL_CATEGORIES;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-12 section-content">
            <h2 class="text-2xl font-bold mb-8 text-center">"Skills"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="bg-brightBlack/30 p-4 rounded-md border border-muted/30">
                                <h3 class="text-lg font-bold text-green mb-3">{category.title}</h3>
                                <ul class="grid grid-cols-2 gap-3">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            let icon = match skill.icon {
                                                Some(class) => Either::Left(view! {
                                                    <i class=format!("{class} text-2xl")></i>
                                                }),
                                                None => Either::Right(view! {
                                                    <span class="flex items-center justify-center w-6 h-6 rounded bg-brightBlack text-xs font-bold">
                                                        {skill.initial()}
                                                    </span>
                                                }),
                                            };
                                            view! {
                                                <li class="flex items-center gap-2 text-sm">
                                                    {icon}
                                                    <span>{skill.name}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
