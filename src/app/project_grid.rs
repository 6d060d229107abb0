use leptos::{ev::KeyboardEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::gallery::{
    hover::HoverCycles,
    timers::{Cancel, TimerRegistry},
    GalleryTiming, Project, ProjectKey, PROJECTS,
};

use super::media_modal::MediaModal;

impl Cancel for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

#[component]
pub fn ProjectGallery(#[prop(optional)] timing: Option<GalleryTiming>) -> impl IntoView {
    let timing = timing.unwrap_or_default();
    let (selected, set_selected) = signal(None::<Project>);
    let (is_open, set_is_open) = signal(false);
    let hover = RwSignal::new(HoverCycles::new());
    let timers = StoredValue::new(TimerRegistry::<ProjectKey, IntervalHandle>::new());

    // keep the project around while the modal animates out
    let UseTimeoutFnReturn {
        start: start_deselect,
        stop: stop_deselect,
        ..
    } = use_timeout_fn(
        move |_: ()| set_selected.set(None),
        timing.close_delay.as_millis() as f64,
    );

    let on_select = Callback::new(move |project: Project| {
        stop_deselect();
        log::debug!("opening project {}", project.title);
        set_selected.set(Some(project));
        set_is_open.set(true);
    });

    let on_close = Callback::new(move |_: ()| {
        log::debug!("closing project modal");
        set_is_open.set(false);
        start_deselect(());
    });

    let cycle_interval = timing.cycle_interval;
    let on_enter = Callback::new(move |(key, media_len): (ProjectKey, usize)| {
        let cycles = hover.try_update(|h| h.enter(key, media_len)).unwrap_or(false);
        if !cycles {
            return;
        }
        match set_interval_with_handle(
            move || hover.update(|h| h.tick(key, media_len)),
            cycle_interval,
        ) {
            Ok(handle) => timers.update_value(|t| t.start(key, handle)),
            Err(e) => log::warn!("couldn't start hover cycle: {e:?}"),
        }
    });

    // cancel before touching state so no tick can land after the leave
    let on_leave = Callback::new(move |key: ProjectKey| {
        timers.update_value(|t| {
            t.cancel(&key);
        });
        hover.update(|h| h.leave(key));
    });

    on_cleanup(move || {
        timers.try_update_value(|t| t.cancel_all());
    });

    view! {
        <section id="projects" class="py-12 section-content">
            <h2 class="text-2xl font-bold mb-8 text-center">"Personal Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {PROJECTS
                    .iter()
                    .cloned()
                    .map(|project| {
                        let key = project.key();
                        let hover_index = Memo::new(move |_| hover.with(|h| h.hover_index(key)));
                        view! {
                            <ProjectCard project hover_index on_select on_enter on_leave />
                        }
                    })
                    .collect_view()}
            </div>
            <MediaModal project=selected is_open on_close />
        </section>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    #[prop(into)] hover_index: Signal<Option<usize>>,
    on_select: Callback<Project>,
    on_enter: Callback<(ProjectKey, usize)>,
    on_leave: Callback<ProjectKey>,
) -> impl IntoView {
    let key = project.key();
    let media_len = project.media().len();
    let title = project.title.clone();
    let description = project.description.clone();
    let tags = project.technologies().to_vec();
    let project = StoredValue::new(project);

    let image = move || project.with_value(|p| p.card_image(hover_index.get()).to_string());
    let select = move || on_select.run(project.get_value());
    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" | " " => {
            ev.prevent_default();
            select();
        }
        _ => {}
    };

    view! {
        <article
            role="button"
            tabindex="0"
            aria-label=format!("View details for {title}")
            class="group cursor-pointer rounded-lg overflow-hidden border border-muted/30 bg-brightBlack/20 hover:bg-brightBlack/30 focus:outline-none focus:ring-2 focus:ring-cyan transition-colors duration-200"
            on:click=move |_| select()
            on:keydown=on_keydown
            on:mouseenter=move |_| on_enter.run((key, media_len))
            on:mouseleave=move |_| on_leave.run(key)
        >
            <div class="aspect-video overflow-hidden bg-brightBlack/30">
                <img
                    src=image
                    alt=title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
                />
            </div>
            <div class="p-4">
                <h3 class="text-lg font-bold text-cyan">{title.clone()}</h3>
                <p class="text-sm mt-2 leading-relaxed">{description}</p>
                <div class="mt-3">
                    {tags
                        .into_iter()
                        .map(|t| {
                            view! {
                                <span class="inline-block rounded-md px-2 py-1 bg-brightBlack mr-2 mb-2 text-xs">
                                    {t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-4 text-sm font-medium text-cyan group-hover:underline">
                    "View Details →"
                </div>
            </div>
        </article>
    }
}
