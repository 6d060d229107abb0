use leptos::{either::Either, ev, prelude::*};

use crate::gallery::{
    media::{EMBED_ALLOW, EMBED_SANDBOX},
    modal_state::{ModalInput, ModalState},
    project::BodySection,
    scroll_lock::{ScrollLock, ScrollTarget},
    Carousel, MediaItem, MediaKind, Project,
};

/// The page body; locking hides its overflow.
#[derive(Debug, Clone, Copy)]
struct PageBody;

impl ScrollTarget for PageBody {
    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();
        let res = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = res {
            log::warn!("couldn't toggle page scrolling: {e:?}");
        }
    }
}

#[component]
pub fn MediaModal(
    #[prop(into)] project: Signal<Option<Project>>,
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = StoredValue::new(ModalState::Closed);
    let scroll_lock = StoredValue::new(None::<ScrollLock<PageBody>>);
    let (carousel, set_carousel) = signal(Carousel::default());

    let apply = move |input: ModalInput| {
        let t = state.get_value().handle(&input);
        state.set_value(t.next);
        if t.reset_carousel {
            let len = project.with_untracked(|p| p.as_ref().map_or(0, |p| p.media().len()));
            set_carousel.set(Carousel::new(len));
        }
        if t.entered {
            scroll_lock.set_value(Some(ScrollLock::acquire(PageBody)));
        }
        if t.exited {
            // dropping the guard restores scrolling
            scroll_lock.update_value(|lock| {
                lock.take();
            });
        }
        if t.notify_close {
            on_close.run(());
        }
    };

    Effect::new(move |_| {
        let open = is_open.get();
        let shown = project.with(|p| p.as_ref().map(Project::key));
        apply(match shown {
            Some(key) if open => ModalInput::Open(key),
            _ => ModalInput::Close,
        });
    });

    let keys = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        if state.get_value().is_open() {
            match key.as_str() {
                "ArrowLeft" => set_carousel.update(Carousel::previous),
                "ArrowRight" => set_carousel.update(Carousel::next),
                _ => {}
            }
        }
        apply(ModalInput::Key(key));
    });

    on_cleanup(move || {
        keys.remove();
        scroll_lock.try_update_value(|lock| {
            lock.take();
        });
    });

    move || {
        if !is_open.get() {
            return None;
        }
        let p = project.get()?;
        let title = p.title.clone();
        let media_len = p.media().len();
        let slide = {
            let p = p.clone();
            move || {
                let index = carousel.get().index();
                p.media()
                    .get(index)
                    .cloned()
                    .map(|item| view! { <MediaSlide item label=p.media_label(index) /> })
            }
        };

        Some(view! {
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 backdrop-blur-sm p-4"
                role="dialog"
                aria-modal="true"
                aria-label=title.clone()
                on:click=move |_| apply(ModalInput::OverlayClick)
            >
                <div
                    class="relative w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-lg border border-muted/30 bg-background shadow-2xl"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        apply(ModalInput::ContentClick);
                    }
                >
                    <button
                        class="absolute top-3 right-3 z-10 px-3 py-1 rounded-md bg-black/60 hover:bg-black/80 text-xl"
                        aria-label="Close"
                        on:click=move |_| apply(ModalInput::CloseButton)
                    >
                        "✕"
                    </button>
                    <div class="px-6 pt-6 pb-4 pr-16">
                        <h2 class="text-2xl font-bold text-cyan">{title.clone()}</h2>
                    </div>
                    {(media_len > 0)
                        .then(|| {
                            view! {
                                <div class="relative aspect-video bg-black">
                                    {slide}
                                    {(media_len > 1)
                                        .then(|| {
                                            view! {
                                                <CarouselControls
                                                    len=media_len
                                                    carousel
                                                    set_carousel
                                                />
                                            }
                                        })}
                                </div>
                            }
                        })}
                    <ModalBody sections=p.body_sections() />
                </div>
            </div>
        })
    }
}

#[component]
fn MediaSlide(item: MediaItem, label: String) -> impl IntoView {
    match item.kind {
        MediaKind::Image => Either::Left(view! {
            <img src=item.src() alt=label class="w-full h-full object-contain" />
        }),
        MediaKind::VideoEmbed => Either::Right(view! {
            <iframe
                src=item.src()
                title=label
                allow=EMBED_ALLOW
                allowfullscreen=true
                sandbox=EMBED_SANDBOX
                class="w-full h-full border-0"
            ></iframe>
        }),
    }
}

#[component]
fn CarouselControls(
    len: usize,
    carousel: ReadSignal<Carousel>,
    set_carousel: WriteSignal<Carousel>,
) -> impl IntoView {
    let nav_class = "absolute top-1/2 -translate-y-1/2 px-3 py-2 rounded-full bg-black/60 hover:bg-black/80 text-2xl";
    view! {
        <button
            class=format!("{nav_class} left-3")
            aria-label="Previous image"
            on:click=move |_| set_carousel.update(Carousel::previous)
        >
            "‹"
        </button>
        <button
            class=format!("{nav_class} right-3")
            aria-label="Next image"
            on:click=move |_| set_carousel.update(Carousel::next)
        >
            "›"
        </button>
        <div class="absolute bottom-3 left-1/2 -translate-x-1/2 flex gap-2">
            {(0..len)
                .map(|i| {
                    view! {
                        <button
                            aria-label=format!("Go to image {}", i + 1)
                            class=move || {
                                if carousel.get().index() == i {
                                    "w-3 h-3 rounded-full bg-white"
                                } else {
                                    "w-3 h-3 rounded-full bg-white/40 hover:bg-white/70"
                                }
                            }
                            on:click=move |_| set_carousel.update(|c| c.jump(i))
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ModalBody(sections: Vec<BodySection>) -> impl IntoView {
    let link_class = "inline-block px-4 py-2 rounded-md border transition-all duration-200";
    view! {
        <div class="px-6 pb-6">
            {sections
                .into_iter()
                .map(|section| {
                    let heading = section
                        .heading()
                        .map(|h| view! { <h3 class="text-lg font-bold text-green mb-2">{h}</h3> });
                    let content = match section {
                        BodySection::Description(text) => {
                            view! { <p class="text-base leading-relaxed">{text}</p> }.into_any()
                        }
                        BodySection::Demo(url) => {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=format!("{link_class} bg-cyan/20 hover:bg-cyan/30 text-cyan border-cyan/30")
                                >
                                    "View Demo"
                                </a>
                            }
                                .into_any()
                        }
                        BodySection::Technologies(techs) => {
                            view! {
                                <ul class="flex flex-wrap gap-2">
                                    {techs
                                        .into_iter()
                                        .map(|t| {
                                            view! {
                                                <li class="bg-green/20 text-green px-2 py-1 rounded text-xs">
                                                    {t}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                        BodySection::Code(url) => {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=format!("{link_class} hover:bg-brightBlack/30 border-muted/30")
                                >
                                    <i class="devicon-github-plain mr-2"></i>
                                    "View on GitHub"
                                </a>
                            }
                                .into_any()
                        }
                    };
                    view! { <section class="mb-6">{heading} {content}</section> }
                })
                .collect_view()}
        </div>
    }
}
