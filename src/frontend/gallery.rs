use super::widgets::FallbackImage;
use super::{log, WindowKeys, WindowTimers};
use crate::assets::{BasePath, FallbackChain};
use crate::language::{strings, Language};
use crate::logging::LogLevel;
use crate::slideshow::{
    arm_auto_advance, bind_gallery_keys, GalleryAction, GalleryEffect, GalleryState, SlideAction,
    SlideshowState,
};
use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

impl Reducible for SlideshowState {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SlideshowProps {
    pub photos: Vec<&'static str>,
    pub language: Language,
}

#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let len = props.photos.len();
    let state = use_reducer(move || SlideshowState::new(len));

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.timer_gate(), move |gate| {
            let handle = arm_auto_advance(&WindowTimers, *gate, move || {
                dispatcher.dispatch(SlideAction::Tick)
            });
            move || drop(handle)
        });
    }

    let Some(photo) = state.current_photo(&props.photos) else {
        return html! {};
    };

    let t = strings(props.language);
    let base = BasePath::from_build();
    let dispatch = |action: SlideAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    let on_index_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(SlideAction::SyncFromModal(index)))
    };
    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SlideAction::CloseModal))
    };

    html! {
        <>
            <section
                class="slideshow"
                aria-roledescription="carousel"
                onmouseenter={dispatch(SlideAction::PointerEnter)}
                onmouseleave={dispatch(SlideAction::PointerLeave)}
            >
                <div class="slideshow-frame">
                    <FallbackImage
                        key={photo}
                        class={classes!("slideshow-image")}
                        chain={FallbackChain::photo(&base, photo)}
                        alt={format!("{} {}/{}", t.about_gallery_title, state.index + 1, len)}
                        onclick={dispatch(SlideAction::OpenModal)}
                    />
                    <span class="sr-only">{t.gallery_open}</span>
                </div>

                if state.has_controls() {
                    <button
                        type="button"
                        class="slideshow-control is-prev"
                        aria-label={t.gallery_prev}
                        onclick={dispatch(SlideAction::Prev)}
                    >
                        {"‹"}
                    </button>
                    <button
                        type="button"
                        class="slideshow-control is-next"
                        aria-label={t.gallery_next}
                        onclick={dispatch(SlideAction::Next)}
                    >
                        {"›"}
                    </button>
                    <div class="slideshow-indicators">
                        { for (0..len).map(|i| html! {
                            <button
                                key={i}
                                type="button"
                                class={classes!("slideshow-dot", (i == state.index).then_some("is-active"))}
                                aria-label={format!("{} {}", t.gallery_go_to, i + 1)}
                                aria-current={(i == state.index).then_some("true")}
                                onclick={dispatch(SlideAction::Select(i))}
                            />
                        }) }
                    </div>
                }
            </section>

            if state.modal_open {
                <GalleryModal
                    photos={props.photos.clone()}
                    start_index={state.index}
                    language={props.language}
                    on_index_change={on_index_change}
                    on_close={on_close}
                />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    pub photos: Vec<&'static str>,
    /// Read once on mount.
    pub start_index: usize,
    pub language: Language,
    pub on_index_change: Callback<usize>,
    pub on_close: Callback<()>,
}

/// Full-screen browser over the slideshow's photos. Mounted only while open,
/// so its key listener lives exactly as long as the modal does.
#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    let len = props.photos.len();
    let start = props.start_index;
    let current = use_mut_ref(move || GalleryState::open(len, start));
    let rendered = use_state(move || GalleryState::open(len, start));

    let apply = {
        let current = current.clone();
        let rendered = rendered.setter();
        let on_index_change = props.on_index_change.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |action: GalleryAction| {
            let (next, effect) = current.borrow().apply(action);
            *current.borrow_mut() = next;
            rendered.set(next);

            match effect {
                GalleryEffect::Report(index) => on_index_change.emit(index),
                GalleryEffect::Close => on_close.emit(()),
                GalleryEffect::None => {}
            }
        })
    };

    {
        let apply = apply.clone();
        use_effect_with((), move |_| {
            log(
                LogLevel::Debug,
                "gallery_opened",
                serde_json::json!({ "index": start, "photos": len }),
            );
            let keys = bind_gallery_keys(&WindowKeys, move |action| apply.emit(action));

            move || {
                drop(keys);
                log(LogLevel::Debug, "gallery_closed", serde_json::json!({}));
            }
        });
    }

    let t = strings(props.language);
    let base = BasePath::from_build();
    let index = rendered.index;
    let photo = props.photos.get(index).copied().unwrap_or_default();
    let send = |action: GalleryAction| {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply.emit(action))
    };

    html! {
        <div
            class="gallery-backdrop"
            role="dialog"
            aria-modal="true"
            aria-label={t.gallery_dialog}
            onclick={send(GalleryAction::Close)}
        >
            <div class="gallery-content" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                <button
                    type="button"
                    class="gallery-close"
                    aria-label={t.gallery_close}
                    onclick={send(GalleryAction::Close)}
                >
                    {"×"}
                </button>

                <div class="gallery-stage">
                    if len > 1 {
                        <button
                            type="button"
                            class="gallery-control is-prev"
                            aria-label={t.gallery_prev}
                            onclick={send(GalleryAction::Prev)}
                        >
                            {"‹"}
                        </button>
                    }
                    <FallbackImage
                        key={photo}
                        class={classes!("gallery-image")}
                        chain={FallbackChain::photo(&base, photo)}
                        alt={format!("{} {}/{}", t.about_gallery_title, index + 1, len)}
                    />
                    if len > 1 {
                        <button
                            type="button"
                            class="gallery-control is-next"
                            aria-label={t.gallery_next}
                            onclick={send(GalleryAction::Next)}
                        >
                            {"›"}
                        </button>
                    }
                </div>

                <p class="gallery-counter">{format!("{} / {}", index + 1, len)}</p>

                <div class="gallery-thumbnails">
                    { for props.photos.iter().enumerate().map(|(i, thumb)| html! {
                        <button
                            key={i}
                            type="button"
                            class={classes!("gallery-thumb", (i == index).then_some("is-active"))}
                            aria-label={format!("{} {}", t.gallery_go_to, i + 1)}
                            onclick={send(GalleryAction::Select(i))}
                        >
                            <FallbackImage
                                chain={FallbackChain::photo(&base, thumb)}
                                alt=""
                                lazy=true
                            />
                        </button>
                    }) }
                </div>
            </div>
        </div>
    }
}
