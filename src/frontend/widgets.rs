use super::log;
use crate::assets::{BasePath, FallbackChain, MarqueeTrack};
use crate::language::Language;
use crate::logging::LogLevel;
use crate::routes::Route;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LanguageSwitcherProps {
    pub current: Language,
    pub label: AttrValue,
    pub on_select: Callback<Language>,
}

#[function_component(LanguageSwitcher)]
pub fn language_switcher(props: &LanguageSwitcherProps) -> Html {
    html! {
        <div class="language-switcher" role="group" aria-label={props.label.clone()}>
            { for Language::ALL.into_iter().map(|code| {
                let on_select = props.on_select.clone();
                let active = code == props.current;
                html! {
                    <button
                        key={code.code()}
                        type="button"
                        class={classes!("language-option", active.then_some("is-active"))}
                        aria-label={code.switch_label()}
                        aria-pressed={active.to_string()}
                        title={code.code().to_ascii_uppercase()}
                        onclick={Callback::from(move |_| on_select.emit(code))}
                    >
                        <span class="language-flag" aria-hidden="true">{code.flag()}</span>
                        <span class="language-code">{code.code().to_ascii_uppercase()}</span>
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackToOrbitProps {
    pub label: AttrValue,
    /// Replaces plain link navigation, e.g. to play a leave transition first.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(BackToOrbit)]
pub fn back_to_orbit(props: &BackToOrbitProps) -> Html {
    let href = Route::Home.href(&BasePath::from_build());

    let onclick = props.onclick.clone().map(|handler| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            handler.emit(event);
        })
    });

    html! {
        <div class="back-slot">
            <a class="back-to-orbit" href={href} aria-label={props.label.clone()} onclick={onclick}>
                <span class="back-arrow" aria-hidden="true">{"←"}</span>
                <span class="back-label">{props.label.clone()}</span>
            </a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub chain: FallbackChain,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub lazy: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// An `<img>` that walks its own fallback chain on load errors. Give it a
/// `key` per source so a new image starts from the first candidate.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let chain = use_state(|| props.chain.clone());

    let onerror = {
        let chain = chain.clone();
        Callback::from(move |_: Event| {
            let mut next = (*chain).clone();
            let failed = next.current().to_string();
            if !next.advance() {
                return;
            }

            log(
                LogLevel::Debug,
                "image_fallback",
                serde_json::json!({
                    "failed": failed,
                    "next": next.current(),
                    "attempt": next.attempt(),
                }),
            );
            chain.set(next);
        })
    };

    html! {
        <img
            class={props.class.clone()}
            src={chain.current().to_string()}
            alt={props.alt.clone()}
            loading={props.lazy.then_some("lazy")}
            onerror={onerror}
            onclick={props.onclick.clone()}
        />
    }
}

/// Nominal rendered icon width (`.marquee-icon` is 3rem tall).
const MARQUEE_ICON_PX: f64 = 48.0;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub icons: Vec<&'static str>,
    pub track: MarqueeTrack,
    pub animation: AttrValue,
}

/// Endless strip of technology icons. The sequence is rendered
/// `track.copies` times and shifted by one copy per cycle.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    debug_assert!(props.track.is_seamless(&vec![MARQUEE_ICON_PX; props.icons.len()]));

    let base = BasePath::from_build();
    let css = props.track.keyframes_css(&props.animation);
    let sequence_len = props.icons.len();

    html! {
        <div class="marquee" aria-hidden="true">
            <style>{css}</style>
            <div class={classes!("marquee-track", props.animation.to_string())}>
                { for props.track.repeat(&props.icons).into_iter().enumerate().map(|(i, name)| {
                    let copy = if sequence_len == 0 { 0 } else { i / sequence_len };
                    html! {
                        <FallbackImage
                            key={format!("{name}-{i}")}
                            class={classes!("marquee-icon")}
                            chain={FallbackChain::tech_icon(&base, name)}
                            alt={if copy == 0 { name.to_string() } else { format!("{name}-dup") }}
                            lazy=true
                        />
                    }
                }) }
            </div>
        </div>
    }
}
