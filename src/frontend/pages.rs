use super::gallery::Slideshow;
use super::widgets::{BackToOrbit, FallbackImage, LanguageSwitcher, Marquee};
use super::{navigate_after_leave, use_language, EventListenerGuard};
use crate::assets::{BasePath, FallbackChain, MarqueeTrack, ABOUT_TECHS, AVATAR, PHOTOS, PROJECT_TECHS};
use crate::language::strings;
use crate::orbit::{
    generate_particles, orbit_transform, pupil_offset, pupil_transform, NAV_ITEMS, ORBIT_PERIOD_SECS,
    PARTICLE_COUNT, PUPIL_CENTERED, PUPIL_TRAVEL_PX,
};
use crate::routes::Route;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;

const CONTACT_EMAIL: &str = "ymudrik2005@gmail.com";

const PROJECT_LINKS: [&str; 4] = [
    "https://github.com/ymudryk27/ClientBook",
    "https://github.com/ymudryk27/ai_images",
    "https://ymudryk27.github.io/kickboxer_website/",
    "https://github.com/ymudryk27/traffic-sign-recognition",
];

const PROJECT_STACKS: [&[&str]; 4] = [
    &["Flask", "PostgreSQL"],
    &["Python", "Flask", "Tesseract"],
    &["HTML", "CSS", "GSAP"],
    &["TensorFlow", "Keras", "NumPy", "Pandas"],
];

const RESUME_TAGS: [&str; 15] = [
    "Python",
    "Flask",
    "FastAPI",
    "PostgreSQL",
    "Next.js",
    "React",
    "Tailwind",
    "HTML",
    "CSS",
    "JavaScript",
    "Tesseract OCR",
    "NumPy",
    "Pandas",
    "Figma",
    "Git/GitHub",
];

const SKILLS: [(&str, u8); 7] = [
    ("Python", 90),
    ("Flask / FastAPI", 82),
    ("TensorFlow / Keras (CNN)", 75),
    ("PostgreSQL / SQL", 72),
    ("QA Testing & Support", 72),
    ("Git / CLI (Linux/Bash)", 70),
    ("Communication & Docs", 80),
];

const CV_EN: &str = "/cv/Yaroslav_Mudryk_CV_EN.pdf";
const CV_PL: &str = "/cv/Yaroslav_Mudryk_CV_PL.pdf";

fn eye_center(eye: &NodeRef) -> Option<(f64, f64)> {
    let rect = eye.cast::<Element>()?.get_bounding_client_rect();
    Some((rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0))
}

#[function_component(AvatarEyes)]
fn avatar_eyes() -> Html {
    let left_eye = use_node_ref();
    let right_eye = use_node_ref();
    let pupils = use_state(|| (AttrValue::from(PUPIL_CENTERED), AttrValue::from(PUPIL_CENTERED)));

    {
        let left_eye = left_eye.clone();
        let right_eye = right_eye.clone();
        let pupils = pupils.setter();
        use_effect_with((), move |_| {
            let on_move = {
                let pupils = pupils.clone();
                EventListenerGuard::on_window("mousemove", move |event: Event| {
                    let Some(pointer) = event
                        .dyn_ref::<MouseEvent>()
                        .map(|mouse| (f64::from(mouse.client_x()), f64::from(mouse.client_y())))
                    else {
                        return;
                    };

                    let follow = |eye: &NodeRef| {
                        eye_center(eye)
                            .map(|center| pupil_transform(pupil_offset(center, pointer, PUPIL_TRAVEL_PX)))
                            .map(AttrValue::from)
                            .unwrap_or_else(|| AttrValue::from(PUPIL_CENTERED))
                    };
                    pupils.set((follow(&left_eye), follow(&right_eye)));
                })
            };

            let on_leave = EventListenerGuard::on_document_element("mouseleave", move |_| {
                pupils.set((AttrValue::from(PUPIL_CENTERED), AttrValue::from(PUPIL_CENTERED)));
            });

            move || {
                drop(on_move);
                drop(on_leave);
            }
        });
    }

    html! {
        <div class="eyes" aria-hidden="true">
            <div ref={left_eye} class="eye sclera is-left">
                <div class="pupil" style={format!("transform: {}", pupils.0)} />
            </div>
            <div ref={right_eye} class="eye sclera is-right">
                <div class="pupil" style={format!("transform: {}", pupils.1)} />
            </div>
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (language, on_language) = use_language(Route::Home);
    let particles = use_state(|| generate_particles(PARTICLE_COUNT, js_sys::Math::random));
    let t = strings(language);
    let base = BasePath::from_build();
    let ring_style = format!("--orbit-period: {ORBIT_PERIOD_SECS}s;");

    html! {
        <main class="page home">
            <div class="neon-backdrop" aria-hidden="true" />
            <LanguageSwitcher current={language} label={t.language_group} on_select={on_language} />

            <div class="hero">
                <h1 class="hero-title">{t.home_title}</h1>
                <p class="hero-tagline">{t.home_tagline}</p>
            </div>

            <div class="orbit-stage" style={ring_style}>
                <div class="avatar-slot">
                    <div class="avatar-wrapper">
                        <FallbackImage
                            class={classes!("avatar")}
                            chain={FallbackChain::new(vec![base.asset(AVATAR)])}
                            alt={t.avatar_alt}
                        />
                        <AvatarEyes />
                    </div>
                </div>

                <div class="orbit-circle is-outer" aria-hidden="true" />
                <div class="orbit-circle is-middle" aria-hidden="true" />
                <div class="orbit-circle is-inner" aria-hidden="true" />

                <nav class="orbit-ring">
                    { for NAV_ITEMS.iter().map(|item| {
                        let label = item.label(t);
                        html! {
                            <div
                                key={item.route.segment()}
                                class="orbit-slot"
                                style={format!("transform: {};", orbit_transform(item.angle_deg))}
                            >
                                <a class="orbit-link" href={item.route.href(&base)} aria-label={label} title={label}>
                                    <div class="orbit-node" style={format!("background: {};", item.gradient)}>
                                        <span class="orbit-label">{label}</span>
                                    </div>
                                </a>
                            </div>
                        }
                    }) }
                </nav>
            </div>

            <div class="particles" aria-hidden="true">
                { for particles.iter().map(|particle| html! {
                    <div class="particle" style={particle.style()} />
                }) }
            </div>
        </main>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let (language, on_language) = use_language(Route::About);
    let t = strings(language);

    html! {
        <main class="page about">
            <BackToOrbit label={t.back} />
            <LanguageSwitcher current={language} label={t.language_group} on_select={on_language} />

            <h1 class="page-title is-green">{t.about_title}</h1>
            <p class="page-lead">{t.about_body}</p>

            <Slideshow photos={PHOTOS.to_vec()} language={language} />

            <div class="marquee-dock">
                <Marquee
                    icons={ABOUT_TECHS.to_vec()}
                    track={MarqueeTrack::new(2, 30.0)}
                    animation="about-marquee"
                />
            </div>
        </main>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let (language, on_language) = use_language(Route::Contact);
    let t = strings(language);

    html! {
        <main class="page contact">
            <BackToOrbit label={t.back} />
            <LanguageSwitcher current={language} label={t.language_group} on_select={on_language} />

            <h1 class="page-title is-pink">{t.contact_title}</h1>
            <p class="page-lead">
                {t.contact_intro}{" "}
                <a class="link" href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
            </p>
        </main>
    }
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let (language, on_language) = use_language(Route::Projects);
    let leaving = use_state(|| false);
    let leave_started = use_mut_ref(|| false);
    let t = strings(language);

    let on_back = {
        let leaving = leaving.clone();
        Callback::from(move |_: MouseEvent| {
            if *leave_started.borrow() {
                return;
            }
            *leave_started.borrow_mut() = true;
            leaving.set(true);
            navigate_after_leave(Route::Home.href(&BasePath::from_build()));
        })
    };

    let marquee_icons: Vec<&'static str> = PROJECT_TECHS.repeat(4);

    html! {
        <main class={classes!("page", "projects", (*leaving).then_some("is-leaving"))}>
            <BackToOrbit label={t.back} onclick={on_back} />
            <LanguageSwitcher current={language} label={t.language_group} on_select={on_language} />

            <h1 class="page-title is-blue">{t.projects_title}</h1>
            <p class="page-lead">{t.projects_intro}</p>
            <p class="page-lead is-spaced">
                {t.projects_detail}
                <br />
                {t.projects_outro}
            </p>

            <div class="project-grid">
                { for t.project_cards.iter().zip(PROJECT_LINKS).zip(PROJECT_STACKS).enumerate().map(|(i, ((card, href), stack))| html! {
                    <article key={i} class="project-card" style={format!("animation-delay: {:.1}s;", 0.3 + i as f64 * 0.1)}>
                        <h2 class="project-title">{card.title}</h2>
                        <p class="project-description">{card.description}</p>
                        <ul class="project-stack">
                            { for stack.iter().map(|tech| html! { <li>{*tech}</li> }) }
                        </ul>
                        <a class="link" href={href} target="_blank" rel="noopener noreferrer">{t.project_link}</a>
                    </article>
                }) }
            </div>

            <div class="marquee-dock is-fixed">
                <Marquee
                    icons={marquee_icons}
                    track={MarqueeTrack::new(2, 40.0)}
                    animation="neo-marquee"
                />
            </div>
        </main>
    }
}

#[function_component(ResumePage)]
pub fn resume_page() -> Html {
    let (language, on_language) = use_language(Route::Resume);
    let t = strings(language);
    let base = BasePath::from_build();

    html! {
        <main class="page resume">
            <BackToOrbit label={t.back} />
            <LanguageSwitcher current={language} label={t.language_group} on_select={on_language} />

            <section class="resume-body">
                <h1 class="page-title is-red">{t.resume_title}</h1>

                <div class="resume-grid">
                    <div class="panel is-wide">
                        <h2>{t.summary_title}</h2>
                        <p class="summary">{t.summary}</p>

                        <h3 class="panel-caption">{t.tags_title}</h3>
                        <div class="tag-cloud">
                            { for RESUME_TAGS.iter().map(|tag| html! { <span key={*tag} class="tag">{*tag}</span> }) }
                        </div>
                    </div>

                    <div class="panel is-centered">
                        <h2>{t.download_title}</h2>
                        <p class="muted">{t.download_hint}</p>
                        <div class="downloads">
                            <a class="download" href={base.asset(CV_EN)} download="">{t.cv_en}</a>
                            <a class="download" href={base.asset(CV_PL)} download="">{t.cv_pl}</a>
                        </div>
                    </div>
                </div>

                <div class="panel">
                    <h2>{t.timeline_title}</h2>
                    <ul class="timeline">
                        { for t.timeline.iter().enumerate().map(|(i, entry)| html! {
                            <li key={i} class="timeline-entry">
                                <span class="timeline-dot" aria-hidden="true" />
                                <div class="timeline-year">{entry.year}</div>
                                <div class="timeline-text">{entry.text}</div>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="panel">
                    <h2>{t.skills_title}</h2>
                    <div class="skills">
                        { for SKILLS.iter().enumerate().map(|(i, (label, value))| html! {
                            <div key={*label} class="skill">
                                <div class="skill-head">
                                    <span>{*label}</span>
                                    <span class="muted">{format!("{value}%")}</span>
                                </div>
                                <div class="skill-bar">
                                    <div
                                        class="skill-fill"
                                        style={format!("--skill-value: {value}%; animation-delay: {:.2}s;", i as f64 * 0.08)}
                                    />
                                </div>
                            </div>
                        }) }
                    </div>
                    <p class="cta">{t.contact_cta}</p>
                </div>
            </section>
        </main>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let (language, on_language) = use_language(Route::NotFound);
    let t = strings(language);

    html! {
        <main class="page not-found">
            <BackToOrbit label={t.back} />
            <LanguageSwitcher current={language} label={t.language_group} on_select={on_language} />
            <h1 class="page-title is-blue">{"404"}</h1>
            <p class="page-lead">{t.not_found}</p>
        </main>
    }
}
