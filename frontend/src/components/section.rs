use yew::prelude::*;

use crate::content::SectionId;
use crate::motion::{Preset, STAGGER};
use crate::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: SectionId,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchored page region with the shared backdrop. A title, when given,
/// rises in once the first time the section scrolls into view.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let heading = match &props.title {
        Some(title) => html! {
            <Reveal class="section-heading">
                <h2 class={Preset::FadeUp.class()} style={STAGGER.style(Preset::FadeUp, 0)}>
                    { title.clone() }
                </h2>
                {
                    if let Some(subtitle) = &props.subtitle {
                        html! {
                            <p class={Preset::FadeUp.class()} style={STAGGER.style(Preset::FadeUp, 1)}>
                                { subtitle.clone() }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </Reveal>
        },
        None => html! {},
    };

    html! {
        <section id={props.id.id()} class={classes!("page-section", props.class.clone())}>
            <div class="section-backdrop"></div>
            <div class="section-blob section-blob--top"></div>
            <div class="section-blob section-blob--bottom"></div>

            <div class="section-inner">
                { heading }
                { for props.children.iter() }
            </div>
        </section>
    }
}

pub const STYLES: &str = r#"
.page-section {
    position: relative;
    isolation: isolate;
    padding: 5rem 0;
}

.section-backdrop {
    position: absolute;
    inset: 0;
    z-index: -1;
    background: linear-gradient(to bottom, #f0fdf4, #ffffff 50%, #ffffff);
}

.section-blob {
    pointer-events: none;
    position: absolute;
    z-index: -1;
    height: 18rem;
    width: 18rem;
    border-radius: 9999px;
    filter: blur(64px);
}

.section-blob--top {
    top: -6rem;
    left: -6rem;
    background: rgba(187, 247, 208, 0.4);
}

.section-blob--bottom {
    bottom: -6rem;
    right: -6rem;
    background: rgba(217, 249, 157, 0.5);
}

.section-inner {
    margin: 0 auto;
    max-width: 72rem;
    padding: 0 1.5rem;
}

.section-heading {
    margin-bottom: 2.5rem;
}

.section-heading h2 {
    font-size: 1.875rem;
    font-weight: 800;
    letter-spacing: -0.025em;
    color: #14532d;
}

.section-heading p {
    margin-top: 0.5rem;
    max-width: 42rem;
    color: #4b5563;
}

.card {
    border-radius: 1rem;
    border: 1px solid rgba(20, 83, 45, 0.1);
    background: #ffffff;
    padding: 1.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.card h3,
.card h4 {
    font-weight: 700;
    color: #14532d;
}

.wa-button {
    display: inline-flex;
    border-radius: 1rem;
    background: #15803d;
    padding: 0.75rem 1.25rem;
    color: #ffffff;
    text-decoration: none;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    transition: background 0.2s ease;
}

.wa-button:hover {
    background: #166534;
}

.grid-2 {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .section-heading h2 {
        font-size: 2.25rem;
    }

    .grid-2 {
        grid-template-columns: repeat(2, 1fr);
    }
}
"#;
