use yew::prelude::*;

use crate::components::section::Section;
use crate::content::{SectionId, Testimonial, TESTIMONIALS};
use crate::motion::{self, TESTIMONIAL_MARQUEE};

const MARQUEE_TICK_MS: u32 = 16;

/// Both copies of the list on one track. Only this component re-renders on
/// each animation tick.
#[function_component(MarqueeTrack)]
fn marquee_track() -> Html {
    let elapsed = motion::use_animation_clock(MARQUEE_TICK_MS);
    let offset = TESTIMONIAL_MARQUEE.offset(TESTIMONIALS.len(), elapsed);
    let style = format!(
        "transform: translateX({:.2}px); gap: {}px;",
        offset, TESTIMONIAL_MARQUEE.gap
    );

    html! {
        <div class="marquee-track" style={style}>
            {
                motion::doubled(&TESTIMONIALS).into_iter().enumerate().map(|(idx, t): (usize, Testimonial)| html! {
                    <div key={idx} class="testimonial-card" style={format!("width: {}px;", TESTIMONIAL_MARQUEE.card_width)}>
                        <p class="testimonial-quote">{"\u{201C}"}{ t.quote }{"\u{201D}"}</p>
                        <p class="testimonial-author">{ t.author }</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <Section
            id={SectionId::Testimonials}
            title="What Our Customers Say"
            subtitle="Loved by farmers, nurseries and home gardeners across India."
        >
            <div class="marquee">
                <MarqueeTrack />
            </div>

            <style>
                {r#"
                .marquee {
                    position: relative;
                    overflow: hidden;
                }

                .marquee-track {
                    display: flex;
                    will-change: transform;
                }

                .testimonial-card {
                    flex-shrink: 0;
                    box-sizing: border-box;
                    border-radius: 1rem;
                    border: 1px solid rgba(20, 83, 45, 0.1);
                    background: #ffffff;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .testimonial-quote {
                    color: #1f2937;
                }

                .testimonial-author {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #14532d;
                }
                "#}
            </style>
        </Section>
    }
}
