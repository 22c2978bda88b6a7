use yew::prelude::*;

use crate::components::section::Section;
use crate::content::{SectionId, BENEFITS, COMPARISON};
use crate::motion::{Preset, STAGGER};
use crate::reveal::Reveal;

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    html! {
        <Section
            id={SectionId::WhyUs}
            title="Why Choose Farm Fresh Vermicompost?"
            subtitle="Unlike chemical fertilizers, our compost improves soil and crop health in the long term."
        >
            <Reveal class="grid-2 why-grid">
                <ul class={classes!("card", "benefit-list", Preset::FadeUp.class())} style={STAGGER.style(Preset::FadeUp, 0)}>
                    { for BENEFITS.iter().map(|benefit| html! {
                        <li key={*benefit}>
                            <span class="benefit-dot"></span>
                            { *benefit }
                        </li>
                    }) }
                </ul>

                <div class={classes!("comparison", Preset::FadeUp.class())} style={STAGGER.style(Preset::FadeUp, 1)}>
                    <div class="comparison-row comparison-head">
                        <div>{"Feature"}</div>
                        <div>{"Vermicompost"}</div>
                        <div>{"Chemical"}</div>
                    </div>
                    { for COMPARISON.iter().map(|(feature, ours, theirs)| html! {
                        <div key={*feature} class="comparison-row">
                            <div class="comparison-feature">{ *feature }</div>
                            <div class="comparison-good">{ *ours }</div>
                            <div class="comparison-bad">{ *theirs }</div>
                        </div>
                    }) }
                </div>
            </Reveal>

            <style>
                {r#"
                .why-grid {
                    gap: 2rem;
                }

                .benefit-list {
                    margin: 0;
                    list-style: none;
                }

                .benefit-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: #1f2937;
                }

                .benefit-list li + li {
                    margin-top: 0.75rem;
                }

                .benefit-dot {
                    margin-top: 0.375rem;
                    flex-shrink: 0;
                    width: 0.625rem;
                    height: 0.625rem;
                    border-radius: 9999px;
                    background: #16a34a;
                }

                .comparison {
                    overflow: hidden;
                    border-radius: 1rem;
                    border: 1px solid rgba(20, 83, 45, 0.1);
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .comparison-row {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    align-items: center;
                    padding: 1rem 1.5rem;
                    font-size: 0.875rem;
                }

                .comparison-row + .comparison-row {
                    border-top: 1px solid rgba(20, 83, 45, 0.1);
                }

                .comparison-head {
                    background: #f0fdf4;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #14532d;
                }

                .comparison-feature {
                    font-weight: 600;
                    color: #14532d;
                }

                .comparison-good {
                    color: #15803d;
                }

                .comparison-bad {
                    color: #dc2626;
                }
                "#}
            </style>
        </Section>
    }
}
