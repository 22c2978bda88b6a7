use yew::prelude::*;

use crate::components::pill::Pill;
use crate::components::section::Section;
use crate::content::{SectionId, MISSION};
use crate::motion::{Preset, STAGGER};
use crate::reveal::Reveal;

const SERVE_PILLS: [&str; 3] = ["Amritsar, Punjab", "Pan-India Customers", "Quality First, Always"];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Section
            id={SectionId::About}
            title="About Birgi Enterprises"
            subtitle="Founded in 2009 by Mr. Harmohit Singh, we champion organic farming across India with our flagship Farm Fresh Vermicompost."
        >
            <Reveal class="grid-2">
                <div class={classes!("card", Preset::FadeUp.class())} style={STAGGER.style(Preset::FadeUp, 0)}>
                    <h3>{"Our Mission"}</h3>
                    <ul class="mission-list">
                        { for MISSION.iter().map(|line| html! { <li key={*line}>{"\u{2022} "}{ *line }</li> }) }
                    </ul>
                </div>
                <div class={classes!("card", Preset::FadeUp.class())} style={STAGGER.style(Preset::FadeUp, 1)}>
                    <h3>{"Who We Serve"}</h3>
                    <p class="serve-text">
                        {"Farmers, nurseries, hotels, schools, societies and home gardeners across India who seek better soil fertility and long-term crop health."}
                    </p>
                    <div class="pill-row serve-pills">
                        { for SERVE_PILLS.iter().enumerate().map(|(i, label)| html! {
                            <Pill key={*label} delay_ms={STAGGER.delay(1 + i)}>{ *label }</Pill>
                        }) }
                    </div>
                </div>
            </Reveal>

            <style>
                {r#"
                .mission-list {
                    margin-top: 0.75rem;
                    padding: 0;
                    list-style: none;
                    color: #374151;
                }

                .mission-list li + li {
                    margin-top: 0.5rem;
                }

                .serve-text {
                    margin-top: 0.75rem;
                    color: #374151;
                }

                .serve-pills {
                    margin-top: 1rem;
                }
                "#}
            </style>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render};

    #[tokio::test]
    async fn location_pills_pop_in_one_after_another() {
        let html = render::<About>().await;

        // They follow the "Who We Serve" card, which enters at step 1.
        for step in 1..=3 {
            let style = format!("style=\"{}\"", Preset::Pop.style(STAGGER.delay(step)));
            assert_eq!(count(&html, &style), 1, "pill at stagger step {}", step);
        }
    }
}
