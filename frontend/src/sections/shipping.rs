use yew::prelude::*;

use crate::components::section::Section;
use crate::content::{SectionId, SHIPPING_POINTS};
use crate::links;
use crate::motion::{Preset, STAGGER};
use crate::reveal::Reveal;

#[function_component(Shipping)]
pub fn shipping() -> Html {
    html! {
        <Section
            id={SectionId::Shipping}
            title="Shipping & Delivery"
            subtitle="Fast and reliable delivery to every corner of India."
        >
            <Reveal class="grid-2 shipping-points">
                { for SHIPPING_POINTS.iter().enumerate().map(|(i, point)| html! {
                    <div key={*point} class={classes!("card", Preset::FadeUp.class())} style={STAGGER.style(Preset::FadeUp, i)}>
                        { *point }
                    </div>
                }) }
            </Reveal>
            <div class="shipping-cta">
                <a href={links::whatsapp()} target="_blank" rel="noopener noreferrer" class="wa-button">
                    {"Enquire on WhatsApp about delivery timelines"}
                </a>
            </div>

            <style>
                {r#"
                .shipping-points {
                    gap: 1rem;
                }

                .shipping-cta {
                    margin-top: 1.5rem;
                }
                "#}
            </style>
        </Section>
    }
}
