use yew::prelude::*;

use crate::assets::Asset;
use crate::components::pill::Pill;
use crate::content::SectionId;
use crate::links;
use crate::motion::{self, FLOATING_BADGE, STAGGER};

/// ~60fps tick for the badge loop.
const BADGE_TICK_MS: u32 = 16;

#[function_component(FloatingBadge)]
fn floating_badge() -> Html {
    let elapsed = motion::use_animation_clock(BADGE_TICK_MS);
    let style = format!("transform: translateY({:.2}px);", FLOATING_BADGE.offset(elapsed));

    html! {
        <div class="hero-badge" style={style}>{"15+ Years of Trust"}</div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let entered = motion::use_entered(16);

    html! {
        <header id={SectionId::Top.id()} class={classes!("hero", entered.then(|| "revealed"))}>
            <svg class="hero-arcs" viewBox="0 0 200 200" fill="none">
                <path d="M0 150 C60 120, 140 180, 200 140" stroke="currentColor" stroke-width="18" stroke-linecap="round" />
                <path d="M0 120 C60 90, 140 150, 200 110" stroke="currentColor" stroke-width="14" stroke-linecap="round" />
                <path d="M0 90 C60 60, 140 120, 200 80" stroke="currentColor" stroke-width="10" stroke-linecap="round" />
            </svg>

            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="pill-row">
                        <Pill delay_ms={STAGGER.delay(0)}>{"Since 2009"}</Pill>
                        <Pill delay_ms={STAGGER.delay(1)}>{"100% Organic"}</Pill>
                        <Pill delay_ms={STAGGER.delay(2)}>{"Pan-India Shipping"}</Pill>
                    </div>
                    <h1>{"Farm Fresh Vermicompost"}</h1>
                    <p><i>{"Let\u{2019}s Go Organic"}</i></p>
                    <p>{"The name that stands for quality. Enrich your soil naturally and help your crops flourish."}</p>
                    <div class="hero-cta-group">
                        <a href={links::whatsapp()} target="_blank" rel="noopener noreferrer" class="hero-cta">
                            {"Enquire on WhatsApp"}
                        </a>
                        <a href={SectionId::Products.href()} class="hero-secondary">
                            {"View Products"}
                        </a>
                    </div>
                </div>

                <div class="hero-visual">
                    <img class="hero-product" src={Asset::HeroProduct.path()} alt="Farm Fresh Vermicompost Pack" />
                    <FloatingBadge />
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #f0fdf4, #ffffff);
                }

                .hero-arcs {
                    display: none;
                    pointer-events: none;
                    position: absolute;
                    right: -5rem;
                    top: -5rem;
                    width: 520px;
                    height: 520px;
                    color: #bbf7d0;
                }

                .hero-grid {
                    margin: 0 auto;
                    display: grid;
                    max-width: 72rem;
                    grid-template-columns: 1fr;
                    align-items: center;
                    gap: 2.5rem;
                    padding: 4rem 1.5rem;
                }

                .hero-copy {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .hero-visual {
                    position: relative;
                    opacity: 0;
                    transform: translateX(40px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .hero.revealed .hero-copy,
                .hero.revealed .hero-visual {
                    opacity: 1;
                    transform: none;
                }

                .hero-copy .pill-row {
                    margin-bottom: 1rem;
                }

                .hero h1 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    line-height: 1.15;
                    letter-spacing: -0.025em;
                    color: #14532d;
                }

                .hero-copy p {
                    margin-top: 1rem;
                    max-width: 36rem;
                    font-size: 1.125rem;
                    color: #374151;
                }

                .hero-cta-group {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: #15803d;
                    padding: 0.75rem 1.5rem;
                    color: #ffffff;
                    text-decoration: none;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.2s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                    background: #166534;
                }

                .hero-cta:active {
                    transform: translateY(0);
                }

                .hero-secondary {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    border: 1px solid rgba(21, 128, 61, 0.2);
                    background: #ffffff;
                    padding: 0.75rem 1.5rem;
                    font-weight: 600;
                    color: #14532d;
                    text-decoration: none;
                }

                .hero-secondary:hover {
                    background: #f0fdf4;
                }

                .hero-product {
                    display: block;
                    margin: 0 auto;
                    width: 320px;
                    filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                    transform: rotate(-6deg);
                    transition: transform 1.2s cubic-bezier(0.34, 1.56, 0.64, 1);
                }

                .hero.revealed .hero-product {
                    transform: rotate(0deg);
                }

                .hero-badge {
                    position: absolute;
                    right: -1rem;
                    top: 1.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, #a3e635, #3b82f6);
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: #052e16;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    will-change: transform;
                }

                @media (min-width: 768px) {
                    .hero-arcs {
                        display: block;
                    }

                    .hero-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .hero h1 {
                        font-size: 3.75rem;
                    }

                    .hero-product {
                        width: 420px;
                    }
                }
                "#}
            </style>
        </header>
    }
}
