use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::assets::Asset;
use crate::components::section::Section;
use crate::content::{Product, SectionId, PRODUCTS};
use crate::links;
use crate::motion::{Preset, STAGGER};
use crate::reveal::Reveal;
use crate::state::zoom::ZoomOverlay;

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    product: Product,
    index: usize,
    on_zoom: Callback<Asset>,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let product = props.product;
    let onclick = {
        let on_zoom = props.on_zoom.clone();
        Callback::from(move |_: MouseEvent| on_zoom.emit(product.image))
    };

    // The entrance timing lives on the slot; the card's hover lift keeps its own.
    html! {
        <div class={classes!("product-slot", Preset::FadeUp.class())} style={STAGGER.style(Preset::FadeUp, props.index)}>
            <div class="product-card">
                <div class="product-glow"></div>
                <img class="product-thumb" src={product.image.path()} alt={product.size} onclick={onclick} />
                <h3>{ product.size }</h3>
                <p>{ product.description }</p>
                <a href={links::product_enquiry(product.size)} target="_blank" rel="noopener noreferrer" class="product-cta">
                    { product.cta }
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ZoomLayerProps {
    overlay: ZoomOverlay,
    on_dismiss: Callback<MouseEvent>,
}

/// Stays mounted once the page loads; hidden overlays ignore pointer input.
#[function_component(ZoomLayer)]
fn zoom_layer(props: &ZoomLayerProps) -> Html {
    let open = props.overlay.is_open();

    html! {
        <div
            class={classes!("zoom-overlay", open.then(|| "open"))}
            aria-hidden={(!open).to_string()}
            onclick={props.on_dismiss.clone()}
        >
            {
                match props.overlay.painted() {
                    Some(image) => html! { <img src={image.path()} alt="Zoomed product" /> },
                    None => html! {},
                }
            }
        </div>
    }
}

#[function_component(Products)]
pub fn products() -> Html {
    let zoom = use_state(ZoomOverlay::default);

    let on_zoom = {
        let zoom = zoom.clone();
        Callback::from(move |image: Asset| {
            let next = zoom.activate(image);
            debug!("zoom overlay: {:?}", next.state());
            zoom.set(next);
        })
    };

    let on_dismiss = {
        let zoom = zoom.clone();
        Callback::from(move |_: MouseEvent| zoom.set(zoom.dismiss()))
    };

    // The overlay sits beside the section, not inside it: each section is its
    // own stacking context and would cap the overlay's z-index.
    html! {
        <>
        <Section
            id={SectionId::Products}
            title="Our Products"
            subtitle="Choose the size that suits your needs or start composting with live earthworms."
        >
            <Reveal margin="-140px" class="product-grid">
                {
                    PRODUCTS.iter().enumerate().map(|(index, product)| html! {
                        <ProductCard key={product.size} product={*product} index={index} on_zoom={on_zoom.clone()} />
                    }).collect::<Html>()
                }
            </Reveal>

            <style>
                {r#"
                .product-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                .product-card {
                    position: relative;
                    overflow: hidden;
                    height: 100%;
                    box-sizing: border-box;
                    border-radius: 1rem;
                    border: 1px solid rgba(20, 83, 45, 0.1);
                    background: #ffffff;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: transform 0.3s ease;
                }

                .product-card:hover {
                    transform: translateY(-6px);
                }

                .product-glow {
                    position: absolute;
                    right: -4rem;
                    top: -4rem;
                    width: 10rem;
                    height: 10rem;
                    border-radius: 9999px;
                    background: rgba(190, 242, 100, 0.3);
                    filter: blur(40px);
                    transition: transform 0.3s ease;
                }

                .product-card:hover .product-glow {
                    transform: scale(1.25);
                }

                .product-thumb {
                    display: block;
                    margin: 0 auto 1rem;
                    width: 8rem;
                    height: 8rem;
                    object-fit: contain;
                    cursor: pointer;
                }

                .product-card h3 {
                    text-align: center;
                    font-size: 1.25rem;
                    font-weight: 800;
                    color: #14532d;
                }

                .product-card p {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: #374151;
                }

                .product-cta {
                    margin-top: 1.25rem;
                    display: inline-flex;
                    border-radius: 0.75rem;
                    background: #15803d;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #ffffff;
                    text-decoration: none;
                }

                .product-cta:hover {
                    background: #166534;
                }

                .zoom-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.7);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.25s ease;
                }

                .zoom-overlay.open {
                    opacity: 1;
                    pointer-events: auto;
                    animation: zoom-fade-in 0.25s ease;
                }

                .zoom-overlay img {
                    max-height: 90vh;
                    max-width: 90vw;
                    border-radius: 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    opacity: 0;
                    transform: scale(0.8);
                    transition: opacity 0.25s ease, transform 0.25s ease;
                }

                .zoom-overlay.open img {
                    opacity: 1;
                    transform: scale(1);
                    animation: zoom-pop-in 0.25s ease;
                }

                @keyframes zoom-fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes zoom-pop-in {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }

                @media (min-width: 768px) {
                    .product-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .product-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                "#}
            </style>
        </Section>
        <ZoomLayer overlay={*zoom} on_dismiss={on_dismiss} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render};

    #[tokio::test]
    async fn every_card_links_its_own_enquiry() {
        let html = render::<Products>().await;

        for product in PRODUCTS {
            let href = format!("href=\"{}\"", links::product_enquiry(product.size));
            assert_eq!(count(&html, &href), 1, "{} enquiry link", product.size);
        }
    }

    #[tokio::test]
    async fn overlay_is_mounted_outside_the_section() {
        let html = render::<Products>().await;
        let overlay_at = html.find("class=\"zoom-overlay").expect("overlay is rendered");
        let before = &html[..overlay_at];

        assert_eq!(count(before, "<section"), 1);
        assert_eq!(count(before, "</section>"), 1);
        assert_eq!(count(&html, "class=\"zoom-overlay\""), 1, "starts closed");
        assert!(!html.contains("alt=\"Zoomed product\""));
    }

    #[tokio::test]
    async fn hover_card_carries_no_entrance_timing() {
        let html = render::<Products>().await;

        assert_eq!(count(&html, "<div class=\"product-card\">"), PRODUCTS.len());
        assert_eq!(count(&html, "class=\"product-slot motion-fade-up\""), PRODUCTS.len());
    }
}
