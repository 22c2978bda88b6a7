use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::assets::Asset;
use crate::content::NAV_LINKS;
use crate::dom::ScrollListener;
use crate::links;

const SCROLLED_AFTER_PX: f64 = 8.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.setter();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move |scroll_y| {
                    is_scrolled.set(scroll_y > SCROLLED_AFTER_PX);
                })
                .map_err(|err| warn!("navbar scroll listener not attached: {}", err))
                .ok();

                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor clicks keep their default so the browser still scrolls.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <div class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <img src={Asset::Logo.path()} alt="Birgi Enterprises logo" />
                </div>

                <button class="burger-menu" aria-label="Toggle navigation" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    {
                        NAV_LINKS.iter().map(|(label, target)| html! {
                            <a key={target.id()} href={target.href()} class="nav-link" onclick={close_menu.clone()}>
                                { *label }
                            </a>
                        }).collect::<Html>()
                    }
                    <a href={links::whatsapp()} target="_blank" rel="noopener noreferrer" class="nav-whatsapp" onclick={close_menu}>
                        {"WhatsApp"}
                    </a>
                </nav>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    border-bottom: 1px solid rgba(20, 83, 45, 0.05);
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.3s ease, background 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.9);
                    box-shadow: 0 4px 12px rgba(20, 83, 45, 0.08);
                }

                .nav-content {
                    margin: 0 auto;
                    display: flex;
                    max-width: 72rem;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1.5rem;
                }

                .nav-logo {
                    display: block;
                    width: 3.5rem;
                    height: 2.5rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    transition: transform 0.5s ease;
                }

                .nav-logo:hover {
                    transform: rotate(360deg) scale(1.1);
                }

                .nav-logo img {
                    width: 100%;
                    height: 100%;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(20, 83, 45, 0.8);
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: #14532d;
                }

                .nav-whatsapp {
                    border-radius: 0.75rem;
                    background: #15803d;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #ffffff;
                    text-decoration: none;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                }

                .nav-whatsapp:hover {
                    background: #166534;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background: #14532d;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1rem 1.5rem;
                        background: rgba(255, 255, 255, 0.97);
                        border-bottom: 1px solid rgba(20, 83, 45, 0.1);
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, fragment_targets, render};

    #[tokio::test]
    async fn renders_seven_anchors_and_one_whatsapp_link() {
        let html = render::<Navbar>().await;

        assert_eq!(count(&html, "href=\"#"), 7, "in-page links in {}", html);
        assert_eq!(count(&html, "href=\"https://wa.me/"), 1);
        assert_eq!(count(&html, "<a "), 8);
    }

    #[tokio::test]
    async fn anchors_follow_nav_order() {
        let html = render::<Navbar>().await;
        let expected: Vec<&str> = NAV_LINKS.iter().map(|(_, target)| target.id()).collect();

        assert_eq!(fragment_targets(&html), expected);
    }
}
