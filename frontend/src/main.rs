use yew::prelude::*;
use log::info;

mod assets;
mod config;
mod content;
mod dom;
mod error;
mod links;
mod motion;
mod reveal;
mod state {
    pub mod accordion;
    pub mod zoom;
}
mod components {
    pub mod navbar;
    pub mod pill;
    pub mod section;
}
#[cfg(test)]
mod testing;
mod sections {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod hero;
    pub mod products;
    pub mod shipping;
    pub mod testimonials;
    pub mod why_us;
}

use components::navbar::Navbar;
use content::{SectionId, PAGE_SECTIONS};
use sections::{
    about::About,
    contact::Contact,
    faq::Faq,
    hero::Hero,
    products::Products,
    shipping::Shipping,
    testimonials::Testimonials,
    why_us::WhyUs,
};

const PAGE_STYLES: &str = r#"
html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

.app {
    min-height: 100vh;
    overflow: hidden;
    background: #ffffff;
    color: #111827;
}

h1, h2, h3, h4, p {
    margin: 0;
}
"#;

fn page_section(id: SectionId) -> Html {
    match id {
        SectionId::Top => html! { <Hero /> },
        SectionId::About => html! { <About /> },
        SectionId::Products => html! { <Products /> },
        SectionId::WhyUs => html! { <WhyUs /> },
        SectionId::Shipping => html! { <Shipping /> },
        SectionId::Testimonials => html! { <Testimonials /> },
        SectionId::Faqs => html! { <Faq /> },
        SectionId::Contact => html! { <Contact /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <div class="app">
            <style>{ PAGE_STYLES }</style>
            <style>{ motion::STYLES }</style>
            <style>{ components::section::STYLES }</style>
            <style>{ components::pill::STYLES }</style>

            <Navbar />
            { for PAGE_SECTIONS.iter().map(|id| page_section(*id)) }
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FAQS, TESTIMONIALS};
    use crate::testing::{count, fragment_targets, render};

    #[tokio::test]
    async fn mounts_every_section_once_in_page_order() {
        let html = render::<App>().await;

        let mut last = 0;
        for id in PAGE_SECTIONS {
            let attr = format!("id=\"{}\"", id.id());
            assert_eq!(count(&html, &attr), 1, "{}", attr);
            let at = html.find(&attr).unwrap();
            assert!(at > last, "{} out of order", attr);
            last = at;
        }
    }

    #[tokio::test]
    async fn every_fragment_link_lands_on_a_section() {
        let html = render::<App>().await;
        let targets = fragment_targets(&html);

        assert!(targets.len() >= 7);
        for target in targets {
            assert!(
                html.contains(&format!("id=\"{}\"", target)),
                "#{} has no section",
                target
            );
        }
    }

    #[tokio::test]
    async fn first_faq_entry_starts_open() {
        let html = render::<App>().await;

        assert_eq!(count(&html, "class=\"faq-item open\""), 1);
        assert_eq!(count(&html, "class=\"faq-item\""), FAQS.len() - 1);

        let open_at = html.find("class=\"faq-item open\"").unwrap();
        let first = html.find(FAQS[0].question).unwrap();
        let second = html.find(FAQS[1].question).unwrap();
        assert!(open_at < first && first < second);
    }

    #[tokio::test]
    async fn marquee_renders_the_list_twice() {
        let html = render::<App>().await;

        assert_eq!(
            count(&html, "class=\"testimonial-card\""),
            2 * TESTIMONIALS.len()
        );
        for testimonial in TESTIMONIALS {
            assert_eq!(count(&html, testimonial.author), 2);
        }
    }
}
