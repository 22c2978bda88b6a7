use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::section::Section;
use crate::content::{SectionId, FAQS};
use crate::state::accordion::Accordion;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    // The answer stays mounted so collapsing animates the same way opening does.
    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{"+"}</span>
            </button>
            <div class="faq-answer" aria-hidden={(!props.open).to_string()}>
                <div class="faq-answer-inner">{ props.answer.clone() }</div>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <Section id={SectionId::Faqs} title="Frequently Asked Questions">
            <div class="faq-list">
                {
                    FAQS.iter().enumerate().map(|(index, entry)| {
                        let on_toggle = {
                            let accordion = accordion.clone();
                            Callback::from(move |_: ()| {
                                let next = accordion.toggle(index);
                                debug!("faq open entry: {:?}", next.open());
                                accordion.set(next);
                            })
                        };
                        html! {
                            <FaqItem
                                key={entry.question}
                                question={entry.question}
                                answer={entry.answer}
                                open={accordion.is_open(index)}
                                on_toggle={on_toggle}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .faq-list {
                    margin: 0 auto;
                    max-width: 48rem;
                }

                .faq-item {
                    margin-bottom: 0.75rem;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(20, 83, 45, 0.1);
                    background: #ffffff;
                }

                .faq-question {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem;
                    text-align: left;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font: inherit;
                }

                .question-text {
                    font-weight: 600;
                    color: #14532d;
                }

                .toggle-icon {
                    font-size: 1.25rem;
                    color: #15803d;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(45deg);
                }

                .faq-answer {
                    display: grid;
                    grid-template-rows: 0fr;
                    opacity: 0;
                    transition: grid-template-rows 0.3s ease, opacity 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    grid-template-rows: 1fr;
                    opacity: 1;
                }

                .faq-answer-inner {
                    overflow: hidden;
                    padding: 0 1rem;
                    color: #374151;
                    transition: padding 0.3s ease;
                }

                .faq-item.open .faq-answer-inner {
                    padding-bottom: 1rem;
                }
                "#}
            </style>
        </Section>
    }
}
