use chrono::Datelike;
use yew::prelude::*;

use crate::components::section::Section;
use crate::config;
use crate::content::SectionId;
use crate::links;

#[function_component(Contact)]
pub fn contact() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <Section
            id={SectionId::Contact}
            title="Contact Us"
            subtitle="We\u{2019}d love to assist you with your farming and gardening needs!"
        >
            <div class="contact-grid">
                <div class="card">
                    <h4>{"Address"}</h4>
                    <p class="contact-line">{"Amritsar, Punjab, India"}</p>
                </div>
                <div class="card">
                    <h4>{"Contact"}</h4>
                    <p class="contact-line">{"Owner: Mr. Harmohit Singh"}</p>
                    <p class="contact-line">
                        {"Phone: "}<a href={links::phone()} class="contact-link">{ config::PHONE_DISPLAY }</a>
                    </p>
                    <p class="contact-line">
                        {"Email: "}<a href={links::email()} class="contact-link">{ config::EMAIL }</a>
                    </p>
                </div>
                <div class="card">
                    <h4>{"Get in Touch"}</h4>
                    <a href={links::whatsapp()} target="_blank" rel="noopener noreferrer" class="wa-button contact-cta">
                        {"Enquire on WhatsApp"}
                    </a>
                    <p class="contact-note">{"We usually reply within hours."}</p>
                </div>
            </div>

            <footer class="site-footer">
                { format!("\u{00A9} {} Birgi Enterprises \u{2022} Quality First, Always", year) }
                <br />
                <br />
                {"Developed by "}
                <a href={config::DEVELOPER_URL} target="_blank" rel="noopener noreferrer" class="contact-link">
                    {"Code Sangam"}
                </a>
            </footer>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                .contact-line {
                    margin-top: 0.5rem;
                    color: #374151;
                }

                .contact-link {
                    color: #15803d;
                    font-weight: 500;
                }

                .contact-cta {
                    margin-top: 0.75rem;
                }

                .contact-note {
                    margin-top: 0.5rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }

                .site-footer {
                    margin-top: 2rem;
                    text-align: center;
                    color: #6b7280;
                }

                @media (min-width: 768px) {
                    .contact-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </Section>
    }
}
