use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal};
use crate::content::{Service, SERVICES};

fn service_card(index: usize, service: &Service) -> Html {
    html! {
        <Reveal class="service-card" delay_ms={stagger_delay(index)}>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! {
                    <li>{*feature}</li>
                }) }
            </ul>
            <a href="#contact" class="service-cta">{service.cta}{" →"}</a>
        </Reveal>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <Reveal class="section-heading">
                <span class="section-eyebrow">{"Services"}</span>
                <h2>{"What we build"}</h2>
                <p>{"Four ways we take manual work off your plate, from a single workflow to a full roadmap."}</p>
            </Reveal>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| service_card(i, service)) }
            </div>
            <style>
                {r#"
                .services {
                    padding: 6rem 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .section-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3.5rem;
                }

                .section-eyebrow {
                    color: var(--accent);
                    font-weight: 600;
                    letter-spacing: 0.06em;
                    text-transform: uppercase;
                    font-size: 0.85rem;
                }

                .section-heading h2 {
                    font-size: clamp(2rem, 4vw, 2.75rem);
                    margin: 0.75rem 0 1rem;
                }

                .section-heading p {
                    color: var(--text-muted);
                    line-height: 1.6;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .service-card {
                    display: flex;
                    flex-direction: column;
                    background: var(--bg-elevated);
                    border: 1px solid var(--border);
                    border-radius: 20px;
                    padding: 2rem;
                    box-shadow: var(--shadow);
                }

                .service-card h3 {
                    margin: 0 0 0.75rem;
                    font-size: 1.3rem;
                }

                .service-card p {
                    color: var(--text-muted);
                    line-height: 1.6;
                    margin: 0 0 1.25rem;
                }

                .service-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .service-features li::before {
                    content: "✓";
                    color: var(--accent);
                    margin-right: 0.5rem;
                }

                .service-cta {
                    margin-top: auto;
                    color: var(--accent);
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </section>
    }
}
