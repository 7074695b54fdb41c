use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal};
use crate::content::PROCESS_STEPS;

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process">
            <Reveal class="section-heading">
                <span class="section-eyebrow">{"Process"}</span>
                <h2>{"From first call to running in production"}</h2>
                <p>{"Every engagement follows the same four steps, each ending in something you can hold us to."}</p>
            </Reveal>
            <ol class="process-steps">
                { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                    <li>
                        <Reveal class="process-step" delay_ms={stagger_delay(i)}>
                            <span class="step-number">{format!("{:02}", step.step)}</span>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                            <span class="step-deliverable">
                                <strong>{"Deliverable: "}</strong>
                                {step.deliverable}
                            </span>
                        </Reveal>
                    </li>
                }) }
            </ol>
            <style>
                {r#"
                .process {
                    padding: 6rem 1.5rem;
                    background: var(--bg-muted);
                }

                .process-steps {
                    list-style: none;
                    padding: 0;
                    margin: 0 auto;
                    max-width: 1200px;
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 1.5rem;
                    counter-reset: none;
                }

                .process-step {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 2rem 1.5rem;
                    border-top: 3px solid var(--accent);
                    background: var(--bg-elevated);
                    border-radius: 0 0 16px 16px;
                }

                .step-number {
                    font-family: ui-monospace, monospace;
                    color: var(--accent);
                    font-size: 0.9rem;
                }

                .process-step h3 {
                    margin: 0.75rem 0;
                }

                .process-step p {
                    color: var(--text-muted);
                    line-height: 1.6;
                }

                .step-deliverable {
                    display: block;
                    margin-top: 1rem;
                    font-size: 0.9rem;
                }

                @media (max-width: 960px) {
                    .process-steps {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }

                @media (max-width: 600px) {
                    .process-steps {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
